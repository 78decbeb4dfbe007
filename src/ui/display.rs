//! SSD1306 OLED display wrapper.

use defmt::warn;
use embedded_graphics::mono_font::ascii::FONT_6X12;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;
use crate::ui::render::Canvas;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::DisplayFlush)?;
    Ok(display)
}

fn text_style(inverted: bool) -> MonoTextStyle<'static, BinaryColor> {
    let (fg, bg) = if inverted {
        (BinaryColor::Off, BinaryColor::On)
    } else {
        (BinaryColor::On, BinaryColor::Off)
    };
    MonoTextStyleBuilder::new()
        .font(&FONT_6X12)
        .text_color(fg)
        .background_color(bg)
        .build()
}

/// [`Canvas`] over the buffered SSD1306 driver.
pub struct OledCanvas<I2C> {
    display: Display<I2C>,
    inverted: bool,
}

impl<I2C> OledCanvas<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(display: Display<I2C>) -> Self {
        Self {
            display,
            inverted: false,
        }
    }
}

impl<I2C> Canvas for OledCanvas<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.display.clear_buffer();
        self.inverted = false;
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        // Drawing into the RAM buffer cannot fail.
        let _ = Text::new(text, Point::new(x, y), text_style(self.inverted)).draw(&mut self.display);
    }

    fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    fn present(&mut self) {
        if self.display.flush().is_err() {
            warn!("Display: {}", Error::DisplayFlush);
        }
    }
}
