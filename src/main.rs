//! WiFi Scraper firmware for ESP32-S3.
//!
//! Brings up the OLED, buttons and radio, shows the boot banner, then
//! runs the single cooperative UI loop: poll buttons, update the screen
//! state machine, draw, and scan when the scanner screen asks for it.
//! The scan is awaited inline, so the UI is frozen until it completes.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::WIFI;
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use static_cell::StaticCell;

use wifi_scraper::config::{
    HEAP_SIZE, I2C_FREQUENCY_KHZ, PIN_BUTTON_BACK, PIN_BUTTON_DOWN, PIN_BUTTON_SELECT,
    PIN_BUTTON_UP, PIN_I2C_SCL, PIN_I2C_SDA, SPLASH_HOLD_MS, TICK_MS, VERSION,
};
use wifi_scraper::error::Error;
use wifi_scraper::ui::buttons::{ButtonPinSet, Buttons};
use wifi_scraper::ui::display::{self, OledCanvas};
use wifi_scraper::ui::render;
use wifi_scraper::wifi::scanner::WifiScanner;
use wifi_scraper::wifi::ScanResults;
use wifi_scraper::App;

esp_bootloader_esp_idf::esp_app_desc!();

static RADIO: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));
    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("WiFi Scraper {} starting", VERSION);

    // - Display -------------------------------------------------
    info!("I2C: SDA=GPIO{} SCL=GPIO{}", PIN_I2C_SDA, PIN_I2C_SCL);
    let i2c = match I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    ) {
        Ok(i2c) => i2c.with_sda(peripherals.GPIO48).with_scl(peripherals.GPIO47),
        Err(_) => halt(Error::I2cConfig).await,
    };
    let mut canvas = match display::init(i2c) {
        Ok(display) => OledCanvas::new(display),
        Err(e) => halt(e).await,
    };
    render::draw_boot(&mut canvas);

    // - Buttons -------------------------------------------------
    info!(
        "Buttons: UP=GPIO{} DOWN=GPIO{} SELECT=GPIO{} BACK=GPIO{}",
        PIN_BUTTON_UP, PIN_BUTTON_DOWN, PIN_BUTTON_SELECT, PIN_BUTTON_BACK
    );
    let mut buttons = Buttons::new(ButtonPinSet::new(
        peripherals.GPIO3,
        peripherals.GPIO8,
        peripherals.GPIO46,
        peripherals.GPIO9,
    ));

    // - Wi-Fi ---------------------------------------------------
    let mut scanner = match start_wifi(peripherals.WIFI).await {
        Ok(scanner) => Some(scanner),
        Err(e) => {
            warn!("Wi-Fi unavailable: {}", e);
            None
        }
    };

    Timer::after(Duration::from_millis(SPLASH_HOLD_MS)).await;

    // - UI loop -------------------------------------------------
    let mut app = App::new();
    loop {
        let event = buttons.poll();
        app.handle(event);
        render::render(&app, &mut canvas);

        if app.needs_scan() {
            let results = match scanner.as_mut() {
                Some(scanner) => scanner.scan().await,
                None => ScanResults::new(),
            };
            app.store_scan(results);
            render::render(&app, &mut canvas);
        }

        Timer::after(Duration::from_millis(TICK_MS)).await;
    }
}

/// Bring up the radio and put it in station mode.
async fn start_wifi(wifi: WIFI<'static>) -> Result<WifiScanner<'static>, Error> {
    let radio = esp_radio::init().map_err(|_| Error::RadioInit)?;
    let radio = RADIO.init(radio);
    let (controller, _interfaces) =
        esp_radio::wifi::new(radio, wifi, Default::default()).map_err(|_| Error::RadioInit)?;
    WifiScanner::start(controller).await
}

/// Nothing useful can run without a display; park here.
async fn halt(err: Error) -> ! {
    error!("Fatal: {}", err);
    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}
