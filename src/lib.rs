//! Core of the WiFi Scraper handheld.
//!
//! The pure logic (input debouncing, list navigation, the screen state
//! machine and screen layout) builds on the host and is tested there;
//! the hardware glue behind the `embedded` feature is only compiled for
//! the ESP32-S3 firmware in `main.rs`.
//!
//! Usage: `cargo test` (host) or `cargo build --release --features embedded`
//! with the Xtensa toolchain for the firmware.
//!
//! Each tick: [`ui::input_logic::Debouncer`] turns pin levels into one
//! [`ui::ButtonEvent`], [`app::App::handle`] applies it to the active
//! screen, and [`ui::render::render`] draws the result.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
#[cfg(feature = "embedded")]
pub mod error;
pub mod ui;
pub mod wifi;

pub use app::{App, Screen};
pub use ui::nav::ListState;
pub use ui::ButtonEvent;
