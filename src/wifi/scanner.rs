//! Station-mode access point scanner.
//!
//! Wraps the esp-radio Wi-Fi controller.  A scan blocks the caller until
//! the radio has swept all channels; results come back in discovery
//! order and are capped by [`ScanResults`].  Driver errors are logged
//! and turned into an empty result set, so the UI only ever sees a
//! (possibly empty) list.

use defmt::{info, warn};
use esp_radio::wifi::{AccessPointInfo, AuthMethod, ClientConfig, ModeConfig, ScanConfig, WifiController};

use crate::error::Error;
use crate::wifi::{ScanEntry, ScanResults, SecurityKind};

/// Owns the Wi-Fi controller once it is running in station mode.
pub struct WifiScanner<'d> {
    controller: WifiController<'d>,
}

impl<'d> WifiScanner<'d> {
    /// Put the radio in station mode and start it.
    pub async fn start(mut controller: WifiController<'d>) -> Result<Self, Error> {
        controller
            .set_config(&ModeConfig::Client(ClientConfig::default()))
            .map_err(|_| Error::WifiConfig)?;
        controller.start_async().await.map_err(|_| Error::WifiStart)?;
        info!("Wi-Fi started in station mode");
        Ok(Self { controller })
    }

    /// Run one full scan.
    pub async fn scan(&mut self) -> ScanResults {
        info!("Wi-Fi scan starting");
        match self.controller.scan_with_config_async(ScanConfig::default()).await {
            Ok(found) => {
                let results = ScanResults::from_entries(found.iter().map(entry_from_ap));
                if results.is_truncated() {
                    warn!(
                        "Wi-Fi scan: kept {} networks, dropped {}",
                        results.len(),
                        results.dropped()
                    );
                } else {
                    info!("Wi-Fi scan complete - {} networks found", results.len());
                }
                results
            }
            Err(_) => {
                warn!("Wi-Fi scan: {}", Error::Scan);
                ScanResults::new()
            }
        }
    }
}

fn entry_from_ap(ap: &AccessPointInfo) -> ScanEntry {
    ScanEntry::new(
        ap.ssid.as_str(),
        ap.signal_strength,
        ap.channel,
        security_kind(ap.auth_method),
    )
}

fn security_kind(method: Option<AuthMethod>) -> SecurityKind {
    match method {
        Some(AuthMethod::None) => SecurityKind::Open,
        Some(AuthMethod::Wep) => SecurityKind::Wep,
        Some(AuthMethod::Wpa) => SecurityKind::Wpa,
        Some(AuthMethod::Wpa2Personal) => SecurityKind::Wpa2,
        Some(AuthMethod::WpaWpa2Personal) => SecurityKind::WpaWpa2,
        Some(AuthMethod::Wpa2Enterprise) => SecurityKind::Wpa2Enterprise,
        Some(AuthMethod::Wpa3Personal) => SecurityKind::Wpa3,
        Some(AuthMethod::Wpa2Wpa3Personal) => SecurityKind::Wpa2Wpa3,
        Some(AuthMethod::WapiPersonal) => SecurityKind::Wapi,
        #[allow(unreachable_patterns)]
        _ => SecurityKind::Unknown,
    }
}
