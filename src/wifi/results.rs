//! Scan result data owned by the network scanner screen.

use heapless::{String, Vec};

use crate::config::MAX_SCAN_RESULTS;

/// Longest SSID allowed by 802.11 (bytes).
pub const SSID_MAX_LEN: usize = 32;

/// Authentication scheme advertised by an access point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecurityKind {
    Open,
    Wep,
    Wpa,
    Wpa2,
    WpaWpa2,
    Wpa2Enterprise,
    Wpa3,
    Wpa2Wpa3,
    Wapi,
    Unknown,
}

impl SecurityKind {
    /// Short label for the detail view.
    pub fn label(self) -> &'static str {
        match self {
            SecurityKind::Open => "Open",
            SecurityKind::Wep => "WEP",
            SecurityKind::Wpa => "WPA",
            SecurityKind::Wpa2 => "WPA2",
            SecurityKind::WpaWpa2 => "WPA/WPA2",
            SecurityKind::Wpa2Enterprise => "WPA2-EAP",
            SecurityKind::Wpa3 => "WPA3",
            SecurityKind::Wpa2Wpa3 => "WPA2/WPA3",
            SecurityKind::Wapi => "WAPI",
            SecurityKind::Unknown => "?",
        }
    }

    pub fn is_open(self) -> bool {
        self == SecurityKind::Open
    }
}

/// One access point seen during a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanEntry {
    /// SSID; empty for hidden networks.
    pub name: String<SSID_MAX_LEN>,
    /// Received signal strength (dBm).
    pub signal_strength: i8,
    pub channel: u8,
    pub security: SecurityKind,
}

impl ScanEntry {
    /// Build an entry, truncating `name` to [`SSID_MAX_LEN`] bytes on a
    /// character boundary.
    pub fn new(name: &str, signal_strength: i8, channel: u8, security: SecurityKind) -> Self {
        let mut n: String<SSID_MAX_LEN> = String::new();
        for c in name.chars() {
            if n.push(c).is_err() {
                break;
            }
        }
        Self {
            name: n,
            signal_strength,
            channel,
            security,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.is_empty()
    }

    /// Name to show on screen.
    pub fn display_name(&self) -> &str {
        if self.is_hidden() {
            "<hidden>"
        } else {
            self.name.as_str()
        }
    }
}

/// Networks from one scan, in discovery order, capped at
/// [`MAX_SCAN_RESULTS`].
///
/// Entries past the cap are not stored but are counted, so the UI and
/// logs can tell a full scan from a truncated one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResults {
    entries: Vec<ScanEntry, MAX_SCAN_RESULTS>,
    dropped: usize,
}

impl ScanResults {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            dropped: 0,
        }
    }

    /// Collect entries, keeping the first [`MAX_SCAN_RESULTS`].
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ScanEntry>,
    {
        let mut results = Self::new();
        for entry in entries {
            results.push(entry);
        }
        results
    }

    /// Append one entry; returns `false` if it was dropped by the cap.
    pub fn push(&mut self, entry: ScanEntry) -> bool {
        match self.entries.push(entry) {
            Ok(()) => true,
            Err(_) => {
                self.dropped += 1;
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.dropped = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScanEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScanEntry> {
        self.entries.iter()
    }

    /// Number of networks seen beyond the cap.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests (run on host, not embedded)
// ═══════════════════════════════════════════════════════════════════════════
