//! Access point records and the scan report table.

use core::fmt;

/// Longest SSID an 802.11 beacon can carry, in bytes.
pub const MAX_SSID_LEN: usize = 32;

/// Bounded SSID storage.
pub type Ssid = heapless::String<MAX_SSID_LEN>;

const SEPARATOR: &str = "===========================================";

/// One access point seen by a scan.
///
/// Records are built once per scan and only read afterwards. The name is
/// kept as received (it may repeat across records or contain control
/// characters); sanitizing happens when the table is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPointRecord {
    channel: u8,
    rssi: i8,
    ssid: Ssid,
}

impl AccessPointRecord {
    /// Builds a record, truncating `ssid` to [`MAX_SSID_LEN`] bytes on a
    /// character boundary.
    pub fn new(channel: u8, rssi: i8, ssid: &str) -> Self {
        let mut bounded = Ssid::new();
        for ch in ssid.chars() {
            if bounded.push(ch).is_err() {
                break;
            }
        }
        Self {
            channel,
            rssi,
            ssid: bounded,
        }
    }

    /// Primary channel the access point was heard on.
    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Received signal strength in dBm.
    pub fn rssi(&self) -> i8 {
        self.rssi
    }

    /// Network name as received.
    pub fn ssid(&self) -> &str {
        self.ssid.as_str()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AccessPointRecord {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ch={} rssi={} ssid={}",
            self.channel,
            self.rssi,
            self.ssid.as_str()
        )
    }
}

/// Console rendering of one scan.
///
/// ```text
/// 2 networks found:
///  Channel | RSSI | SSID
///      6 |  -40 | Home
///     11 |  -75 | Guest
/// ===========================================
/// ```
pub struct ScanTable<'a> {
    records: &'a [AccessPointRecord],
}

impl<'a> ScanTable<'a> {
    /// Wraps the records of one scan for display.
    pub fn new(records: &'a [AccessPointRecord]) -> Self {
        Self { records }
    }
}

impl fmt::Display for ScanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} networks found:", self.records.len())?;
        writeln!(f, " Channel | RSSI | SSID")?;
        for record in self.records {
            writeln!(
                f,
                "{:>6} |{:>5} | {:<27}",
                record.channel,
                record.rssi,
                printable(record.ssid()).as_str()
            )?;
        }
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f)
    }
}

// Control characters would garble the console, show them as '?'.
fn printable(ssid: &str) -> Ssid {
    let mut out = Ssid::new();
    for ch in ssid.chars() {
        let shown = if ch.is_control() { '?' } else { ch };
        if out.push(shown).is_err() {
            break;
        }
    }
    out
}
