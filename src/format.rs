//! Display formatting for raw device values.
//!
//! Every function here is total: any input of the declared type yields a
//! display string, never a panic.

/// Placeholder shown for any fact the platform could not supply.
pub const UNKNOWN: &str = "Unknown";

/// Format a byte count as `"<value> <unit>"`.
///
/// The largest unit whose quantity is at least 1 wins (GB, then MB, then
/// KB). Converted quantities carry exactly two decimals; counts below one
/// kilobyte are printed as whole bytes.
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    let gb = mb / 1024.0;

    if gb >= 1.0 {
        format!("{:.2} GB", gb)
    } else if mb >= 1.0 {
        format!("{:.2} MB", mb)
    } else if kb >= 1.0 {
        format!("{:.2} KB", kb)
    } else {
        format!("{} Bytes", bytes)
    }
}

/// Decode an IPv4 address packed into a 32-bit integer in native
/// (little-endian) order: the low byte is the first octet.
pub fn decode_ipv4(packed: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        packed & 0xFF,
        (packed >> 8) & 0xFF,
        (packed >> 16) & 0xFF,
        (packed >> 24) & 0xFF
    )
}

/// Signed variant for platforms that hand the packed address over as `i32`.
pub fn decode_ipv4_signed(packed: i32) -> String {
    decode_ipv4(packed as u32)
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Use the value when present and not blank, else "Unknown".
pub fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Format a reading with a unit suffix, treating negative values as the
/// "not available" sentinel.
pub fn with_unit_or_unknown(value: i64, unit: &str) -> String {
    if value < 0 {
        UNKNOWN.to_string()
    } else {
        format!("{} {}", value, unit)
    }
}

/// Format seconds of uptime as "3d 4h 12m", dropping leading zero units.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
