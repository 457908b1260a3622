//! Linux-specific values read from procfs and sysfs.
//!
//! Each reader returns `None`/empty when the file is missing, so these are
//! safe to call on any platform. Parsing is split from file access for tests.

use super::{status_code_from_name, BatteryRaw, SensorRaw};
use crate::classify::{battery_health, battery_plugged, sensor_type};
use std::fs;
use std::path::Path;

const ROUTE_TABLE: &str = "/proc/net/route";
const RESOLV_CONF: &str = "/etc/resolv.conf";
const OS_RELEASE: &str = "/etc/os-release";
const DMI_DIR: &str = "/sys/class/dmi/id";
const IIO_DIR: &str = "/sys/bus/iio/devices";
const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";
const SYS_CLASS_DIR: &str = "/sys/class";
const WIRELESS_STATS: &str = "/proc/net/wireless";

fn read_trimmed(path: &Path) -> Option<String> {
    let value = fs::read_to_string(path).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Gateway of the default route, packed the way the kernel prints it.
pub fn default_gateway() -> Option<u32> {
    parse_default_gateway(&fs::read_to_string(ROUTE_TABLE).ok()?)
}

/// The kernel prints addresses as hex of the native-order `u32`, so on
/// little-endian hosts the low byte is the first octet.
pub fn parse_default_gateway(route_table: &str) -> Option<u32> {
    route_table.lines().skip(1).find_map(|line| {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (destination, gateway) = (fields.get(1)?, fields.get(2)?);
        if *destination != "00000000" || *gateway == "00000000" {
            return None;
        }
        u32::from_str_radix(gateway, 16).ok()
    })
}

pub fn dns_servers() -> Vec<String> {
    fs::read_to_string(RESOLV_CONF)
        .map(|contents| parse_nameservers(&contents))
        .unwrap_or_default()
}

pub fn parse_nameservers(resolv_conf: &str) -> Vec<String> {
    resolv_conf
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("nameserver"), Some(addr)) => Some(addr.to_string()),
                _ => None,
            }
        })
        .collect()
}

pub fn os_release_field(key: &str) -> Option<String> {
    parse_os_release_field(&fs::read_to_string(OS_RELEASE).ok()?, key)
}

pub fn parse_os_release_field(os_release: &str, key: &str) -> Option<String> {
    os_release.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        if k.trim() != key {
            return None;
        }
        let v = v.trim().trim_matches('"');
        (!v.is_empty()).then(|| v.to_string())
    })
}

/// A DMI attribute such as `sys_vendor` or `product_name`.
pub fn dmi_field(name: &str) -> Option<String> {
    read_trimmed(&Path::new(DMI_DIR).join(name))
}

/// Sensor type for an IIO device from its channel attribute names.
pub fn sensor_type_for_channels<S: AsRef<str>>(channels: &[S]) -> i32 {
    const PREFIXES: &[(&str, i32)] = &[
        ("in_accel", sensor_type::ACCELEROMETER),
        ("in_anglvel", sensor_type::GYROSCOPE),
        ("in_magn", sensor_type::MAGNETIC_FIELD),
        ("in_illuminance", sensor_type::LIGHT),
        ("in_intensity", sensor_type::LIGHT),
        ("in_pressure", sensor_type::PRESSURE),
        ("in_proximity", sensor_type::PROXIMITY),
        ("in_humidityrelative", sensor_type::RELATIVE_HUMIDITY),
        ("in_gravity", sensor_type::GRAVITY),
        ("in_rot", sensor_type::ROTATION_VECTOR),
        ("in_steps", sensor_type::STEP_COUNTER),
        ("in_temp", sensor_type::AMBIENT_TEMPERATURE),
    ];

    PREFIXES
        .iter()
        .find(|(prefix, _)| channels.iter().any(|c| c.as_ref().starts_with(prefix)))
        .map(|(_, code)| *code)
        .unwrap_or(0)
}

/// Industrial I/O sensors (accelerometers, ambient light, ...).
pub fn iio_sensors() -> Vec<SensorRaw> {
    let Ok(entries) = fs::read_dir(IIO_DIR) else {
        return Vec::new();
    };

    let mut sensors: Vec<SensorRaw> = entries
        .flatten()
        .filter_map(|entry| {
            let dir = entry.path();
            let name = read_trimmed(&dir.join("name"))?;
            let channels: Vec<String> = fs::read_dir(&dir)
                .ok()?
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect();
            let type_code = sensor_type_for_channels(&channels);
            let resolution = channels
                .iter()
                .find(|c| c.starts_with("in_") && c.ends_with("_scale"))
                .and_then(|c| read_trimmed(&dir.join(c)))
                .and_then(|v| v.parse::<f32>().ok());

            Some(SensorRaw {
                name,
                vendor: None,
                version: 1,
                type_code,
                power_ma: None,
                resolution,
                maximum_range: None,
            })
        })
        .collect();

    sensors.sort_by(|a, b| a.name.cmp(&b.name));
    sensors
}

/// Radio switches and adapters as seen through sysfs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadioState {
    pub wifi_enabled: Option<bool>,
    pub bluetooth_supported: Option<bool>,
    pub bluetooth_enabled: Option<bool>,
}

/// One rfkill switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioSwitch {
    /// rfkill type, e.g. `wlan` or `bluetooth`.
    pub kind: String,
    pub soft_blocked: bool,
    pub hard_blocked: bool,
}

pub fn radio_switches(rfkill_dir: &Path) -> Vec<RadioSwitch> {
    let Ok(entries) = fs::read_dir(rfkill_dir) else {
        return Vec::new();
    };

    let mut switches: Vec<(std::path::PathBuf, RadioSwitch)> = entries
        .flatten()
        .filter_map(|entry| {
            let dir = entry.path();
            let flag = |attr: &str| read_trimmed(&dir.join(attr)).map(|v| v == "1").unwrap_or(false);
            let switch = RadioSwitch {
                kind: read_trimmed(&dir.join("type"))?,
                soft_blocked: flag("soft"),
                hard_blocked: flag("hard"),
            };
            Some((dir, switch))
        })
        .collect();
    switches.sort_by(|a, b| a.0.cmp(&b.0));
    switches.into_iter().map(|(_, s)| s).collect()
}

/// Whether any switch of `kind` is unblocked. `None` when there is no such
/// switch.
pub fn radio_enabled(switches: &[RadioSwitch], kind: &str) -> Option<bool> {
    let mut matching = switches.iter().filter(|s| s.kind == kind).peekable();
    matching.peek()?;
    Some(matching.any(|s| !s.soft_blocked && !s.hard_blocked))
}

/// Radio state under a sysfs class root (normally `/sys/class`).
pub fn radio_state_in(sys_class: &Path) -> RadioState {
    if !sys_class.is_dir() {
        return RadioState::default();
    }

    let switches = radio_switches(&sys_class.join("rfkill"));
    let bluetooth_supported = match fs::read_dir(sys_class.join("bluetooth")) {
        Ok(entries) => entries
            .flatten()
            .any(|e| e.file_name().to_string_lossy().starts_with("hci")),
        Err(_) => false,
    };
    let bluetooth_enabled = if bluetooth_supported {
        radio_enabled(&switches, "bluetooth")
    } else {
        Some(false)
    };

    RadioState {
        wifi_enabled: radio_enabled(&switches, "wlan"),
        bluetooth_supported: Some(bluetooth_supported),
        bluetooth_enabled,
    }
}

pub fn radio_state() -> RadioState {
    radio_state_in(Path::new(SYS_CLASS_DIR))
}

pub fn wireless_signal_dbm() -> Option<i32> {
    parse_wireless_signal(&fs::read_to_string(WIRELESS_STATS).ok()?)
}

/// Signal level of the first interface in `/proc/net/wireless`.
///
/// Drivers reporting the old unsigned encoding print `256 + dBm`; a level
/// of 0 means the driver reports nothing.
pub fn parse_wireless_signal(wireless: &str) -> Option<i32> {
    wireless.lines().skip(2).find_map(|line| {
        let (_, stats) = line.split_once(':')?;
        // status, link quality, level
        let level = stats.split_whitespace().nth(2)?;
        let level: i32 = level.trim_end_matches('.').parse().ok()?;
        match level {
            0 => None,
            l if l > 0 => Some(l - 256),
            l => Some(l),
        }
    })
}

/// `(type, online)` of every power supply under `root`, in name order.
pub fn power_supplies(root: &Path) -> Vec<(String, bool)> {
    let Ok(entries) = fs::read_dir(root) else {
        return Vec::new();
    };

    let mut dirs: Vec<_> = entries.flatten().map(|e| e.path()).collect();
    dirs.sort();
    dirs.iter()
        .filter_map(|dir| {
            let kind = read_trimmed(&dir.join("type"))?;
            let online = read_trimmed(&dir.join("online")).map(|v| v == "1").unwrap_or(false);
            Some((kind, online))
        })
        .collect()
}

/// Plug code of the first online external supply. `0` when external
/// supplies exist but none is online, `-1` when there are none.
pub fn plugged_code_from_supplies<S: AsRef<str>>(supplies: &[(S, bool)]) -> i32 {
    let mut external = false;
    for (kind, online) in supplies {
        let code = match kind.as_ref() {
            "Mains" => battery_plugged::AC,
            "Wireless" => battery_plugged::WIRELESS,
            k if k == "USB" || k.starts_with("USB_") => battery_plugged::USB,
            _ => continue,
        };
        external = true;
        if *online {
            return code;
        }
    }
    if external {
        0
    } else {
        -1
    }
}

pub fn sysfs_plugged_code() -> i32 {
    plugged_code_from_supplies(&power_supplies(Path::new(POWER_SUPPLY_DIR)))
}

pub fn sysfs_battery() -> Option<BatteryRaw> {
    sysfs_battery_in(Path::new(POWER_SUPPLY_DIR))
}

/// First `BAT*` entry of a power-supply class directory.
///
/// sysfs reports µV, µAh and µWh.
pub fn sysfs_battery_in(root: &Path) -> Option<BatteryRaw> {
    let mut entries: Vec<_> = fs::read_dir(root)
        .ok()?
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().starts_with("BAT"))
                .unwrap_or(false)
        })
        .collect();
    entries.sort();
    let dir = entries.first()?;

    let read = |attr: &str| read_trimmed(&dir.join(attr));
    let read_i64 = |attr: &str| read(attr).and_then(|v| v.parse::<i64>().ok());

    let mut battery = BatteryRaw {
        present: read("present").map(|v| v == "1").unwrap_or(true),
        technology: read("technology"),
        status_code: read("status")
            .map(|s| status_code_from_name(&s))
            .unwrap_or(-1),
        health_code: read("health")
            .map(|h| health_code_from_name(&h))
            .unwrap_or(-1),
        plugged_code: plugged_code_from_supplies(&power_supplies(root)),
        ..BatteryRaw::default()
    };

    if let Some(capacity) = read_i64("capacity") {
        battery.level = capacity.clamp(0, 100) as i32;
        battery.scale = 100;
    }
    if let Some(uv) = read_i64("voltage_now") {
        battery.voltage_mv = (uv / 1000) as i32;
    }
    if let Some(temp) = read_i64("temp") {
        battery.temperature_tenths = temp as i32;
    }

    let design_mah = read_i64("charge_full_design")
        .filter(|uah| *uah > 0)
        .map(|uah| uah / 1000)
        .or_else(|| {
            let uwh = read_i64("energy_full_design").filter(|v| *v > 0)?;
            let uv = read_i64("voltage_min_design").filter(|v| *v > 0)?;
            Some((uwh as f64 / uv as f64 * 1000.0).round() as i64)
        });
    if let Some(mah) = design_mah {
        battery.capacity_mah = mah as i32;
    }

    if let Some(uah) = read_i64("charge_now") {
        battery.charge_counter_uah = uah;
    }
    if let Some(uwh) = read_i64("energy_now") {
        battery.energy_counter_nwh = uwh.saturating_mul(1000);
    }

    Some(battery)
}

pub fn health_code_from_name(health: &str) -> i32 {
    match health.trim().to_lowercase().as_str() {
        "good" => battery_health::GOOD,
        "overheat" | "hot" => battery_health::OVERHEAT,
        "dead" => battery_health::DEAD,
        "over voltage" => battery_health::OVER_VOLTAGE,
        "unspecified failure" => battery_health::UNSPECIFIED_FAILURE,
        "cold" => battery_health::COLD,
        _ => battery_health::UNKNOWN,
    }
}
