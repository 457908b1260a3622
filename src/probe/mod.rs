//! Raw device values, as handed over by the platform.
//!
//! A [`DeviceProbe`] is the only place that talks to the operating system.
//! It returns plain values; missing data is `None`, an empty list, or the
//! `-1` sentinel, and is turned into "Unknown" later by the fact builder.

pub mod host;
pub mod linux;

use crate::classify::{battery_health, battery_status};
use crate::netaddr::InterfaceInfo;
use serde::{Deserialize, Serialize};

pub use host::HostProbe;

/// Sentinel for integer readings the platform did not provide.
pub const NOT_AVAILABLE: i64 = -1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub system: SystemRaw,
    pub hardware: HardwareRaw,
    pub network: NetworkRaw,
    pub battery: BatteryRaw,
    pub sensors: Vec<SensorRaw>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRaw {
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
    pub build_id: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub host_name: Option<String>,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareRaw {
    pub cpu_arch: Option<String>,
    pub cpu_brand: Option<String>,
    pub cpu_cores: usize,
    pub total_memory: u64,
    pub available_memory: u64,
    pub total_swap: u64,
    pub used_swap: u64,
    pub storage_total: u64,
    pub storage_available: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRaw {
    /// Interfaces in the order the platform lists them.
    pub interfaces: Vec<InterfaceInfo>,
    /// Default gateway packed low byte first.
    pub gateway: Option<u32>,
    pub dns_servers: Vec<String>,
    pub operator_name: Option<String>,
    /// Radio access technology code of the cellular data connection.
    pub network_type_code: i32,
    pub roaming: bool,
    /// `None` when the radio state cannot be read.
    pub wifi_enabled: Option<bool>,
    /// Signal level of the wireless link in dBm.
    pub wifi_signal_dbm: Option<i32>,
    pub bluetooth_supported: Option<bool>,
    pub bluetooth_enabled: Option<bool>,
}

impl Default for NetworkRaw {
    fn default() -> Self {
        Self {
            interfaces: Vec::new(),
            gateway: None,
            dns_servers: Vec::new(),
            operator_name: None,
            network_type_code: 0,
            roaming: false,
            wifi_enabled: None,
            wifi_signal_dbm: None,
            bluetooth_supported: None,
            bluetooth_enabled: None,
        }
    }
}

/// Battery broadcast values. Integer fields use `-1` when not reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryRaw {
    pub present: bool,
    pub level: i32,
    pub scale: i32,
    /// Tenths of a degree Celsius.
    pub temperature_tenths: i32,
    pub voltage_mv: i32,
    pub technology: Option<String>,
    pub status_code: i32,
    pub health_code: i32,
    pub plugged_code: i32,
    /// Best-effort design capacity.
    pub capacity_mah: i32,
    pub charge_counter_uah: i64,
    pub energy_counter_nwh: i64,
}

impl Default for BatteryRaw {
    fn default() -> Self {
        Self {
            present: false,
            level: -1,
            scale: -1,
            temperature_tenths: -1,
            voltage_mv: -1,
            technology: None,
            status_code: -1,
            health_code: -1,
            plugged_code: -1,
            capacity_mah: -1,
            charge_counter_uah: NOT_AVAILABLE,
            energy_counter_nwh: NOT_AVAILABLE,
        }
    }
}

impl BatteryRaw {
    /// Charge level in percent, when both level and scale are usable.
    pub fn percent(&self) -> Option<i32> {
        if self.level >= 0 && self.scale > 0 {
            Some(self.level.saturating_mul(100) / self.scale)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorRaw {
    pub name: String,
    pub vendor: Option<String>,
    pub version: i32,
    pub type_code: i32,
    pub power_ma: Option<f32>,
    pub resolution: Option<f32>,
    pub maximum_range: Option<f32>,
}

/// Source of raw device values.
pub trait DeviceProbe {
    fn system(&mut self) -> SystemRaw;
    fn hardware(&mut self) -> HardwareRaw;
    fn network(&mut self) -> NetworkRaw;
    fn battery(&mut self) -> BatteryRaw;
    fn sensors(&mut self) -> Vec<SensorRaw>;

    fn snapshot(&mut self) -> DeviceSnapshot {
        DeviceSnapshot {
            system: self.system(),
            hardware: self.hardware(),
            network: self.network(),
            battery: self.battery(),
            sensors: self.sensors(),
        }
    }
}

/// Health code for a battery that only reports temperature and state of
/// health: out-of-range temperature wins, then wear.
pub fn derive_health_code(temperature_celsius: Option<f32>, state_of_health_percent: f32) -> i32 {
    match temperature_celsius {
        Some(t) if t >= 60.0 => return battery_health::OVERHEAT,
        Some(t) if t <= 0.0 => return battery_health::COLD,
        _ => {}
    }

    if !state_of_health_percent.is_finite() || state_of_health_percent <= 0.0 {
        battery_health::UNKNOWN
    } else if state_of_health_percent < 10.0 {
        battery_health::DEAD
    } else {
        battery_health::GOOD
    }
}

/// Status code for the five charge states a battery driver reports.
pub fn status_code_from_name(state: &str) -> i32 {
    match state.trim().to_lowercase().as_str() {
        "charging" => battery_status::CHARGING,
        "discharging" => battery_status::DISCHARGING,
        "full" => battery_status::FULL,
        "not charging" | "empty" => battery_status::NOT_CHARGING,
        _ => battery_status::UNKNOWN,
    }
}
