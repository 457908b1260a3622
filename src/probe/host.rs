//! Probe for the machine the inspector runs on.

use super::{linux, BatteryRaw, DeviceProbe, HardwareRaw, NetworkRaw, SensorRaw, SystemRaw};
use crate::classify::sensor_type;
use crate::netaddr::InterfaceInfo;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;
use sysinfo::{Components, Disks, Networks, System};

pub struct HostProbe {
    system: System,
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl HostProbe {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl DeviceProbe for HostProbe {
    fn system(&mut self) -> SystemRaw {
        SystemRaw {
            os_name: System::name(),
            os_version: System::os_version(),
            kernel_version: System::kernel_version(),
            build_id: linux::os_release_field("BUILD_ID"),
            manufacturer: linux::dmi_field("sys_vendor"),
            model: linux::dmi_field("product_name"),
            host_name: System::host_name(),
            uptime_seconds: System::uptime(),
        }
    }

    fn hardware(&mut self) -> HardwareRaw {
        self.system.refresh_cpu_all();
        self.system.refresh_memory();

        let cpus = self.system.cpus();
        let cpu_brand = cpus
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|b| !b.is_empty());

        let disks = Disks::new_with_refreshed_list();
        let usage: Vec<DiskUsage> = disks
            .list()
            .iter()
            .map(|disk| DiskUsage {
                name: disk.name(),
                mount_point: disk.mount_point(),
                total: disk.total_space(),
                available: disk.available_space(),
            })
            .collect();
        let (storage_total, storage_available) = storage_totals(&usage);

        HardwareRaw {
            cpu_arch: Some(std::env::consts::ARCH.to_string()),
            cpu_brand,
            cpu_cores: cpus.len(),
            total_memory: self.system.total_memory(),
            available_memory: self.system.available_memory(),
            total_swap: self.system.total_swap(),
            used_swap: self.system.used_swap(),
            storage_total,
            storage_available,
        }
    }

    fn network(&mut self) -> NetworkRaw {
        let networks = Networks::new_with_refreshed_list();

        let mut interfaces: Vec<InterfaceInfo> = networks
            .iter()
            .map(|(name, data)| {
                let mac = data.mac_address();
                let hardware_address = if mac.0 == [0u8; 6] {
                    None
                } else {
                    Some(mac.0.to_vec())
                };

                InterfaceInfo {
                    name: name.to_string(),
                    hardware_address,
                    addresses: data.ip_networks().iter().map(|n| n.addr).collect(),
                    received_bytes: data.total_received(),
                    transmitted_bytes: data.total_transmitted(),
                }
            })
            .collect();
        // sysinfo hands interfaces back from a hash map
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));

        let radios = linux::radio_state();
        NetworkRaw {
            interfaces,
            gateway: linux::default_gateway(),
            dns_servers: linux::dns_servers(),
            wifi_enabled: radios.wifi_enabled,
            wifi_signal_dbm: linux::wireless_signal_dbm(),
            bluetooth_supported: radios.bluetooth_supported,
            bluetooth_enabled: radios.bluetooth_enabled,
            ..NetworkRaw::default()
        }
    }

    fn battery(&mut self) -> BatteryRaw {
        gather_battery()
            .or_else(linux::sysfs_battery)
            .unwrap_or_default()
    }

    fn sensors(&mut self) -> Vec<SensorRaw> {
        let mut sensors = linux::iio_sensors();

        let components = Components::new_with_refreshed_list();
        sensors.extend(components.list().iter().map(|component| {
            let label = component.label().to_string();
            let type_code = if label.to_lowercase().contains("ambient") {
                sensor_type::AMBIENT_TEMPERATURE
            } else {
                sensor_type::TEMPERATURE
            };
            SensorRaw {
                name: label,
                vendor: None,
                version: 1,
                type_code,
                power_ma: None,
                resolution: None,
                maximum_range: component.critical(),
            }
        }));

        sensors
    }
}

#[cfg(feature = "battery")]
fn gather_battery() -> Option<BatteryRaw> {
    use super::{derive_health_code, status_code_from_name};
    use battery::{
        units::{electric_potential::volt, energy::watt_hour, ratio::percent},
        Manager,
    };

    let manager = Manager::new().ok()?;
    let mut batteries = manager.batteries().ok()?;
    let battery = batteries.next()?.ok()?;

    let level = battery.state_of_charge().get::<percent>().round() as i32;
    let voltage = battery.voltage().get::<volt>();

    // Temperature in battery 0.7 is in Kelvin
    let temperature_celsius = battery.temperature().map(|t| {
        let kelvin = t.get::<battery::units::thermodynamic_temperature::kelvin>();
        kelvin - 273.15
    });

    let technology = {
        let tech = format!("{:?}", battery.technology());
        (tech != "Unknown").then_some(tech)
    };

    let design_wh = battery.energy_full_design().get::<watt_hour>();
    let energy_wh = battery.energy().get::<watt_hour>();

    Some(BatteryRaw {
        present: true,
        level,
        scale: 100,
        temperature_tenths: temperature_celsius
            .map(|c| (c * 10.0).round() as i32)
            .unwrap_or(-1),
        voltage_mv: if voltage > 0.0 {
            (voltage * 1000.0).round() as i32
        } else {
            -1
        },
        technology,
        status_code: status_code_from_name(&battery.state().to_string()),
        health_code: derive_health_code(
            temperature_celsius,
            battery.state_of_health().get::<percent>(),
        ),
        plugged_code: linux::sysfs_plugged_code(),
        capacity_mah: milliamp_hours(design_wh, voltage),
        charge_counter_uah: match milliamp_hours(energy_wh, voltage) {
            mah if mah > 0 => i64::from(mah) * 1000,
            _ => -1,
        },
        energy_counter_nwh: if energy_wh > 0.0 {
            (energy_wh as f64 * 1e9).round() as i64
        } else {
            -1
        },
    })
}

#[cfg(not(feature = "battery"))]
fn gather_battery() -> Option<BatteryRaw> {
    // Battery information not available without battery crate
    None
}

struct DiskUsage<'a> {
    name: &'a OsStr,
    mount_point: &'a Path,
    total: u64,
    available: u64,
}

/// Space of the filesystem mounted at `/`. Without one, every distinct
/// device is counted once, however many times it is mounted.
fn storage_totals(disks: &[DiskUsage]) -> (u64, u64) {
    if let Some(root) = disks.iter().find(|d| d.mount_point == Path::new("/")) {
        return (root.total, root.available);
    }

    let mut seen = HashSet::new();
    disks
        .iter()
        .filter(|d| seen.insert(d.name))
        .fold((0, 0), |(total, available), d| {
            (total + d.total, available + d.available)
        })
}

/// Charge in mAh for an energy at the given voltage, or `-1`.
#[cfg_attr(not(feature = "battery"), allow(dead_code))]
fn milliamp_hours(watt_hours: f32, volts: f32) -> i32 {
    if watt_hours > 0.0 && volts > 0.0 {
        (watt_hours / volts * 1000.0).round() as i32
    } else {
        -1
    }
}
