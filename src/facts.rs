//! Device facts grouped into cards, one section per tab.

use crate::classify;
use crate::format::{
    decode_ipv4, format_size, format_uptime, or_unknown, with_unit_or_unknown, yes_no, UNKNOWN,
};
use crate::netaddr::{self, InterfaceInfo};
use crate::probe::{BatteryRaw, DeviceSnapshot, HardwareRaw, NetworkRaw, SensorRaw, SystemRaw};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    System,
    Hardware,
    Network,
    Battery,
    Sensors,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::System,
        Tab::Hardware,
        Tab::Network,
        Tab::Battery,
        Tab::Sensors,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::System => "System",
            Tab::Hardware => "Hardware",
            Tab::Network => "Network",
            Tab::Battery => "Battery",
            Tab::Sensors => "Sensors",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub rows: Vec<Row>,
}

impl Card {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push(Row {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub tab: Tab,
    pub cards: Vec<Card>,
}

impl Section {
    pub fn card(&self, title: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.title == title)
    }
}

/// Values that do not come from the probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactContext {
    /// Display string of the public-IP lookup ("Loading...", an address, or
    /// "Unavailable").
    pub public_ip: String,
    pub mac_interface: String,
    pub low_memory_threshold: u64,
}

/// Build every section, in tab order.
pub fn build_sections(snapshot: &DeviceSnapshot, ctx: &FactContext) -> Vec<Section> {
    Tab::ALL
        .iter()
        .map(|tab| build_section(*tab, snapshot, ctx))
        .collect()
}

pub fn build_section(tab: Tab, snapshot: &DeviceSnapshot, ctx: &FactContext) -> Section {
    let cards = match tab {
        Tab::System => system_cards(&snapshot.system),
        Tab::Hardware => hardware_cards(&snapshot.hardware, ctx),
        Tab::Network => network_cards(&snapshot.network, ctx),
        Tab::Battery => battery_cards(&snapshot.battery),
        Tab::Sensors => sensor_cards(&snapshot.sensors),
    };
    Section { tab, cards }
}

fn system_cards(system: &SystemRaw) -> Vec<Card> {
    vec![
        Card::new("Operating System")
            .row("OS Name", or_unknown(system.os_name.as_deref()))
            .row("OS Version", or_unknown(system.os_version.as_deref()))
            .row("Kernel Version", or_unknown(system.kernel_version.as_deref()))
            .row("Build ID", or_unknown(system.build_id.as_deref())),
        Card::new("Device Information")
            .row("Manufacturer", or_unknown(system.manufacturer.as_deref()))
            .row("Model", or_unknown(system.model.as_deref()))
            .row("Host Name", or_unknown(system.host_name.as_deref()))
            .row("Uptime", format_uptime(system.uptime_seconds)),
    ]
}

fn hardware_cards(hardware: &HardwareRaw, ctx: &FactContext) -> Vec<Card> {
    let cores = if hardware.cpu_cores > 0 {
        hardware.cpu_cores.to_string()
    } else {
        UNKNOWN.to_string()
    };
    let low_memory = hardware.total_memory > 0
        && hardware.available_memory < ctx.low_memory_threshold;

    vec![
        Card::new("Processor")
            .row("CPU Architecture", or_unknown(hardware.cpu_arch.as_deref()))
            .row("Processor", or_unknown(hardware.cpu_brand.as_deref()))
            .row("Cores", cores),
        Card::new("Memory")
            .row("Total RAM", format_size(hardware.total_memory))
            .row("Available RAM", format_size(hardware.available_memory))
            .row("Low Memory", yes_no(low_memory))
            .row("Threshold", format_size(ctx.low_memory_threshold))
            .row(
                "Swap",
                format!(
                    "{} / {}",
                    format_size(hardware.used_swap),
                    format_size(hardware.total_swap)
                ),
            ),
        Card::new("Storage")
            .row("Total Storage", format_size(hardware.storage_total))
            .row("Available Storage", format_size(hardware.storage_available))
            .row(
                "Used Storage",
                format_size(
                    hardware
                        .storage_total
                        .saturating_sub(hardware.storage_available),
                ),
            ),
    ]
}

fn network_cards(network: &NetworkRaw, ctx: &FactContext) -> Vec<Card> {
    let active = netaddr::active_interface(&network.interfaces);
    let dns = |i: usize| {
        network
            .dns_servers
            .get(i)
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string())
    };
    let external = || network.interfaces.iter().filter(|i| !i.is_loopback());
    let sent: u64 = external().map(|i| i.transmitted_bytes).sum();
    let received: u64 = external().map(|i| i.received_bytes).sum();
    let flag = |value: Option<bool>| value.map(yes_no).unwrap_or(UNKNOWN);
    let signal = network
        .wifi_signal_dbm
        .map(|dbm| format!("{} dBm", dbm))
        .unwrap_or_else(|| UNKNOWN.to_string());

    vec![
        Card::new("Network Status")
            .row("Internet Available", yes_no(active.is_some()))
            .row(
                "Network Type",
                classify::transport_kind(active.map(|i| i.name.as_str())),
            )
            .row("Local IP", netaddr::local_ipv4_address(&network.interfaces))
            .row("Public IP", ctx.public_ip.clone())
            .row(
                "Gateway IP",
                network
                    .gateway
                    .map(decode_ipv4)
                    .unwrap_or_else(|| UNKNOWN.to_string()),
            )
            .row("DNS 1", dns(0))
            .row("DNS 2", dns(1)),
        Card::new("WiFi Information")
            .row("WiFi Enabled", flag(network.wifi_enabled))
            .row("Signal Strength", signal)
            .row(
                "MAC Address",
                netaddr::mac_address(&network.interfaces, &ctx.mac_interface),
            ),
        Card::new("Mobile Network")
            .row("Network Operator", or_unknown(network.operator_name.as_deref()))
            .row(
                "Network Type",
                classify::network_generation(network.network_type_code),
            )
            .row("Roaming", yes_no(network.roaming)),
        Card::new("Bluetooth & Data")
            .row("Bluetooth Supported", flag(network.bluetooth_supported))
            .row("Bluetooth Enabled", flag(network.bluetooth_enabled))
            .row("Data Sent", format_size(sent))
            .row("Data Received", format_size(received)),
        interfaces_card(&network.interfaces),
    ]
}

fn interfaces_card(interfaces: &[InterfaceInfo]) -> Card {
    let card = Card::new("Network Interfaces");
    if interfaces.is_empty() {
        return card.row("Interfaces", "No interfaces found");
    }

    interfaces.iter().fold(card, |card, iface| {
        let addresses: Vec<String> = iface.visible_addresses().map(|a| a.to_string()).collect();
        let value = if addresses.is_empty() {
            "No IP addresses".to_string()
        } else {
            addresses.join(", ")
        };
        card.row(iface.name.clone(), value)
    })
}

fn battery_cards(battery: &BatteryRaw) -> Vec<Card> {
    let level = battery
        .percent()
        .map(|p| format!("{}%", p))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let temperature = if battery.temperature_tenths >= 0 {
        format!("{:.1}°C", battery.temperature_tenths as f32 / 10.0)
    } else {
        UNKNOWN.to_string()
    };
    let capacity = if battery.capacity_mah > 0 {
        format!("{} mAh", battery.capacity_mah)
    } else {
        UNKNOWN.to_string()
    };
    let positive_or_unknown = |value: i64, unit: &str| {
        if value > 0 {
            with_unit_or_unknown(value, unit)
        } else {
            UNKNOWN.to_string()
        }
    };

    vec![
        Card::new("General Status")
            .row("Level", level)
            .row("Charging", yes_no(classify::is_charging(battery.status_code)))
            .row("Charging Source", classify::charging_source(battery.plugged_code))
            .row("Present", yes_no(battery.present)),
        Card::new("Technical Details")
            .row("Temperature", temperature)
            .row(
                "Voltage",
                with_unit_or_unknown(i64::from(battery.voltage_mv), "mV"),
            )
            .row("Technology", or_unknown(battery.technology.as_deref()))
            .row("Capacity", capacity),
        Card::new("Counters")
            .row(
                "Charge Counter",
                positive_or_unknown(battery.charge_counter_uah, "µAh"),
            )
            .row(
                "Energy Counter",
                positive_or_unknown(battery.energy_counter_nwh, "nWh"),
            ),
        Card::new("Health")
            .row("Status", classify::battery_status(battery.status_code))
            .row("Health", classify::battery_health(battery.health_code)),
    ]
}

fn sensor_cards(sensors: &[SensorRaw]) -> Vec<Card> {
    if sensors.is_empty() {
        return vec![Card::new("Sensors").row("Sensors", "No sensors found")];
    }

    let reading = |value: Option<f32>, unit: &str| match value {
        Some(v) if unit.is_empty() => format!("{}", v),
        Some(v) => format!("{} {}", v, unit),
        None => UNKNOWN.to_string(),
    };

    sensors
        .iter()
        .map(|sensor| {
            Card::new(sensor.name.clone())
                .row("Type", classify::sensor_type(sensor.type_code))
                .row("Vendor", or_unknown(sensor.vendor.as_deref()))
                .row("Version", sensor.version.to_string())
                .row("Power", reading(sensor.power_ma, "mA"))
                .row("Resolution", reading(sensor.resolution, ""))
                .row("Maximum Range", reading(sensor.maximum_range, ""))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{battery_health, battery_plugged, battery_status, network_type, sensor_type};
    use crate::probe::DeviceProbe;
    use std::net::IpAddr;

    /// Probe returning canned values, standing in for the platform.
    struct FakeProbe;

    impl DeviceProbe for FakeProbe {
        fn system(&mut self) -> SystemRaw {
            SystemRaw {
                os_name: Some("Android".to_string()),
                os_version: Some("14".to_string()),
                kernel_version: None,
                build_id: Some("UP1A.231005.007".to_string()),
                manufacturer: Some("Google".to_string()),
                model: Some("Pixel 8".to_string()),
                host_name: Some("  ".to_string()),
                uptime_seconds: 3_660,
            }
        }

        fn hardware(&mut self) -> HardwareRaw {
            HardwareRaw {
                cpu_arch: Some("arm64-v8a".to_string()),
                cpu_brand: None,
                cpu_cores: 8,
                total_memory: 8 * 1024 * 1024 * 1024,
                available_memory: 100 * 1024 * 1024,
                total_swap: 0,
                used_swap: 0,
                storage_total: 128 * 1024 * 1024 * 1024,
                storage_available: 64 * 1024 * 1024 * 1024,
            }
        }

        fn network(&mut self) -> NetworkRaw {
            let lo = InterfaceInfo {
                name: "lo".to_string(),
                addresses: vec!["127.0.0.1".parse::<IpAddr>().unwrap()],
                received_bytes: 10,
                transmitted_bytes: 10,
                ..Default::default()
            };
            let wlan = InterfaceInfo {
                name: "wlan0".to_string(),
                hardware_address: Some(vec![0x02, 0x00, 0x00, 0xab, 0xcd, 0xef]),
                addresses: vec![
                    "fe80::1".parse().unwrap(),
                    "192.168.1.23".parse().unwrap(),
                ],
                received_bytes: 1536,
                transmitted_bytes: 1024,
            };
            NetworkRaw {
                interfaces: vec![lo, wlan],
                gateway: Some(0x0101A8C0),
                dns_servers: vec!["1.1.1.1".to_string()],
                operator_name: Some("Carrier".to_string()),
                network_type_code: network_type::LTE,
                roaming: false,
                wifi_enabled: Some(true),
                wifi_signal_dbm: Some(-61),
                bluetooth_supported: Some(true),
                bluetooth_enabled: None,
            }
        }

        fn battery(&mut self) -> BatteryRaw {
            BatteryRaw {
                present: true,
                level: 80,
                scale: 100,
                temperature_tenths: 312,
                voltage_mv: 4100,
                technology: Some("Li-ion".to_string()),
                status_code: battery_status::FULL,
                health_code: battery_health::GOOD,
                plugged_code: battery_plugged::USB,
                capacity_mah: -1,
                charge_counter_uah: 3_200_000,
                energy_counter_nwh: -1,
            }
        }

        fn sensors(&mut self) -> Vec<SensorRaw> {
            vec![
                SensorRaw {
                    name: "BMI260 Accelerometer".to_string(),
                    vendor: Some("Bosch".to_string()),
                    version: 1,
                    type_code: sensor_type::ACCELEROMETER,
                    power_ma: Some(0.15),
                    resolution: Some(0.5),
                    maximum_range: Some(78.5),
                },
                SensorRaw {
                    name: "Mystery".to_string(),
                    type_code: 999,
                    ..Default::default()
                },
            ]
        }
    }

    fn context() -> FactContext {
        FactContext {
            public_ip: "203.0.113.9".to_string(),
            mac_interface: "wlan0".to_string(),
            low_memory_threshold: 256 * 1024 * 1024,
        }
    }

    fn sections() -> Vec<Section> {
        build_sections(&FakeProbe.snapshot(), &context())
    }

    #[test]
    fn test_sections_follow_tab_order() {
        let tabs: Vec<Tab> = sections().iter().map(|s| s.tab).collect();
        assert_eq!(tabs, Tab::ALL.to_vec());
    }

    #[test]
    fn test_system_facts() {
        let sections = sections();
        let os = sections[0].card("Operating System").unwrap();
        assert_eq!(os.value("OS Version"), Some("14"));
        assert_eq!(os.value("Kernel Version"), Some("Unknown"));

        let device = sections[0].card("Device Information").unwrap();
        assert_eq!(device.value("Model"), Some("Pixel 8"));
        assert_eq!(device.value("Host Name"), Some("Unknown"));
        assert_eq!(device.value("Uptime"), Some("1h 1m"));
    }

    #[test]
    fn test_hardware_facts() {
        let sections = sections();
        let hardware = &sections[1];
        let memory = hardware.card("Memory").unwrap();
        assert_eq!(memory.value("Total RAM"), Some("8.00 GB"));
        assert_eq!(memory.value("Available RAM"), Some("100.00 MB"));
        assert_eq!(memory.value("Low Memory"), Some("Yes"));

        let processor = hardware.card("Processor").unwrap();
        assert_eq!(processor.value("Processor"), Some("Unknown"));
        assert_eq!(processor.value("Cores"), Some("8"));

        let storage = hardware.card("Storage").unwrap();
        assert_eq!(storage.value("Used Storage"), Some("64.00 GB"));
    }

    #[test]
    fn test_network_facts() {
        let sections = sections();
        let network = &sections[2];
        let status = network.card("Network Status").unwrap();
        assert_eq!(status.value("Internet Available"), Some("Yes"));
        assert_eq!(status.value("Network Type"), Some("WiFi"));
        assert_eq!(status.value("Local IP"), Some("192.168.1.23"));
        assert_eq!(status.value("Public IP"), Some("203.0.113.9"));
        assert_eq!(status.value("Gateway IP"), Some("192.168.1.1"));
        assert_eq!(status.value("DNS 1"), Some("1.1.1.1"));
        assert_eq!(status.value("DNS 2"), Some("Unknown"));

        let wifi = network.card("WiFi Information").unwrap();
        assert_eq!(wifi.value("WiFi Enabled"), Some("Yes"));
        assert_eq!(wifi.value("Signal Strength"), Some("-61 dBm"));
        assert_eq!(wifi.value("MAC Address"), Some("02:00:00:AB:CD:EF"));

        let mobile = network.card("Mobile Network").unwrap();
        assert_eq!(mobile.value("Network Type"), Some("4G"));

        // loopback traffic is left out
        let usage = network.card("Bluetooth & Data").unwrap();
        assert_eq!(usage.value("Bluetooth Supported"), Some("Yes"));
        assert_eq!(usage.value("Bluetooth Enabled"), Some("Unknown"));
        assert_eq!(usage.value("Data Sent"), Some("1.00 KB"));
        assert_eq!(usage.value("Data Received"), Some("1.50 KB"));

        let interfaces = network.card("Network Interfaces").unwrap();
        assert_eq!(interfaces.value("lo"), Some("No IP addresses"));
        assert_eq!(interfaces.value("wlan0"), Some("fe80::1, 192.168.1.23"));
    }

    #[test]
    fn test_battery_facts() {
        let sections = sections();
        let battery = &sections[3];
        let general = battery.card("General Status").unwrap();
        assert_eq!(general.value("Level"), Some("80%"));
        assert_eq!(general.value("Charging"), Some("Yes"));
        assert_eq!(general.value("Charging Source"), Some("USB"));

        let details = battery.card("Technical Details").unwrap();
        assert_eq!(details.value("Temperature"), Some("31.2°C"));
        assert_eq!(details.value("Voltage"), Some("4100 mV"));
        assert_eq!(details.value("Capacity"), Some("Unknown"));

        let counters = battery.card("Counters").unwrap();
        assert_eq!(counters.value("Charge Counter"), Some("3200000 µAh"));
        assert_eq!(counters.value("Energy Counter"), Some("Unknown"));

        let health = battery.card("Health").unwrap();
        assert_eq!(health.value("Status"), Some("Full"));
        assert_eq!(health.value("Health"), Some("Good"));
    }

    #[test]
    fn test_missing_battery_is_all_unknown() {
        let section = build_section(Tab::Battery, &DeviceSnapshot::default(), &context());
        let general = section.card("General Status").unwrap();
        assert_eq!(general.value("Level"), Some("Unknown"));
        assert_eq!(general.value("Present"), Some("No"));
        let health = section.card("Health").unwrap();
        assert_eq!(health.value("Status"), Some("Unknown"));
        assert_eq!(health.value("Health"), Some("Unknown"));
    }

    #[test]
    fn test_sensor_facts() {
        let sections = sections();
        let sensors = &sections[4];
        assert_eq!(sensors.cards.len(), 2);

        let accel = sensors.card("BMI260 Accelerometer").unwrap();
        assert_eq!(accel.value("Type"), Some("Accelerometer"));
        assert_eq!(accel.value("Power"), Some("0.15 mA"));
        assert_eq!(accel.value("Maximum Range"), Some("78.5"));

        let mystery = sensors.card("Mystery").unwrap();
        assert_eq!(mystery.value("Type"), Some("Unknown"));
        assert_eq!(mystery.value("Vendor"), Some("Unknown"));
    }

    #[test]
    fn test_empty_snapshot_has_placeholder_cards() {
        let sections = build_sections(&DeviceSnapshot::default(), &context());
        let interfaces = sections[2].card("Network Interfaces").unwrap();
        assert_eq!(interfaces.value("Interfaces"), Some("No interfaces found"));
        assert_eq!(
            sections[2].card("Network Status").unwrap().value("Network Type"),
            Some("None")
        );
        let wifi = sections[2].card("WiFi Information").unwrap();
        assert_eq!(wifi.value("WiFi Enabled"), Some("Unknown"));
        assert_eq!(wifi.value("Signal Strength"), Some("Unknown"));
        let bluetooth = sections[2].card("Bluetooth & Data").unwrap();
        assert_eq!(bluetooth.value("Bluetooth Supported"), Some("Unknown"));
        assert_eq!(bluetooth.value("Bluetooth Enabled"), Some("Unknown"));
        assert_eq!(sections[4].cards[0].value("Sensors"), Some("No sensors found"));
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(Tab::System.next(), Tab::Hardware);
        assert_eq!(Tab::Sensors.next(), Tab::System);
        assert_eq!(Tab::System.prev(), Tab::Sensors);
        assert_eq!(Tab::Battery.to_string(), "Battery");
    }
}
