//! Integer platform codes to display labels.
//!
//! The numeric codes are the ones the platform reports (telephony network
//! type, battery broadcast extras, sensor descriptor type). Each classifier
//! is a fixed table with "Unknown" as the fallback for anything else.

use crate::format::UNKNOWN;

/// Carrier radio access technology codes.
pub mod network_type {
    pub const GPRS: i32 = 1;
    pub const EDGE: i32 = 2;
    pub const UMTS: i32 = 3;
    pub const CDMA: i32 = 4;
    pub const EVDO_0: i32 = 5;
    pub const EVDO_A: i32 = 6;
    pub const ONE_X_RTT: i32 = 7;
    pub const HSDPA: i32 = 8;
    pub const HSUPA: i32 = 9;
    pub const HSPA: i32 = 10;
    pub const IDEN: i32 = 11;
    pub const EVDO_B: i32 = 12;
    pub const LTE: i32 = 13;
    pub const EHRPD: i32 = 14;
    pub const HSPAP: i32 = 15;
    pub const NR: i32 = 20;
}

pub mod battery_status {
    pub const UNKNOWN: i32 = 1;
    pub const CHARGING: i32 = 2;
    pub const DISCHARGING: i32 = 3;
    pub const NOT_CHARGING: i32 = 4;
    pub const FULL: i32 = 5;
}

pub mod battery_health {
    pub const UNKNOWN: i32 = 1;
    pub const GOOD: i32 = 2;
    pub const OVERHEAT: i32 = 3;
    pub const DEAD: i32 = 4;
    pub const OVER_VOLTAGE: i32 = 5;
    pub const UNSPECIFIED_FAILURE: i32 = 6;
    pub const COLD: i32 = 7;
}

pub mod battery_plugged {
    pub const AC: i32 = 1;
    pub const USB: i32 = 2;
    pub const WIRELESS: i32 = 4;
}

pub mod sensor_type {
    pub const ACCELEROMETER: i32 = 1;
    pub const MAGNETIC_FIELD: i32 = 2;
    pub const GYROSCOPE: i32 = 4;
    pub const LIGHT: i32 = 5;
    pub const PRESSURE: i32 = 6;
    /// Deprecated generic temperature sensor; intentionally not labelled.
    pub const TEMPERATURE: i32 = 7;
    pub const PROXIMITY: i32 = 8;
    pub const GRAVITY: i32 = 9;
    pub const LINEAR_ACCELERATION: i32 = 10;
    pub const ROTATION_VECTOR: i32 = 11;
    pub const RELATIVE_HUMIDITY: i32 = 12;
    pub const AMBIENT_TEMPERATURE: i32 = 13;
    pub const SIGNIFICANT_MOTION: i32 = 17;
    pub const STEP_DETECTOR: i32 = 18;
    pub const STEP_COUNTER: i32 = 19;
}

/// Group a radio access technology code into its generation.
pub fn network_generation(code: i32) -> &'static str {
    use network_type::*;

    match code {
        GPRS | EDGE | CDMA | ONE_X_RTT | IDEN => "2G",
        UMTS | EVDO_0 | EVDO_A | HSDPA | HSUPA | HSPA | EVDO_B | EHRPD | HSPAP => "3G",
        LTE => "4G",
        NR => "5G",
        _ => UNKNOWN,
    }
}

pub fn battery_status(code: i32) -> &'static str {
    match code {
        battery_status::CHARGING => "Charging",
        battery_status::DISCHARGING => "Discharging",
        battery_status::FULL => "Full",
        battery_status::NOT_CHARGING => "Not Charging",
        battery_status::UNKNOWN => UNKNOWN,
        _ => UNKNOWN,
    }
}

pub fn battery_health(code: i32) -> &'static str {
    match code {
        battery_health::COLD => "Cold",
        battery_health::DEAD => "Dead",
        battery_health::GOOD => "Good",
        battery_health::OVERHEAT => "Overheat",
        battery_health::OVER_VOLTAGE => "Over Voltage",
        battery_health::UNSPECIFIED_FAILURE => "Unspecified Failure",
        battery_health::UNKNOWN => UNKNOWN,
        _ => UNKNOWN,
    }
}

/// Whether the status code means the battery is on external power.
pub fn is_charging(status_code: i32) -> bool {
    status_code == battery_status::CHARGING || status_code == battery_status::FULL
}

pub fn charging_source(code: i32) -> &'static str {
    match code {
        battery_plugged::USB => "USB",
        battery_plugged::AC => "AC",
        battery_plugged::WIRELESS => "Wireless",
        _ => UNKNOWN,
    }
}

pub fn sensor_type(code: i32) -> &'static str {
    use sensor_type::*;

    match code {
        ACCELEROMETER => "Accelerometer",
        AMBIENT_TEMPERATURE => "Ambient Temperature",
        GRAVITY => "Gravity",
        GYROSCOPE => "Gyroscope",
        LIGHT => "Light",
        LINEAR_ACCELERATION => "Linear Acceleration",
        MAGNETIC_FIELD => "Magnetic Field",
        PRESSURE => "Pressure",
        PROXIMITY => "Proximity",
        RELATIVE_HUMIDITY => "Relative Humidity",
        ROTATION_VECTOR => "Rotation Vector",
        SIGNIFICANT_MOTION => "Significant Motion",
        STEP_COUNTER => "Step Counter",
        STEP_DETECTOR => "Step Detector",
        _ => UNKNOWN,
    }
}

/// Infer the transport of the active connection from its interface name.
///
/// `None` means no interface is carrying traffic.
pub fn transport_kind(interface_name: Option<&str>) -> &'static str {
    let Some(name) = interface_name else {
        return "None";
    };
    let name_lower = name.to_lowercase();

    if name_lower.starts_with("wl")
        || name_lower.contains("wifi")
        || name_lower.contains("wi-fi")
        || name_lower.contains("wireless")
        || name_lower.contains("802.11")
    {
        "WiFi"
    } else if name_lower.starts_with("rmnet")
        || name_lower.starts_with("wwan")
        || name_lower.starts_with("ccmni")
        || name_lower.contains("cellular")
    {
        "Cellular"
    } else if name_lower.starts_with("en")
        || name_lower.starts_with("eth")
        || name_lower.contains("ethernet")
        || name_lower.contains("local area")
    {
        "Ethernet"
    } else {
        UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUT_OF_RANGE: [i32; 4] = [0, -1, 999, i32::MAX];

    #[test]
    fn test_network_generation_table() {
        use network_type::*;

        for code in [GPRS, EDGE, CDMA, ONE_X_RTT, IDEN] {
            assert_eq!(network_generation(code), "2G", "code {}", code);
        }
        for code in [UMTS, EVDO_0, EVDO_A, HSDPA, HSUPA, HSPA, EVDO_B, EHRPD, HSPAP] {
            assert_eq!(network_generation(code), "3G", "code {}", code);
        }
        assert_eq!(network_generation(LTE), "4G");
        assert_eq!(network_generation(NR), "5G");
        for code in OUT_OF_RANGE {
            assert_eq!(network_generation(code), "Unknown");
        }
    }

    #[test]
    fn test_battery_status_table() {
        assert_eq!(battery_status(battery_status::CHARGING), "Charging");
        assert_eq!(battery_status(battery_status::DISCHARGING), "Discharging");
        assert_eq!(battery_status(battery_status::FULL), "Full");
        assert_eq!(battery_status(battery_status::NOT_CHARGING), "Not Charging");
        assert_eq!(battery_status(battery_status::UNKNOWN), "Unknown");
        for code in OUT_OF_RANGE {
            assert_eq!(battery_status(code), "Unknown");
        }
    }

    #[test]
    fn test_battery_health_table() {
        assert_eq!(battery_health(battery_health::COLD), "Cold");
        assert_eq!(battery_health(battery_health::DEAD), "Dead");
        assert_eq!(battery_health(battery_health::GOOD), "Good");
        assert_eq!(battery_health(battery_health::OVERHEAT), "Overheat");
        assert_eq!(battery_health(battery_health::OVER_VOLTAGE), "Over Voltage");
        assert_eq!(
            battery_health(battery_health::UNSPECIFIED_FAILURE),
            "Unspecified Failure"
        );
        assert_eq!(battery_health(battery_health::UNKNOWN), "Unknown");
        for code in OUT_OF_RANGE {
            assert_eq!(battery_health(code), "Unknown");
        }
    }

    #[test]
    fn test_sensor_type_table() {
        use sensor_type::*;

        let expected = [
            (ACCELEROMETER, "Accelerometer"),
            (MAGNETIC_FIELD, "Magnetic Field"),
            (GYROSCOPE, "Gyroscope"),
            (LIGHT, "Light"),
            (PRESSURE, "Pressure"),
            (PROXIMITY, "Proximity"),
            (GRAVITY, "Gravity"),
            (LINEAR_ACCELERATION, "Linear Acceleration"),
            (ROTATION_VECTOR, "Rotation Vector"),
            (RELATIVE_HUMIDITY, "Relative Humidity"),
            (AMBIENT_TEMPERATURE, "Ambient Temperature"),
            (SIGNIFICANT_MOTION, "Significant Motion"),
            (STEP_DETECTOR, "Step Detector"),
            (STEP_COUNTER, "Step Counter"),
        ];
        assert_eq!(expected.len(), 14);
        for (code, label) in expected {
            assert_eq!(sensor_type(code), label, "code {}", code);
        }
        assert_eq!(sensor_type(TEMPERATURE), "Unknown");
        assert_eq!(sensor_type(999), "Unknown");
        for code in OUT_OF_RANGE {
            assert_eq!(sensor_type(code), "Unknown");
        }
    }

    #[test]
    fn test_charging_source_and_flag() {
        assert_eq!(charging_source(battery_plugged::AC), "AC");
        assert_eq!(charging_source(battery_plugged::USB), "USB");
        assert_eq!(charging_source(battery_plugged::WIRELESS), "Wireless");
        assert_eq!(charging_source(3), "Unknown");
        assert_eq!(charging_source(-1), "Unknown");

        assert!(is_charging(battery_status::CHARGING));
        assert!(is_charging(battery_status::FULL));
        assert!(!is_charging(battery_status::DISCHARGING));
        assert!(!is_charging(-1));
    }

    #[test]
    fn test_transport_kind() {
        assert_eq!(transport_kind(None), "None");
        assert_eq!(transport_kind(Some("wlan0")), "WiFi");
        assert_eq!(transport_kind(Some("wlp3s0")), "WiFi");
        assert_eq!(transport_kind(Some("Wi-Fi")), "WiFi");
        assert_eq!(transport_kind(Some("rmnet_data0")), "Cellular");
        assert_eq!(transport_kind(Some("eth0")), "Ethernet");
        assert_eq!(transport_kind(Some("enp0s31f6")), "Ethernet");
        assert_eq!(transport_kind(Some("tun0")), "Unknown");
    }
}
