//! Local address selection over a snapshot of network interfaces.

use crate::format::UNKNOWN;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Interface name whose hardware address is reported as the WiFi MAC.
pub const DEFAULT_MAC_INTERFACE: &str = "wlan0";

/// One network interface as reported by the platform, in platform order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub name: String,
    pub hardware_address: Option<Vec<u8>>,
    pub addresses: Vec<IpAddr>,
    pub received_bytes: u64,
    pub transmitted_bytes: u64,
}

impl InterfaceInfo {
    /// Addresses worth listing for this interface (loopback removed).
    pub fn visible_addresses(&self) -> impl Iterator<Item = &IpAddr> {
        self.addresses.iter().filter(|addr| !addr.is_loopback())
    }

    pub fn is_loopback(&self) -> bool {
        !self.addresses.is_empty() && self.addresses.iter().all(IpAddr::is_loopback)
    }
}

/// First non-loopback IPv4 address across all interfaces, in iteration
/// order. IPv6 literals are skipped.
pub fn local_ipv4_address(interfaces: &[InterfaceInfo]) -> String {
    interfaces
        .iter()
        .flat_map(|iface| iface.addresses.iter())
        .find_map(|addr| match addr {
            IpAddr::V4(v4) if !v4.is_loopback() => Some(v4.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Hardware address of the interface named `target` (case-insensitive),
/// as colon-separated uppercase hex pairs.
pub fn mac_address(interfaces: &[InterfaceInfo], target: &str) -> String {
    interfaces
        .iter()
        .find(|iface| iface.name.eq_ignore_ascii_case(target))
        .and_then(|iface| iface.hardware_address.as_deref())
        .filter(|bytes| !bytes.is_empty())
        .map(format_mac)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn format_mac(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Interface currently carrying traffic: the first non-loopback interface
/// with an address and non-zero counters.
pub fn active_interface(interfaces: &[InterfaceInfo]) -> Option<&InterfaceInfo> {
    interfaces.iter().find(|iface| {
        !iface.is_loopback()
            && iface.visible_addresses().next().is_some()
            && (iface.received_bytes > 0 || iface.transmitted_bytes > 0)
    })
}
