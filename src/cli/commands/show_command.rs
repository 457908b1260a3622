//! Show command feature.
//!
//! This module owns and handles the "device-inspector show" command behavior.

use crate::cli::commands::spinner;
use crate::config::Config;
use crate::facts::{build_section, build_sections, FactContext, Tab};
use crate::output::{self, OutputMode};
use crate::probe::{DeviceProbe, HostProbe};
use crate::public_ip::{lookup_public_ip, UNAVAILABLE};

pub(crate) fn handle_show(
    config: &Config,
    tab: Option<Tab>,
    json: bool,
    raw: bool,
    no_public_ip: bool,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let pb = spinner("Collecting device facts...", output_mode, json || raw)?;
    let snapshot = HostProbe::new().snapshot();

    if raw {
        return output::print_json(&snapshot);
    }

    // Only the network tab shows the public IP
    let wants_public_ip = !no_public_ip && tab.map_or(true, |t| t == Tab::Network);
    let public_ip = if wants_public_ip {
        if let Some(pb) = &pb {
            pb.set_message("Looking up public IP...");
        }
        lookup_public_ip(&config.network.public_ip_url, config.http_options())
    } else {
        UNAVAILABLE.to_string()
    };

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let context = FactContext {
        public_ip,
        mac_interface: config.network.mac_interface.clone(),
        low_memory_threshold: config.low_memory_threshold_bytes(),
    };

    let sections = match tab {
        Some(tab) => vec![build_section(tab, &snapshot, &context)],
        None => build_sections(&snapshot, &context),
    };

    if json {
        output::print_json(&sections)?;
    } else {
        output::print_human(&sections, output_mode);
    }

    Ok(())
}
