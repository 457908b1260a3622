//! Public-IP command feature.

use crate::cli::commands::spinner;
use crate::config::Config;
use crate::output::{self, OutputMode};
use crate::public_ip::lookup_public_ip;

pub(crate) fn handle_public_ip(
    config: &Config,
    json: bool,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let pb = spinner("Looking up public IP...", output_mode, json)?;
    let public_ip = lookup_public_ip(&config.network.public_ip_url, config.http_options());
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if json {
        output::print_json(&serde_json::json!({ "public_ip": public_ip }))?;
    } else {
        println!("{}", public_ip);
    }
    Ok(())
}
