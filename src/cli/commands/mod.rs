pub mod config_command;
pub mod ip_command;
pub mod show_command;
pub mod update_command;

use crate::output::OutputMode;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr while a lookup runs. None in quiet or JSON mode so
/// machine-readable output stays clean.
pub(crate) fn spinner(
    message: &str,
    output_mode: OutputMode,
    json: bool,
) -> anyhow::Result<Option<ProgressBar>> {
    if output_mode == OutputMode::Quiet || json {
        return Ok(None);
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(Some(pb))
}
