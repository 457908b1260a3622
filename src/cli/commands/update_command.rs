//! Check-update command feature.

use crate::cli::commands::spinner;
use crate::config::Config;
use crate::output::{self, OutputMode};
use crate::update::{check_for_update, UpdateOutcome};
use std::process::ExitCode;

/// Exit status for a finished check. A failed check is an error exit in
/// human mode; JSON mode reports it in the document and exits normally.
pub(crate) fn exit_code_for(outcome: &UpdateOutcome, json: bool) -> ExitCode {
    match outcome {
        UpdateOutcome::Error { .. } if !json => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

pub(crate) fn handle_check_update(
    config: &Config,
    json: bool,
    output_mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let pb = spinner("Checking for updates...", output_mode, json)?;
    let outcome = check_for_update(
        &config.update.release_url,
        &config.update.current_version,
        config.http_options(),
    );
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if json {
        output::print_json(&outcome)?;
    } else {
        output::print_update_outcome(&outcome, output_mode);
    }
    Ok(exit_code_for(&outcome, json))
}
