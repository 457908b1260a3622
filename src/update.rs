//! Remote version check against the latest published release.

use crate::debug_log::inspector_log;
use crate::error::FetchError;
use crate::http::{self, HttpOptions};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Version this build reports to the update check.
pub const CURRENT_VERSION: &str = "1.0";

pub const DEFAULT_RELEASE_URL: &str =
    "https://api.github.com/repos/MurShidM01/Device-Inspector-Android-App-JetpackCompose/releases/latest";

/// The two fields of the release metadata the check needs. Everything else
/// in the document is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    pub html_url: String,
}

/// Terminal result of one update check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateOutcome {
    UpdateAvailable { version: String, url: String },
    UpToDate,
    Error { reason: String },
}

pub fn parse_release(body: &str) -> Result<ReleaseInfo, FetchError> {
    let release: ReleaseInfo = serde_json::from_str(body)?;
    if release.html_url.trim().is_empty() {
        return Err(FetchError::EmptyField("html_url"));
    }
    Ok(release)
}

/// Drop every leading `v`/`V` from a release tag.
pub fn strip_version_prefix(tag: &str) -> &str {
    tag.trim().trim_start_matches(&['v', 'V'][..])
}

/// Compare the release against `current_version`.
///
/// Both sides lose their `v` prefix, then compare as plain strings, so
/// "10.0" sorts below "9.0".
pub fn evaluate_release(release: &ReleaseInfo, current_version: &str) -> UpdateOutcome {
    let latest = strip_version_prefix(&release.tag_name);
    let current = strip_version_prefix(current_version);
    if latest.is_empty() {
        return UpdateOutcome::Error {
            reason: FetchError::EmptyField("tag_name").to_string(),
        };
    }

    if latest > current {
        UpdateOutcome::UpdateAvailable {
            version: latest.to_string(),
            url: release.html_url.clone(),
        }
    } else {
        UpdateOutcome::UpToDate
    }
}

/// Interpret a release metadata body. Parse failures become `Error`.
pub fn outcome_from_body(body: &str, current_version: &str) -> UpdateOutcome {
    match parse_release(body) {
        Ok(release) => evaluate_release(&release, current_version),
        Err(e) => UpdateOutcome::Error {
            reason: e.to_string(),
        },
    }
}

/// Fetch the release metadata at `url` and compare it with
/// `current_version`. Blocks on the network; produces exactly one outcome.
pub fn check_for_update(url: &str, current_version: &str, options: HttpOptions) -> UpdateOutcome {
    inspector_log(&format!("update check: GET {}", url));

    let outcome = match http::get_text(url, options) {
        Ok(body) => outcome_from_body(&body, current_version),
        Err(e) => UpdateOutcome::Error {
            reason: e.to_string(),
        },
    };

    match &outcome {
        UpdateOutcome::UpdateAvailable { version, .. } => {
            inspector_log(&format!("update check: {} available", version))
        }
        UpdateOutcome::UpToDate => inspector_log("update check: up to date"),
        UpdateOutcome::Error { reason } => {
            inspector_log(&format!("update check failed: {}", reason))
        }
    }
    outcome
}

/// Run [`check_for_update`] on a background thread.
///
/// The outcome is delivered once on the returned channel. Dropping the
/// receiver discards it.
pub fn spawn_update_check(
    url: String,
    current_version: String,
    options: HttpOptions,
) -> Receiver<UpdateOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = check_for_update(&url, &current_version, options);
        let _ = tx.send(outcome);
    });
    rx
}

/// Update check as seen by the About dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UpdateState {
    #[default]
    Idle,
    Checking,
    UpToDate,
    UpdateAvailable {
        url: String,
    },
    Error,
}

impl UpdateState {
    /// Move `Idle -> Checking`. Returns false (and changes nothing) from any
    /// other state, so a finished check stays finished.
    pub fn begin(&mut self) -> bool {
        if *self == UpdateState::Idle {
            *self = UpdateState::Checking;
            true
        } else {
            false
        }
    }

    /// Record the outcome of the running check. Ignored unless `Checking`.
    pub fn finish(&mut self, outcome: UpdateOutcome) -> bool {
        if *self != UpdateState::Checking {
            return false;
        }
        *self = match outcome {
            UpdateOutcome::UpdateAvailable { url, .. } => UpdateState::UpdateAvailable { url },
            UpdateOutcome::UpToDate => UpdateState::UpToDate,
            UpdateOutcome::Error { .. } => UpdateState::Error,
        };
        true
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UpdateState::UpToDate | UpdateState::UpdateAvailable { .. } | UpdateState::Error
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            UpdateState::Idle => "Check for Update",
            UpdateState::Checking => "Checking for updates...",
            UpdateState::UpToDate => "You are using the latest version.",
            UpdateState::UpdateAvailable { .. } => "A new version is available.",
            UpdateState::Error => "Could not check for updates.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_BODY: &str = r#"{
        "url": "https://api.example.com/releases/1",
        "html_url": "https://example.com/releases/tag/v2.0",
        "id": 1,
        "tag_name": "v2.0",
        "draft": false,
        "assets": []
    }"#;

    fn release(tag: &str) -> ReleaseInfo {
        ReleaseInfo {
            tag_name: tag.to_string(),
            html_url: "https://example.com/r".to_string(),
        }
    }

    #[test]
    fn test_parse_release_ignores_unknown_fields() {
        let release = parse_release(RELEASE_BODY).unwrap();
        assert_eq!(release.tag_name, "v2.0");
        assert_eq!(release.html_url, "https://example.com/releases/tag/v2.0");
    }

    #[test]
    fn test_newer_tag_reports_update() {
        let outcome = outcome_from_body(RELEASE_BODY, "1.0");
        assert_eq!(
            outcome,
            UpdateOutcome::UpdateAvailable {
                version: "2.0".to_string(),
                url: "https://example.com/releases/tag/v2.0".to_string(),
            }
        );
    }

    #[test]
    fn test_same_or_older_tag_is_up_to_date() {
        assert_eq!(evaluate_release(&release("v1.0"), "1.0"), UpdateOutcome::UpToDate);
        assert_eq!(evaluate_release(&release("0.9"), "1.0"), UpdateOutcome::UpToDate);
    }

    #[test]
    fn test_prefixed_current_version() {
        assert_eq!(evaluate_release(&release("v1.0"), "v1.0"), UpdateOutcome::UpToDate);
        assert_eq!(
            evaluate_release(&release("2.0"), "v1.0"),
            UpdateOutcome::UpdateAvailable {
                version: "2.0".to_string(),
                url: "https://example.com/r".to_string(),
            }
        );
    }

    #[test]
    fn test_comparison_is_lexicographic() {
        // "10.0" < "9.0" as strings
        assert_eq!(evaluate_release(&release("v10.0"), "9.0"), UpdateOutcome::UpToDate);
    }

    #[test]
    fn test_strip_version_prefix() {
        assert_eq!(strip_version_prefix("v1.2"), "1.2");
        assert_eq!(strip_version_prefix("V1.2"), "1.2");
        assert_eq!(strip_version_prefix("vV3"), "3");
        assert_eq!(strip_version_prefix("1.2"), "1.2");
    }

    #[test]
    fn test_missing_fields_fail_closed() {
        let no_url = r#"{"tag_name": "v2.0"}"#;
        assert!(matches!(
            outcome_from_body(no_url, "1.0"),
            UpdateOutcome::Error { .. }
        ));

        let no_tag = r#"{"html_url": "https://example.com"}"#;
        assert!(matches!(
            outcome_from_body(no_tag, "1.0"),
            UpdateOutcome::Error { .. }
        ));

        let empty_tag = r#"{"tag_name": "v", "html_url": "https://example.com"}"#;
        assert!(matches!(
            outcome_from_body(empty_tag, "1.0"),
            UpdateOutcome::Error { .. }
        ));

        assert!(matches!(
            outcome_from_body("<html>rate limited</html>", "1.0"),
            UpdateOutcome::Error { .. }
        ));
    }

    #[test]
    fn test_state_machine_happy_path() {
        let mut state = UpdateState::default();
        assert_eq!(state, UpdateState::Idle);
        assert!(state.begin());
        assert_eq!(state, UpdateState::Checking);
        assert!(state.finish(UpdateOutcome::UpdateAvailable {
            version: "2.0".to_string(),
            url: "https://example.com".to_string(),
        }));
        assert_eq!(
            state,
            UpdateState::UpdateAvailable {
                url: "https://example.com".to_string()
            }
        );
        assert!(state.is_terminal());
    }

    #[test]
    fn test_terminal_states_are_sticky() {
        let mut state = UpdateState::Idle;
        state.begin();
        state.finish(UpdateOutcome::Error {
            reason: "offline".to_string(),
        });
        assert_eq!(state, UpdateState::Error);

        assert!(!state.begin());
        assert!(!state.finish(UpdateOutcome::UpToDate));
        assert_eq!(state, UpdateState::Error);
    }

    #[test]
    fn test_finish_ignored_when_idle() {
        let mut state = UpdateState::Idle;
        assert!(!state.finish(UpdateOutcome::UpToDate));
        assert_eq!(state, UpdateState::Idle);
    }

    #[test]
    fn test_spawned_check_reports_error_for_unreachable_host() {
        let rx = spawn_update_check(
            "http://127.0.0.1:1/releases/latest".to_string(),
            CURRENT_VERSION.to_string(),
            HttpOptions::with_timeout_secs(Some(5)),
        );
        let outcome = rx.recv().unwrap();
        assert!(matches!(outcome, UpdateOutcome::Error { .. }));
    }
}
