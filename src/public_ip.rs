//! Public IP lookup through a plain-text echo endpoint.

use crate::debug_log::inspector_log;
use crate::error::FetchError;
use crate::http::{self, HttpOptions};
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org";

/// Shown while the lookup is in flight.
pub const LOADING: &str = "Loading...";
/// Shown when the lookup failed.
pub const UNAVAILABLE: &str = "Unavailable";

/// GET the echo endpoint and return the trimmed body.
pub fn fetch_public_ip(url: &str, options: HttpOptions) -> Result<String, FetchError> {
    let body = http::get_text(url, options)?;
    Ok(body.trim().to_string())
}

/// Display string for a finished lookup.
pub fn public_ip_label(result: &Result<String, FetchError>) -> String {
    match result {
        Ok(ip) if !ip.is_empty() => ip.clone(),
        Ok(_) => UNAVAILABLE.to_string(),
        Err(_) => UNAVAILABLE.to_string(),
    }
}

/// Look up the public IP and return its display string.
pub fn lookup_public_ip(url: &str, options: HttpOptions) -> String {
    let result = fetch_public_ip(url, options);
    if let Err(e) = &result {
        inspector_log(&format!("public ip lookup failed: {}", e));
    }
    public_ip_label(&result)
}

/// Run [`lookup_public_ip`] on a background thread. Dropping the receiver
/// discards the result.
pub fn spawn_public_ip_lookup(url: String, options: HttpOptions) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(lookup_public_ip(&url, options));
    });
    rx
}
