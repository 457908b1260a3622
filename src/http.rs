//! Blocking HTTP GET shared by the update check and the public-IP lookup.
//!
//! Callers run these on a background thread; nothing here retries.

use crate::error::FetchError;
use std::time::Duration;

const USER_AGENT: &str = concat!("device-inspector/", env!("CARGO_PKG_VERSION"));

/// Transport settings for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpOptions {
    /// Overall request timeout. `None` keeps the transport defaults.
    pub timeout: Option<Duration>,
}

impl HttpOptions {
    pub fn with_timeout_secs(secs: Option<u64>) -> Self {
        Self {
            timeout: secs.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}

fn agent(options: HttpOptions) -> ureq::Agent {
    let mut builder = ureq::AgentBuilder::new().user_agent(USER_AGENT);
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// GET `url` and return the body as text.
pub fn get_text(url: &str, options: HttpOptions) -> Result<String, FetchError> {
    let response = agent(options)
        .get(url)
        .call()
        .map_err(|e| FetchError::from_ureq(url, e))?;
    Ok(response.into_string()?)
}
