//! Device inspector: hardware, network, battery and sensor facts for the
//! machine it runs on, with a remote update check and public-IP lookup.

pub mod classify;
pub mod cli;
pub mod config;
pub mod debug_log;
pub mod error;
pub mod facts;
pub mod format;
pub mod http;
pub mod netaddr;
pub mod output;
pub mod probe;
pub mod public_ip;
pub mod tui;
pub mod update;
