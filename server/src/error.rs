//! Startup failures. Any of these ends the process with a logged error.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
