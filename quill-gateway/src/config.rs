//! Startup configuration read from the environment.

use std::net::SocketAddr;

use crate::error::GatewayError;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default request body limit for transform endpoints (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default cap on transform output, summed over chain steps (16 MiB).
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 16 * 1024 * 1024;

/// Gateway settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    pub max_body_bytes: usize,
    pub max_output_bytes: usize,
}

impl GatewayConfig {
    /// Reads `QUILL_LISTEN_ADDR`, `QUILL_MAX_BODY_BYTES` and
    /// `QUILL_MAX_OUTPUT_BYTES`.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] if a variable is set to an
    /// unparseable value.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_vars(
            std::env::var("QUILL_LISTEN_ADDR").ok().as_deref(),
            std::env::var("QUILL_MAX_BODY_BYTES").ok().as_deref(),
            std::env::var("QUILL_MAX_OUTPUT_BYTES").ok().as_deref(),
        )
    }

    /// Builds a config from raw variable values; `None` means unset.
    ///
    /// # Errors
    /// Returns [`GatewayError::Config`] on an invalid address or a limit
    /// that is not a positive integer.
    pub fn from_vars(
        listen_addr: Option<&str>,
        max_body_bytes: Option<&str>,
        max_output_bytes: Option<&str>,
    ) -> Result<Self, GatewayError> {
        let addr = listen_addr.unwrap_or(DEFAULT_LISTEN_ADDR);
        let listen_addr = addr.trim().parse::<SocketAddr>().map_err(|e| {
            GatewayError::Config(format!("QUILL_LISTEN_ADDR '{addr}' is not a socket address: {e}"))
        })?;

        let max_body_bytes =
            parse_limit("QUILL_MAX_BODY_BYTES", max_body_bytes, DEFAULT_MAX_BODY_BYTES)?;
        let max_output_bytes =
            parse_limit("QUILL_MAX_OUTPUT_BYTES", max_output_bytes, DEFAULT_MAX_OUTPUT_BYTES)?;

        Ok(Self { listen_addr, max_body_bytes, max_output_bytes })
    }
}

fn parse_limit(name: &str, raw: Option<&str>, default: usize) -> Result<usize, GatewayError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => {
            Err(GatewayError::Config(format!("{name} '{raw}' must be a positive integer")))
        }
        Ok(n) => Ok(n),
    }
}
