//! Service runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Request handlers never read process-wide environment variables.

use crate::constants::{DEFAULT_REST_ADDR, DEFAULT_REVIEW_QUEUE_CAPACITY};
use crate::{CheckinError, CheckinResult};
use std::net::SocketAddr;

/// Service configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    rest_addr: SocketAddr,
    cors_permissive: bool,
    review_queue_capacity: usize,
}

impl ServiceConfig {
    pub fn new(rest_addr: SocketAddr, cors_permissive: bool) -> Self {
        Self {
            rest_addr,
            cors_permissive,
            review_queue_capacity: DEFAULT_REVIEW_QUEUE_CAPACITY,
        }
    }

    pub fn with_review_queue_capacity(mut self, capacity: usize) -> Self {
        self.review_queue_capacity = capacity;
        self
    }

    /// Builds the configuration from raw environment values without reading the environment.
    ///
    /// `None` or blank values fall back to the defaults: listen on `0.0.0.0:3000` with a
    /// permissive CORS layer and keep up to 10 000 check-ins in the review queue.
    ///
    /// # Errors
    ///
    /// Returns `CheckinError::InvalidInput` if:
    /// - the address is not a valid `host:port` socket address, or
    /// - the CORS flag is not one of `true`, `false`, `1`, `0`, `yes`, `no`, `on`, `off`, or
    /// - the queue capacity is not a positive integer.
    pub fn from_env_values(
        rest_addr: Option<String>,
        cors_permissive: Option<String>,
        review_queue_capacity: Option<String>,
    ) -> CheckinResult<Self> {
        let rest_addr = non_blank(rest_addr).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
        let rest_addr = rest_addr.parse::<SocketAddr>().map_err(|e| {
            CheckinError::InvalidInput(format!("invalid REST address '{}': {}", rest_addr, e))
        })?;

        let cors_permissive = match non_blank(cors_permissive) {
            None => true,
            Some(flag) => parse_flag(&flag)?,
        };

        let review_queue_capacity = match non_blank(review_queue_capacity) {
            None => DEFAULT_REVIEW_QUEUE_CAPACITY,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|&capacity| capacity > 0)
                .ok_or_else(|| {
                    CheckinError::InvalidInput(format!(
                        "invalid review queue capacity '{}': expected a positive integer",
                        raw
                    ))
                })?,
        };

        Ok(Self::new(rest_addr, cors_permissive).with_review_queue_capacity(review_queue_capacity))
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn cors_permissive(&self) -> bool {
        self.cors_permissive
    }

    pub fn review_queue_capacity(&self) -> usize {
        self.review_queue_capacity
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(flag: &str) -> CheckinResult<bool> {
    match flag.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(CheckinError::InvalidInput(format!(
            "invalid boolean flag '{}'",
            other
        ))),
    }
}
