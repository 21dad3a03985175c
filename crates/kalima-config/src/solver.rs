use std::env;

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Capacity of the caller -> service request queue
    pub request_queue_cap: usize,
    /// Capacity of the service -> caller response queue
    pub response_queue_cap: usize,
    /// Minimum word length applied when a caller does not pass one
    pub default_min_len: usize,
}

impl SolverConfig {
    pub fn new() -> Self {
        let request_queue_cap = env::var("SOLVER_REQUEST_QUEUE_CAP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64); // UI burst capacity

        let response_queue_cap = env::var("SOLVER_RESPONSE_QUEUE_CAP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        let default_min_len = env::var("SOLVER_DEFAULT_MIN_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        Self {
            request_queue_cap,
            response_queue_cap,
            default_min_len,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
