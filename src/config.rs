use crate::nba::params::Season;
use std::{thread, time::Duration};

pub const DEFAULT_PLAYER_NAME: &str = "LeBron James";
pub const DEFAULT_SEASON: &str = "2023-24";
pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Pause taken before each rate-limited request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub pre_request_delay: Duration,
}

impl RateLimitPolicy {
    pub fn none() -> Self {
        RateLimitPolicy { pre_request_delay: Duration::ZERO }
    }

    pub fn from_millis(ms: u64) -> Self {
        RateLimitPolicy { pre_request_delay: Duration::from_millis(ms) }
    }

    pub fn pause(&self) {
        if !self.pre_request_delay.is_zero() {
            log::debug!("sleeping {:?} before request", self.pre_request_delay);
            thread::sleep(self.pre_request_delay);
        }
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self { RateLimitPolicy::from_millis(DEFAULT_DELAY_MS) }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub player_name: String,
    pub season: Season,
    pub rate_limit: RateLimitPolicy,
    pub timeout: Duration,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            season: Season::from(DEFAULT_SEASON),
            rate_limit: Default::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
