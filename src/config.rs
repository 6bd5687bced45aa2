//! Runtime settings read from the environment.
//!
//! | variable               | default                      |
//! |------------------------|------------------------------|
//! | `POLARIS_API_URL`      | `http://localhost:5000/api`  |
//! | `POLARIS_CURRENT_ROLE` | empty                        |
//! | `POLARIS_TIMEOUT_SECS` | `15`                         |

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub current_role: String,
    pub timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            current_role: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let timeout = match get("POLARIS_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!("Ignoring POLARIS_TIMEOUT_SECS={:?}", raw);
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            api_url: get("POLARIS_API_URL").unwrap_or(defaults.api_url),
            current_role: get("POLARIS_CURRENT_ROLE").unwrap_or(defaults.current_role),
            timeout,
        }
    }
}
