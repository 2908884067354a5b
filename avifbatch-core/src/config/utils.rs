//! Configuration utility functions
//!
//! Helpers for reading configuration values from environment variables.

/// Get a non-empty string value from an environment variable, if set
pub fn get_env_opt_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}
