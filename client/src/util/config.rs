//! Build-time configuration.
//!
//! The pathfinding service's base URL is baked in when the bundle is built,
//! from the `PATHFINDER_API_URL` environment variable. Unset means the
//! service shares the page's origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable read at build time for the service base URL.
pub const API_URL_ENV: &str = "PATHFINDER_API_URL";

/// Base URL of the pathfinding service, without a trailing slash.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("PATHFINDER_API_URL"))
}

/// Trim whitespace and trailing slashes so routes can be appended with `/`.
#[must_use]
pub fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_owned()
}
