//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Upper bound on nested expansions a config may ask for.
const MAX_NAVIGATION_DEPTH: usize = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url("api.core_url", &config.api.core_url)?;
    validate_base_url("api.catalog_url", &config.api.catalog_url)?;
    validate_not_empty("api.client_id", &config.api.client_id)?;
    validate_not_empty("api.organization", &config.api.organization)?;
    validate_max_depth(config.navigation.max_depth)?;
    validate_not_empty("playback.player", &config.playback.player)?;
    validate_not_empty("playback.quality", &config.playback.quality)?;
    validate_not_empty("playback.extension", &config.playback.extension)?;

    Ok(())
}

/// Validate the login credentials given on the command line.
pub fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::MissingConfig("username".to_string()));
    }

    if password.is_empty() {
        return Err(Error::MissingConfig("password".to_string()));
    }

    Ok(())
}

/// Validate an API base URL.
pub fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| Error::ConfigValidation {
        field: field.to_string(),
        message: format!("'{}' is not a valid URL: {}", value, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Validate the navigation depth bound.
pub fn validate_max_depth(depth: usize) -> Result<()> {
    if depth == 0 || depth > MAX_NAVIGATION_DEPTH {
        return Err(Error::ConfigValidation {
            field: "navigation.max_depth".to_string(),
            message: format!(
                "Depth must be between 1 and {} (got {})",
                MAX_NAVIGATION_DEPTH, depth
            ),
        });
    }

    Ok(())
}

/// Validate a channel slug given with `--channel`.
pub fn validate_slug(slug: &str) -> Result<()> {
    let slug_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").unwrap();

    if !slug_pattern.is_match(slug) {
        return Err(Error::ConfigValidation {
            field: "channel".to_string(),
            message: format!(
                "Channel slug '{}' may only contain letters, digits, dots, hyphens and underscores",
                slug
            ),
        });
    }

    Ok(())
}

fn validate_not_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }
    Ok(())
}
