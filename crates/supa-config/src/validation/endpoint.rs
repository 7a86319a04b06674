//! Validation for the `[endpoint]` section.

use crate::schema::SupaConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &SupaConfig) {
    let endpoint = &config.endpoint;

    validate_not_blank(errors, "endpoint.model", &endpoint.model);
    validate_not_blank(errors, "endpoint.base_url", &endpoint.base_url);

    if !endpoint.base_url.trim().is_empty()
        && !endpoint.base_url.starts_with("http://")
        && !endpoint.base_url.starts_with("https://")
    {
        errors.push(format!(
            "endpoint.base_url = {:?} must start with http:// or https://",
            endpoint.base_url
        ));
    }

    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        300,
    );
    validate_range(
        errors,
        "endpoint.idle_timeout_secs",
        endpoint.idle_timeout_secs,
        0,
        3600,
    );
    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        endpoint.request_timeout_secs,
        0,
        3600,
    );
}
