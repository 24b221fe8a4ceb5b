//! API utilities for frontend-backend communication
//!
//! Builds URLs for the record and pricing services from [`ApiConfig`].

use contracts::shared::config::ApiConfig;
use contracts::shared::record::{join_fields, FieldRef};

/// Get the base URL for API requests
///
/// Uses `base_url` from the config when set; otherwise derives it from the
/// current window location and the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base) = config.base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// URL of a single record with the requested fields
///
/// # Example
/// ```text
/// /api/records/500A?fields=Case.ContactId
/// ```
pub fn record_url(config: &ApiConfig, record_id: &str, fields: &[FieldRef]) -> String {
    format!(
        "{}{}/{}?fields={}",
        api_base(config),
        config.record_path,
        urlencoding::encode(record_id),
        urlencoding::encode(&join_fields(fields))
    )
}

/// URL of the pricing formatter; absent inputs are left out of the query.
pub fn pricing_url(config: &ApiConfig, country: Option<&str>, product_type: Option<&str>) -> String {
    let params: Vec<String> = [("country", country), ("productType", product_type)]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, urlencoding::encode(v))))
        .collect();

    let mut url = format!("{}{}", api_base(config), config.pricing_path);
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}
