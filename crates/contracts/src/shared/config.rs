use crate::shared::record::FieldRef;
use anyhow::Context;
use serde::Deserialize;

/// Detail view configuration.
///
/// Every section and key is optional in TOML; missing values come from
/// [`Default`], so an override only lists what it changes.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DetailConfig {
    pub api: ApiConfig,
    pub fields: FieldConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute base URL; when absent the frontend derives it from the page location.
    pub base_url: Option<String>,
    pub port: u16,
    pub record_path: String,
    pub pricing_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: 3000,
            record_path: "/api/records".to_string(),
            pricing_path: "/api/pricing/format".to_string(),
        }
    }
}

/// Schema field references read by the detail view.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub case_contact_id: FieldRef,
    pub contact_product: FieldRef,
    pub contact_home_country: FieldRef,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            case_contact_id: FieldRef::new("Case", "ContactId"),
            contact_product: FieldRef::new("Contact", "Product__c"),
            contact_home_country: FieldRef::new("Contact", "Home_Country__c"),
        }
    }
}

impl FieldConfig {
    pub fn case_fields(&self) -> Vec<FieldRef> {
        vec![self.case_contact_id.clone()]
    }

    pub fn contact_fields(&self) -> Vec<FieldRef> {
        vec![
            self.contact_product.clone(),
            self.contact_home_country.clone(),
        ]
    }
}

impl DetailConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: DetailConfig =
            toml::from_str(contents).context("failed to parse detail view config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (name, path) in [
            ("record_path", &self.api.record_path),
            ("pricing_path", &self.api.pricing_path),
        ] {
            if !path.starts_with('/') {
                anyhow::bail!("api.{} must start with '/', got '{}'", name, path);
            }
        }
        Ok(())
    }
}

/// Load configuration, applying the given TOML override on top of the defaults.
pub fn load_config(overrides: Option<&str>) -> anyhow::Result<DetailConfig> {
    match overrides {
        Some(contents) if !contents.trim().is_empty() => {
            log::info!("Loading detail view config from override");
            DetailConfig::from_toml_str(contents)
        }
        _ => {
            log::info!("Using default configuration");
            Ok(DetailConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetailConfig::default();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.record_path, "/api/records");
        assert_eq!(config.api.pricing_path, "/api/pricing/format");
        assert_eq!(config.fields.case_contact_id.to_string(), "Case.ContactId");
        assert_eq!(
            config.fields.contact_home_country.to_string(),
            "Contact.Home_Country__c"
        );
    }

    #[test]
    fn test_empty_toml_equals_default() {
        assert_eq!(
            DetailConfig::from_toml_str("").unwrap(),
            DetailConfig::default()
        );
        assert_eq!(
            DetailConfig::from_toml_str("[api]\n[fields]\n").unwrap(),
            DetailConfig::default()
        );
    }

    #[test]
    fn test_override_replaces_defaults() {
        let config = load_config(Some(
            r#"
            [api]
            base_url = "https://console.example.com"
            record_path = "/ui-api/records"
            pricing_path = "/apex/pricing"

            [fields]
            case_contact_id = "Case.ContactId"
            contact_product = "Contact.Product_Line__c"
            contact_home_country = "Contact.MailingCountry"
            "#,
        ))
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://console.example.com")
        );
        assert_eq!(config.api.port, 3000);
        assert_eq!(
            config.fields.contact_fields(),
            vec![
                FieldRef::new("Contact", "Product_Line__c"),
                FieldRef::new("Contact", "MailingCountry"),
            ]
        );
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = load_config(Some(
            r#"
            [api]
            port = 8443

            [fields]
            contact_product = "Contact.Product_Line__c"
            "#,
        ))
        .unwrap();
        assert_eq!(config.api.port, 8443);
        assert_eq!(config.api.record_path, "/api/records");
        assert_eq!(
            config.fields.contact_product,
            FieldRef::new("Contact", "Product_Line__c")
        );
        assert_eq!(
            config.fields.case_contact_id,
            FieldConfig::default().case_contact_id
        );
    }

    #[test]
    fn test_blank_override_uses_default() {
        assert_eq!(load_config(Some("  ")).unwrap(), DetailConfig::default());
        assert_eq!(load_config(None).unwrap(), DetailConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad_field = "[fields]\ncase_contact_id = \"ContactId\"\n";
        assert!(DetailConfig::from_toml_str(bad_field).is_err());

        let bad_path = "[api]\nrecord_path = \"api/records\"\n";
        let err = DetailConfig::from_toml_str(bad_path).unwrap_err();
        assert!(err.to_string().contains("record_path"));
    }
}
