use crate::shared::config::FieldConfig;
use crate::shared::record::RecordData;
use serde::{Deserialize, Serialize};

/// Contact linked to a case; carries the inputs of the pricing lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    pub product: Option<String>,
    #[serde(rename = "homeCountry")]
    pub home_country: Option<String>,
}

impl ContactRecord {
    /// Attribute values are kept as delivered, empty strings included.
    pub fn from_record(record: &RecordData, fields: &FieldConfig) -> Self {
        Self {
            id: record.id.clone(),
            product: record.field_value(&fields.contact_product),
            home_country: record.field_value(&fields.contact_home_country),
        }
    }
}
