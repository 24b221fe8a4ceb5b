use crate::shared::config::FieldConfig;
use crate::shared::record::RecordData;
use serde::{Deserialize, Serialize};

/// Case (support ticket) as seen by the product detail view.
///
/// Read-only: only the relation to the contact is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: String,
    #[serde(rename = "contactId")]
    pub contact_id: Option<String>,
}

impl CaseRecord {
    /// Extract the case from a raw record.
    ///
    /// A blank contact id is treated as absent.
    pub fn from_record(record: &RecordData, fields: &FieldConfig) -> Self {
        let contact_id = record
            .field_value(&fields.case_contact_id)
            .filter(|id| !id.trim().is_empty());
        Self {
            id: record.id.clone(),
            contact_id,
        }
    }
}
