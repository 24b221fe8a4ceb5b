use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

/// Formatted price per service type, as returned by the pricing formatter.
///
/// `None` means the formatter had no price for that service type. Entries
/// keep the order in which the formatter sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingResult(IndexMap<String, Option<String>>);

impl PricingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, service_type: &str) -> Option<Option<&str>> {
        self.0.get(service_type).map(|v| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl FromIterator<(String, Option<String>)> for PricingResult {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One line of the pricing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Positional id (`row-<n>`); not stable across rebuilds.
    pub id: String,
    pub service_type: String,
    pub formatted_amount: String,
}
