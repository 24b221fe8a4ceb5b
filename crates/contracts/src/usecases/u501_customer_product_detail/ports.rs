use crate::projections::p900_service_pricing::PricingResult;
use crate::shared::error::FetchError;
use crate::shared::record::{FieldRef, RecordData};
use async_trait::async_trait;

/// Record-retrieval capability.
///
/// Implementations run on the browser event loop, so futures are not `Send`.
#[async_trait(?Send)]
pub trait RecordFetcher {
    async fn fetch_record(
        &self,
        record_id: &str,
        fields: &[FieldRef],
    ) -> Result<RecordData, FetchError>;
}

/// Pricing-format capability: formatted price per service type.
///
/// Both inputs are passed through as found on the contact, absent values
/// included.
#[async_trait(?Send)]
pub trait PricingFormatter {
    async fn format_pricing(
        &self,
        country: Option<&str>,
        product_type: Option<&str>,
    ) -> Result<PricingResult, FetchError>;
}
