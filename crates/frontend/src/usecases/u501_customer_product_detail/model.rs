use crate::shared::api_utils::{pricing_url, record_url};
use crate::shared::http::get_json;
use async_trait::async_trait;
use contracts::projections::p900_service_pricing::PricingResult;
use contracts::shared::config::ApiConfig;
use contracts::shared::error::FetchError;
use contracts::shared::record::{FieldRef, RecordData};
use contracts::usecases::u501_customer_product_detail::{PricingFormatter, RecordFetcher};

/// Record service client
pub struct HttpRecordFetcher {
    api: ApiConfig,
}

impl HttpRecordFetcher {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl RecordFetcher for HttpRecordFetcher {
    async fn fetch_record(
        &self,
        record_id: &str,
        fields: &[FieldRef],
    ) -> Result<RecordData, FetchError> {
        let url = record_url(&self.api, record_id, fields);
        get_json(&url, &format!("record {}", record_id)).await
    }
}

/// Pricing formatter client
pub struct HttpPricingFormatter {
    api: ApiConfig,
}

impl HttpPricingFormatter {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl PricingFormatter for HttpPricingFormatter {
    async fn format_pricing(
        &self,
        country: Option<&str>,
        product_type: Option<&str>,
    ) -> Result<PricingResult, FetchError> {
        let url = pricing_url(&self.api, country, product_type);
        get_json(&url, "pricing").await
    }
}
