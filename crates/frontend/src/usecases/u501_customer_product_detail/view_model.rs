use super::model::{HttpPricingFormatter, HttpRecordFetcher};
use contracts::projections::p900_service_pricing::TableRow;
use contracts::shared::config::DetailConfig;
use contracts::usecases::u501_customer_product_detail::{drive, DetailState, DetailStatus};
use leptos::prelude::*;

/// ViewModel for the customer product detail panel
#[derive(Clone, Copy)]
pub struct CustomerProductDetailViewModel {
    pub state: RwSignal<DetailState>,
    config: StoredValue<DetailConfig>,
}

impl CustomerProductDetailViewModel {
    pub fn new(config: DetailConfig) -> Self {
        Self {
            state: RwSignal::new(DetailState::new()),
            config: StoredValue::new(config),
        }
    }

    /// Start loading the case; results of any earlier run are dropped.
    pub fn load(&self, case_id: String) {
        let state = self.state;
        let Some(token) = state.try_update(|s| s.begin(case_id.clone())) else {
            return;
        };
        let config = self.config.get_value();

        wasm_bindgen_futures::spawn_local(async move {
            let fetcher = HttpRecordFetcher::new(config.api.clone());
            let formatter = HttpPricingFormatter::new(config.api.clone());
            drive(&fetcher, &formatter, &config.fields, &case_id, |event| {
                state
                    .try_update(|s| s.apply(&token, event))
                    .unwrap_or(false)
            })
            .await;
        });
    }

    /// Re-run the whole pipeline for the current case
    pub fn refresh(&self) {
        let case_id = self
            .state
            .with_untracked(|s| s.case_id().map(str::to_string));
        if let Some(case_id) = case_id {
            self.load(case_id);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|s| s.error().map(|e| e.to_string()))
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.state.with(|s| s.rows().to_vec())
    }

    pub fn has_no_contact(&self) -> bool {
        self.state
            .with(|s| matches!(s.status(), DetailStatus::NoContact))
    }
}
