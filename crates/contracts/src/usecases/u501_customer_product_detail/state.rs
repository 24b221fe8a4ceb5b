use super::stages::{
    CaseStage, ContactStage, DetailPhase, DetailStatus, PricingStage, StageError, StageEvent,
    StageOutcomes,
};
use crate::domain::a002_contact::aggregate::ContactRecord;
use crate::projections::p900_service_pricing::{build_table_rows, PricingResult, TableRow};

/// Identifies one pipeline run; events carrying another token are stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunToken {
    case_id: String,
    revision: u64,
}

impl RunToken {
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// State of the product detail view for one case.
///
/// Mutated only through [`DetailState::begin`] and [`DetailState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    case_id: Option<String>,
    revision: u64,
    contact_id: Option<String>,
    contact: Option<ContactRecord>,
    pricing: PricingResult,
    rows: Vec<TableRow>,
    is_loading: bool,
    outcomes: StageOutcomes,
}

impl Default for DetailState {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailState {
    pub fn new() -> Self {
        Self {
            case_id: None,
            revision: 0,
            contact_id: None,
            contact: None,
            pricing: PricingResult::new(),
            rows: Vec::new(),
            is_loading: true,
            outcomes: StageOutcomes::default(),
        }
    }

    /// Start a new run for `case_id`, discarding everything from earlier runs.
    pub fn begin(&mut self, case_id: impl Into<String>) -> RunToken {
        let revision = self.revision + 1;
        let case_id = case_id.into();
        *self = Self {
            case_id: Some(case_id.clone()),
            revision,
            ..Self::new()
        };
        RunToken { case_id, revision }
    }

    pub fn is_current(&self, token: &RunToken) -> bool {
        self.revision == token.revision && self.case_id.as_deref() == Some(token.case_id.as_str())
    }

    /// Apply a stage result. Returns `false` when the token is stale and the
    /// event was dropped.
    pub fn apply(&mut self, token: &RunToken, event: StageEvent) -> bool {
        if !self.is_current(token) {
            log::debug!(
                "Discarding stale {} result for case {} (revision {})",
                event.stage(),
                token.case_id,
                token.revision
            );
            return false;
        }

        let stage = event.stage();
        match event {
            StageEvent::Case(result) => self.apply_case(result),
            StageEvent::Contact(result) => self.apply_contact(result),
            StageEvent::Pricing(result) => self.apply_pricing(result),
        }
        if let Some(err) = self.outcomes.error().filter(|e| e.stage == stage) {
            log::error!("{}", err);
        }
        true
    }

    fn apply_case(&mut self, result: CaseStage) {
        match &result {
            Ok(case) => {
                self.contact_id = case.contact_id.clone();
                if self.contact_id.is_none() {
                    // nothing further will arrive for this run
                    self.is_loading = false;
                }
            }
            Err(_) => {
                self.contact_id = None;
                self.is_loading = false;
            }
        }
        self.outcomes.case = Some(result);
    }

    fn apply_contact(&mut self, result: ContactStage) {
        match &result {
            Ok(contact) => self.contact = Some(contact.clone()),
            Err(_) => {
                self.contact = None;
                self.is_loading = false;
                self.rebuild_table();
            }
        }
        self.outcomes.contact = Some(result);
    }

    fn apply_pricing(&mut self, result: PricingStage) {
        let failed = result.is_err();
        self.pricing = result.as_ref().cloned().unwrap_or_default();
        self.outcomes.pricing = Some(result);
        self.rebuild_table();
        if failed {
            self.is_loading = false;
        }
    }

    /// Replace the table rows from the current pricing mapping.
    ///
    /// Rows are only produced once both the contact id and the contact data
    /// are present. Runs synchronously start to finish, so the loading flag
    /// is never observed in its intermediate state.
    pub fn rebuild_table(&mut self) {
        if self.contact_id.is_none() || self.contact.is_none() {
            self.rows = Vec::new();
            return;
        }

        self.is_loading = true;
        self.rows = build_table_rows(&self.pricing);
        self.is_loading = false;
    }

    pub fn case_id(&self) -> Option<&str> {
        self.case_id.as_deref()
    }

    pub fn contact_id(&self) -> Option<&str> {
        self.contact_id.as_deref()
    }

    pub fn contact(&self) -> Option<&ContactRecord> {
        self.contact.as_ref()
    }

    pub fn pricing(&self) -> &PricingResult {
        &self.pricing
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn outcomes(&self) -> &StageOutcomes {
        &self.outcomes
    }

    pub fn error(&self) -> Option<StageError> {
        self.outcomes.error()
    }

    pub fn phase(&self) -> DetailPhase {
        self.outcomes.phase()
    }

    pub fn status(&self) -> DetailStatus {
        self.outcomes.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_case::aggregate::CaseRecord;
    use crate::shared::error::FetchError;
    use crate::usecases::u501_customer_product_detail::stages::Stage;

    fn case_event(contact_id: Option<&str>) -> StageEvent {
        StageEvent::Case(Ok(CaseRecord {
            id: "500A".into(),
            contact_id: contact_id.map(str::to_string),
        }))
    }

    fn contact_event() -> StageEvent {
        StageEvent::Contact(Ok(ContactRecord {
            id: "003B".into(),
            product: Some("Washer".into()),
            home_country: Some("DE".into()),
        }))
    }

    fn pricing_event(entries: &[(&str, Option<&str>)]) -> StageEvent {
        StageEvent::Pricing(Ok(entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()))
    }

    fn loaded_state() -> (DetailState, RunToken) {
        let mut state = DetailState::new();
        let token = state.begin("500A");
        assert!(state.apply(&token, case_event(Some("003B"))));
        assert!(state.apply(&token, contact_event()));
        assert!(state.apply(
            &token,
            pricing_event(&[("Repair", Some("")), ("Install", Some("$50"))])
        ));
        (state, token)
    }

    #[test]
    fn test_initial_state() {
        let state = DetailState::new();
        assert!(state.is_loading());
        assert!(state.rows().is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(state.phase(), DetailPhase::Initial);
    }

    #[test]
    fn test_full_load_builds_sorted_rows() {
        let (state, _) = loaded_state();
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.phase(), DetailPhase::PricingLoaded);
        assert_eq!(state.status(), DetailStatus::Ready);

        let rows: Vec<(&str, &str)> = state
            .rows()
            .iter()
            .map(|r| (r.service_type.as_str(), r.formatted_amount.as_str()))
            .collect();
        assert_eq!(rows, vec![("Install", "$50"), ("Repair", "N/A")]);
    }

    #[test]
    fn test_case_error_stops_loading() {
        let mut state = DetailState::new();
        let token = state.begin("500A");
        state.apply(&token, StageEvent::Case(Err(FetchError::NotFound("500A".into()))));

        assert!(!state.is_loading());
        assert!(state.rows().is_empty());
        assert_eq!(state.contact_id(), None);
        assert_eq!(state.phase(), DetailPhase::CaseError);
        let err = state.error().unwrap();
        assert_eq!(err.stage, Stage::Case);
        assert_eq!(err.source, FetchError::NotFound("500A".into()));
    }

    #[test]
    fn test_contact_error_clears_contact() {
        let mut state = DetailState::new();
        let token = state.begin("500A");
        state.apply(&token, case_event(Some("003B")));
        assert!(state.is_loading());
        state.apply(&token, StageEvent::Contact(Err(FetchError::network("reset"))));

        assert!(!state.is_loading());
        assert_eq!(state.contact(), None);
        assert!(state.rows().is_empty());
        assert_eq!(state.phase(), DetailPhase::ContactError);
        assert_eq!(state.error().unwrap().stage, Stage::Contact);
    }

    #[test]
    fn test_pricing_error_after_success_resets_table() {
        let (mut state, token) = loaded_state();
        assert_eq!(state.rows().len(), 2);

        state.apply(
            &token,
            StageEvent::Pricing(Err(FetchError::Status {
                status: 500,
                body: "formatter down".into(),
            })),
        );
        assert!(state.rows().is_empty());
        assert!(state.pricing().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.phase(), DetailPhase::PricingError);
        assert_eq!(state.error().unwrap().stage, Stage::Pricing);
    }

    #[test]
    fn test_pricing_success_clears_previous_pricing_error() {
        let (mut state, token) = loaded_state();
        state.apply(&token, StageEvent::Pricing(Err(FetchError::network("offline"))));
        assert!(state.error().is_some());

        state.apply(&token, pricing_event(&[("Delivery", Some("$5"))]));
        assert_eq!(state.error(), None);
        assert_eq!(state.rows().len(), 1);
    }

    #[test]
    fn test_empty_mapping_yields_empty_table_without_error() {
        let mut state = DetailState::new();
        let token = state.begin("500A");
        state.apply(&token, case_event(Some("003B")));
        state.apply(&token, contact_event());
        state.apply(&token, pricing_event(&[]));

        assert!(state.rows().is_empty());
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());
        assert_eq!(state.status(), DetailStatus::Ready);
    }

    #[test]
    fn test_no_contact_id_ignores_stale_pricing() {
        let mut state = DetailState::new();
        let token = state.begin("500A");
        state.apply(&token, pricing_event(&[("Repair", Some("$10"))]));
        assert!(state.rows().is_empty());
        assert_eq!(state.pricing().len(), 1);

        state.rebuild_table();
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_case_without_contact_finishes() {
        let mut state = DetailState::new();
        let token = state.begin("500A");
        state.apply(&token, case_event(None));

        assert!(!state.is_loading());
        assert!(state.rows().is_empty());
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), DetailStatus::NoContact);
    }

    #[test]
    fn test_rebuild_twice_is_identical() {
        let (mut state, _) = loaded_state();
        let first = state.rows().to_vec();
        state.rebuild_table();
        assert_eq!(state.rows(), first.as_slice());
    }

    #[test]
    fn test_stale_events_are_dropped() {
        let mut state = DetailState::new();
        let old = state.begin("500A");
        let current = state.begin("500Z");
        assert_ne!(old, current);
        assert!(!state.is_current(&old));

        assert!(!state.apply(&old, case_event(Some("003B"))));
        assert_eq!(state.contact_id(), None);
        assert_eq!(state.phase(), DetailPhase::Initial);

        assert!(state.apply(&current, case_event(Some("003Y"))));
        assert_eq!(state.contact_id(), Some("003Y"));
    }

    #[test]
    fn test_begin_same_case_again_resets() {
        let (mut state, old) = loaded_state();
        let token = state.begin("500A");
        assert_eq!(token.case_id(), "500A");
        assert_eq!(token.revision(), old.revision() + 1);
        assert!(state.rows().is_empty());
        assert!(state.is_loading());
        assert!(!state.apply(&old, contact_event()));
    }
}
