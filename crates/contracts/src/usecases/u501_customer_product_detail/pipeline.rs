//! Sequential async pipeline: case -> contact -> pricing.
//!
//! Each step takes the previous step's output. A failed step ends the run;
//! later steps are never called.

use super::ports::{PricingFormatter, RecordFetcher};
use super::stages::{CaseStage, ContactStage, PricingStage, StageEvent};
use super::state::DetailState;
use crate::domain::a001_case::aggregate::CaseRecord;
use crate::domain::a002_contact::aggregate::ContactRecord;
use crate::shared::config::FieldConfig;
use crate::shared::error::FetchError;

pub async fn resolve_case<F>(fetcher: &F, fields: &FieldConfig, case_id: &str) -> CaseStage
where
    F: RecordFetcher + ?Sized,
{
    let case_id = case_id.trim();
    if case_id.is_empty() {
        return Err(FetchError::InvalidInput("case id is empty".to_string()));
    }
    let record = fetcher.fetch_record(case_id, &fields.case_fields()).await?;
    Ok(CaseRecord::from_record(&record, fields))
}

pub async fn resolve_contact<F>(fetcher: &F, fields: &FieldConfig, contact_id: &str) -> ContactStage
where
    F: RecordFetcher + ?Sized,
{
    let record = fetcher
        .fetch_record(contact_id, &fields.contact_fields())
        .await?;
    Ok(ContactRecord::from_record(&record, fields))
}

pub async fn resolve_pricing<P>(formatter: &P, contact: &ContactRecord) -> PricingStage
where
    P: PricingFormatter + ?Sized,
{
    formatter
        .format_pricing(contact.home_country.as_deref(), contact.product.as_deref())
        .await
}

/// Run the pipeline for `case_id`, handing each stage result to `sink`.
///
/// `sink` returns `false` to stop the run (e.g. the result was stale).
pub async fn drive<F, P, S>(
    fetcher: &F,
    formatter: &P,
    fields: &FieldConfig,
    case_id: &str,
    mut sink: S,
) where
    F: RecordFetcher + ?Sized,
    P: PricingFormatter + ?Sized,
    S: FnMut(StageEvent) -> bool,
{
    log::debug!("Loading product detail for case {}", case_id);

    let case = resolve_case(fetcher, fields, case_id).await;
    let contact_id = case.as_ref().ok().and_then(|c| c.contact_id.clone());
    if !sink(StageEvent::Case(case)) {
        return;
    }
    let Some(contact_id) = contact_id else {
        log::debug!("Case {} has no contact, nothing to price", case_id);
        return;
    };

    let contact = resolve_contact(fetcher, fields, &contact_id).await;
    let loaded = contact.as_ref().ok().cloned();
    if !sink(StageEvent::Contact(contact)) {
        return;
    }
    let Some(contact) = loaded else {
        return;
    };

    let pricing = resolve_pricing(formatter, &contact).await;
    sink(StageEvent::Pricing(pricing));
}

/// Run the whole pipeline against a fresh state and return it.
pub async fn run_pipeline<F, P>(
    fetcher: &F,
    formatter: &P,
    fields: &FieldConfig,
    case_id: &str,
) -> DetailState
where
    F: RecordFetcher + ?Sized,
    P: PricingFormatter + ?Sized,
{
    let mut state = DetailState::new();
    let token = state.begin(case_id);
    drive(fetcher, formatter, fields, case_id, |event| {
        state.apply(&token, event)
    })
    .await;
    state
}
