use crate::domain::a001_case::aggregate::CaseRecord;
use crate::domain::a002_contact::aggregate::ContactRecord;
use crate::projections::p900_service_pricing::PricingResult;
use crate::shared::error::FetchError;
use std::fmt;
use thiserror::Error;

pub type CaseStage = Result<CaseRecord, FetchError>;
pub type ContactStage = Result<ContactRecord, FetchError>;
pub type PricingStage = Result<PricingResult, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Case,
    Contact,
    Pricing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Case => "case record",
            Stage::Contact => "contact record",
            Stage::Pricing => "formatted pricing data",
        })
    }
}

/// Upstream failure attributed to the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error loading {stage}: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: FetchError,
}

/// Result of one pipeline stage, delivered to the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum StageEvent {
    Case(CaseStage),
    Contact(ContactStage),
    Pricing(PricingStage),
}

impl StageEvent {
    pub fn stage(&self) -> Stage {
        match self {
            StageEvent::Case(_) => Stage::Case,
            StageEvent::Contact(_) => Stage::Contact,
            StageEvent::Pricing(_) => Stage::Pricing,
        }
    }
}

/// Latest outcome of each stage for the current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageOutcomes {
    pub case: Option<CaseStage>,
    pub contact: Option<ContactStage>,
    pub pricing: Option<PricingStage>,
}

fn stage_error<T>(stage: Stage, outcome: &Option<Result<T, FetchError>>) -> Option<StageError> {
    match outcome {
        Some(Err(source)) => Some(StageError {
            stage,
            source: source.clone(),
        }),
        _ => None,
    }
}

impl StageOutcomes {
    /// Error of the earliest failed stage, if any.
    pub fn error(&self) -> Option<StageError> {
        stage_error(Stage::Case, &self.case)
            .or_else(|| stage_error(Stage::Contact, &self.contact))
            .or_else(|| stage_error(Stage::Pricing, &self.pricing))
    }

    /// Furthest stage that has reported.
    pub fn phase(&self) -> DetailPhase {
        match (&self.case, &self.contact, &self.pricing) {
            (_, _, Some(Ok(_))) => DetailPhase::PricingLoaded,
            (_, _, Some(Err(_))) => DetailPhase::PricingError,
            (_, Some(Ok(_)), None) => DetailPhase::ContactLoaded,
            (_, Some(Err(_)), None) => DetailPhase::ContactError,
            (Some(Ok(_)), None, None) => DetailPhase::CaseLoaded,
            (Some(Err(_)), None, None) => DetailPhase::CaseError,
            (None, None, None) => DetailPhase::Initial,
        }
    }

    /// Overall status of the view.
    pub fn status(&self) -> DetailStatus {
        if let Some(err) = self.error() {
            return DetailStatus::Failed(err);
        }
        match (&self.case, &self.pricing) {
            (_, Some(Ok(_))) => DetailStatus::Ready,
            (Some(Ok(case)), None) if case.contact_id.is_none() => DetailStatus::NoContact,
            _ => DetailStatus::Loading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Initial,
    CaseLoaded,
    CaseError,
    ContactLoaded,
    ContactError,
    PricingLoaded,
    PricingError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailStatus {
    Loading,
    /// The case has no related contact; nothing to price.
    NoContact,
    Ready,
    Failed(StageError),
}
