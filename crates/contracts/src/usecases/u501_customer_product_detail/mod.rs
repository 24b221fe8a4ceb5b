//! Customer product detail: case -> contact -> pricing -> table.
//!
//! - ports.rs: collaborator traits (record fetcher, pricing formatter)
//! - stages.rs: tagged per-stage outcomes and their composition
//! - state.rs: view state machine and table rebuild
//! - pipeline.rs: sequential async pipeline driving the state

pub mod pipeline;
pub mod ports;
pub mod stages;
pub mod state;

pub use pipeline::{drive, resolve_case, resolve_contact, resolve_pricing, run_pipeline};
pub use ports::{PricingFormatter, RecordFetcher};
pub use stages::{
    CaseStage, ContactStage, DetailPhase, DetailStatus, PricingStage, Stage, StageError,
    StageEvent, StageOutcomes,
};
pub use state::{DetailState, RunToken};
