//! Customer Product Detail UI Module
//!
//! MVVM layout:
//! - model.rs: HTTP record fetcher and pricing formatter
//! - view_model.rs: signals around the detail state and load commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::{HttpPricingFormatter, HttpRecordFetcher};
pub use view::CustomerProductDetail;
pub use view_model::CustomerProductDetailViewModel;
