//! Locale-aware ordering for display labels.
//!
//! Root-locale ICU collation at default (tertiary) strength, the ordering a
//! browser applies in `String.prototype.localeCompare`.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                log::error!("Root collator unavailable, falling back to code-point order: {}", e);
                None
            }
        };
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
