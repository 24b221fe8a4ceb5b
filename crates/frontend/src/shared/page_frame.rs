//! PageFrame: standard root wrapper for a page.
//!
//! Puts two metadata attributes on the root DOM element:
//!   - `id`                : `"{entity}--{category}"`, e.g. `"u501_customer_product_detail--detail"`
//!   - `data-page-category`: the page category, e.g. `"detail"`

use leptos::prelude::*;

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
