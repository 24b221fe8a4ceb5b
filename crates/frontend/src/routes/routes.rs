use crate::usecases::u501_customer_product_detail::CustomerProductDetail;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Case page: the case id comes from the host console URL.
#[component]
fn CasePage() -> impl IntoView {
    let params = use_params_map();
    let case_id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));

    view! { <CustomerProductDetail case_id=case_id /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page">"Open a case to see product pricing."</div> }>
                <Route path=path!("/cases/:id") view=CasePage />
            </Routes>
        </Router>
    }
}
