//! Dashboard shell: sidebar plus the panel selected by `?tab=`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active tab is derived from the router's query map on every change,
//! never stored separately. Unknown or missing values mount no panel.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::dash_panels::{DashAlbums, DashPosts, DashProfile};
use crate::components::dash_sidebar::DashSidebar;
use crate::state::tab::{DashTab, TAB_QUERY_KEY};

/// Dashboard page at `/dashboard`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let query = use_query_map();
    let tab = Memo::new(move |_| query.with(|q| DashTab::from_query(q.get(TAB_QUERY_KEY).as_deref())));

    view! {
        <div class="dashboard">
            <aside class="dashboard__sidebar">
                <DashSidebar active=tab/>
            </aside>
            <main class="dashboard__panel">
                {move || match tab.get() {
                    Some(DashTab::Profile) => view! { <DashProfile/> }.into_any(),
                    Some(DashTab::Posts) => view! { <DashPosts/> }.into_any(),
                    Some(DashTab::Albums) => view! { <DashAlbums/> }.into_any(),
                    None => ().into_any(),
                }}
            </main>
        </div>
    }
}
