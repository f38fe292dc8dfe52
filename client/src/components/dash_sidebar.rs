//! Dashboard sidebar with one link per tab.

#[cfg(test)]
#[path = "dash_sidebar_test.rs"]
mod dash_sidebar_test;

use leptos::prelude::*;

use crate::state::tab::DashTab;

pub(crate) fn sidebar_link_class(is_active: bool) -> &'static str {
    if is_active { "dash-sidebar__link dash-sidebar__link--active" } else { "dash-sidebar__link" }
}

/// Vertical tab list; the entry matching `active` is highlighted.
#[component]
pub fn DashSidebar(#[prop(into)] active: Signal<Option<DashTab>>) -> impl IntoView {
    view! {
        <nav class="dash-sidebar" aria-label="Dashboard">
            <ul class="dash-sidebar__list">
                {DashTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li>
                                <a
                                    href=tab.href()
                                    class=move || sidebar_link_class(active.get() == Some(tab))
                                    aria-current=move || (active.get() == Some(tab)).then_some("page")
                                >
                                    {tab.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
                <li>
                    <a href="/create-post" class="dash-sidebar__link dash-sidebar__link--action">
                        "New post"
                    </a>
                </li>
            </ul>
        </nav>
    }
}
