//! Landing page for a freshly published post.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::tab::DashTab;

/// Page at `/post/:slug`.
#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());
    let back_href = DashTab::Posts.href();

    view! {
        <div class="post-page">
            <h1 class="post-page__heading">"Post published"</h1>
            <p class="post-page__slug">
                "Available at "
                <code>{move || crate::state::publish::post_route(&slug())}</code>
            </p>
            <a class="btn" href=back_href>"Back to posts"</a>
        </div>
    }
}
