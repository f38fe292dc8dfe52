//! Inline failure alert.

use leptos::prelude::*;

/// Red inline alert used for upload and publish failures.
#[component]
pub fn Alert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert--failure" role="alert">
            {message}
        </div>
    }
}
