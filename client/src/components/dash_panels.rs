//! Dashboard panels mounted by tab.
//!
//! Placeholders for the account screens. Each panel is remounted fresh on
//! every tab switch, so nothing survives leaving a tab.

#[cfg(test)]
#[path = "dash_panels_test.rs"]
mod dash_panels_test;

use leptos::prelude::*;

#[component]
pub fn DashProfile() -> impl IntoView {
    view! {
        <section class="dash-panel dash-panel--profile">
            <h2 class="dash-panel__title">"Profile"</h2>
        </section>
    }
}

#[component]
pub fn DashPosts() -> impl IntoView {
    view! {
        <section class="dash-panel dash-panel--posts">
            <h2 class="dash-panel__title">"Posts"</h2>
            <p class="dash-panel__hint">"Drafts are not saved; publish a post to see it here."</p>
            <a class="btn" href="/create-post">"Create a post"</a>
        </section>
    }
}

#[component]
pub fn DashAlbums() -> impl IntoView {
    let expanded = RwSignal::new(false);
    view! {
        <section class="dash-panel dash-panel--albums">
            <h2 class="dash-panel__title">"Albums"</h2>
            <button class="btn" type="button" on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || if expanded.get() { "Hide albums" } else { "Show albums" }}
            </button>
            <Show when=move || expanded.get()>
                <p class="dash-panel__hint">"Images uploaded with your posts are grouped here."</p>
            </Show>
        </section>
    }
}
