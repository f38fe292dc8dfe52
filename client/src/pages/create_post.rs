//! Post composer: title, author, rich-text content, and a cover image.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selecting a file starts an upload immediately; the resolved download URL
//! lands in the draft when the store confirms completion. Submitting posts
//! whatever the draft holds at that instant, so a publish during an upload
//! simply goes out without an image.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::components::progress_ring::ProgressRing;
use crate::components::rich_text_editor::RichTextEditor;
use crate::net::storage::{StoreHandle, UploadTask};
use crate::state::draft::DraftPost;
use crate::state::publish::PublishState;
use crate::state::upload::UploadState;

/// Composer page at `/create-post`.
#[component]
pub fn CreatePostPage() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let draft = RwSignal::new(DraftPost::default());
    let upload = RwSignal::new(UploadState::default());
    let publish = RwSignal::new(PublishState::default());
    let running = StoredValue::new_local(None::<UploadTask>);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = crate::net::storage::SelectedFile::from_file(file);
            upload_image(&store, &file, upload, draft, running);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &store, running);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        if !publish.try_update(|p| p.submit(&current)).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::create_post(&current).await;
                if let Some(target) = publish.try_update(|p| p.finish(outcome)).flatten() {
                    navigate(&target, NavigateOptions::default());
                }
            });
        }
    };

    let on_content = Callback::new(move |html: String| draft.update(|d| d.set_content(html)));

    view! {
        <div class="create-post">
            <h1 class="create-post__heading">"Create a post"</h1>
            <form class="create-post__form" on:submit=on_submit>
                <div class="create-post__row">
                    <input
                        class="create-post__input create-post__input--title"
                        type="text"
                        id="title"
                        placeholder="Title"
                        required
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
                    />
                    <input
                        class="create-post__input"
                        type="text"
                        id="author"
                        placeholder="Author"
                        required
                        prop:value=move || draft.with(|d| d.author.clone())
                        on:input=move |ev| draft.update(|d| d.set_author(event_target_value(&ev)))
                    />
                </div>
                <div class="create-post__upload">
                    <input class="create-post__file" type="file" accept="image/*" on:change=on_file_change/>
                    <Show when=move || upload.with(|u| u.progress().is_some())>
                        <ProgressRing percent=Signal::derive(move || upload.with(UploadState::progress).unwrap_or(0))/>
                    </Show>
                </div>
                {move || upload.with(|u| u.error().map(str::to_owned)).map(|message| view! { <Alert message=message/> })}
                {move || {
                    draft
                        .with(|d| d.image.clone())
                        .map(|src| view! { <img class="create-post__image" src=src alt="upload"/> })
                }}
                <RichTextEditor placeholder="Write something..." on_change=on_content/>
                <button class="btn create-post__publish" type="submit" disabled=move || publish.with(|p| p.pending)>
                    "Publish"
                </button>
                {move || publish.with(|p| p.error.clone()).map(|message| view! { <Alert message=message/> })}
            </form>
        </div>
    }
}

/// Cancel any in-flight upload and start a new one for `file`.
#[cfg(feature = "hydrate")]
fn upload_image(
    store: &StoreHandle,
    file: &crate::net::storage::SelectedFile,
    upload: RwSignal<UploadState>,
    draft: RwSignal<DraftPost>,
    running: StoredValue<Option<UploadTask>, LocalStorage>,
) {
    use std::rc::Rc;

    use crate::state::upload::start_upload;

    if let Some(previous) = running.try_update_value(Option::take).flatten() {
        previous.cancel();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now_ms = js_sys::Date::now() as u64;
    let mut state = upload.get_untracked();
    let task = start_upload(&mut state, store.store(), Some(file), now_ms, |ticket| {
        Rc::new(move |event| {
            let mut next = draft.get_untracked();
            let changed = upload.try_update(|s| s.apply_to_draft(&mut next, ticket, event)).unwrap_or(false);
            if changed {
                draft.set(next);
            }
        })
    });
    upload.set(state);
    running.set_value(task);
}
