//! Rich-text editor for post content.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `contenteditable` surface plus a formatting toolbar. Formatting is
//! applied with the browser's editing commands and the serialized HTML is
//! reported to the owner on every change, so the page never reads the DOM.
//!
//! TRADE-OFFS
//! ==========
//! `document.execCommand` is deprecated but still the only cross-browser
//! primitive for selection-aware formatting without a JS editor bundle.

#[cfg(test)]
#[path = "rich_text_editor_test.rs"]
mod rich_text_editor_test;

use leptos::prelude::*;

/// Toolbar actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Heading,
    Quote,
    BulletList,
    NumberedList,
    Link,
    ClearFormatting,
}

impl FormatCommand {
    pub const TOOLBAR: [Self; 9] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Heading,
        Self::Quote,
        Self::BulletList,
        Self::NumberedList,
        Self::Link,
        Self::ClearFormatting,
    ];

    /// Browser editing command name and fixed argument.
    pub fn exec_args(self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Bold => ("bold", None),
            Self::Italic => ("italic", None),
            Self::Underline => ("underline", None),
            Self::Heading => ("formatBlock", Some("h2")),
            Self::Quote => ("formatBlock", Some("blockquote")),
            Self::BulletList => ("insertUnorderedList", None),
            Self::NumberedList => ("insertOrderedList", None),
            Self::Link => ("createLink", None),
            Self::ClearFormatting => ("removeFormat", None),
        }
    }

    /// Whether the command needs a value from the user before running.
    pub fn needs_url(self) -> bool {
        matches!(self, Self::Link)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Underline => "U",
            Self::Heading => "H",
            Self::Quote => "❝",
            Self::BulletList => "•",
            Self::NumberedList => "1.",
            Self::Link => "🔗",
            Self::ClearFormatting => "⌫",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::Heading => "Heading",
            Self::Quote => "Quote",
            Self::BulletList => "Bulleted list",
            Self::NumberedList => "Numbered list",
            Self::Link => "Insert link",
            Self::ClearFormatting => "Clear formatting",
        }
    }
}

/// Trim a user-entered link and reject empty or script URLs.
pub fn normalize_link(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() || url.to_ascii_lowercase().starts_with("javascript:") {
        return None;
    }
    Some(url.to_owned())
}

/// Editable rich-text area reporting HTML through `on_change`.
#[component]
pub fn RichTextEditor(
    #[prop(into)] placeholder: String,
    on_change: Callback<String>,
) -> impl IntoView {
    let surface = NodeRef::<leptos::html::Div>::new();

    let emit = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = surface.get_untracked() {
                on_change.run(el.inner_html());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
        }
    };

    let run_command = move |command: FormatCommand| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = surface.get_untracked() {
                let _ = el.focus();
            }
            apply_command(command);
            emit();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = command;
        }
    };

    view! {
        <div class="rich-text">
            <div class="rich-text__toolbar" role="toolbar">
                {FormatCommand::TOOLBAR
                    .into_iter()
                    .map(|command| {
                        view! {
                            <button
                                type="button"
                                class="rich-text__button"
                                title=command.title()
                                aria-label=command.title()
                                on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                    ev.prevent_default();
                                    run_command(command);
                                }
                            >
                                {command.glyph()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="rich-text__surface"
                contenteditable="true"
                role="textbox"
                aria-multiline="true"
                data-placeholder=placeholder
                node_ref=surface
                on:input=move |_| emit()
                on:blur=move |_| emit()
            ></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn apply_command(command: FormatCommand) {
    use wasm_bindgen::JsCast as _;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(doc) = window.document().and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok()) else {
        return;
    };
    let (name, fixed) = command.exec_args();
    let value = if command.needs_url() {
        let entered = window.prompt_with_message("Link URL").ok().flatten().unwrap_or_default();
        match normalize_link(&entered) {
            Some(url) => url,
            None => return,
        }
    } else {
        fixed.unwrap_or_default().to_owned()
    };
    if let Err(e) = doc.exec_command_with_show_ui_and_value(name, false, &value) {
        log::debug!("editor command {name} failed: {e:?}");
    }
}
