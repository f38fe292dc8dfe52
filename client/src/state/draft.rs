//! Draft post owned by the composer screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created when the composer mounts and dropped on navigation. The serialized
//! form of this struct is the exact request body sent to the creation
//! endpoint, so field names match the server's JSON schema.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::Serialize;

/// In-progress, unsaved post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DraftPost {
    pub title: String,
    pub author: String,
    /// Serialized rich-text HTML from the editor.
    pub content: String,
    /// Download URL of the uploaded cover image, once resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Required field left empty by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Title,
    Author,
    Content,
}

impl MissingField {
    /// Inline message shown when publishing is blocked by this field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Title => "Please enter a title",
            Self::Author => "Please enter an author",
            Self::Content => "Please write some content",
        }
    }
}

impl DraftPost {
    pub fn set_title(&mut self, value: String) {
        self.title = value;
    }

    pub fn set_author(&mut self, value: String) {
        self.author = value;
    }

    pub fn set_content(&mut self, value: String) {
        self.content = value;
    }

    pub fn set_image(&mut self, url: String) {
        self.image = Some(url);
    }

    /// First required field that is still empty, in form order.
    pub fn missing_field(&self) -> Option<MissingField> {
        if self.title.trim().is_empty() {
            return Some(MissingField::Title);
        }
        if self.author.trim().is_empty() {
            return Some(MissingField::Author);
        }
        if is_blank_html(&self.content) {
            return Some(MissingField::Content);
        }
        None
    }
}

/// Elements that count as content even without any text.
const MEDIA_TAGS: [&str; 6] = ["img", "video", "audio", "iframe", "embed", "object"];

/// Whether an editor HTML fragment carries no visible content.
///
/// Empty editors still emit markup such as `<p><br></p>`, so tags and
/// non-breaking spaces are ignored. Embedded media counts as content.
pub fn is_blank_html(html: &str) -> bool {
    let mut in_tag = false;
    let mut tag = String::new();
    let mut text = String::new();
    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                if is_media_tag(&tag) {
                    return false;
                }
            }
            _ if !in_tag => text.push(ch),
            _ => tag.push(ch),
        }
    }
    text.replace("&nbsp;", " ").replace('\u{a0}', " ").trim().is_empty()
}

fn is_media_tag(tag: &str) -> bool {
    let name = tag
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    MEDIA_TAGS.iter().any(|media| name.eq_ignore_ascii_case(media))
}
