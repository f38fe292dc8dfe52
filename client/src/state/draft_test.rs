use super::*;

fn filled() -> DraftPost {
    DraftPost {
        title: "Hello".to_owned(),
        author: "Sam".to_owned(),
        content: "<p>First post</p>".to_owned(),
        image: None,
    }
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn body_without_image_omits_image_key() {
    let body = serde_json::to_value(filled()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "title": "Hello", "author": "Sam", "content": "<p>First post</p>" })
    );
    assert!(body.get("image").is_none());
}

#[test]
fn body_with_image_includes_url() {
    let mut draft = filled();
    draft.set_image("https://cdn.test/a.png".to_owned());
    let body = serde_json::to_value(&draft).unwrap();
    assert_eq!(body["image"], "https://cdn.test/a.png");
}

#[test]
fn body_keeps_unicode_and_markup_verbatim() {
    let mut draft = filled();
    draft.set_title("Café ☕".to_owned());
    draft.set_content("<h2>Ünïcödé</h2><ul><li>x</li></ul>".to_owned());
    let body = serde_json::to_value(&draft).unwrap();
    assert_eq!(body["title"], "Café ☕");
    assert_eq!(body["content"], "<h2>Ünïcödé</h2><ul><li>x</li></ul>");
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn missing_field_none_when_all_required_present() {
    assert_eq!(filled().missing_field(), None);
}

#[test]
fn missing_field_reports_in_form_order() {
    let draft = DraftPost::default();
    assert_eq!(draft.missing_field(), Some(MissingField::Title));

    let mut draft = filled();
    draft.set_author("  ".to_owned());
    assert_eq!(draft.missing_field(), Some(MissingField::Author));

    let mut draft = filled();
    draft.set_content("<p><br></p>".to_owned());
    assert_eq!(draft.missing_field(), Some(MissingField::Content));
}

#[test]
fn image_is_not_required() {
    let draft = filled();
    assert!(draft.image.is_none());
    assert_eq!(draft.missing_field(), None);
}

#[test]
fn missing_field_messages_are_distinct() {
    assert_eq!(MissingField::Title.message(), "Please enter a title");
    assert_eq!(MissingField::Author.message(), "Please enter an author");
    assert_eq!(MissingField::Content.message(), "Please write some content");
}

// =============================================================
// Blank HTML detection
// =============================================================

#[test]
fn is_blank_html_treats_empty_markup_as_blank() {
    assert!(is_blank_html(""));
    assert!(is_blank_html("<p><br></p>"));
    assert!(is_blank_html("<p>&nbsp; </p>"));
    assert!(is_blank_html("<p>\u{a0}</p>"));
}

#[test]
fn is_blank_html_detects_text() {
    assert!(!is_blank_html("<p>a</p>"));
    assert!(!is_blank_html("plain"));
    assert!(!is_blank_html("<p><strong>bold</strong></p>"));
}

#[test]
fn is_blank_html_counts_embedded_media_as_content() {
    assert!(!is_blank_html(r#"<p><img src="data:image/png;base64,AAAA"></p>"#));
    assert!(!is_blank_html(r#"<p><IMG SRC="x.png"/></p>"#));
    assert!(!is_blank_html(r#"<iframe src="https://video.test/embed/1"></iframe>"#));
    assert!(is_blank_html("<p><br/><span></span></p>"));
}

#[test]
fn media_only_content_is_not_missing() {
    let draft = DraftPost { content: r#"<p><img src="data:image/png;base64,AAAA"></p>"#.to_owned(), ..filled() };
    assert_eq!(draft.missing_field(), None);
}
