use super::*;

#[test]
fn profile_panel_is_a_plain_placeholder() {
    let html = view! { <DashProfile/> }.to_html();
    assert!(html.contains("Profile"));
    assert!(!html.contains("<input"));
}

#[test]
fn posts_panel_links_to_composer() {
    let html = view! { <DashPosts/> }.to_html();
    assert!(html.contains(r#"href="/create-post""#));
}
