use super::*;

#[test]
fn from_query_maps_known_tabs() {
    assert_eq!(DashTab::from_query(Some("profile")), Some(DashTab::Profile));
    assert_eq!(DashTab::from_query(Some("posts")), Some(DashTab::Posts));
    assert_eq!(DashTab::from_query(Some("albums")), Some(DashTab::Albums));
}

#[test]
fn from_query_unknown_or_missing_selects_nothing() {
    assert_eq!(DashTab::from_query(None), None);
    assert_eq!(DashTab::from_query(Some("")), None);
    assert_eq!(DashTab::from_query(Some("settings")), None);
}

#[test]
fn from_query_is_case_sensitive() {
    assert_eq!(DashTab::from_query(Some("Posts")), None);
}

#[test]
fn at_most_one_tab_matches_any_value() {
    for raw in ["profile", "posts", "albums", "", "unknown"] {
        let matches = DashTab::ALL
            .iter()
            .filter(|tab| DashTab::from_query(Some(raw)) == Some(**tab))
            .count();
        assert!(matches <= 1, "{raw} matched {matches} tabs");
    }
}

#[test]
fn as_str_round_trips_through_from_query() {
    for tab in DashTab::ALL {
        assert_eq!(DashTab::from_query(Some(tab.as_str())), Some(tab));
    }
}

#[test]
fn href_targets_dashboard_query() {
    assert_eq!(DashTab::Posts.href(), "/dashboard?tab=posts");
    assert_eq!(DashTab::Profile.label(), "Profile");
}
