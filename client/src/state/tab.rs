//! Dashboard tab selection derived from the `tab` query parameter.
//!
//! DESIGN
//! ======
//! The URL is the single source of truth; the dashboard derives the active
//! tab from the query string instead of mirroring it into its own state.

#[cfg(test)]
#[path = "tab_test.rs"]
mod tab_test;

/// Query parameter that selects the dashboard panel.
pub const TAB_QUERY_KEY: &str = "tab";

/// Dashboard panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashTab {
    Profile,
    Posts,
    Albums,
}

impl DashTab {
    /// Sidebar order.
    pub const ALL: [Self; 3] = [Self::Profile, Self::Posts, Self::Albums];

    /// Map a raw query value to a tab. Missing or unknown values select nothing.
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        match raw? {
            "profile" => Some(Self::Profile),
            "posts" => Some(Self::Posts),
            "albums" => Some(Self::Albums),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Posts => "posts",
            Self::Albums => "albums",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Posts => "Posts",
            Self::Albums => "Albums",
        }
    }

    /// Relative link that selects this tab on the dashboard.
    pub fn href(self) -> String {
        format!("/dashboard?{TAB_QUERY_KEY}={}", self.as_str())
    }
}
