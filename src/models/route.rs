//! Hash-based routing for the application views.

use crate::utils::dom;

/// Application routes for hash-based navigation.
/// URL format: `#/documents`, `#/trash`, `#/calendar`, `#/charts`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    /// Dashboard home: `#/` or empty hash.
    #[default]
    Dashboard,
    Documents,
    Trash,
    Calendar,
    Charts,
}

impl AppRoute {
    /// Parse a URL hash into a route. Unknown paths land on the dashboard.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        match path {
            "documents" => Self::Documents,
            "trash" => Self::Trash,
            "calendar" => Self::Calendar,
            "charts" => Self::Charts,
            _ => Self::Dashboard,
        }
    }

    /// Convert a route to its URL hash.
    pub fn to_hash(&self) -> &'static str {
        match self {
            Self::Dashboard => "#/",
            Self::Documents => "#/documents",
            Self::Trash => "#/trash",
            Self::Calendar => "#/calendar",
            Self::Charts => "#/charts",
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route. Setting the hash fires `hashchange`, which
    /// the router listens to, so the route signal updates itself.
    pub fn push(&self) {
        dom::set_hash(self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_hash("#/documents"), AppRoute::Documents);
        assert_eq!(AppRoute::from_hash("#/trash"), AppRoute::Trash);
        assert_eq!(AppRoute::from_hash("#/calendar"), AppRoute::Calendar);
        assert_eq!(AppRoute::from_hash("#/charts"), AppRoute::Charts);
        // Unknown paths fall back to the dashboard
        assert_eq!(AppRoute::from_hash("#/nope"), AppRoute::Dashboard);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Dashboard.to_hash(), "#/");
        assert_eq!(AppRoute::Documents.to_hash(), "#/documents");
        assert_eq!(AppRoute::Trash.to_hash(), "#/trash");
    }

    #[test]
    fn test_round_trip() {
        for route in [
            AppRoute::Dashboard,
            AppRoute::Documents,
            AppRoute::Trash,
            AppRoute::Calendar,
            AppRoute::Charts,
        ] {
            assert_eq!(AppRoute::from_hash(route.to_hash()), route);
        }
    }
}
