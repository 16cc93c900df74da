use crate::issue::Issue;

pub const NO_ID_MESSAGE: &str = "No issue ID was provided in the URL.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load issue. It may not exist.";

/// What the detail view shows. Exactly one state holds at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Error(String),
    Loaded(Issue),
}

impl DetailState {
    /// Initial state for a route parameter; a blank id is treated as missing.
    pub fn for_route(id: Option<&str>) -> Self {
        match route_id(id) {
            Some(_) => DetailState::Loading,
            None => DetailState::Error(NO_ID_MESSAGE.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DetailState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn issue(&self) -> Option<&Issue> {
        match self {
            DetailState::Loaded(issue) => Some(issue),
            _ => None,
        }
    }
}

/// The issue id carried by a route parameter, exactly as given. Blank parameters carry none.
pub fn route_id(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_starts_in_error_state() {
        assert_eq!(
            DetailState::for_route(None),
            DetailState::Error(NO_ID_MESSAGE.to_string())
        );
        assert_eq!(
            DetailState::for_route(Some("  ")).error(),
            Some(NO_ID_MESSAGE)
        );
    }

    #[test]
    fn present_id_starts_loading() {
        let state = DetailState::for_route(Some("abc"));

        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.issue(), None);
    }

    #[test]
    fn route_id_is_passed_through_unchanged() {
        assert_eq!(route_id(Some(" abc ")), Some(" abc "));
        assert_eq!(route_id(Some("abc")), Some("abc"));
    }

    #[test]
    fn blank_route_id_is_missing() {
        assert_eq!(route_id(Some("")), None);
        assert_eq!(route_id(Some(" \t")), None);
        assert_eq!(route_id(None), None);
    }
}
