//! Session state for the signed-in user.
//!
//! Token storage and refresh are the auth collaborator's job; this type
//! only tracks what the shell needs for display.

/// Session connection state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    SignedOut,
    /// Profile request in flight.
    Loading,
    SignedIn {
        username: String,
    },
}

impl SessionState {
    /// Check if a user profile has been loaded.
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn { .. })
    }

    /// Name shown in the shell header.
    pub fn display_name(&self) -> String {
        match self {
            SessionState::SignedIn { username } => username.clone(),
            SessionState::Loading => "loading...".to_string(),
            SessionState::SignedOut => "guest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_state() {
        let state = SessionState::SignedOut;
        assert!(!state.is_signed_in());
        assert_eq!(state.display_name(), "guest");
    }

    #[test]
    fn test_signed_in_state() {
        let state = SessionState::SignedIn {
            username: "minh".to_string(),
        };
        assert!(state.is_signed_in());
        assert_eq!(state.display_name(), "minh");
    }

    #[test]
    fn test_default() {
        assert_eq!(SessionState::default(), SessionState::SignedOut);
    }
}
