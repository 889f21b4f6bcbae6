//! Identity gate - decides what the landing screen shows for a session

use marquee_domain::SessionUser;

use crate::application::services::IdentitySnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Loading,
    Error(String),
    RedirectToMovies,
    ShowProfile(SessionUser),
    Login { login_url: String },
}

/// Map the current identity snapshot to what the screen should do.
///
/// `on_landing` is true on the `/` route, where a signed-in user is sent on
/// to the movie list instead of being shown their profile.
pub fn gate(snapshot: &IdentitySnapshot, on_landing: bool, login_url: &str) -> GateOutcome {
    if snapshot.is_loading {
        return GateOutcome::Loading;
    }
    if let Some(error) = &snapshot.error {
        return GateOutcome::Error(error.clone());
    }
    match &snapshot.user {
        Some(_) if on_landing => GateOutcome::RedirectToMovies,
        Some(user) => GateOutcome::ShowProfile(user.clone()),
        None => GateOutcome::Login {
            login_url: login_url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN: &str = "http://localhost:3000/api/auth/login";

    fn ada() -> SessionUser {
        SessionUser {
            name: "Ada".into(),
            picture: None,
            email: Some("ada@example.com".into()),
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let snapshot = IdentitySnapshot {
            user: Some(ada()),
            error: Some("boom".into()),
            is_loading: true,
        };
        assert_eq!(gate(&snapshot, true, LOGIN), GateOutcome::Loading);
    }

    #[test]
    fn error_is_shown_before_user() {
        let snapshot = IdentitySnapshot {
            user: Some(ada()),
            error: Some("boom".into()),
            is_loading: false,
        };
        assert_eq!(gate(&snapshot, true, LOGIN), GateOutcome::Error("boom".into()));
    }

    #[test]
    fn signed_in_user_is_redirected_from_landing() {
        let snapshot = IdentitySnapshot {
            user: Some(ada()),
            ..IdentitySnapshot::default()
        };
        assert_eq!(gate(&snapshot, true, LOGIN), GateOutcome::RedirectToMovies);
        assert_eq!(gate(&snapshot, false, LOGIN), GateOutcome::ShowProfile(ada()));
    }

    #[test]
    fn anonymous_session_gets_login_link() {
        assert_eq!(
            gate(&IdentitySnapshot::default(), true, LOGIN),
            GateOutcome::Login {
                login_url: LOGIN.into()
            }
        );
    }
}
