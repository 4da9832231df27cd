//! Session state and service injection for the UI.

use api::{ApiClient, AuthService, Authentication, LinksService, UserProfile};
use dioxus::prelude::*;

/// The client's in-memory record of who is signed in.
///
/// The token and the profile are either both present or both absent; bundling
/// them in one [`Authentication`] leaves no in-between state to represent.
/// Sign-in replaces the state wholesale, sign-out resets it wholesale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub auth: Option<Authentication>,
}

impl SessionState {
    /// The anonymous session the app starts in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The session for a completed login.
    pub fn authenticated(auth: Authentication) -> Self {
        Self { auth: Some(auth) }
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.token.as_str())
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.auth.as_ref().map(|auth| &auth.user)
    }
}

/// The backend services, sharing one HTTP client.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub links: LinksService,
}

impl Services {
    pub fn new() -> Self {
        let client = ApiClient::new();
        Self {
            auth: AuthService::new(client.clone()),
            links: LinksService::new(client),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the current session.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the backend services provided by [`SessionProvider`].
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provider component that owns the session signal and the service
/// instances. Wrap the app with this component; descendants reach both
/// through context instead of ambient lookup.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(SessionState::anonymous);
    use_context_provider(|| session);
    use_context_provider(Services::new);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use api::UserProfile;

    use super::*;

    fn alice() -> Authentication {
        Authentication {
            token: "abc".to_string(),
            user: UserProfile {
                id: 1,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                first_name: String::new(),
                last_name: String::new(),
            },
        }
    }

    #[test]
    fn starts_anonymous() {
        let session = SessionState::anonymous();
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn login_sets_token_and_user_together() {
        let session = SessionState::authenticated(alice());
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.user().map(|user| user.username.as_str()), Some("alice"));
    }

    #[test]
    fn sign_out_clears_token_and_user_together() {
        let session = SessionState::authenticated(alice());
        assert!(session.is_logged_in());

        let session = SessionState::anonymous();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }
}
