//! Session lifecycle: login, signup, logout, and the recovery flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticator is the only writer of session state and of the
//! persisted credential pair (`id` and `apiKey` cookies plus the
//! Authorization value on [`Api`]). Everything else reads the session
//! through its signal.
//!
//! ERROR HANDLING
//! ==============
//! Propagation is deliberately asymmetric: signup and the password/email
//! flows return `Err(message)` for the page to surface, while
//! `authenticate_with_credentials` swallows failure — callers observe
//! only a session that resolved unauthenticated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{self, Api};
use crate::net::types::{Ack, NewUser, User};
use crate::state::messages::MessageLog;
use crate::state::session::SessionState;
use crate::util::cookies;

/// Cookie holding the logged-in user's id.
pub const ID_COOKIE: &str = "id";
/// Cookie holding the bearer api key.
pub const API_KEY_COOKIE: &str = "apiKey";

/// Flash shown when signup succeeded but the confirmation email did not
/// go out.
pub const EMAIL_SEND_WARNING: &str = "Failed to send email to confirm address.";

/// Drives authentication flows against the REST API, updating the
/// session store, the flash list, and persisted credentials.
#[derive(Clone)]
pub struct Authenticator {
    api: Api,
    session: RwSignal<SessionState>,
    messages: RwSignal<MessageLog>,
}

impl Authenticator {
    pub fn new(api: Api, session: RwSignal<SessionState>, messages: RwSignal<MessageLog>) -> Self {
        Self {
            api,
            session,
            messages,
        }
    }

    /// Resume a session from the stored cookie pair.
    ///
    /// With no stored credentials this clears local state and resolves
    /// the session unauthenticated without issuing any HTTP call.
    /// Otherwise the stored key becomes the bearer credential and the
    /// user record is fetched by id; the pending attempt resolves with
    /// the outcome.
    ///
    /// # Errors
    ///
    /// Returns why no session was resumed. The session itself always
    /// resolves, so gated routes never hang on this path.
    pub async fn authenticate_from_cookie(&self) -> Result<(), String> {
        let stored = cookies::get(ID_COOKIE).zip(cookies::get(API_KEY_COOKIE));
        let Some((id, key)) = stored else {
            self.logout();
            return Err("no stored credentials".to_owned());
        };
        let Ok(user_id) = id.parse::<i64>() else {
            self.logout();
            return Err("stored user id is not numeric".to_owned());
        };

        self.api.set_authorization(Some(api::api_key_authorization(&key)));
        let attempt = self.session.with_untracked(SessionState::current_attempt);
        match self.api.fetch_user(user_id).await {
            Ok(user) => {
                self.session.update(|session| {
                    session.finish_attempt(attempt, Some(user));
                });
                Ok(())
            }
            Err(message) => {
                self.session.update(|session| {
                    session.finish_attempt(attempt, None);
                });
                Err(message)
            }
        }
    }

    /// Log in with an email + password pair.
    ///
    /// On success the granted key is installed (header + cookie), the
    /// `id` cookie is written, and the session resolves with the user.
    /// On failure the session resolves unauthenticated and the error is
    /// swallowed; callers watch the session, not a return value.
    pub async fn authenticate_with_credentials(&self, email: &str, password: &str) {
        self.api
            .set_authorization(Some(api::login_authorization(email, password)));
        let attempt = self.session.try_update(SessionState::begin_attempt).unwrap_or_default();
        match self.api.request_api_key().await {
            Ok(grant) => {
                self.install_key(&grant.api_key);
                cookies::set(ID_COOKIE, &grant.user.id.to_string());
                self.session.update(|session| {
                    session.finish_attempt(attempt, Some(grant.user));
                });
            }
            Err(message) => {
                log::warn!("credential login failed: {message}");
                self.session.update(|session| {
                    session.finish_attempt(attempt, None);
                });
            }
        }
    }

    /// Create an account and log the new user in.
    ///
    /// Flashes [`EMAIL_SEND_WARNING`] when the server reports that the
    /// confirmation email could not be sent.
    ///
    /// # Errors
    ///
    /// Returns the server's message (e.g. email already in use); the
    /// session is left unauthenticated.
    pub async fn sign_up(&self, user: &NewUser, password: &str) -> Result<User, String> {
        let attempt = self.session.try_update(SessionState::begin_attempt).unwrap_or_default();
        match self.api.sign_up(user, password).await {
            Ok(grant) => {
                self.install_key(&grant.api_key);
                cookies::set(ID_COOKIE, &grant.data.id.to_string());
                if grant.warning_message.as_deref().is_some_and(|m| !m.is_empty()) {
                    self.messages.update(|messages| {
                        messages.error(EMAIL_SEND_WARNING);
                    });
                }
                self.session.update(|session| {
                    session.finish_attempt(attempt, Some(grant.data.clone()));
                });
                Ok(grant.data)
            }
            Err(message) => {
                self.session.update(|session| {
                    session.finish_attempt(attempt, None);
                });
                Err(message)
            }
        }
    }

    /// Redeem an emailed confirmation token. Behaves like a login: the
    /// session restarts pending and resolves with the confirmed user.
    ///
    /// # Errors
    ///
    /// Returns the server's message; the session resolves
    /// unauthenticated.
    pub async fn confirm_email(&self, key: &str) -> Result<User, String> {
        let attempt = self.session.try_update(SessionState::begin_attempt).unwrap_or_default();
        match self.api.confirm_email(key).await {
            Ok(grant) => {
                self.install_key(&grant.api_key);
                self.session.update(|session| {
                    session.finish_attempt(attempt, Some(grant.data.clone()));
                });
                Ok(grant.data)
            }
            Err(message) => {
                self.session.update(|session| {
                    session.finish_attempt(attempt, None);
                });
                Err(message)
            }
        }
    }

    /// Ask the server to email a password-reset link.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message.
    pub async fn request_reset_password(&self, email: &str) -> Result<Ack, String> {
        self.api.request_reset_password(email).await
    }

    /// Ask the server to resend the confirmation email for the logged-in
    /// user.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message.
    pub async fn request_confirm_email(&self) -> Result<(), String> {
        self.api.request_confirm_email().await
    }

    /// Redeem an emailed reset token and set a new password.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message.
    pub async fn reset_password(&self, key: &str, password: &str) -> Result<Ack, String> {
        self.api.reset_password(key, password).await
    }

    /// Drop the bearer credential, both cookies, and resolve the session
    /// unauthenticated. Idempotent.
    pub fn logout(&self) {
        self.api.set_authorization(None);
        cookies::remove(API_KEY_COOKIE);
        cookies::remove(ID_COOKIE);
        self.session.update(|session| {
            let attempt = session.begin_attempt();
            session.finish_attempt(attempt, None);
        });
    }

    fn install_key(&self, key: &str) {
        self.api.set_authorization(Some(api::api_key_authorization(key)));
        cookies::set(API_KEY_COOKIE, key);
    }
}
