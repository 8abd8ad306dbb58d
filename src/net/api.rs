//! REST calls against the community-share API.
//!
//! Browser builds issue real HTTP calls via `gloo-net`; native builds
//! (tests) get stubs returning errors since these endpoints are only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a human-readable message:
//! the server's `message` body field when present, else a generic
//! "<what> failed: <status>" fallback. Callers decide whether to surface
//! or swallow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, Mutex};

use crate::net::types::{Ack, ApiKeyGrant, NewUser, User, UserGrant};
#[cfg(feature = "browser")]
use crate::net::types::{ErrorBody, UserEnvelope};

#[cfg(not(feature = "browser"))]
const NOT_BROWSER: &str = "not available outside the browser";

/// Authorization value for an email + password login,
/// `Basic:<email>:<password>`.
pub fn login_authorization(email: &str, password: &str) -> String {
    format!("Basic:{email}:{password}")
}

/// Authorization value for a stored api key, `Basic:api:<key>`.
pub fn api_key_authorization(key: &str) -> String {
    format!("Basic:api:{key}")
}

#[cfg(any(test, feature = "browser"))]
fn user_endpoint(id: i64) -> String {
    format!("/api/user/{id}")
}

#[cfg(any(test, feature = "browser"))]
fn request_reset_password_endpoint(email: &str) -> String {
    format!("/api/requestresetpassword/{email}")
}

#[cfg(any(test, feature = "browser"))]
fn failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(any(test, feature = "browser"))]
fn confirm_email_request_failed_message(detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("Failed to send email confirmation email: {detail}"),
        None => "Failed to send email confirmation email".to_owned(),
    }
}

/// Shared HTTP client: a thin wrapper that attaches the current bearer
/// credential to every request.
///
/// The credential slot is shared between clones so the authenticator and
/// every page observe the same login state.
#[derive(Clone, Debug, Default)]
pub struct Api {
    authorization: Arc<Mutex<Option<String>>>,
}

impl Api {
    /// Replace the Authorization value sent with subsequent requests.
    /// `None` clears it.
    pub fn set_authorization(&self, value: Option<String>) {
        if let Ok(mut slot) = self.authorization.lock() {
            *slot = value;
        }
    }

    /// The Authorization value currently attached to requests.
    pub fn authorization(&self) -> Option<String> {
        self.authorization.lock().ok().and_then(|slot| slot.clone())
    }

    #[cfg(feature = "browser")]
    fn get(&self, url: &str) -> gloo_net::http::RequestBuilder {
        let builder = gloo_net::http::Request::get(url);
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "browser")]
    fn post(&self, url: &str) -> gloo_net::http::RequestBuilder {
        let builder = gloo_net::http::Request::post(url);
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    /// Exchange the current login credential for an api key and the user
    /// record via `GET /api/requestapikey`.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message, or a generic one for
    /// transport errors and bodies that fail to parse.
    pub async fn request_api_key(&self) -> Result<ApiKeyGrant, String> {
        #[cfg(feature = "browser")]
        {
            let resp = self
                .get("/api/requestapikey")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(error_message(resp, "api key request").await);
            }
            resp.json::<ApiKeyGrant>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "browser"))]
        {
            Err(NOT_BROWSER.to_owned())
        }
    }

    /// Create an account via `POST /api/usersignup`.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message (e.g. an email already in
    /// use) or a generic fallback.
    pub async fn sign_up(&self, user: &NewUser, password: &str) -> Result<UserGrant, String> {
        #[cfg(feature = "browser")]
        {
            let payload = serde_json::json!({ "user": user, "password": password });
            let resp = self
                .post("/api/usersignup")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(error_message(resp, "signup").await);
            }
            resp.json::<UserGrant>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (user, password);
            Err(NOT_BROWSER.to_owned())
        }
    }

    /// Fetch a user by id via `GET /api/user/:id`.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message or a generic fallback.
    pub async fn fetch_user(&self, id: i64) -> Result<User, String> {
        #[cfg(feature = "browser")]
        {
            let url = user_endpoint(id);
            let resp = self.get(&url).send().await.map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(error_message(resp, "user fetch").await);
            }
            let envelope: UserEnvelope = resp.json().await.map_err(|e| e.to_string())?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = id;
            Err(NOT_BROWSER.to_owned())
        }
    }

    /// Ask the server to email a password-reset link via
    /// `GET /api/requestresetpassword/:email`.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message or a generic fallback.
    pub async fn request_reset_password(&self, email: &str) -> Result<Ack, String> {
        #[cfg(feature = "browser")]
        {
            let url = request_reset_password_endpoint(email);
            let resp = self.get(&url).send().await.map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(error_message(resp, "password reset request").await);
            }
            resp.json::<Ack>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = email;
            Err(NOT_BROWSER.to_owned())
        }
    }

    /// Ask the server to resend the signup confirmation email via
    /// `GET /api/requestconfirmemail`. Requires the bearer credential.
    ///
    /// # Errors
    ///
    /// Returns "Failed to send email confirmation email", with the
    /// server's detail appended when one is reported.
    pub async fn request_confirm_email(&self) -> Result<(), String> {
        #[cfg(feature = "browser")]
        {
            let resp = self
                .get("/api/requestconfirmemail")
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                let detail = body_message(resp).await;
                return Err(confirm_email_request_failed_message(detail.as_deref()));
            }
            Ok(())
        }
        #[cfg(not(feature = "browser"))]
        {
            Err(NOT_BROWSER.to_owned())
        }
    }

    /// Redeem an emailed confirmation token via `POST /api/confirmemail`,
    /// receiving a fresh key and the confirmed user.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message or a generic fallback.
    pub async fn confirm_email(&self, key: &str) -> Result<UserGrant, String> {
        #[cfg(feature = "browser")]
        {
            let payload = serde_json::json!({ "key": key });
            let resp = self
                .post("/api/confirmemail")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(error_message(resp, "email confirmation").await);
            }
            resp.json::<UserGrant>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = key;
            Err(NOT_BROWSER.to_owned())
        }
    }

    /// Redeem an emailed reset token and set a new password via
    /// `POST /api/resetpassword`.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message or a generic fallback.
    pub async fn reset_password(&self, key: &str, password: &str) -> Result<Ack, String> {
        #[cfg(feature = "browser")]
        {
            let payload = serde_json::json!({ "key": key, "password": password });
            let resp = self
                .post("/api/resetpassword")
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(error_message(resp, "password reset").await);
            }
            resp.json::<Ack>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = (key, password);
            Err(NOT_BROWSER.to_owned())
        }
    }
}

/// Extract the server's `message` from a failure body, if any.
#[cfg(feature = "browser")]
async fn body_message(resp: gloo_net::http::Response) -> Option<String> {
    let body: ErrorBody = resp.json().await.ok()?;
    body.message.filter(|message| !message.is_empty())
}

/// The server's failure message when present, else `failed_message`.
#[cfg(feature = "browser")]
async fn error_message(resp: gloo_net::http::Response, what: &str) -> String {
    let status = resp.status();
    match body_message(resp).await {
        Some(message) => message,
        None => failed_message(what, status),
    }
}
