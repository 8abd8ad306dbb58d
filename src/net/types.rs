//! Wire DTOs for the community-share REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's serialization so serde round-trips stay
//! lossless. Most user fields are optional or defaulted because the server
//! tailors its output to the requester's access level.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as serialized by the server.
///
/// `email` is only present when the requester may read it (self or admin).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address, if readable by the requester.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_administrator: bool,
    #[serde(default)]
    pub is_educator: bool,
    #[serde(default)]
    pub is_community_partner: bool,
    /// Whether the user has confirmed their email address.
    #[serde(default)]
    pub email_confirmed: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Absolute URL of the profile picture, when one is uploaded.
    #[serde(default)]
    pub picture_url: Option<String>,
}

/// The signup payload posted to `/api/usersignup` as its `user` property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_educator: bool,
    #[serde(default)]
    pub is_community_partner: bool,
    #[serde(default)]
    pub zipcode: Option<String>,
}

/// Success body of `GET /api/requestapikey`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiKeyGrant {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub user: User,
}

/// Success body of `POST /api/usersignup` and `POST /api/confirmemail`:
/// the stored user under `data` plus a fresh key.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserGrant {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub data: User,
    /// Set by signup when the confirmation email could not be sent.
    #[serde(rename = "warningMessage", default)]
    pub warning_message: Option<String>,
}

/// Envelope of single-resource reads such as `GET /api/user/:id`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserEnvelope {
    pub data: User,
}

/// Opaque acknowledgement body (`{"message": "OK"}`) returned by the
/// password-reset and email-confirmation request endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body: the server reports errors as `{"message": ...}`, though
/// the field is not always present.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
