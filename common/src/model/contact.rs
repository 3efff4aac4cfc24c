use serde::{Deserialize, Serialize};

/// Payload sent to `POST /api/phoneApp` when a contact is created.
///
/// The `id` is an advisory value computed by the client (highest known id plus
/// one). The server is free to assign a different one and the frontend always
/// navigates using the id returned in [`CreatedContact`].
///
/// Optional text fields travel as empty strings when left blank, while the
/// photo reference is `null` until an upload has been confirmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContact {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub nickname: String,
    pub memo: String,
    /// Filename returned by the photo upload endpoint.
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
}

/// One element of the `GET /api/phoneApp` listing.
///
/// Only the identifier is needed on the creation screen; every other field the
/// server sends is ignored during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummary {
    pub id: i64,
}

/// Response body of a successful create call.
///
/// `id` is optional so that a body without it decodes and can be reported as a
/// missing field instead of a generic decode failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedContact {
    #[serde(default)]
    pub id: Option<i64>,
}
