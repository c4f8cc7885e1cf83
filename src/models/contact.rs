//! Contact models: the inbound add-contact event and the Resend wire types.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// Inbound add-contact event.
///
/// Constructed per invocation and discarded once the call completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Contact email (required, non-empty)
    #[serde(default)]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Request body for `POST /audiences/{audience_id}/contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateContactRequest {
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    pub unsubscribed: bool,

    /// Audience the contact is added to; sent in the URL path, not the body.
    #[serde(skip)]
    pub audience_id: String,
}

impl CreateContactRequest {
    /// Build a subscribed create-request for the given audience.
    ///
    /// Blank optional names are dropped rather than sent as empty strings.
    pub fn new(input: &ContactRequest, audience_id: &str) -> Self {
        Self {
            email: input.email.trim().to_string(),
            first_name: non_blank(&input.first_name),
            last_name: non_blank(&input.last_name),
            unsubscribed: false,
            audience_id: audience_id.to_string(),
        }
    }
}

/// Response body of a successful contact creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedContact {
    #[serde(default)]
    pub object: String,

    pub id: ContactId,
}

pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
