//! A human account linked to a wallet.

use serde::{Deserialize, Serialize};

/// Identifies the human account associated with a wallet, by email address,
/// phone number, numeric user ID, or any combination of the three.
///
/// No field is required and the shape alone enforces no uniqueness; a value
/// with none of them set is still well-formed. Absent fields are omitted from
/// the wire form entirely rather than serialized as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl LinkedUser {
    /// True when no identifying field is set.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.user_id.is_none()
    }
}
