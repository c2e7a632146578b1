//! Shared domain models that cross the client/server boundary.

use serde::{Deserialize, Serialize};

/// An authenticated user as issued by the server.
///
/// Immutable once issued; the copy mirrored into the session cache is the one
/// shown after a reload until the next login replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}
