use serde::{Deserialize, Serialize};

/// A reference to a user, as nested inside a roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: u64,
    pub username: String,
    pub display_name: String,
}
