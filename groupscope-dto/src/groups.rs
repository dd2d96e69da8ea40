use crate::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// A group as returned by the group-info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetails {
    pub id: u64,
    pub name: String,

    /// May be empty.
    pub description: String,

    pub member_count: u64,
    pub public_entry_allowed: bool,

    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// The role one member holds within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: u64,
    pub name: String,

    /// Seniority within the group, 0 through 255.
    pub rank: u8,
}

/// One roster entry: a user together with the role they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub user: UserRef,
    pub role: RoleRef,
}

/// One page of a group's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembersPage {
    pub data: Vec<GroupMember>,

    /// Opaque continuation token for the next page. `None` once the roster
    /// is exhausted. Must be forwarded verbatim on the follow-up request.
    pub next_page_cursor: Option<String>,
}

/// Seniority bands used when presenting a member's rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RankTier {
    Owner,
    Admin,
    Moderator,
    Member,
    Guest,
}

impl RankTier {
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            200.. => RankTier::Owner,
            100..=199 => RankTier::Admin,
            50..=99 => RankTier::Moderator,
            10..=49 => RankTier::Member,
            _ => RankTier::Guest,
        }
    }
}

impl From<&RoleRef> for RankTier {
    fn from(role: &RoleRef) -> Self {
        Self::from_rank(role.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn group_details_decode() {
        let group: GroupDetails = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Alpha",
                "description": "",
                "owner": { "userId": 99 },
                "memberCount": 2,
                "publicEntryAllowed": true,
                "created": "2009-07-18T00:00:00.0Z",
                "updated": "2023-01-02T03:04:05.678Z"
            }"#,
        )
        .unwrap();

        assert_eq!(group.id, 1);
        assert_eq!(group.name, "Alpha");
        assert_eq!(group.description, "");
        assert_eq!(group.member_count, 2);
        assert!(group.public_entry_allowed);
        assert_eq!(group.created.to_rfc3339(), "2009-07-18T00:00:00+00:00");
    }

    #[test]
    fn members_page_decode() {
        let page: GroupMembersPage = serde_json::from_str(
            r#"{
                "data": [
                    {
                        "user": { "userId": 1, "username": "a", "displayName": "A" },
                        "role": { "id": 1, "name": "Member", "rank": 1 }
                    }
                ],
                "nextPageCursor": null
            }"#,
        )
        .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].user.username, "a");
        assert_eq!(page.data[0].role.rank, 1);
        assert_eq!(page.next_page_cursor, None);
    }

    #[test]
    fn members_page_decode_with_cursor() {
        let page: GroupMembersPage = serde_json::from_str(
            r#"{ "data": [], "nextPageCursor": "eyJrZXkiOjJ9" }"#,
        )
        .unwrap();

        assert_eq!(page.next_page_cursor.as_deref(), Some("eyJrZXkiOjJ9"));
    }

    #[rstest]
    #[case(0, RankTier::Guest)]
    #[case(9, RankTier::Guest)]
    #[case(10, RankTier::Member)]
    #[case(49, RankTier::Member)]
    #[case(50, RankTier::Moderator)]
    #[case(99, RankTier::Moderator)]
    #[case(100, RankTier::Admin)]
    #[case(199, RankTier::Admin)]
    #[case(200, RankTier::Owner)]
    #[case(255, RankTier::Owner)]
    fn rank_tier_bands(#[case] rank: u8, #[case] expected: RankTier) {
        assert_eq!(RankTier::from_rank(rank), expected);
    }
}
