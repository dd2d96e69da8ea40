use groupscope_dto as dto;

use dto::groups::{GroupDetails, GroupMember};
use dto::params::MemberListParams;

/// The calls a roster session makes against the groups API.
pub trait GroupsGateway {
    async fn group_details(&self, id: u64) -> Result<GroupDetails, dto::client::Error>;

    async fn group_members(
        &self,
        id: u64,
        params: &MemberListParams,
    ) -> Result<dto::groups::GroupMembersPage, dto::client::Error>;
}

impl GroupsGateway for dto::client::V1Client {
    async fn group_details(&self, id: u64) -> Result<GroupDetails, dto::client::Error> {
        dto::client::V1Client::group_details(self, id).await
    }

    async fn group_members(
        &self,
        id: u64,
        params: &MemberListParams,
    ) -> Result<dto::groups::GroupMembersPage, dto::client::Error> {
        dto::client::V1Client::group_members(self, id, params).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("group id must not be empty")]
    EmptyGroupId,
    #[error("invalid group id: {0:?}")]
    InvalidGroupId(String),
    #[error(transparent)]
    Fetch(#[from] dto::client::Error),
}

/// Validates a raw group-id input. Rejection happens before any network
/// call is made.
pub fn parse_group_id(input: &str) -> Result<u64, SessionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SessionError::EmptyGroupId);
    }
    trimmed
        .parse()
        .map_err(|_| SessionError::InvalidGroupId(trimmed.to_string()))
}

#[derive(Debug)]
struct Roster {
    group_id: u64,
    group: GroupDetails,
    members: Vec<GroupMember>,
    next_page_cursor: Option<String>,
    pages_fetched: u32,
}

/// Drives a group lookup followed by incremental roster pagination.
///
/// The session owns all displayed state and is its only writer. The roster
/// is always the concatenation, in fetch order, of every page fetched since
/// the last [`search`](Self::search), and no roster exists without its
/// group. `search` and `load_more` hold the session mutably borrowed for
/// the whole fetch, so overlapping operations cannot be expressed; the
/// in-flight phases of the original UI collapse into the awaited calls.
pub struct RosterSession<G> {
    gateway: G,
    params: MemberListParams,
    roster: Option<Roster>,
}

impl<G: GroupsGateway> RosterSession<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_params(gateway, MemberListParams::default())
    }

    /// A session carrying `params` (sort order, per-page limit) on every
    /// page request. Any cursor in `params` is dropped; the session tracks
    /// its own.
    pub fn with_params(gateway: G, params: MemberListParams) -> Self {
        Self {
            gateway,
            params: params.without_cursor(),
            roster: None,
        }
    }

    /// Looks up a group and loads the first roster page, replacing whatever
    /// was loaded before. Validation failures leave the previous state
    /// untouched; fetch failures clear it.
    pub async fn search(&mut self, input: &str) -> Result<(), SessionError> {
        let id = parse_group_id(input)?;

        // Reset up front so stale results never outlive a new search.
        self.roster = None;

        let group = self.gateway.group_details(id).await?;
        let page = self.gateway.group_members(id, &self.params).await?;

        self.roster = Some(Roster {
            group_id: id,
            group,
            members: page.data,
            next_page_cursor: page.next_page_cursor,
            pages_fetched: 1,
        });
        Ok(())
    }

    /// Fetches the next roster page and appends it, forwarding the stored
    /// cursor verbatim. A no-op returning `false` unless a group is loaded
    /// and the previous page carried a cursor. Failures leave the loaded
    /// roster untouched.
    pub async fn load_more(&mut self) -> Result<bool, SessionError> {
        let Some(roster) = &mut self.roster else {
            return Ok(false);
        };
        let Some(cursor) = roster.next_page_cursor.clone() else {
            return Ok(false);
        };

        let page = self
            .gateway
            .group_members(roster.group_id, &self.params.with_cursor(cursor))
            .await?;

        roster.members.extend(page.data);
        roster.next_page_cursor = page.next_page_cursor;
        roster.pages_fetched += 1;
        Ok(true)
    }

    pub fn group(&self) -> Option<&GroupDetails> {
        self.roster.as_ref().map(|r| &r.group)
    }

    pub fn members(&self) -> &[GroupMember] {
        self.roster.as_ref().map_or(&[], |r| r.members.as_slice())
    }

    pub fn has_more(&self) -> bool {
        self.roster
            .as_ref()
            .is_some_and(|r| r.next_page_cursor.is_some())
    }

    /// Number of pages fetched since the last search. Display only, never
    /// the pagination key.
    pub fn pages_fetched(&self) -> u32 {
        self.roster.as_ref().map_or(0, |r| r.pages_fetched)
    }
}
