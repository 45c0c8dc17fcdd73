use async_trait::async_trait;
use roster_types::{GroupId, Member, MemberId, Profile};

use crate::StoreResult;

/// Storage interface for member profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Get one profile, if the member ever edited it in this group.
    async fn get_profile(&self, group: GroupId, member: MemberId) -> StoreResult<Option<Profile>>;

    /// Get the member's profile, creating a blank one on first use.
    ///
    /// Display information on an existing profile is refreshed from `member`.
    async fn get_or_create(&self, group: GroupId, member: &Member) -> StoreResult<Profile>;

    /// Insert or replace a profile.
    async fn upsert_profile(&self, group: GroupId, profile: Profile) -> StoreResult<()>;

    /// Every profile of a group, ordered by member id.
    async fn list_profiles(&self, group: GroupId) -> StoreResult<Vec<Profile>>;

    /// Find a profile by username, ignoring case.
    ///
    /// A blank username is [`StoreError::InvalidInput`](crate::StoreError::InvalidInput).
    async fn find_by_username(&self, group: GroupId, username: &str) -> StoreResult<Option<Profile>>;
}
