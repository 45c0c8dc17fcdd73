//! In-memory profile store.
//!
//! Deterministic and test-friendly; nothing survives a restart.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use roster_types::{GroupId, Member, MemberId, Profile};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::traits::ProfileStore;
use crate::{StoreError, StoreResult};

type GroupProfiles = BTreeMap<MemberId, Profile>;

/// In-memory storage for development and testing
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    groups: Arc<RwLock<HashMap<GroupId, GroupProfiles>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of profiles stored for `group`.
    pub async fn len(&self, group: GroupId) -> usize {
        let groups = self.groups.read().await;
        groups.get(&group).map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get_profile(&self, group: GroupId, member: MemberId) -> StoreResult<Option<Profile>> {
        let groups = self.groups.read().await;
        Ok(groups
            .get(&group)
            .and_then(|profiles| profiles.get(&member))
            .cloned())
    }

    async fn get_or_create(&self, group: GroupId, member: &Member) -> StoreResult<Profile> {
        let mut groups = self.groups.write().await;
        let profiles = groups.entry(group).or_default();
        let profile = match profiles.get_mut(&member.id) {
            Some(existing) => {
                existing.refresh_member(member.clone());
                existing.clone()
            }
            None => {
                info!(%group, member = %member.id, "creating profile");
                let created = Profile::new(member.clone());
                profiles.insert(member.id, created.clone());
                created
            }
        };
        Ok(profile)
    }

    async fn upsert_profile(&self, group: GroupId, profile: Profile) -> StoreResult<()> {
        let mut groups = self.groups.write().await;
        debug!(%group, member = %profile.id(), "upserting profile");
        groups.entry(group).or_default().insert(profile.id(), profile);
        Ok(())
    }

    async fn list_profiles(&self, group: GroupId) -> StoreResult<Vec<Profile>> {
        let groups = self.groups.read().await;
        Ok(groups
            .get(&group)
            .map(|profiles| profiles.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_by_username(&self, group: GroupId, username: &str) -> StoreResult<Option<Profile>> {
        if username.trim().is_empty() {
            return Err(StoreError::InvalidInput("username must not be blank".to_string()));
        }
        let groups = self.groups.read().await;
        Ok(groups.get(&group).and_then(|profiles| {
            profiles
                .values()
                .find(|profile| profile.member().has_username(username))
                .cloned()
        }))
    }
}
