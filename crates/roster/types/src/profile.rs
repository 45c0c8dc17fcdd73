//! The per-group record of one member.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::AttributeKind;
use crate::error::AttributeError;
use crate::location::Location;
use crate::marker::Marker;
use crate::member::{Member, MemberId};
use crate::tag::Tag;

/// A member's profile inside one group.
///
/// Attribute values are validated against the catalog on every write, so a
/// stored value is always inside its kind's bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    member: Member,
    #[serde(default)]
    marker: Marker,
    #[serde(default)]
    attributes: BTreeMap<AttributeKind, i32>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    location: Option<Location>,
}

impl Profile {
    /// A blank profile with the default marker.
    pub fn new(member: Member) -> Self {
        Self {
            member,
            marker: Marker::default(),
            attributes: BTreeMap::new(),
            tags: BTreeSet::new(),
            location: None,
        }
    }

    pub fn id(&self) -> MemberId {
        self.member.id
    }

    pub fn member(&self) -> &Member {
        &self.member
    }

    /// Refresh display information. The member id never changes.
    pub fn refresh_member(&mut self, member: Member) {
        debug_assert_eq!(member.id, self.member.id);
        self.member = member;
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    pub fn attribute(&self, kind: AttributeKind) -> Option<i32> {
        self.attributes.get(&kind).copied()
    }

    /// Attributes that have a value, in catalog order.
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeKind, i32)> + '_ {
        self.attributes.iter().map(|(kind, value)| (*kind, *value))
    }

    /// Store `value` for `kind`, returning the previous value.
    ///
    /// Out-of-range values are rejected and the profile is left unchanged.
    pub fn set_attribute(
        &mut self,
        kind: AttributeKind,
        value: i32,
    ) -> Result<Option<i32>, AttributeError> {
        if !kind.validate(value) {
            return Err(AttributeError { kind, value });
        }
        Ok(self.attributes.insert(kind, value))
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns `false` if an equal tag (ignoring case) was already present.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    /// Returns `false` if the tag was not present.
    pub fn remove_tag(&mut self, tag: &Tag) -> bool {
        self.tags.remove(tag)
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn set_location(&mut self, location: Option<Location>) {
        self.location = location;
    }
}
