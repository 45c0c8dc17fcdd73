//! Applying edit directives to a profile.

use roster_directive::{parse_directive, Directive, DirectiveContext};
use roster_types::{Location, Profile};
use tracing::debug;

use crate::error::{EditResult, RejectedDirective};

/// Applies edit directives to the sender's own profile.
///
/// The editor only reports success or failure per directive; how a rejection
/// is surfaced to the member is up to the caller.
pub struct ProfileEditor;

/// A token from an edit list that was not applied.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectedToken {
    /// The token as the member typed it
    pub token: String,
    pub reason: RejectedDirective,
}

impl ProfileEditor {
    /// Apply one directive. On error the profile is unchanged.
    pub fn apply(profile: &mut Profile, directive: &Directive) -> EditResult<()> {
        match directive {
            Directive::TagInclude { tag } => {
                if !profile.add_tag(tag.clone()) {
                    debug!(member = %profile.id(), %tag, "tag already present");
                }
            }
            Directive::TagExclude { tag } => {
                if !profile.remove_tag(tag) {
                    debug!(member = %profile.id(), %tag, "tag not present");
                }
            }
            Directive::AttributeSet { kind, value } => {
                profile.set_attribute(*kind, *value)?;
            }
            Directive::MarkerSet { marker } => profile.set_marker(*marker),
            Directive::AttributeRange { .. } | Directive::DistanceRange { .. } => {
                return Err(RejectedDirective::FilterOnly {
                    directive: directive.to_string(),
                });
            }
            Directive::Unrecognized { token } => {
                return Err(RejectedDirective::Unrecognized {
                    token: token.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parse and apply every token in order, collecting the ones that were
    /// rejected. One bad token never stops the others.
    pub fn apply_tokens<'a, I>(profile: &mut Profile, tokens: I) -> Vec<RejectedToken>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rejected = Vec::new();
        for token in tokens {
            let directive = parse_directive(token, DirectiveContext::Edit);
            match Self::apply(profile, &directive) {
                Ok(()) => debug!(member = %profile.id(), %directive, "edit applied"),
                Err(reason) => {
                    debug!(member = %profile.id(), token, %reason, "edit rejected");
                    rejected.push(RejectedToken {
                        token: token.to_string(),
                        reason,
                    });
                }
            }
        }
        rejected
    }

    /// Record a location shared by the member.
    pub fn apply_location(profile: &mut Profile, location: Location) {
        debug!(member = %profile.id(), %location, "location updated");
        profile.set_location(Some(location));
    }
}

/// Apply one directive to a profile. See [`ProfileEditor::apply`].
pub fn apply_edit(profile: &mut Profile, directive: &Directive) -> EditResult<()> {
    ProfileEditor::apply(profile, directive)
}
