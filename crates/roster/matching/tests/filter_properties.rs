//! Property tests: a profile always matches a filter describing itself, and
//! tag edits are idempotent.

use proptest::prelude::*;
use roster_matching::{build_filter, haversine_distance_km, ProfileEditor};
use roster_types::{AttributeKind, Location, Member, MemberId, Profile};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_location() -> impl Strategy<Value = Location> {
    (-89.0f64..89.0, -179.0f64..179.0).prop_map(|(lat, lon)| Location::new(lat, lon))
}

/// A profile with random in-range attributes, tags and location.
fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        prop::option::of(AttributeKind::Age.lower_bound()..=AttributeKind::Age.upper_bound()),
        prop::option::of(AttributeKind::Height.lower_bound()..=AttributeKind::Height.upper_bound()),
        prop::option::of(AttributeKind::Weight.lower_bound()..=AttributeKind::Weight.upper_bound()),
        prop::collection::vec("[0-9A-Za-z]{1,8}", 0..5),
        prop::option::of(arb_location()),
    )
        .prop_map(|(age, height, weight, tags, location)| {
            let mut profile = Profile::new(Member::new(MemberId(1), "candidate"));
            let mut tokens: Vec<String> = Vec::new();
            for (kind, value) in [
                (AttributeKind::Age, age),
                (AttributeKind::Height, height),
                (AttributeKind::Weight, weight),
            ] {
                if let Some(value) = value {
                    tokens.push(format!("{value}{}", kind.unit()));
                }
            }
            tokens.extend(tags.iter().map(|body| format!("#{body}")));
            let rejected = ProfileEditor::apply_tokens(&mut profile, tokens.iter().map(String::as_str));
            assert!(rejected.is_empty(), "generated edits rejected: {rejected:?}");
            if let Some(location) = location {
                ProfileEditor::apply_location(&mut profile, location);
            }
            profile
        })
}

/// Filter tokens that describe exactly the attributes and tags of `profile`.
fn describing_tokens(profile: &Profile) -> Vec<String> {
    profile
        .attributes()
        .map(|(kind, value)| format!("{value}{}", kind.unit()))
        .chain(profile.tags().iter().map(|tag| tag.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn profile_matches_its_own_description(profile in arb_profile()) {
        let tokens = describing_tokens(&profile);
        let filter = build_filter(tokens.iter().map(String::as_str));
        prop_assert!(!filter.is_origin_needed());
        prop_assert!(filter.evaluate(&profile, None));
    }

    #[test]
    fn profile_is_within_its_own_distance(profile in arb_profile(), origin in arb_location()) {
        prop_assume!(profile.location().is_some());
        let target = profile.location().copied().unwrap();
        let km = haversine_distance_km(&origin, &target).ceil() as i64;
        let tokens = describing_tokens(&profile);
        let distance = format!(",{km}km");
        let filter = build_filter(tokens.iter().map(String::as_str).chain([distance.as_str()]));
        prop_assert!(filter.evaluate(&profile, Some(&origin)));
    }

    #[test]
    fn excluding_an_owned_tag_rejects(profile in arb_profile()) {
        prop_assume!(!profile.tags().is_empty());
        let owned = profile.tags().iter().next().unwrap().to_string();
        let exclude = format!("-{owned}");
        let filter = build_filter([exclude.as_str()]);
        prop_assert!(!filter.evaluate(&profile, None));
    }

    #[test]
    fn tag_edits_are_idempotent(profile in arb_profile(), body in "[0-9A-Za-z]{1,8}") {
        for token in [format!("#{body}"), format!("-#{body}")] {
            let mut once = profile.clone();
            ProfileEditor::apply_tokens(&mut once, [token.as_str()]);
            let mut twice = once.clone();
            ProfileEditor::apply_tokens(&mut twice, [token.as_str()]);
            prop_assert_eq!(once.tags(), twice.tags());
        }
    }
}
