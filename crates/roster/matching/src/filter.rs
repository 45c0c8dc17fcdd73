//! Compiled search predicates.

use std::collections::{BTreeMap, BTreeSet};

use roster_directive::{parse_directive, Directive, DirectiveContext};
use roster_types::{AttributeKind, Location, Profile, Range, Tag};
use serde::Serialize;
use tracing::debug;

use crate::error::{FilterError, FilterResult};
use crate::geo::haversine_distance_km;

/// A predicate over profiles, built once from a directive list and evaluated
/// against many candidates.
///
/// - at most one range per attribute kind; a later directive replaces an
///   earlier one
/// - at most one distance range, same rule
/// - every included tag must be present
/// - no excluded tag may be present
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchFilter {
    attributes: BTreeMap<AttributeKind, Range<i32>>,
    distance: Option<Range<f64>>,
    include: BTreeSet<Tag>,
    exclude: BTreeSet<Tag>,
}

impl MatchFilter {
    /// A filter that accepts every profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_directives<'a, I>(directives: I) -> Self
    where
        I: IntoIterator<Item = &'a Directive>,
    {
        let mut filter = Self::new();
        for directive in directives {
            filter.push(directive);
        }
        filter
    }

    /// Fold one directive in. Returns `false` if the directive has no meaning
    /// in a filter and was ignored.
    pub fn push(&mut self, directive: &Directive) -> bool {
        match directive {
            Directive::AttributeRange { kind, range } => {
                self.attributes.insert(*kind, *range);
            }
            Directive::DistanceRange { range } => self.distance = Some(*range),
            Directive::TagInclude { tag } => {
                self.include.insert(tag.clone());
            }
            Directive::TagExclude { tag } => {
                self.exclude.insert(tag.clone());
            }
            Directive::AttributeSet { .. }
            | Directive::MarkerSet { .. }
            | Directive::Unrecognized { .. } => return false,
        }
        true
    }

    /// Whether [`evaluate`](Self::evaluate) needs an origin location.
    pub fn is_origin_needed(&self) -> bool {
        self.distance.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
            && self.distance.is_none()
            && self.include.is_empty()
            && self.exclude.is_empty()
    }

    pub fn attribute_range(&self, kind: AttributeKind) -> Option<&Range<i32>> {
        self.attributes.get(&kind)
    }

    pub fn distance_range(&self) -> Option<&Range<f64>> {
        self.distance.as_ref()
    }

    pub fn included_tags(&self) -> &BTreeSet<Tag> {
        &self.include
    }

    pub fn excluded_tags(&self) -> &BTreeSet<Tag> {
        &self.exclude
    }

    /// Test one profile.
    ///
    /// With a distance range configured and no `origin`, no profile matches;
    /// check [`is_origin_needed`](Self::is_origin_needed) first or use
    /// [`select`](Self::select).
    pub fn evaluate(&self, profile: &Profile, origin: Option<&Location>) -> bool {
        for (kind, range) in &self.attributes {
            match profile.attribute(*kind) {
                Some(value) if range.contains(value) => {}
                _ => return false,
            }
        }

        if let Some(range) = &self.distance {
            let (Some(origin), Some(target)) = (origin, profile.location()) else {
                return false;
            };
            if !range.contains(haversine_distance_km(origin, target)) {
                return false;
            }
        }

        let tags = profile.tags();
        self.include.is_subset(tags) && self.exclude.is_disjoint(tags)
    }

    /// The profiles that match, in input order.
    ///
    /// Fails with [`FilterError::OriginRequired`] instead of evaluating when a
    /// distance range is configured and `origin` is absent.
    pub fn select<'p, I>(&self, profiles: I, origin: Option<&Location>) -> FilterResult<Vec<&'p Profile>>
    where
        I: IntoIterator<Item = &'p Profile>,
    {
        if self.is_origin_needed() && origin.is_none() {
            return Err(FilterError::OriginRequired);
        }
        let matches: Vec<_> = profiles
            .into_iter()
            .filter(|profile| self.evaluate(profile, origin))
            .collect();
        debug!(matches = matches.len(), "filter evaluated");
        Ok(matches)
    }
}

impl<'a> Extend<&'a Directive> for MatchFilter {
    fn extend<T: IntoIterator<Item = &'a Directive>>(&mut self, iter: T) {
        for directive in iter {
            self.push(directive);
        }
    }
}

/// Parse `tokens` in filter context and fold them into a filter.
pub fn build_filter<'a, I>(tokens: I) -> MatchFilter
where
    I: IntoIterator<Item = &'a str>,
{
    build_filter_reporting(tokens).0
}

/// Like [`build_filter`], also returning the tokens that did not contribute.
pub fn build_filter_reporting<'a, I>(tokens: I) -> (MatchFilter, Vec<String>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut filter = MatchFilter::new();
    let mut ignored = Vec::new();
    for token in tokens {
        let directive = parse_directive(token, DirectiveContext::Filter);
        if !filter.push(&directive) {
            debug!(token, "token ignored by filter");
            ignored.push(token.to_string());
        }
    }
    (filter, ignored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::{Member, MemberId};

    const ORIGIN: Location = Location {
        latitude: 45.0,
        longitude: 9.0,
        horizontal_accuracy: None,
    };

    fn tag(body: &str) -> Tag {
        Tag::new(body).unwrap()
    }

    fn candidate(id: i64, age: i32, tags: &[&str], location: Option<Location>) -> Profile {
        let mut profile = Profile::new(Member::new(MemberId(id), format!("m{id}")));
        profile.set_attribute(AttributeKind::Age, age).unwrap();
        for body in tags {
            profile.add_tag(tag(body));
        }
        profile.set_location(location);
        profile
    }

    /// About 5 km due north of [`ORIGIN`].
    fn five_km_away() -> Location {
        Location::new(ORIGIN.latitude + 5.0 / 111.19, ORIGIN.longitude)
    }

    #[test]
    fn scenario_age_tag_and_distance() {
        let filter = build_filter(["18,29yo", "#single", ",10km"]);
        assert!(filter.is_origin_needed());

        let near = candidate(1, 25, &["single"], Some(five_km_away()));
        let too_old = candidate(2, 30, &["single"], Some(five_km_away()));
        let nowhere = candidate(3, 25, &["single"], None);

        assert!(filter.evaluate(&near, Some(&ORIGIN)));
        assert!(!filter.evaluate(&too_old, Some(&ORIGIN)));
        assert!(!filter.evaluate(&nowhere, Some(&ORIGIN)));
    }

    #[test]
    fn far_profiles_fail_the_distance_check() {
        let filter = build_filter([",10km"]);
        let far = candidate(1, 25, &[], Some(Location::new(46.0, 9.0)));
        assert!(!filter.evaluate(&far, Some(&ORIGIN)));
        let lower_bound = build_filter(["100,km"]);
        assert!(lower_bound.evaluate(&far, Some(&ORIGIN)));
    }

    #[test]
    fn origin_needed_only_for_distance() {
        assert!(!build_filter(["18,29yo", "#single", "-#taken"]).is_origin_needed());
        assert!(build_filter(["km"]).is_origin_needed());
        assert!(!MatchFilter::new().is_origin_needed());
    }

    #[test]
    fn missing_attribute_fails_range() {
        let filter = build_filter(["170,cm"]);
        let profile = candidate(1, 25, &[], None);
        assert!(!filter.evaluate(&profile, None));
    }

    #[test]
    fn last_range_wins() {
        let filter = build_filter(["18,29yo", "30,40yo", "1,2km", ",50km"]);
        assert_eq!(
            filter.attribute_range(AttributeKind::Age),
            Some(&Range::closed(30, 40).unwrap())
        );
        assert_eq!(filter.distance_range(), Some(&Range::at_most(50.0)));
    }

    #[test]
    fn include_and_exclude_tags() {
        let filter = build_filter(["#single", "#Nerd", "-#sporty"]);
        let both = candidate(1, 20, &["nerd", "single"], None);
        let one = candidate(2, 20, &["single"], None);
        let sporty = candidate(3, 20, &["single", "nerd", "SPORTY"], None);

        assert!(filter.evaluate(&both, None));
        assert!(!filter.evaluate(&one, None));
        assert!(!filter.evaluate(&sporty, None));
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let filter = build_filter(std::iter::empty());
        assert!(filter.is_empty());
        assert!(filter.evaluate(&candidate(1, 20, &[], None), None));
    }

    #[test]
    fn reporting_lists_ignored_tokens() {
        let (filter, ignored) = build_filter_reporting(["18,29yo", "🦊", "10,5yo", "hello", "#ok"]);
        assert_eq!(ignored, vec!["🦊", "10,5yo", "hello"]);
        assert_eq!(filter.included_tags().len(), 1);
        assert!(filter.attribute_range(AttributeKind::Age).is_some());
    }

    #[test]
    fn edit_only_directives_are_ignored() {
        let mut filter = MatchFilter::new();
        assert!(!filter.push(&Directive::AttributeSet {
            kind: AttributeKind::Age,
            value: 29
        }));
        assert!(filter.is_empty());
    }

    #[test]
    fn select_requires_origin_for_distance() {
        let profiles = vec![
            candidate(1, 25, &["single"], Some(five_km_away())),
            candidate(2, 35, &["single"], Some(five_km_away())),
        ];
        let filter = build_filter(["18,29yo", ",10km"]);
        assert_eq!(filter.select(&profiles, None), Err(FilterError::OriginRequired));

        let selected = filter.select(&profiles, Some(&ORIGIN)).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id(), MemberId(1));
    }

    #[test]
    fn extend_folds_directives() {
        let directives = [
            parse_directive("#a", DirectiveContext::Filter),
            parse_directive("-#b", DirectiveContext::Filter),
        ];
        let mut filter = MatchFilter::new();
        filter.extend(&directives);
        assert_eq!(filter, MatchFilter::from_directives(&directives));
        assert!(filter.excluded_tags().contains(&tag("B")));
    }
}
