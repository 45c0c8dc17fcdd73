//! Profile rendering.

use roster_types::Profile;

use crate::message::OutboundMessage;

/// Counter prefix of `/whois` answers.
pub const PEOPLE_LABEL: &str = "👤 ×";
/// Stands for "a location" in short replies.
pub const LOCATION_LABEL: &str = "📍";
const LANGUAGE_LABEL: &str = "💬";
const STATS_LABEL: &str = "📋";

/// Escape characters that would otherwise start markup.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// The full card of a profile:
///
/// ```text
/// 🦊 *Ada Lovelace* @ada 🦊
/// 💬 en
/// 📋 36yo 165cm
/// #math #poetry
/// ```
pub fn profile_card(profile: &Profile) -> String {
    let member = profile.member();
    let marker = profile.marker();
    let mut lines = Vec::new();

    let mut header = format!("{marker} *{}", escape_markdown(&member.first_name));
    if let Some(last) = &member.last_name {
        header.push(' ');
        header.push_str(&escape_markdown(last));
    }
    header.push('*');
    if let Some(username) = &member.username {
        header.push_str(&format!(" @{}", escape_markdown(username)));
    }
    header.push_str(&format!(" {marker}"));
    lines.push(header);

    if let Some(language) = &member.language_code {
        lines.push(format!("{LANGUAGE_LABEL} {}", escape_markdown(language)));
    }

    let stats: Vec<String> = profile
        .attributes()
        .map(|(kind, value)| format!("{value}{}", kind.unit()))
        .collect();
    if !stats.is_empty() {
        lines.push(format!("{STATS_LABEL} {}", stats.join(" ")));
    }

    if !profile.tags().is_empty() {
        let tags: Vec<String> = profile.tags().iter().map(ToString::to_string).collect();
        lines.push(tags.join(" "));
    }

    lines.join("\n")
}

/// One line per profile in listings: `🦊 @ada`.
pub fn profile_line(profile: &Profile) -> String {
    let member = profile.member();
    match &member.username {
        Some(username) => format!("{} @{username}", profile.marker()),
        None => format!("{} {}", profile.marker(), member.first_name),
    }
}

/// The card followed by a map pin when the profile has a location.
pub fn profile_messages(profile: &Profile) -> Vec<OutboundMessage> {
    let mut messages = vec![OutboundMessage::Markdown(profile_card(profile))];
    if let Some(location) = profile.location() {
        messages.push(OutboundMessage::Location(*location));
    }
    messages
}

/// `👤 × 2` followed by one line per profile.
pub fn profile_list<'p, I>(profiles: I) -> String
where
    I: IntoIterator<Item = &'p Profile>,
{
    let lines: Vec<String> = profiles.into_iter().map(profile_line).collect();
    let mut text = format!("{PEOPLE_LABEL} {}", lines.len());
    for line in lines {
        text.push('\n');
        text.push_str(&line);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::{AttributeKind, Location, Marker, Member, MemberId, Tag};

    fn ada() -> Profile {
        let member = Member::new(MemberId(1), "Ada")
            .with_last_name("Lovelace")
            .with_username("ada")
            .with_language("en");
        let mut profile = Profile::new(member);
        profile.set_marker(Marker::parse("🦊").unwrap());
        profile.set_attribute(AttributeKind::Height, 165).unwrap();
        profile.set_attribute(AttributeKind::Age, 36).unwrap();
        profile.add_tag(Tag::new("poetry").unwrap());
        profile.add_tag(Tag::new("math").unwrap());
        profile
    }

    #[test]
    fn full_card() {
        assert_eq!(
            profile_card(&ada()),
            "🦊 *Ada Lovelace* @ada 🦊\n💬 en\n📋 36yo 165cm\n#math #poetry"
        );
    }

    #[test]
    fn sparse_card_omits_empty_sections() {
        let profile = Profile::new(Member::new(MemberId(2), "Bob"));
        assert_eq!(profile_card(&profile), "😀 *Bob* 😀");
    }

    #[test]
    fn names_are_escaped() {
        let profile = Profile::new(Member::new(MemberId(3), "*star*").with_username("snake_case"));
        assert_eq!(profile_card(&profile), "😀 *\\*star\\** @snake\\_case 😀");
    }

    #[test]
    fn lines_and_lists() {
        let bob = Profile::new(Member::new(MemberId(2), "Bob"));
        assert_eq!(profile_line(&ada()), "🦊 @ada");
        assert_eq!(profile_line(&bob), "😀 Bob");
        assert_eq!(profile_list([&ada(), &bob]), "👤 × 2\n🦊 @ada\n😀 Bob");
        assert_eq!(profile_list(std::iter::empty()), "👤 × 0");
    }

    #[test]
    fn location_adds_a_pin() {
        let mut profile = ada();
        assert_eq!(profile_messages(&profile).len(), 1);
        let spot = Location::new(51.5, -0.12).with_accuracy(40.0);
        profile.set_location(Some(spot));
        let messages = profile_messages(&profile);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], OutboundMessage::Location(spot));
        let OutboundMessage::Location(pin) = &messages[1] else {
            panic!("expected a pin");
        };
        assert_eq!(pin.horizontal_accuracy, Some(40.0));
    }
}
