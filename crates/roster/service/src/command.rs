//! Command routing.

/// A recognized chat command with its whitespace-split arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Iam(Vec<String>),
    Howis(Vec<String>),
    Whois(Vec<String>),
}

impl Command {
    /// Parse a message. Returns `None` for ordinary chatter, unknown commands,
    /// and commands addressed to a different bot (`/whois@other_bot`).
    pub fn parse(text: &str, bot_username: &str) -> Option<Self> {
        let mut words = text.split_whitespace();
        let head = words.next()?.strip_prefix('/')?;
        let name = match head.split_once('@') {
            Some((name, addressee)) if addressee.eq_ignore_ascii_case(bot_username) => name,
            Some(_) => return None,
            None => head,
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Command::Start),
            "help" => Some(Command::Help),
            "iam" => Some(Command::Iam(args)),
            "howis" => Some(Command::Howis(args)),
            "whois" => Some(Command::Whois(args)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Iam(_) => "iam",
            Command::Howis(_) => "howis",
            Command::Whois(_) => "whois",
        }
    }

    /// Whether the command only makes sense inside a group.
    pub fn requires_group(&self) -> bool {
        matches!(self, Command::Iam(_) | Command::Howis(_) | Command::Whois(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "roster_bot";

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            Command::parse("/iam 29yo  #nerd\t175cm", BOT),
            Some(Command::Iam(vec!["29yo".into(), "#nerd".into(), "175cm".into()]))
        );
        assert_eq!(Command::parse("/whois", BOT), Some(Command::Whois(vec![])));
        assert_eq!(Command::parse("  /START  ", BOT), Some(Command::Start));
    }

    #[test]
    fn honours_bot_suffix() {
        assert_eq!(
            Command::parse("/howis@Roster_Bot @ada", BOT),
            Some(Command::Howis(vec!["@ada".into()]))
        );
        assert_eq!(Command::parse("/help@other_bot", BOT), None);
    }

    #[test]
    fn ignores_chatter_and_unknown_commands() {
        assert_eq!(Command::parse("hello /iam", BOT), None);
        assert_eq!(Command::parse("", BOT), None);
        assert_eq!(Command::parse("/dance", BOT), None);
    }

    #[test]
    fn locality() {
        assert!(!Command::Help.requires_group());
        assert!(!Command::Start.requires_group());
        assert!(Command::Whois(vec![]).requires_group());
    }
}
