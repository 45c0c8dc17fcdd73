//! Canned texts for `/start` and `/help`.

use crate::render::escape_markdown;

/// Reply to `/start`.
pub fn introduction() -> String {
    "*Hi!* 👋\nI keep a small profile for everyone in your groups and help you find \
     the people you are looking for. If you do not know where to start, just ask me \
     for /help."
        .to_string()
}

/// Replies to `/help`, one message per section.
pub fn guide(bot_username: &str) -> Vec<String> {
    vec![
        "::= = is\n| = or\n\\[ ] = once or none\n{ } = zero or more times".to_string(),
        "*👤 SETTING UP YOUR PROFILE\n/iam {argument}*\n\n\
         _argument_ ::= _stat_|_property_|_symbol_\n\
         _stat_ ::= _integer_(yo|cm|kg)\n\
         _property_ ::= \\[+|-]#_hashtag_\n\n\
         ex. `/iam 29yo -#jock #nerd 175cm 🦊` sets your age, height and symbol. \
         It also replaces one of your tags with another.\n\
         📍 You can also send me your location."
            .to_string(),
        format!(
            "*🔍 SHOWING SOMEONE'S PROFILE\n/howis @{}*",
            escape_markdown(bot_username)
        ),
        "*👥 LISTING PROFILES\n/whois {filter}*\n\n\
         _filter_ ::= _range_|_property_\n\
         _range_ ::= \\[_integer_]\\[,]\\[_integer_](yo|cm|kg|km)\n\
         _property_ ::= \\[+|-]#_hashtag_\n\n\
         ex. `/whois 18,29yo #single ,10km -#sporty` selects profiles within the \
         specified ranges and (not) having the specified tags."
            .to_string(),
    ]
}
