//! Parsing of `!` text commands.
//!
//! Prefixes are anchored at the start of the message and must be followed by
//! whitespace or the end of the message. The prompt is whatever follows the
//! prefix, trimmed; nothing inside the prompt is ever rewritten.

pub const HELP_PREFIX: &str = "!help";

/// Long and short spellings of the prompt command.
pub const PROMPT_PREFIXES: [&str; 2] = ["!prompt", "!P"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Extracted prompt; may be empty when the prefix had no argument.
    Prompt(String),
}

/// Parse a raw message body into a command, or `None` when it is not one.
pub fn parse_command(content: &str) -> Option<Command> {
    if strip_token(content, HELP_PREFIX).is_some() {
        return Some(Command::Help);
    }

    PROMPT_PREFIXES
        .iter()
        .find_map(|prefix| strip_token(content, prefix))
        .map(|rest| Command::Prompt(rest.trim().to_string()))
}

/// Extracted prompt for `!prompt`/`!P` messages, `None` for anything else.
pub fn extract_prompt(content: &str) -> Option<String> {
    match parse_command(content)? {
        Command::Prompt(prompt) => Some(prompt),
        Command::Help => None,
    }
}

/// Strip `prefix` from the start of `content` when it forms a whole token.
fn strip_token<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(prefix)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_prefix_agree() {
        let inputs = [
            "generate a sunset",
            "  padded on both sides  ",
            "",
            "multi\nline prompt",
            "a Prompt about Pandas",
            "!prompt nested",
        ];
        for s in inputs {
            let long = extract_prompt(&format!("!prompt {s}"));
            let short = extract_prompt(&format!("!P {s}"));
            assert_eq!(long, short, "prefixes disagree for {s:?}");
            assert_eq!(long.as_deref(), Some(s.trim()));
        }
    }

    #[test]
    fn bare_prefix_yields_empty_prompt() {
        assert_eq!(extract_prompt("!prompt"), Some(String::new()));
        assert_eq!(extract_prompt("!P"), Some(String::new()));
        assert_eq!(extract_prompt("!prompt    "), Some(String::new()));
    }

    #[test]
    fn prompt_text_is_not_rewritten() {
        assert_eq!(
            extract_prompt("!prompt a Photo of a prompt card, Purple"),
            Some("a Photo of a prompt card, Purple".to_string())
        );
        assert_eq!(
            extract_prompt("!P Paris in the rain !P"),
            Some("Paris in the rain !P".to_string())
        );
    }

    #[test]
    fn prefix_must_be_a_whole_token() {
        assert_eq!(parse_command("!Pizza party"), None);
        assert_eq!(parse_command("!prompting is fun"), None);
        assert_eq!(parse_command("!helpme"), None);
    }

    #[test]
    fn prefix_must_be_at_start() {
        assert_eq!(parse_command("please !prompt a cat"), None);
        assert_eq!(parse_command(" !help"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(parse_command("!PROMPT a cat"), None);
        assert_eq!(parse_command("!p a cat"), None);
        assert_eq!(parse_command("!Help"), None);
    }

    #[test]
    fn help_is_recognised_with_trailing_text() {
        assert_eq!(parse_command("!help"), Some(Command::Help));
        assert_eq!(parse_command("!help please"), Some(Command::Help));
        assert_eq!(extract_prompt("!help"), None);
    }

    #[test]
    fn any_whitespace_separates_prefix() {
        assert_eq!(
            parse_command("!prompt\tforest at dawn"),
            Some(Command::Prompt("forest at dawn".to_string()))
        );
        assert_eq!(
            parse_command("!P\nforest at dawn"),
            Some(Command::Prompt("forest at dawn".to_string()))
        );
    }

    #[test]
    fn plain_chat_is_not_a_command() {
        assert_eq!(parse_command("hello there"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("!"), None);
    }
}
