//! Parsing of raw completion output into discrete name strings.
//!
//! Models are instructed to return one name per line with no
//! decoration, but they frequently number or bullet the list anyway, so
//! the parser strips leading list markers before accepting a line.

/// Names must stay under this many characters; longer lines are almost
/// certainly prose, not names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Characters that may open a list marker run at the start of a line.
fn is_list_marker(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '-' | '*' | '•' | '.' | ')' | ']' | '}')
}

/// Split raw generated text into a cleaned, ordered list of names.
///
/// One-shot transformation: newline split, trim, strip any leading run
/// of list-marker characters, trim again, drop lines that end up empty
/// or at [`MAX_NAME_LENGTH`]+ characters. Duplicates and ordering are
/// preserved. An empty result is the caller's signal that the response
/// was unusable ("could not parse names"), not a silent success.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.trim_start_matches(is_list_marker).trim())
        .filter(|name| !name.is_empty() && name.chars().count() < MAX_NAME_LENGTH)
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_pass_through() {
        assert_eq!(parse_names("Luna\nMax\nRex"), vec!["Luna", "Max", "Rex"]);
    }

    #[test]
    fn numbered_and_bulleted_lines_are_stripped() {
        assert_eq!(
            parse_names("1. Luna\n2. Max\n\n-  Rex"),
            vec!["Luna", "Max", "Rex"]
        );
        assert_eq!(
            parse_names("* Comet\n• Nova\n3) Orbit\n12] Quasar"),
            vec!["Comet", "Nova", "Orbit", "Quasar"]
        );
    }

    #[test]
    fn blank_and_whitespace_lines_are_dropped() {
        assert_eq!(parse_names("Luna\n\n   \nMax"), vec!["Luna", "Max"]);
    }

    #[test]
    fn marker_only_lines_are_dropped() {
        assert_eq!(parse_names("1.\n---\nLuna"), vec!["Luna"]);
    }

    #[test]
    fn overlong_lines_are_dropped() {
        let long = "N".repeat(MAX_NAME_LENGTH);
        let input = format!("Luna\n{long}\nMax");
        assert_eq!(parse_names(&input), vec!["Luna", "Max"]);

        // One under the limit survives.
        let just_under = "N".repeat(MAX_NAME_LENGTH - 1);
        assert_eq!(parse_names(&just_under), vec![just_under.clone()]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        assert_eq!(
            parse_names("Luna\nMax\nLuna"),
            vec!["Luna", "Max", "Luna"]
        );
    }

    #[test]
    fn interior_digits_and_dots_survive() {
        // Only the leading marker run is stripped.
        assert_eq!(parse_names("Agent 47\nWeb 2.0 Names"), vec![
            "Agent 47",
            "Web 2.0 Names"
        ]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(parse_names("").is_empty());
        assert!(parse_names("\n\n").is_empty());
        assert!(parse_names("1.\n2.\n").is_empty());
    }
}
