//! Heuristic spam detection for free-text contact submissions.
//!
//! Checks run in a fixed order and the first match wins: keyword
//! denylist, link count, repeated characters, uppercase ratio. Purely
//! functional; callers decide what to do with a flagged submission.

use serde::Serialize;

/// Case-insensitive substrings that flag a submission outright.
const SPAM_KEYWORDS: &[&str] = &[
    "bitcoin",
    "crypto investment",
    "viagra",
    "casino",
    "lottery",
    "click here",
    "free money",
    "earn money fast",
    "work from home",
    "seo services",
    "buy followers",
];

/// More than this many links across all fields flags the submission.
const MAX_LINKS: usize = 2;

/// A single character repeated this many times consecutively flags it.
const REPEAT_THRESHOLD: usize = 5;

/// Uppercase ratio above this flags messages longer than
/// [`UPPERCASE_MIN_LEN`] characters.
const UPPERCASE_RATIO: f64 = 0.5;
const UPPERCASE_MIN_LEN: usize = 10;

/// The contact-form fields the heuristics look at.
#[derive(Debug, Clone, Default)]
pub struct SpamInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

/// Outcome of a spam check. `reason` is set only when `is_spam` is true.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpamVerdict {
    pub is_spam: bool,
    pub reason: Option<String>,
}

impl SpamVerdict {
    fn clean() -> Self {
        Self {
            is_spam: false,
            reason: None,
        }
    }

    fn flagged(reason: &str) -> Self {
        Self {
            is_spam: true,
            reason: Some(reason.to_string()),
        }
    }
}

/// Run the heuristics in order. The first triggered check decides.
pub fn detect_spam(input: &SpamInput<'_>) -> SpamVerdict {
    let combined = format!(
        "{} {} {} {}",
        input.name, input.email, input.subject, input.message
    );
    let lowered = combined.to_lowercase();

    if SPAM_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return SpamVerdict::flagged("Message contains known spam keywords");
    }

    if count_links(&lowered) > MAX_LINKS {
        return SpamVerdict::flagged("Message contains too many links");
    }

    if has_repeated_run(&combined, REPEAT_THRESHOLD) {
        return SpamVerdict::flagged("Message contains excessive repeated characters");
    }

    if input.message.chars().count() > UPPERCASE_MIN_LEN
        && uppercase_ratio(input.message) > UPPERCASE_RATIO
    {
        return SpamVerdict::flagged("Message is written mostly in capital letters");
    }

    SpamVerdict::clean()
}

/// Count `http://` and `https://` occurrences in already-lowercased text.
fn count_links(lowered: &str) -> usize {
    // `https://` contains `http` but not `http://`, so count separately.
    lowered.matches("http://").count() + lowered.matches("https://").count()
}

/// True when any single character repeats `threshold`+ times in a row.
fn has_repeated_run(text: &str, threshold: usize) -> bool {
    let mut run = 0usize;
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if Some(c) == previous {
            run += 1;
            if run >= threshold {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

/// Ratio of uppercase letters to total character count.
fn uppercase_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
