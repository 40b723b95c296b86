//! Invisible character cleaner
//!
//! Replaces a fixed set of invisible or non-printable code points with an
//! ordinary space. Text without any of them is returned borrowed, so a clean
//! input comes back byte-for-byte.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Code points replaced by [`clean_text`], with their Unicode names
pub const INVISIBLE_CHARS: [(char, &str); 10] = [
    ('\u{00A0}', "NO-BREAK SPACE"),
    ('\u{2007}', "FIGURE SPACE"),
    ('\u{202F}', "NARROW NO-BREAK SPACE"),
    ('\u{200B}', "ZERO WIDTH SPACE"),
    ('\u{200C}', "ZERO WIDTH NON-JOINER"),
    ('\u{200D}', "ZERO WIDTH JOINER"),
    ('\u{2060}', "WORD JOINER"),
    ('\u{FEFF}', "ZERO WIDTH NO-BREAK SPACE"),
    ('\u{2028}', "LINE SEPARATOR"),
    ('\u{2029}', "PARAGRAPH SEPARATOR"),
];

pub fn is_invisible(c: char) -> bool {
    INVISIBLE_CHARS.iter().any(|(invisible, _)| *invisible == c)
}

/// Per-code-point replacement counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    counts: BTreeMap<char, usize>,
}

impl CleanReport {
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// `(code point, name, count)` for every replaced character
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, char_name(*c), *n))
    }
}

fn char_name(c: char) -> &'static str {
    INVISIBLE_CHARS
        .iter()
        .find(|(invisible, _)| *invisible == c)
        .map(|(_, name)| *name)
        .unwrap_or("UNKNOWN")
}

pub fn clean_text(input: &str) -> (Cow<'_, str>, CleanReport) {
    if !input.chars().any(is_invisible) {
        return (Cow::Borrowed(input), CleanReport::default());
    }

    let mut report = CleanReport::default();
    let cleaned: String = input
        .chars()
        .map(|c| {
            if is_invisible(c) {
                *report.counts.entry(c).or_insert(0) += 1;
                ' '
            } else {
                c
            }
        })
        .collect();

    (Cow::Owned(cleaned), report)
}
