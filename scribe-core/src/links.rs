//! URL detection for clickable links.

use serde::{Deserialize, Serialize};
use std::ops::Range;

const PREFIXES: [&str; 5] = ["http://", "https://", "ftp://", "mailto:", "www."];

/// A detected URL and its character range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub range: Range<usize>,
    pub url: String,
}

/// Find URLs in `text`. Ranges are character indices.
///
/// A URL is a whitespace-delimited word starting with a known scheme or
/// `www.`; surrounding brackets, quotes and trailing punctuation are not
/// part of it.
pub fn detect_links(text: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut word: Vec<char> = Vec::new();
    let mut word_start = 0;

    for (index, c) in text.chars().chain(std::iter::once(' ')).enumerate() {
        if c.is_whitespace() {
            if let Some(link) = link_in_word(&word, word_start) {
                links.push(link);
            }
            word.clear();
            word_start = index + 1;
        } else {
            word.push(c);
        }
    }

    links
}

fn link_in_word(word: &[char], offset: usize) -> Option<Link> {
    let lead = word
        .iter()
        .take_while(|c| matches!(c, '(' | '<' | '[' | '"' | '\''))
        .count();
    let mut end = word.len();
    while end > lead && matches!(word[end - 1], '.' | ',' | ';' | ':' | '!' | '?' | ')' | '>' | ']' | '"' | '\'') {
        end -= 1;
    }

    let candidate: String = word[lead..end].iter().collect();
    let lower = candidate.to_lowercase();
    let prefix = PREFIXES.iter().find(|p| lower.starts_with(*p))?;
    if candidate.chars().count() <= prefix.len() {
        return None;
    }

    Some(Link {
        range: offset + lead..offset + end,
        url: candidate,
    })
}
