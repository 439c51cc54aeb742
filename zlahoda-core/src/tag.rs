//! Predicates over morphological tags
//!
//! Tags come in as raw structured strings (`noun:anim:m:v_rod:prop`). This
//! module is the tag-pattern matcher the classifier consumes: regex matching
//! over a token's readings, prefix and substring tests, and extraction of
//! matched gender letters for follow-up patterns. All predicates are pure
//! and treat a malformed tag as a string that simply fails to match.

use crate::token::Token;
use regex::Regex;

/// Grammatical case, as encoded in tag case markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Locative,
    Vocative,
}

impl Case {
    /// The marker this case carries inside a morphological tag
    pub fn marker(self) -> &'static str {
        match self {
            Case::Nominative => "v_naz",
            Case::Genitive => "v_rod",
            Case::Dative => "v_dav",
            Case::Accusative => "v_zna",
            Case::Instrumental => "v_oru",
            Case::Locative => "v_mis",
            Case::Vocative => "v_kly",
        }
    }
}

/// True when any reading's tag matches the pattern
pub fn any_reading_matches(token: &Token, pattern: &Regex) -> bool {
    token.readings().iter().any(|r| pattern.is_match(&r.tag))
}

/// True when any reading's tag starts with the prefix
pub fn any_tag_starts_with(token: &Token, prefix: &str) -> bool {
    token.readings().iter().any(|r| r.tag.starts_with(prefix))
}

/// True when any reading's tag starts with `prefix` and the remainder does
/// not continue with `veto`
///
/// Covers the two source patterns the regex engine cannot express without
/// lookahead: a nominative without the pronoun subtype, and an adverb that
/// is not a participial adverb.
pub fn any_tag_starts_with_except(token: &Token, prefix: &str, veto: &str) -> bool {
    token.readings().iter().any(|r| {
        r.tag
            .strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with(veto))
    })
}

/// True when any reading's tag contains the fragment
pub fn any_tag_contains(token: &Token, part: &str) -> bool {
    token.readings().iter().any(|r| r.tag.contains(part))
}

/// True when every reading's tag contains the fragment
pub fn all_tags_contain(token: &Token, part: &str) -> bool {
    token.readings().iter().all(|r| r.tag.contains(part))
}

/// Collect the distinct gender letters of the readings matching `pattern`
///
/// Returns `None` when no reading matches or no matching reading carries a
/// gender component. The result is a string of unique letters (`"mf"`),
/// ready to be tested against a neighboring token's tags.
pub fn genders_matching(token: &Token, pattern: &Regex) -> Option<String> {
    let mut genders = String::new();
    for reading in token.readings() {
        if !pattern.is_match(&reading.tag) {
            continue;
        }
        if let Some(g) = gender_component(&reading.tag) {
            if !genders.contains(g) {
                genders.push(g);
            }
        }
    }
    if genders.is_empty() {
        None
    } else {
        Some(genders)
    }
}

/// The single-letter gender/number component of a tag, if present
fn gender_component(tag: &str) -> Option<char> {
    tag.split(':')
        .find(|part| matches!(*part, "m" | "f" | "n" | "p" | "s"))
        .and_then(|part| part.chars().next())
}
