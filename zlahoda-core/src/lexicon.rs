//! Shared lexical sets and orthography helpers
//!
//! Closed word lists consulted by more than one classifier rule, plus the
//! case-folding and capitalization tests the rules rely on. Single-use
//! whitelists stay next to the rule that owns them; what lives here is the
//! shared vocabulary. All sets are process-wide immutable values built once
//! on first use.

use crate::token::Token;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static GEO_SUFFIXES: OnceLock<HashSet<&'static str>> = OnceLock::new();
static NAME_HEADS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static INSERT_PARTICLES: OnceLock<Regex> = OnceLock::new();
static RESTRICTIVE_LYSHE: OnceLock<Regex> = OnceLock::new();

/// Loan-word street/city suffixes that follow a proper name
///
/// «на Лінкольн авеню», «на Бейкер стріт» — the capitalized name before
/// one of these keeps its foreign (non-inflected) form.
pub fn is_geo_suffix(word: &str) -> bool {
    let suffixes = GEO_SUFFIXES.get_or_init(|| {
        [
            "сіті", "ситі", "авеню", "стріт", "стрит", "штрасе", "штрассе", "сквер", "плаза",
        ]
        .into_iter()
        .collect()
    });
    suffixes.contains(word.to_lowercase().as_str())
}

/// Head words that introduce a personal name: «ім'я», «прізвище»
pub fn is_name_head(word: &str) -> bool {
    let heads = NAME_HEADS.get_or_init(|| ["ім'я", "прізвище"].into_iter().collect());
    heads.contains(word)
}

/// Discourse particles that can be inserted before the governed phrase
///
/// «бодай», «навіть», «нібито», «хоч» and kin: suffix families are kept as
/// one alternation because forms like «мовби(то)» are patterns, not
/// literals. The word must match in full.
pub fn is_insert_particle(lower: &str) -> bool {
    let pattern = INSERT_PARTICLES.get_or_init(|| {
        Regex::new(
            "^(бодай|буцім(то)?|геть|дедалі|десь|іще|ледве|мов(би(то)?)?|навіть|наче(б(то)?)?\
             |неначе(бто)?|немов(би(то)?)?|ніби(то)?|попросту|просто(-напросто)?|справді\
             |усього-на-всього|хай|хоча?|якраз|ж|би?)$",
        )
        .expect("insert-particle pattern is well-formed")
    });
    pattern.is_match(lower)
}

/// The restrictive particle family «лиш», «лише», «лишень»
pub fn is_restrictive_lyshe(word: &str) -> bool {
    let pattern = RESTRICTIVE_LYSHE
        .get_or_init(|| Regex::new("^лиш(е(нь)?)?$").expect("restrictive-particle pattern is well-formed"));
    pattern.is_match(word)
}

/// True when any reading's lemma is one of the candidates
pub fn has_lemma(token: &Token, candidates: &[&str]) -> bool {
    token
        .readings()
        .iter()
        .any(|r| candidates.contains(&r.lemma.as_str()))
}

/// Unicode case-insensitive string equality, without allocating
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// True when the first character is uppercase
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// True for a capitalized word: uppercase initial, lowercase second letter
pub fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => first.is_uppercase() && second.is_lowercase(),
        _ => false,
    }
}
