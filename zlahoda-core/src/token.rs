//! Token data model for tagged sentences
//!
//! A sentence arrives from the upstream tagger as an ordered slice of
//! [`Token`]s. Each token keeps its original surface form, a cleaned form
//! used for lexical lookups, and one or more morphological readings.
//! Multiple readings model genuine ambiguity the disambiguator chose to
//! retain; classification never resolves that ambiguity, it only asks
//! whether *any* (or sometimes *every*) reading satisfies a pattern.

use smallvec::SmallVec;

/// One morphological analysis of a token
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenReading {
    /// Dictionary base form
    pub lemma: String,
    /// Raw morphological tag, e.g. `noun:anim:m:v_rod:prop`
    ///
    /// The tag stays a structured string; parsed views live in the `tag`
    /// module so partial and prefix patterns keep working for categories
    /// not modeled as fields.
    pub tag: String,
}

impl TokenReading {
    /// Create a reading from a lemma and a raw tag string
    pub fn new(lemma: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            tag: tag.into(),
        }
    }
}

/// One word or punctuation unit of a tagged sentence
///
/// Tokens are immutable inputs: the classifier and the search engine only
/// ever read them. The readings list is never empty; constructing a token
/// without readings degrades to a single unknown reading with an empty tag
/// rather than a panic, so malformed upstream output stays classifiable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    surface: String,
    clean: String,
    readings: SmallVec<[TokenReading; 2]>,
}

impl Token {
    /// Create a token; the clean form is derived from the surface form
    pub fn new(surface: impl Into<String>, readings: impl IntoIterator<Item = TokenReading>) -> Self {
        let surface = surface.into();
        let clean = clean_form(&surface);
        let mut readings: SmallVec<[TokenReading; 2]> = readings.into_iter().collect();
        if readings.is_empty() {
            readings.push(TokenReading::new("", ""));
        }
        Self {
            surface,
            clean,
            readings,
        }
    }

    /// Convenience constructor for a token with a single reading
    pub fn with_reading(
        surface: impl Into<String>,
        lemma: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self::new(surface, [TokenReading::new(lemma, tag)])
    }

    /// Original text, case preserved
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Lookup form: surface stripped of invisible formatting characters
    ///
    /// Case is preserved; rules that need case-insensitive comparison fold
    /// at the comparison site.
    pub fn clean(&self) -> &str {
        &self.clean
    }

    /// All retained morphological readings, in tagger order
    pub fn readings(&self) -> &[TokenReading] {
        &self.readings
    }

    /// The first (preferred) reading
    pub fn first_reading(&self) -> &TokenReading {
        &self.readings[0]
    }
}

/// Strip soft hyphens and zero-width formatting characters
fn clean_form(surface: &str) -> String {
    surface
        .chars()
        .filter(|c| !matches!(c, '\u{00AD}' | '\u{200B}' | '\u{FEFF}'))
        .collect()
}
