//! Exception classifier for preposition case-agreement checks
//!
//! The surrounding rule walks a sentence, and at each candidate governed
//! word asks: should the agreement violation it is about to report actually
//! fire? The answer comes from one of three batteries, chosen by the
//! morphological category of the candidate:
//!
//! - [`classify_inflected`] — the word inflects but its case does not match
//!   the preposition's requirement;
//! - [`classify_strong`] — the preposition governs its case strongly enough
//!   that case never matters for the candidate;
//! - [`classify_non_inflected`] — the word does not inflect at all.
//!
//! Each battery is an ordered sequence of independent rule checks with
//! first-match-wins semantics. The order is part of the contract: narrow
//! lexical exceptions sit above broad category exemptions that would
//! otherwise shadow them. A battery that matches nothing returns
//! [`Outcome::None`] and the caller reports the violation.
//!
//! [`classify_inflected`]: ExceptionClassifier::classify_inflected
//! [`classify_strong`]: ExceptionClassifier::classify_strong
//! [`classify_non_inflected`]: ExceptionClassifier::classify_non_inflected

mod inflected;
mod non_inflected;
mod strong;

use crate::government::{CaseGovernment, StaticCaseGovernment};
use crate::token::Token;
use crate::trace::{ExceptionEvent, ExceptionObserver};
use regex::Regex;
use std::sync::{Arc, OnceLock};

/// Verdict for one candidate position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// No exception applies; the caller reports the agreement violation
    None,
    /// A recognized valid construction; the caller suppresses the violation
    Exception,
    /// The governed word is further on; advance the scan by `n` extra
    /// tokens before re-checking
    Skip(usize),
}

impl Outcome {
    /// True for [`Outcome::Exception`]
    pub fn is_exception(&self) -> bool {
        matches!(self, Outcome::Exception)
    }

    /// The deferral distance, when this is a skip
    pub fn skip_distance(&self) -> Option<usize> {
        match self {
            Outcome::Skip(n) => Some(*n),
            _ => None,
        }
    }
}

/// The classification entry point
///
/// Holds the injected collaborators: a case-government lookup and an
/// optional diagnostic observer. Classification itself is pure and keeps
/// no state between calls, so one classifier can serve any number of
/// threads.
pub struct ExceptionClassifier {
    government: Arc<dyn CaseGovernment>,
    observer: Option<Arc<dyn ExceptionObserver>>,
}

impl ExceptionClassifier {
    /// Classifier with the built-in case-government table and no observer
    pub fn new() -> Self {
        Self {
            government: Arc::new(StaticCaseGovernment::with_defaults()),
            observer: None,
        }
    }

    /// Classifier over a caller-supplied case-government lookup
    pub fn with_government(government: Arc<dyn CaseGovernment>) -> Self {
        Self {
            government,
            observer: None,
        }
    }

    /// Install a diagnostic observer for suppressed checks
    pub fn with_observer(mut self, observer: Arc<dyn ExceptionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Produce an [`Outcome::Exception`], reporting it to the observer
    fn exception(&self, rule: &'static str, tokens: &[Token], index: usize) -> Outcome {
        if let Some(observer) = &self.observer {
            observer.record(&ExceptionEvent {
                rule,
                index,
                token: tokens[index].clean(),
            });
        }
        Outcome::Exception
    }

    fn government(&self) -> &dyn CaseGovernment {
        self.government.as_ref()
    }
}

impl Default for ExceptionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiled built-in rule patterns, initialized on first use
pub(crate) mod patterns {
    use super::*;

    macro_rules! rule_pattern {
        ($name:ident, $pattern:literal) => {
            pub(crate) fn $name() -> &'static Regex {
                static PATTERN: OnceLock<Regex> = OnceLock::new();
                PATTERN.get_or_init(|| Regex::new($pattern).expect("built-in rule pattern"))
            }
        };
    }

    rule_pattern!(numeral_nominative, "^numr:.:v_naz");
    rule_pattern!(genitive_noun, "^noun.*?:.:v_rod");
    rule_pattern!(personal_name_flag, "[fl]name");
    rule_pattern!(instrumental_noun, "^noun.*?:v_oru");
    rule_pattern!(genitive_adjective, "^adj:[mfn]:v_rod");
    rule_pattern!(genitive_noun_gendered, "^noun.*?:([mfnps]):v_rod");
    rule_pattern!(infinitive_verb, "^verb.*:inf");
    rule_pattern!(dative_pronoun, "^noun:(un)?anim:.:v_dav:&pron");
}

/// True when some reading is a genitive noun whose gender letter is in
/// `genders`
pub(crate) fn genitive_noun_gender_in(token: &Token, genders: &str) -> bool {
    token.readings().iter().any(|r| {
        patterns::genitive_noun_gendered()
            .captures(&r.tag)
            .and_then(|captures| captures.get(1))
            .is_some_and(|gender| genders.contains(gender.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Token;

    #[test]
    fn test_outcome_accessors() {
        assert!(Outcome::Exception.is_exception());
        assert!(!Outcome::None.is_exception());
        assert_eq!(Outcome::Skip(2).skip_distance(), Some(2));
        assert_eq!(Outcome::Exception.skip_distance(), None);
    }

    #[test]
    fn test_genitive_noun_gender_in() {
        let noun = Token::with_reading("давнини", "давнина", "noun:inanim:f:v_rod");
        assert!(genitive_noun_gender_in(&noun, "f"));
        assert!(genitive_noun_gender_in(&noun, "mf"));
        assert!(!genitive_noun_gender_in(&noun, "mn"));
    }

    #[test]
    fn test_out_of_range_index_is_none() {
        let classifier = ExceptionClassifier::new();
        let tokens = [Token::with_reading("до", "до", "prep")];
        let prep = Token::with_reading("до", "до", "prep");
        assert_eq!(
            classifier.classify_inflected(&tokens, 5, &prep, &[]),
            Outcome::None
        );
        assert_eq!(
            classifier.classify_strong(&tokens, 5, &prep, &[]),
            Outcome::None
        );
        assert_eq!(
            classifier.classify_non_inflected(&tokens, 5, &prep, &[]),
            Outcome::None
        );
    }
}
