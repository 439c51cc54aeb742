//! Decision core for Ukrainian preposition-noun agreement checking
//!
//! A preposition governs the case of the noun phrase after it; an
//! agreement rule that walks tagged sentences flags the places where the
//! case does not match. Most of the difficulty is not in finding the
//! mismatches but in *not* flagging the constructions where the mismatch
//! is fine: calendar dates («на Купала»), foreign street names («на
//! Бейкер стріт»), inserted particles, adverbs, quantity expressions, and
//! a long tail of lexical idioms. This crate is that judgment call.
//!
//! # Architecture
//!
//! Two components, leaves first:
//!
//! - **Pattern search** ([`TokenSearch`], [`Condition`]): a bounded scan
//!   primitive over token sequences, direction-symmetric, with optional
//!   skip conditions.
//! - **Exception classifier** ([`ExceptionClassifier`]): three ordered
//!   rule batteries, one per morphological category of the governed word,
//!   each returning an [`Outcome`] — fire the check, suppress it, or skip
//!   ahead and re-check.
//!
//! The classifier consumes two injectable collaborators: a
//! [`CaseGovernment`] valency lookup and an optional [`ExceptionObserver`]
//! diagnostic sink. Everything is pure and read-only over the input
//! tokens, so a single classifier serves concurrent callers.
//!
//! # Example
//!
//! ```rust
//! use zlahoda_core::{ExceptionClassifier, Outcome, Token};
//!
//! let classifier = ExceptionClassifier::new();
//!
//! // «на (свято) Купала» — genitive after «на» is a valid date phrase
//! let tokens = [Token::with_reading("Купала", "Купало", "noun:anim:m:v_rod:prop")];
//! let prep = Token::with_reading("на", "на", "prep:rv_zna");
//!
//! let outcome = classifier.classify_inflected(&tokens, 0, &prep, &[]);
//! assert_eq!(outcome, Outcome::Exception);
//! ```

pub mod classifier;
pub mod error;
pub mod government;
pub mod lexicon;
pub mod search;
pub mod tag;
pub mod token;
pub mod trace;

pub use classifier::{ExceptionClassifier, Outcome};
pub use error::PatternError;
pub use government::{CaseGovernment, StaticCaseGovernment};
pub use search::{Condition, TokenSearch};
pub use tag::Case;
pub use token::{Token, TokenReading};
pub use trace::{ExceptionCounter, ExceptionEvent, ExceptionObserver, TracingObserver};
