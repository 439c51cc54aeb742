//! Case-government lookup
//!
//! Some adjectives assign a case of their own to a dependent («відомий
//! кому» takes the dative). The classifier asks this collaborator whether a
//! token's valency licenses governing a given case; pipelines with a full
//! valency dictionary implement [`CaseGovernment`] over it, while
//! [`StaticCaseGovernment`] ships a small built-in table so the core is
//! usable stand-alone.

use crate::tag::Case;
use crate::token::Token;
use std::collections::{HashMap, HashSet};

/// Valency lookup: can this token govern a dependent in the given case?
pub trait CaseGovernment: Send + Sync {
    /// True when any reading's lemma licenses governing `case`
    fn governs(&self, token: &Token, case: Case) -> bool;
}

/// In-memory lemma → governed-cases table
#[derive(Debug, Clone, Default)]
pub struct StaticCaseGovernment {
    table: HashMap<String, HashSet<Case>>,
}

impl StaticCaseGovernment {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// A seed table of high-frequency governing adjectives
    pub fn with_defaults() -> Self {
        let mut government = Self::new();
        for lemma in [
            "відомий",
            "вдячний",
            "властивий",
            "вірний",
            "відданий",
            "подібний",
            "потрібний",
            "притаманний",
        ] {
            government.insert(lemma, Case::Dative);
        }
        government.insert("вартий", Case::Genitive);
        government.insert("повний", Case::Genitive);
        government
    }

    /// Record that `lemma` can govern `case`
    pub fn insert(&mut self, lemma: impl Into<String>, case: Case) {
        self.table.entry(lemma.into()).or_default().insert(case);
    }
}

impl CaseGovernment for StaticCaseGovernment {
    fn governs(&self, token: &Token, case: Case) -> bool {
        token
            .readings()
            .iter()
            .any(|r| self.table.get(&r.lemma).is_some_and(|cases| cases.contains(&case)))
    }
}
