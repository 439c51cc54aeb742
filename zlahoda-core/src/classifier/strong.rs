//! Battery for candidates under case-insensitive ("strong") government

use super::{patterns, ExceptionClassifier, Outcome};
use crate::search::{Condition, TokenSearch};
use crate::tag;
use crate::token::Token;

impl ExceptionClassifier {
    /// Classify a candidate governed by a preposition whose requirement is
    /// strong enough that the candidate's own case cannot satisfy it
    pub fn classify_strong(
        &self,
        tokens: &[Token],
        index: usize,
        prep: &Token,
        _expected_tags: &[String],
    ) -> Outcome {
        let Some(token) = tokens.get(index) else {
            return Outcome::None;
        };
        let clean = token.clean();
        let prep_lc = prep.clean().to_lowercase();
        let lower = clean.to_lowercase();

        // «не» binds to the adverb or adjective after it
        if index + 1 < tokens.len()
            && token.surface() == "не"
            && tag::any_tag_starts_with(&tokens[index + 1], "ad")
        {
            return Outcome::Skip(0);
        }

        if token.surface() == "дуже" {
            return Outcome::Skip(0);
        }

        // «до навпаки», «до сьогодні»
        if prep_lc == "до"
            && matches!(
                lower.as_str(),
                "навпаки" | "сьогодні" | "тепер" | "нині" | "вчора" | "учора"
            )
        {
            return self.exception("strong.time-adverb-do", tokens, index);
        }

        // «на сьогодні», «від завтра»
        if matches!(prep_lc.as_str(), "на" | "від")
            && matches!(
                lower.as_str(),
                "сьогодні" | "тепер" | "нині" | "вчора" | "учора" | "завтра" | "зараз"
            )
        {
            return self.exception("strong.time-adverb-na-vid", tokens, index);
        }

        // «за сьогодні»
        if prep_lc == "за" && matches!(lower.as_str(), "сьогодні" | "вчора" | "учора") {
            return self.exception("strong.time-adverb-za", tokens, index);
        }

        if prep_lc == "в" && lower == "нікуди" {
            return self.exception("strong.nikudy", tokens, index);
        }

        // «замість вже самому засвоїти»
        if prep_lc == "замість" {
            let infinitive_ahead = TokenSearch::new()
                .target(Condition::tag(patterns::infinitive_verb().clone()))
                .limit(4)
                .skip(Condition::clean("можна").negate());
            if infinitive_ahead.find_after(tokens, index).is_some() {
                return self.exception("strong.zamist-infinitive", tokens, index);
            }
        }

        if matches!(lower.as_str(), "чимало" | "кілька" | "декілька" | "якомога") {
            return self.exception("strong.quantity-adverb", tokens, index);
        }

        // «Усупереч не те що лихим ...»
        if TokenSearch::new()
            .phrase("не те")
            .find_before(tokens, index)
            .is_some()
        {
            return self.exception("strong.ne-te", tokens, index);
        }

        Outcome::None
    }
}
