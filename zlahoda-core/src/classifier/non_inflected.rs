//! Battery for candidates that do not inflect

use super::{patterns, ExceptionClassifier, Outcome};
use crate::lexicon;
use crate::tag::{self, Case};
use crate::token::Token;

impl ExceptionClassifier {
    /// Classify a candidate that does not inflect for case at all
    pub fn classify_non_inflected(
        &self,
        tokens: &[Token],
        index: usize,
        _prep: &Token,
        _expected_tags: &[String],
    ) -> Outcome {
        let Some(token) = tokens.get(index) else {
            return Outcome::None;
        };
        let clean = token.clean();

        // «бодай», «навіть», «нібито» — inserted particles step aside
        if tag::any_tag_starts_with(token, "part")
            && lexicon::is_insert_particle(&clean.to_lowercase())
        {
            return Outcome::Skip(0);
        }

        if lexicon::is_restrictive_lyshe(clean) {
            return Outcome::Skip(0);
        }

        if tag::any_tag_starts_with_except(token, "adv", "p") {
            // «по швидко напруженим рукам» — the adverb grades the
            // adjective after it, so the check moves on
            if index + 1 < tokens.len()
                && tag::any_tag_starts_with(&tokens[index + 1], "adj")
                && tag::all_tags_contain(token, "adv")
            {
                return Outcome::Skip(0);
            }

            return self.exception("noninfl.adverb", tokens, index);
        }

        if tokens.len() > index + 1 {
            // «на лише їм відомому ...», «на вже всім відомому ...»
            if tag::any_reading_matches(token, patterns::dative_pronoun()) {
                let next = &tokens[index + 1];
                if tag::any_tag_starts_with(next, "adj")
                    && self.government().governs(next, Case::Dative)
                {
                    return Outcome::Skip(1);
                }

                if tokens.len() > index + 2
                    && tag::any_tag_starts_with(next, "adv")
                    && tag::any_tag_starts_with(&tokens[index + 2], "adj")
                    && self.government().governs(&tokens[index + 2], Case::Dative)
                {
                    return Outcome::Skip(2);
                }
            }
        }

        if tokens.len() > index + 2 {
            // «на нічого не вартий папірець»
            if clean == "нічого"
                && tokens[index + 1].surface() == "не"
                && tag::any_tag_starts_with(&tokens[index + 2], "adj")
            {
                return Outcome::Skip(1);
            }
        }

        Outcome::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenReading;

    fn tok(surface: &str, tag: &str) -> Token {
        Token::with_reading(surface, surface, tag)
    }

    fn prep(surface: &str) -> Token {
        tok(surface, "prep")
    }

    fn classify(tokens: &[Token], index: usize) -> Outcome {
        ExceptionClassifier::new().classify_non_inflected(tokens, index, &prep("на"), &[])
    }

    #[test]
    fn test_insert_particle_defers() {
        assert_eq!(classify(&[tok("навіть", "part")], 0), Outcome::Skip(0));
        assert_eq!(classify(&[tok("нібито", "part")], 0), Outcome::Skip(0));
        // the particle reading is required, not just the word
        assert_eq!(classify(&[tok("геть", "intj")], 0), Outcome::None);
    }

    #[test]
    fn test_restrictive_lyshe_defers_without_tag() {
        assert_eq!(classify(&[tok("лише", "part")], 0), Outcome::Skip(0));
        assert_eq!(classify(&[tok("лишень", "conj")], 0), Outcome::Skip(0));
    }

    #[test]
    fn test_plain_adverb_is_exempt() {
        assert_eq!(classify(&[tok("швидко", "adv:compb")], 0), Outcome::Exception);
    }

    #[test]
    fn test_participial_adverb_is_not_exempt() {
        assert_eq!(classify(&[tok("стоячи", "advp:imperf")], 0), Outcome::None);
    }

    #[test]
    fn test_adverb_grading_following_adjective_defers() {
        // «по швидко напруженим рукам»
        let tokens = [tok("швидко", "adv:compb"), tok("напруженим", "adj:p:v_dav")];
        assert_eq!(classify(&tokens, 0), Outcome::Skip(0));

        // a token with a non-adverb reading keeps the outright exemption
        let ambiguous = [
            Token::new(
                "тихо",
                [
                    TokenReading::new("тихо", "adv:compb"),
                    TokenReading::new("тихий", "adj:n:v_naz"),
                ],
            ),
            tok("напруженим", "adj:p:v_dav"),
        ];
        assert_eq!(classify(&ambiguous, 0), Outcome::Exception);
    }

    #[test]
    fn test_dative_pronoun_before_governing_adjective() {
        // «на лише їм відомому ...»
        let tokens = [
            tok("їм", "noun:anim:p:v_dav:&pron:pers"),
            tok("відомому", "adj:m:v_dav"),
        ];
        assert_eq!(classify(&tokens, 0), Outcome::Skip(1));

        // the adjective must actually govern the dative
        let plain = [
            tok("їм", "noun:anim:p:v_dav:&pron:pers"),
            tok("зеленому", "adj:m:v_dav"),
        ];
        assert_eq!(classify(&plain, 0), Outcome::None);
    }

    #[test]
    fn test_dative_pronoun_adverb_adjective_skips_two() {
        // «на вже всім відомому ...»
        let tokens = [
            tok("всім", "noun:anim:p:v_dav:&pron:gen"),
            tok("добре", "adv"),
            tok("відомому", "adj:m:v_dav"),
        ];
        assert_eq!(classify(&tokens, 0), Outcome::Skip(2));

        // without room for the adjective the deferral cannot apply
        let short = [tok("всім", "noun:anim:p:v_dav:&pron:gen"), tok("добре", "adv")];
        assert_eq!(classify(&short, 0), Outcome::None);
    }

    #[test]
    fn test_nichoho_ne_adjective_defers() {
        // «на нічого не вартий папірець»
        let tokens = [
            tok("нічого", "noun:unanim:n:v_rod:&pron:neg"),
            tok("не", "part"),
            tok("вартий", "adj:m:v_naz"),
        ];
        assert_eq!(classify(&tokens, 0), Outcome::Skip(1));

        let short = [tok("нічого", "noun:unanim:n:v_rod:&pron:neg"), tok("не", "part")];
        assert_eq!(classify(&short, 0), Outcome::None);
    }

    #[test]
    fn test_unrelated_token_is_none() {
        assert_eq!(classify(&[tok("№", "punct")], 0), Outcome::None);
    }
}
