//! Battery for inflected candidates whose case mismatches the preposition

use super::{genitive_noun_gender_in, patterns, ExceptionClassifier, Outcome};
use crate::lexicon;
use crate::tag;
use crate::token::Token;

impl ExceptionClassifier {
    /// Classify a candidate that inflects but stands in an unexpected case
    ///
    /// `expected_tags` is the set of tag patterns the calling rule accepts
    /// for the governed word; the current battery keys on lexical identity
    /// and neighboring tags only, so the parameter is carried for the
    /// shared signature.
    pub fn classify_inflected(
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

        // «на дивом уцілілій техніці»
        if token.surface() == "дивом" {
            return Outcome::Skip(0);
        }

        // «за двісті метрів»
        if tag::any_reading_matches(token, patterns::numeral_nominative()) {
            return self.exception("infl.numeral-nominative", tokens, index);
        }

        // «в президенти», «на гості»
        if matches!(prep_lc.as_str(), "в" | "у" | "межи" | "між" | "на")
            && tag::any_tag_starts_with_except(token, "noun:anim:p:v_naz", ":&")
        {
            return self.exception("infl.animate-plural-nominative", tokens, index);
        }

        if prep_lc == "на" {
            // «на (свято) Купала», «на (вулиці) Мазепи», «на (вулиці) Тюльпанів»
            let named_genitive = lexicon::starts_uppercase(clean)
                && tag::any_reading_matches(token, patterns::genitive_noun());
            // «поміняти ім'я на Захар», «поміняв Іван на Петро»
            let renamed_person = tag::any_reading_matches(token, patterns::personal_name_flag())
                && ((index > 1 && lexicon::is_name_head(tokens[index - 2].surface()))
                    || (index > 2 && lexicon::is_name_head(&tokens[index - 3].first_reading().lemma)));
            if named_genitive || renamed_person {
                return self.exception("infl.proper-name-genitive", tokens, index);
            }

            // «на манер»
            if clean == "манер" {
                return self.exception("infl.idiom-maner", tokens, index);
            }
            // «на біс»
            if lexicon::eq_ignore_case(clean, "біс") {
                return self.exception("infl.idiom-bis", tokens, index);
            }
        }

        // «при їх виборі» — the governed noun is further on
        match prep_lc.as_str() {
            "при" if clean == "їх" => return Outcome::Skip(0),
            "з" if clean == "рана" => {
                return self.exception("infl.whitelist-z", tokens, index);
            }
            "від" if lexicon::eq_ignore_case(clean, "а")
                || matches!(clean, "рана" | "корки" | "мала") =>
            {
                return self.exception("infl.whitelist-vid", tokens, index);
            }
            "до" if lexicon::eq_ignore_case(clean, "я")
                || matches!(clean, "корки" | "велика") =>
            {
                return self.exception("infl.whitelist-do", tokens, index);
            }
            _ => {}
        }

        if tokens.len() > index + 1 {
            let next = &tokens[index + 1];

            // «на Бейкер стріт»
            if lexicon::is_capitalized(clean) && lexicon::is_geo_suffix(next.surface()) {
                return self.exception("infl.foreign-street-name", tokens, index);
            }

            // «на мінус 5», «на плюс $10»
            if (tag::any_tag_starts_with(next, "num") || next.surface() == "$")
                && matches!(clean, "мінус" | "плюс" | "мінімум" | "максимум")
            {
                return self.exception("infl.quantifier-adverb", tokens, index);
            }

            // «на мохом стеленому дні» — пропускаємо «мохом»
            if tag::any_reading_matches(token, patterns::instrumental_noun())
                && tag::any_tag_contains(next, "adjp:pasv")
            {
                return Outcome::Skip(1);
            }

            if clean == "святая" && next.surface() == "святих" {
                return self.exception("infl.idiom-sviataia", tokens, index);
            }

            // «років 10», «відсотки 3-4»
            if matches!(prep_lc.as_str(), "через" | "на")
                && (tag::any_tag_starts_with(token, "noun:inanim:p:v_naz")
                    || tag::any_tag_starts_with(token, "noun:inanim:p:v_rod"))
                && (next.first_reading().tag.starts_with("num")
                    || (index + 2 < tokens.len()
                        && lexicon::has_lemma(next, &["зо", "з", "із"])
                        && tag::any_tag_contains(&tokens[index + 2], "num")))
            {
                return self.exception("infl.inverted-numeral", tokens, index);
            }

            // «з вами ж», «за тобою ж»
            if matches!(clean, "вами" | "тобою" | "їми") && next.surface().starts_with("ж") {
                return Outcome::Skip(0);
            }
            // «до собі подібних»
            if matches!(clean, "собі" | "йому" | "їм") && next.surface().starts_with("подібн") {
                return Outcome::Skip(0);
            }
            // «з усім відомими»
            if matches!(clean, "усім" | "всім") && next.surface().starts_with("відом") {
                return Outcome::Skip(0);
            }

            // «до схід сонця»
            if prep_lc == "до" && clean == "схід" && next.surface() == "сонця" {
                return self.exception("infl.idiom-skhid-sontsia", tokens, index);
            }

            // «від АТ «Первомайськ»
            if next.surface() == "«" && token.first_reading().tag.contains(":abbr") {
                return self.exception("infl.abbreviation-quote", tokens, index);
            }

            if tokens.len() > index + 2 {
                // «спиралося на місячної давнини рішення»
                if let Some(genders) = tag::genders_matching(token, patterns::genitive_adjective())
                {
                    if genitive_noun_gender_in(next, &genders) {
                        return Outcome::Skip(1);
                    }
                }

                // «нікому не відома компанія»
                if matches!(clean, "нікому" | "ніким" | "нічим" | "нічому")
                    && next.surface() == "не"
                {
                    return Outcome::Skip(0);
                }
            }
        }

        Outcome::None
    }
}
