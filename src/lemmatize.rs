//! Dictionary-form reduction for English nouns.
//!
//! The rules follow WordNet's noun detachment table, but without a lexicon
//! to confirm candidates: irregular forms come from a fixed exception table,
//! and words that only look plural are guarded by suffix and by a short list
//! of invariant nouns. Lookup is case-sensitive, so capitalized or
//! non-alphabetic tokens pass through untouched.

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("criteria", "criterion"),
    ("data", "datum"),
    ("dice", "die"),
    ("elves", "elf"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("phenomena", "phenomenon"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("thieves", "thief"),
    ("us", "u"),
    ("wives", "wife"),
    ("wolves", "wolf"),
];

const INVARIANT: &[&str] = &[
    "amen",
    "abdomen",
    "news",
    "omen",
    "ourselves",
    "series",
    "species",
    "specimen",
    "themselves",
    "yourselves",
];

const DETACH: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("zzes", "zz"),
    ("xes", "x"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
];

#[must_use]
pub fn lemmatize(word: &str) -> String {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return word.to_owned();
    }
    if INVARIANT.contains(&word) {
        return word.to_owned();
    }
    if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
        return (*lemma).to_owned();
    }

    for (suffix, replacement) in DETACH {
        if let Some(stem) = word.strip_suffix(suffix)
            && !stem.is_empty()
        {
            return format!("{stem}{replacement}");
        }
    }

    if let Some(stem) = word.strip_suffix("ies")
        && !stem.is_empty()
    {
        // "ties" -> "tie" but "stories" -> "story"
        return if stem.len() == 1 {
            format!("{stem}ie")
        } else {
            format!("{stem}y")
        };
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_owned();
    }
    if let Some(stem) = word.strip_suffix('s')
        && !stem.is_empty()
    {
        return stem.to_owned();
    }

    word.to_owned()
}

#[cfg(test)]
mod tests {
    use super::lemmatize;

    #[test]
    fn regular_plurals_lose_their_suffix() {
        assert_eq!(lemmatize("dragons"), "dragon");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("churches"), "church");
        assert_eq!(lemmatize("wishes"), "wish");
        assert_eq!(lemmatize("glasses"), "glass");
        assert_eq!(lemmatize("stories"), "story");
        assert_eq!(lemmatize("ties"), "tie");
        assert_eq!(lemmatize("firemen"), "fireman");
    }

    #[test]
    fn irregular_and_invariant_nouns() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("wolves"), "wolf");
        assert_eq!(lemmatize("series"), "series");
        assert_eq!(lemmatize("news"), "news");
    }

    #[test]
    fn words_that_only_look_plural_are_kept() {
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("virus"), "virus");
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("s"), "s");
    }

    #[test]
    fn stopword_forms_match_dictionary_quirks() {
        assert_eq!(lemmatize("was"), "wa");
        assert_eq!(lemmatize("has"), "ha");
        assert_eq!(lemmatize("does"), "doe");
        assert_eq!(lemmatize("as"), "a");
        assert_eq!(lemmatize("us"), "u");
        assert_eq!(lemmatize("is"), "is");
    }

    #[test]
    fn case_and_punctuation_pass_through() {
        assert_eq!(lemmatize("Dragons"), "Dragons");
        assert_eq!(lemmatize("wizards,"), "wizards,");
        assert_eq!(lemmatize("'s'"), "'s'");
        assert_eq!(lemmatize(""), "");
    }
}
