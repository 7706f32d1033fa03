//! First-match keyword classification.
//!
//! Each feature declares an ordered table of `(category, keywords)` rules.
//! Classification is plain substring containment against the lowercased
//! input; the first rule with any hit wins. Ties resolve by declaration
//! order, not by best or longest match.

/// Ordered keyword rules mapping free text to a category.
///
/// The rule slices live in static tables, so the category type must be
/// `'static` too.
#[derive(Debug)]
pub struct KeywordTable<C: Copy + 'static> {
    rules: &'static [(C, &'static [&'static str])],
    default: C,
}

impl<C: Copy + 'static> KeywordTable<C> {
    pub const fn new(rules: &'static [(C, &'static [&'static str])], default: C) -> Self {
        Self { rules, default }
    }

    /// The first category whose keyword list has a substring match in `text`.
    /// Returns the default category when nothing matches.
    pub fn classify(&self, text: &str) -> C {
        let lowered = text.to_lowercase();
        for (category, keywords) in self.rules {
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                return *category;
            }
        }
        self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Kind {
        Fruit,
        Metal,
        Other,
    }

    const TABLE: KeywordTable<Kind> = KeywordTable::new(
        &[
            (Kind::Fruit, &["apple", "pear"]),
            (Kind::Metal, &["iron", "apple iron"]),
        ],
        Kind::Other,
    );

    #[test]
    fn first_match_wins() {
        assert_eq!(TABLE.classify("my apple broke"), Kind::Fruit);
        assert_eq!(TABLE.classify("iron deficiency"), Kind::Metal);
    }

    #[test]
    fn declaration_order_resolves_ties() {
        // Contains keywords from both rules; the earlier rule wins.
        assert_eq!(TABLE.classify("apple iron"), Kind::Fruit);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(TABLE.classify("PEAR-shaped"), Kind::Fruit);
    }

    #[test]
    fn substring_matches_inside_words() {
        // Containment, not word-boundary matching.
        assert_eq!(TABLE.classify("pineapple"), Kind::Fruit);
    }

    #[test]
    fn no_match_yields_default() {
        assert_eq!(TABLE.classify("nothing relevant"), Kind::Other);
        assert_eq!(TABLE.classify(""), Kind::Other);
    }
}
