//! Word list parsing and non-repeating random selection.

use log::{info, warn};

use crate::random::IndexRandom;

/// One vocabulary entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordPair {
    pub term: String,
    pub meaning: String,
}

/// Ordered word list plus the current selection.
///
/// Pairs are append-ordered by source line and never change after parsing;
/// only the selection index moves, and only through [`WordStore::advance`].
#[derive(Clone, Debug, Default)]
pub struct WordStore {
    pairs: Vec<WordPair>,
    current: Option<usize>,
}

impl WordStore {
    /// Parse `term,meaning` lines.
    ///
    /// Blank and whitespace-only lines are skipped, as is any line without
    /// two comma-separated fields. Only the first two fields of a line are
    /// consulted and both are trimmed. Never fails; an unusable input
    /// yields an empty store.
    pub fn parse(raw: &str) -> Self {
        let mut pairs = Vec::new();

        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(',');
            let (Some(term), Some(meaning)) = (fields.next(), fields.next()) else {
                continue;
            };

            pairs.push(WordPair {
                term: term.trim().to_owned(),
                meaning: meaning.trim().to_owned(),
            });
        }

        if pairs.is_empty() {
            warn!("word list is empty after parsing");
        } else {
            info!("loaded {} word pairs", pairs.len());
        }

        Self {
            pairs,
            current: None,
        }
    }

    /// Build a store from already-assembled pairs.
    pub fn from_pairs(pairs: Vec<WordPair>) -> Self {
        Self {
            pairs,
            current: None,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Currently selected pair, if any advance has happened yet.
    pub fn current(&self) -> Option<&WordPair> {
        self.current.map(|index| &self.pairs[index])
    }

    /// Zero-based index of the current selection.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Select a new pair at random and return it.
    ///
    /// With more than one pair the draw is rejection-sampled until it
    /// differs from the previous selection, so two consecutive advances
    /// never repeat. A single-pair store always selects that pair.
    pub fn advance(&mut self, rng: &mut impl IndexRandom) -> Option<&WordPair> {
        if self.pairs.is_empty() {
            warn!("advance requested on an empty word list");
            return None;
        }

        if self.pairs.len() == 1 {
            self.current = Some(0);
            return self.current();
        }

        let mut next = rng.next_index(self.pairs.len());
        while Some(next) == self.current {
            next = rng.next_index(self.pairs.len());
        }

        self.current = Some(next);
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{StdIndexRandom, mock::ScriptedRandom};

    fn pair(term: &str, meaning: &str) -> WordPair {
        WordPair {
            term: term.to_owned(),
            meaning: meaning.to_owned(),
        }
    }

    #[test]
    fn parses_lines_in_order() {
        let store = WordStore::parse("cat,貓\ndog,狗\n");
        assert_eq!(store.len(), 2);

        let mut first = store.clone();
        let selected = first.advance(&mut ScriptedRandom::new([0]));
        assert_eq!(selected, Some(&pair("cat", "貓")));

        let mut second = store;
        let selected = second.advance(&mut ScriptedRandom::new([1]));
        assert_eq!(selected, Some(&pair("dog", "狗")));
    }

    #[test]
    fn skips_blank_and_comma_less_lines() {
        let store = WordStore::parse("cat,貓\n\nfoo\ndog,狗");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn trims_field_whitespace() {
        let mut store = WordStore::parse("  cat , 貓 \n");
        let selected = store.advance(&mut ScriptedRandom::new([0]));
        assert_eq!(selected, Some(&pair("cat", "貓")));
    }

    #[test]
    fn consults_only_the_first_two_fields() {
        let mut store = WordStore::parse("run,跑,extra,fields");
        let selected = store.advance(&mut ScriptedRandom::new([0]));
        assert_eq!(selected, Some(&pair("run", "跑")));
    }

    #[test]
    fn empty_store_never_advances() {
        let mut store = WordStore::parse("\n   \nno-comma-here\n");
        let mut rng = ScriptedRandom::new(Vec::new());
        for _ in 0..5 {
            assert_eq!(store.advance(&mut rng), None);
            assert_eq!(store.current(), None);
            assert_eq!(store.current_index(), None);
        }
    }

    #[test]
    fn single_pair_store_always_selects_it() {
        let mut store = WordStore::parse("cat,貓");
        let mut rng = StdIndexRandom::seeded(3);
        for _ in 0..10 {
            assert_eq!(store.advance(&mut rng), Some(&pair("cat", "貓")));
            assert_eq!(store.current_index(), Some(0));
        }
    }

    #[test]
    fn consecutive_advances_never_repeat() {
        let mut store = WordStore::parse("a,1\nb,2\nc,3");
        let mut rng = StdIndexRandom::seeded(42);

        let mut previous = None;
        for _ in 0..1_000 {
            store.advance(&mut rng).unwrap();
            let index = store.current_index();
            assert_ne!(index, previous);
            previous = index;
        }
    }

    #[test]
    fn selection_is_uniform_across_eligible_indices() {
        let raw = "a,1\nb,2\nc,3\nd,4\ne,5";
        let mut store = WordStore::parse(raw);
        let mut rng = StdIndexRandom::seeded(7);

        let trials = 20_000usize;
        let mut counts = [0usize; 5];
        for _ in 0..trials {
            store.advance(&mut rng).unwrap();
            counts[store.current_index().unwrap()] += 1;
        }

        // Stationary distribution of the no-repeat walk is uniform; allow
        // 10% slack around the expected share.
        let expected = trials / counts.len();
        for (index, &count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "index {index} drawn {count} times, expected ~{expected}"
            );
        }
    }

    #[test]
    fn same_seed_reproduces_the_selection_sequence() {
        let raw = "a,1\nb,2\nc,3\nd,4";
        let mut first = WordStore::parse(raw);
        let mut second = WordStore::parse(raw);
        let mut rng_a = StdIndexRandom::seeded(99);
        let mut rng_b = StdIndexRandom::seeded(99);

        for _ in 0..50 {
            assert_eq!(
                first.advance(&mut rng_a).cloned(),
                second.advance(&mut rng_b).cloned()
            );
        }
    }
}
