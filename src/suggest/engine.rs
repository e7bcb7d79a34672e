use derive_new::new;
use metrics::counter;
use tracing::{debug, trace};

use crate::alphabet::validate;
use crate::error::Result;
use crate::suggest::edits::EditFamily;
use crate::suggest::oracle::Oracle;
use crate::wordlist::{Index, Wordlist};

/// Spelling suggestions at edit distance one, checked against an [`Oracle`].
#[derive(new)]
pub struct SuggestionEngine<'a, O: Oracle> {
    oracle: &'a O,
}

impl<'a, O: Oracle> SuggestionEngine<'a, O> {
    /// Every word accepted by the oracle that is one deletion, insertion,
    /// substitution or adjacent transposition away from `word`.
    ///
    /// Neither `word` nor the empty word is ever suggested. Returns `None`
    /// when nothing is left.
    pub fn suggest(&self, word: &str) -> Result<Option<Wordlist>> {
        validate(word)?;

        let mut result = Wordlist::new();
        let mut buf = String::new();
        for family in EditFamily::ALL {
            let mut accepted: u64 = 0;
            family.for_each_candidate(word, &mut buf, |candidate| {
                if self.oracle.is_word(candidate) {
                    accepted += 1;
                    result.add(candidate)?;
                }
                Ok(())
            })?;

            let candidates = family.candidate_count(word.len()) as u64;
            trace!(?family, candidates, accepted, "edit family done");
            counter!("spell_tools.suggest.candidates", candidates);
            counter!("spell_tools.suggest.accepted", accepted);
        }

        result.remove(word)?;
        result.remove("")?;

        debug!(word, suggestions = result.count(), "suggest");
        if result.is_empty() {
            Ok(None)
        } else {
            Ok(Some(result))
        }
    }
}

/// Shorthand for `SuggestionEngine::new(oracle).suggest(word)`.
pub fn suggest<O: Oracle>(word: &str, oracle: &O) -> Result<Option<Wordlist>> {
    SuggestionEngine::new(oracle).suggest(word)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::{BTreeSet, HashSet};

    use maplit::{btreeset, convert_args, hashset};

    use crate::error::Error;
    use crate::suggest::engine::{suggest, SuggestionEngine};
    use crate::wordlist::{Dictionary, Index, Wordlist};

    fn words(result: Option<Wordlist>) -> Vec<String> {
        result.map(|wl| wl.enumerate()).unwrap_or_default()
    }

    #[test]
    fn suggests_insertions() {
        let dictionary: HashSet<String> = convert_args!(hashset!("cat", "cot", "cut", "coat"));
        let result = suggest("ct", &dictionary).unwrap();
        assert_eq!(words(result), vec!["cat", "cot", "cut"]);
    }

    #[test]
    fn substitution_also_reaches_two_letter_words() {
        // "at" is "ct" with its first letter replaced
        let dictionary: HashSet<String> = convert_args!(hashset!("cat", "cot", "cut", "at"));
        let result = suggest("ct", &dictionary).unwrap();
        assert_eq!(words(result), vec!["at", "cat", "cot", "cut"]);
    }

    #[test]
    fn covers_every_edit_family() {
        let dictionary: BTreeSet<String> = convert_args!(btreeset!(
            "form", "from", "forms", "fork", "for", "farm", "foam", "forum"));
        let result = suggest("form", &dictionary).unwrap();
        assert_eq!(words(result), vec!["farm", "foam", "for", "fork", "forms", "forum", "from"]);
    }

    #[test]
    fn never_suggests_the_word_or_the_empty_word() {
        let everything = |_: &str| true;
        for word in ["a", "ab", "test"] {
            let result = suggest(word, &everything).unwrap().unwrap();
            assert!(!result.lookup(word));
            assert!(!result.lookup(""));
        }
    }

    #[test]
    fn only_the_original_word_gives_nothing() {
        let dictionary: HashSet<String> = convert_args!(hashset!("test"));
        assert!(suggest("test", &dictionary).unwrap().is_none());
        assert!(suggest("zzzzzz", &dictionary).unwrap().is_none());
    }

    #[test]
    fn empty_word_is_asked_about_single_letters_only() {
        let calls = Cell::new(0);
        let oracle = |word: &str| {
            calls.set(calls.get() + 1);
            word.len() == 1
        };
        let result = suggest("", &oracle).unwrap().unwrap();
        assert_eq!(calls.get(), 26);
        assert_eq!(result.count(), 26);
        assert_eq!(result.enumerate().first().map(String::as_str), Some("a"));
    }

    #[test]
    fn duplicate_candidates_are_stored_once() {
        let asked = RefCell::new(vec![]);
        let oracle = |word: &str| {
            let hit = word == "caat";
            if hit {
                asked.borrow_mut().push(word.to_owned());
            }
            hit
        };
        let result = suggest("cat", &oracle).unwrap().unwrap();
        assert_eq!(asked.borrow().len(), 2);
        assert_eq!(result.count(), 1);
        assert_eq!(result.enumerate(), vec!["caat"]);
    }

    #[test]
    fn rejects_words_outside_the_alphabet() {
        let calls = Cell::new(0);
        let oracle = |_: &str| {
            calls.set(calls.get() + 1);
            true
        };
        assert!(matches!(suggest("Cat", &oracle), Err(Error::InvalidInput { found: 'C', .. })));
        assert!(matches!(suggest("ca t", &oracle), Err(Error::InvalidInput { .. })));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn is_deterministic() {
        let dictionary = Dictionary::from_words(vec!["ring", "rings", "wring", "rang", "rung", "grin"]).unwrap();
        let engine = SuggestionEngine::new(&dictionary);
        let first = engine.suggest("rign").unwrap();
        let second = engine.suggest("rign").unwrap();
        assert_eq!(first, second);
        assert_eq!(words(first), vec!["ring"]);
    }

    #[test]
    fn wordlists_can_serve_as_oracles() {
        let dictionary = Wordlist::from_words(vec!["spell", "spelt", "smell"]).unwrap();
        let result = suggest("spel", &dictionary).unwrap();
        assert_eq!(words(result), vec!["spell", "spelt"]);
    }
}
