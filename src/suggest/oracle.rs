use std::collections::{BTreeSet, HashSet};

use crate::wordlist::{Dictionary, Index, Wordlist};

/// Answers whether a candidate string is a correctly spelled word.
pub trait Oracle {
    fn is_word(&self, word: &str) -> bool;
}

impl<F> Oracle for F where F: Fn(&str) -> bool {
    fn is_word(&self, word: &str) -> bool {
        self(word)
    }
}

impl Oracle for HashSet<String> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Oracle for BTreeSet<String> {
    fn is_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Oracle for Wordlist {
    fn is_word(&self, word: &str) -> bool {
        self.lookup(word)
    }
}

impl Oracle for Dictionary {
    fn is_word(&self, word: &str) -> bool {
        self.lookup(word)
    }
}
