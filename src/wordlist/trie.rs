use std::convert::Infallible;
use std::fmt::{Debug, Formatter};
use std::io::{self, Write};

use crate::alphabet::validate;
use crate::error::Result;
use crate::wordlist::index::Index;
use crate::wordlist::trienode::TrieNode;

/// Prefix tree over the lowercase alphabet.
///
/// The root is created by the first `add` and is kept from then on, even
/// once every word has been removed again.
#[derive(Default)]
pub struct Trie {
    root: Option<Box<TrieNode>>,
}

impl Trie {
    pub fn new() -> Trie {
        Trie { root: None }
    }

    fn traverse_words<E, F>(&self, mut f: F) -> std::result::Result<(), E>
        where F: FnMut(&str) -> std::result::Result<(), E> {
        match &self.root {
            None => Ok(()),
            Some(root) => root.traverse_words(&mut String::new(), &mut f),
        }
    }

    /// Writes each word on its own line, in lexicographic order.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        self.traverse_words(|word| writeln!(out, "{}", word))?;
        Ok(())
    }

    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) -> Result<()> {
        let word = validate(word)?;
        let mut current: &mut TrieNode = self.root.get_or_insert_with(Default::default);
        for &c in word {
            current = current.get_or_create_child(c);
        }
        current.word_end = true;
        Ok(())
    }

    fn remove(&mut self, word: &str) -> Result<()> {
        let word = validate(word)?;
        if let Some(root) = self.root.as_mut() {
            match word.split_first() {
                None => root.word_end = false,
                Some((&c, rest)) => root.remove_child(c, rest),
            }
        }
        Ok(())
    }

    fn lookup(&self, word: &str) -> bool {
        match (validate(word), &self.root) {
            (Ok(word), Some(root)) => root.lookup(word),
            _ => false,
        }
    }

    fn count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.count())
    }

    fn enumerate(&self) -> Vec<String> {
        let mut words = vec![];
        self.traverse_words(|word| {
            words.push(word.to_owned());
            Ok::<(), Infallible>(())
        }).unwrap_or_else(|never| match never {});
        words
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        l.entries(self.enumerate());
        l.finish()
    }
}
