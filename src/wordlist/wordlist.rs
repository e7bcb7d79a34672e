use std::fmt::{Debug, Formatter};
use std::io::Write;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::alphabet::validate;
use crate::error::Result;
use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// A set of words backed by a [`Trie`], with a constant-time `count`.
#[derive(Default)]
pub struct Wordlist {
    trie: Trie,
    len: usize,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new(), len: 0 }
    }

    pub fn from_words<'a, I>(words: I) -> Result<Wordlist>
        where I: IntoIterator<Item = &'a str> {
        let mut wl = Wordlist::new();
        wl.add_all(words)?;
        Ok(wl)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        self.trie.write_to(out)
    }

    pub fn print(&self) -> Result<()> {
        self.trie.print()
    }
}

impl Index for Wordlist {
    fn add(&mut self, word: &str) -> Result<()> {
        validate(word)?;
        let fresh = !self.trie.lookup(word);
        self.trie.add(word)?;
        if fresh {
            self.len += 1;
        }
        Ok(())
    }

    fn remove(&mut self, word: &str) -> Result<()> {
        validate(word)?;
        let present = self.trie.lookup(word);
        self.trie.remove(word)?;
        if present {
            self.len -= 1;
        }
        Ok(())
    }

    fn lookup(&self, word: &str) -> bool {
        self.trie.lookup(word)
    }

    fn count(&self) -> usize {
        self.len
    }

    fn enumerate(&self) -> Vec<String> {
        self.trie.enumerate()
    }
}

impl PartialEq for Wordlist {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.enumerate() == other.enumerate()
    }
}

impl Eq for Wordlist {}

impl Serialize for Wordlist {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for word in self.enumerate() {
            seq.serialize_element(&word)?;
        }
        seq.end()
    }
}

impl Debug for Wordlist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.enumerate()).finish()
    }
}
