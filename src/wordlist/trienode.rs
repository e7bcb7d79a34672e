use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, letter, ALPHABET};

#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) word_end: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: u8) -> Option<&TrieNode> {
        self.children[get_idx(c)].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, c: u8) -> &mut TrieNode {
        self.children[get_idx(c)].get_or_insert_with(Default::default)
    }

    pub(crate) fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// A non-root node in this state spells nothing and leads nowhere.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.word_end && !self.has_children()
    }

    /// Removes `word` below this node, handing back the node or `None` once it
    /// has been pruned. The caller stores the result back in the parent's slot.
    pub(crate) fn remove(mut self: Box<Self>, word: &[u8]) -> Option<Box<TrieNode>> {
        match word.split_first() {
            None if !self.has_children() => None,
            None => {
                self.word_end = false;
                Some(self)
            }
            Some((&c, rest)) => {
                self.remove_child(c, rest);
                if self.is_prunable() {
                    None
                } else {
                    Some(self)
                }
            }
        }
    }

    pub(crate) fn remove_child(&mut self, c: u8, rest: &[u8]) {
        let slot = &mut self.children[get_idx(c)];
        if let Some(child) = slot.take() {
            *slot = child.remove(rest);
        }
    }

    pub(crate) fn lookup(&self, word: &[u8]) -> bool {
        match word.split_first() {
            None => self.word_end,
            Some((&c, rest)) => self.get_child(c).map_or(false, |child| child.lookup(rest)),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.children
            .iter()
            .flatten()
            .map(|child| child.count())
            .fold(self.word_end as usize, |x, y| x + y)
    }

    /// Depth-first walk in `a..z` order. `path` holds the letters leading to
    /// this node and is restored before returning.
    pub(crate) fn traverse_words<E, F>(&self, path: &mut String, f: &mut F) -> Result<(), E>
        where F: FnMut(&str) -> Result<(), E> {
        if self.word_end {
            f(path.as_str())?;
        }
        for (idx, child) in self.children.iter().enumerate() {
            if let Some(child) = child {
                path.push(letter(idx));
                let walked = child.traverse_words(path, f);
                path.pop();
                walked?;
            }
        }
        Ok(())
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("word_end", &self.word_end)
            .field("children", &self.children.iter()
                .enumerate()
                .filter(|(_, x)| x.is_some())
                .map(|(idx, _)| letter(idx))
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
