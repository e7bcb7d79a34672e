use crate::error::Result;

/// A set of words over the lowercase alphabet.
pub trait Index {
    fn add(&mut self, word: &str) -> Result<()>;
    /// Removing a word that is not present is a no-op.
    fn remove(&mut self, word: &str) -> Result<()>;
    fn lookup(&self, word: &str) -> bool;
    fn count(&self) -> usize;
    /// Every stored word in lexicographic order.
    fn enumerate(&self) -> Vec<String>;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Adds every item, stopping at the first error.
    fn add_all<'a, I>(&mut self, items: I) -> Result<()>
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().try_for_each(|x| self.add(x))
    }
}
