pub mod dictionary;
pub mod index;
pub mod trie;
mod trienode;
pub mod wordlist;

pub use dictionary::{Dictionary, FileFormat};
pub use index::Index;
pub use trie::Trie;
pub use wordlist::Wordlist;
