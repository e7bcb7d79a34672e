pub mod alphabet;
pub mod error;
pub mod suggest;
pub mod wordlist;

pub use error::{Error, Result};
pub use suggest::{suggest, EditFamily, Oracle, SuggestionEngine};
pub use wordlist::{Dictionary, FileFormat, Index, Trie, Wordlist};
