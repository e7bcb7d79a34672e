mod edits;
mod engine;
mod oracle;

pub use edits::EditFamily;
pub use engine::{suggest, SuggestionEngine};
pub use oracle::Oracle;
