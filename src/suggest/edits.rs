use crate::alphabet::{validate, ALPHABET};
use crate::error::Result;

/// The single-edit operations that take one word to its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditFamily {
    /// Drop one letter.
    Deletion,
    /// Put any letter before any position, or at the end.
    Insertion,
    /// Replace one letter by any letter, itself included.
    Substitution,
    /// Swap two adjacent letters.
    Transposition,
}

impl EditFamily {
    pub const ALL: [EditFamily; 4] = [
        EditFamily::Deletion,
        EditFamily::Insertion,
        EditFamily::Substitution,
        EditFamily::Transposition,
    ];

    /// Number of candidates produced for a word of `len` letters.
    pub fn candidate_count(self, len: usize) -> usize {
        match self {
            EditFamily::Deletion => len,
            EditFamily::Insertion => (len + 1) * ALPHABET.len(),
            EditFamily::Substitution => len * ALPHABET.len(),
            EditFamily::Transposition => len.saturating_sub(1),
        }
    }

    /// Builds every candidate of this family in `buf` and hands it to `f`.
    /// Rejects words outside the alphabet. Stops at the first error.
    pub fn for_each_candidate<F>(self, word: &str, buf: &mut String, mut f: F) -> Result<()>
        where F: FnMut(&str) -> Result<()> {
        validate(word)?;
        let n = word.len();
        buf.clear();
        buf.try_reserve(n + 1)?;

        match self {
            EditFamily::Deletion => {
                for i in 0..n {
                    buf.clear();
                    buf.push_str(&word[..i]);
                    buf.push_str(&word[i + 1..]);
                    f(buf.as_str())?;
                }
            }
            EditFamily::Insertion => {
                for i in 0..=n {
                    for &c in ALPHABET {
                        buf.clear();
                        buf.push_str(&word[..i]);
                        buf.push(c as char);
                        buf.push_str(&word[i..]);
                        f(buf.as_str())?;
                    }
                }
            }
            EditFamily::Substitution => {
                for i in 0..n {
                    for &c in ALPHABET {
                        buf.clear();
                        buf.push_str(&word[..i]);
                        buf.push(c as char);
                        buf.push_str(&word[i + 1..]);
                        f(buf.as_str())?;
                    }
                }
            }
            EditFamily::Transposition => {
                let bytes = word.as_bytes();
                for i in 0..n.saturating_sub(1) {
                    buf.clear();
                    buf.push_str(&word[..i]);
                    buf.push(bytes[i + 1] as char);
                    buf.push(bytes[i] as char);
                    buf.push_str(&word[i + 2..]);
                    f(buf.as_str())?;
                }
            }
        }
        Ok(())
    }
}
