use crate::error::{Error, Result};

pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Slot of a lowercase ASCII letter in a node's child array.
pub fn get_idx(a: u8) -> usize {
    debug_assert!(a.is_ascii_lowercase());
    (a - b'a') as usize
}

pub fn letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

/// Checks that `word` only holds letters from [`ALPHABET`] and hands back its bytes.
/// The empty word is valid.
pub fn validate(word: &str) -> Result<&[u8]> {
    match word.chars().find(|c| !c.is_ascii_lowercase()) {
        Some(found) => Err(Error::InvalidInput { word: word.to_owned(), found }),
        None => Ok(word.as_bytes()),
    }
}

pub fn normalize(s: &str) -> String {
    s.chars()
        .map(|x| x.to_ascii_lowercase())
        .filter(|x| x.is_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{get_idx, letter, normalize, validate, ALPHABET};
    use crate::error::Error;

    #[test]
    fn indexes_round_trip_through_letters() {
        assert_eq!(ALPHABET.len(), 26);
        assert_eq!(get_idx(b'a'), 0);
        assert_eq!(get_idx(b'z'), 25);
        assert_eq!(letter(get_idx(b'q')), 'q');
    }

    #[test]
    fn validates_words() {
        assert_eq!(validate("hello").unwrap(), b"hello");
        assert!(validate("").unwrap().is_empty());

        match validate("heLlo") {
            Err(Error::InvalidInput { word, found }) => {
                assert_eq!(word, "heLlo");
                assert_eq!(found, 'L');
            }
            other => panic!("expected invalid input, got {:?}", other),
        }
        assert!(validate("don't").is_err());
        assert!(validate("café").is_err());
    }

    #[test]
    fn normalizes_raw_text() {
        assert_eq!(normalize("Hello, World"), "helloworld");
        assert_eq!(normalize("123"), "");
        assert_eq!(normalize("Éclair"), "clair");
    }
}
