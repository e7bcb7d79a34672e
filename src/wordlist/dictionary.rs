use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::error::{Error, Result};
use crate::wordlist::index::Index;
use crate::wordlist::wordlist::Wordlist;

/// Layout of a dictionary file. Without a delimiter every line is one word;
/// with one, the word is taken from `word_column` (default 0).
#[derive(TypedBuilder, Clone, Debug)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let word_idx = self.word_column.unwrap_or(0);
                line.split(delimiter).nth(word_idx).ok_or_else(|| Error::Format {
                    line: line_no,
                    message: format!("no column {} after splitting on {:?}", word_idx, delimiter),
                })
            }
        }
    }
}

/// Word list used to answer "is this spelled correctly".
///
/// Raw entries are normalised before they are stored: ASCII letters are
/// lowercased and everything else is dropped.
#[derive(Default, Debug)]
pub struct Dictionary {
    words: Wordlist,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary { words: Wordlist::new() }
    }

    pub fn from_words<'a, I>(words: I) -> Result<Dictionary>
        where I: IntoIterator<Item = &'a str> {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word)?;
        }
        Ok(dictionary)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Dictionary> {
        info!("Reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Dictionary> {
        let mut dictionary = Dictionary::new();
        let mut count: usize = 0;
        let mut skipped: usize = 0;
        let start = Instant::now();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let word = format.parse_line(&line, idx + 1)?;
            if dictionary.insert(word)? {
                count += 1;
                if count % 100000 == 0 {
                    debug!(count, word, "loading");
                }
            } else {
                skipped += 1;
            }
        }

        info!(
            "Read {} entries ({} distinct) in {:.3}s [{} skipped]",
            count,
            dictionary.count(),
            start.elapsed().as_secs_f64(),
            skipped
        );
        Ok(dictionary)
    }

    /// Normalises and stores `raw`. Returns false when nothing of it survives
    /// normalisation.
    pub fn insert(&mut self, raw: &str) -> Result<bool> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(false);
        }
        self.words.add(&word)?;
        Ok(true)
    }

    pub fn words(&self) -> &Wordlist {
        &self.words
    }

    delegate! {
        to self.words {
            pub fn lookup(&self, word: &str) -> bool;
            pub fn count(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn enumerate(&self) -> Vec<String>;
        }
    }
}
