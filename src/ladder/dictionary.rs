use std::borrow::Cow;
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::Result;

/// A set of distinct lowercase words.
///
/// Words are normalized once on insertion, so lookups and ladder searches
/// never have to deal with case. Iteration is in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary
    pub fn new() -> Self {
        Dictionary {
            words: BTreeSet::new(),
        }
    }

    /// Builds a dictionary from any list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Reads newline-delimited words, skipping blank lines.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and logged rather
    /// than failing the whole load.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                log::warn!("line {} of word list is not valid UTF-8: {:?}", line_no, line.trim());
            }
            dictionary.insert(&line);
        }
        Ok(dictionary)
    }

    /// Loads a word list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        log::info!(
            "loaded {} words from {}",
            dictionary.len(),
            path.as_ref().display()
        );
        Ok(dictionary)
    }

    /// Loads a word list, falling back to an empty dictionary if the file
    /// cannot be read. The failure is logged.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                log::error!("Cannot load word list {}: {}", path.as_ref().display(), err);
                Dictionary::new()
            }
        }
    }

    /// Inserts a word after trimming and lowercasing it.
    ///
    /// Returns false for blank input and for words already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_words(iter)
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
