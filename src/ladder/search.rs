use std::collections::{HashSet, VecDeque};

use crate::ladder::dictionary::Dictionary;
use crate::ladder::edit_distance::is_adjacent;
use crate::{Error, Result};

/// Breadth-first word ladder search.
///
/// The search graph is implicit: its nodes are the dictionary words plus the
/// start word, and two nodes are connected when [`is_adjacent`] holds. The
/// start word does not have to be in the dictionary; the end word does.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordLadder;

impl WordLadder {
    pub fn new() -> Self {
        WordLadder
    }

    /// Finds a shortest ladder from `begin` to `end`, both trimmed and lowercased.
    ///
    /// The returned ladder starts with the lowercased start word and ends with
    /// the lowercased end word. When several ladders are equally short, the one
    /// whose words come first in dictionary order wins.
    pub fn try_generate(&self, begin: &str, end: &str, dictionary: &Dictionary) -> Result<Vec<String>> {
        let start = begin.trim().to_lowercase();
        let end = end.trim().to_lowercase();

        if start == end {
            return Err(Error::SameWord(start));
        }
        if !dictionary.contains(&end) {
            return Err(Error::EndWordNotInDictionary(end));
        }

        let mut queue: VecDeque<Vec<String>> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();

        visited.insert(start.clone());
        queue.push_back(vec![start.clone()]);

        while let Some(ladder) = queue.pop_front() {
            let Some(last) = ladder.last() else {
                continue;
            };
            let last_len = last.chars().count();

            for candidate in dictionary.iter() {
                if candidate.chars().count().abs_diff(last_len) > 1 {
                    continue;
                }
                if visited.contains(candidate) || !is_adjacent(last, candidate) {
                    continue;
                }

                // Marked on discovery so no later ladder can enqueue it again
                visited.insert(candidate.to_string());

                let mut extended = ladder.clone();
                extended.push(candidate.to_string());

                if candidate == end {
                    log::debug!(
                        "ladder {} -> {} found with {} words after visiting {}",
                        start,
                        end,
                        extended.len(),
                        visited.len()
                    );
                    return Ok(extended);
                }

                queue.push_back(extended);
            }
        }

        Err(Error::NoLadderFound { begin: start, end })
    }

    /// Like [`WordLadder::try_generate`], but reports failures through the
    /// logger and returns an empty ladder instead.
    pub fn generate(&self, begin: &str, end: &str, dictionary: &Dictionary) -> Vec<String> {
        match self.try_generate(begin, end, dictionary) {
            Ok(ladder) => ladder,
            Err(err) => {
                report_error(begin, end, &err);
                Vec::new()
            }
        }
    }
}

/// Shortest ladder from `begin` to `end`, or an empty vector if there is none
pub fn generate_word_ladder(begin: &str, end: &str, dictionary: &Dictionary) -> Vec<String> {
    WordLadder::new().generate(begin, end, dictionary)
}

fn report_error(begin: &str, end: &str, err: &Error) {
    log::error!("{} ({} -> {})", err, begin, end);
}
