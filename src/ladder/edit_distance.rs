//! Case-insensitive edit distance checks between words.

/// Lowercased characters of `word`
fn folded(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_lowercase).collect()
}

/// Returns true if `a` and `b` are within `max_distance` edits of each other.
///
/// The comparison ignores case. Words whose lengths differ by more than
/// `max_distance` are rejected without further work. A distance of one uses a
/// direct substitution/insertion/deletion check; larger distances fall back to
/// the full Levenshtein table. The two paths agree except on boundary inputs
/// such as transpositions.
pub fn edit_distance_within(a: &str, b: &str, max_distance: usize) -> bool {
    let a = folded(a);
    let b = folded(b);

    if a.len().abs_diff(b.len()) > max_distance {
        return false;
    }

    match max_distance {
        0 => a == b,
        1 => within_one_edit(&a, &b),
        _ => levenshtein_chars(&a, &b) <= max_distance,
    }
}

/// Two words are adjacent in a ladder when they are at most one edit apart
pub fn is_adjacent(word1: &str, word2: &str) -> bool {
    edit_distance_within(word1, word2, 1)
}

/// Case-insensitive Levenshtein distance between two words
pub fn levenshtein(a: &str, b: &str) -> usize {
    levenshtein_chars(&folded(a), &folded(b))
}

fn within_one_edit(a: &[char], b: &[char]) -> bool {
    if a.len() == b.len() {
        return a.iter().zip(b).filter(|(x, y)| x != y).take(2).count() <= 1;
    }

    let (shorter, longer) = if a.len() < b.len() { (a, b) } else { (b, a) };
    if longer.len() - shorter.len() != 1 {
        return false;
    }

    // Skip the first mismatching character of the longer word; the rest
    // must line up exactly.
    let skip = shorter
        .iter()
        .zip(longer)
        .position(|(x, y)| x != y)
        .unwrap_or(shorter.len());
    shorter[skip..] == longer[skip + 1..]
}

fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        dp[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }

    dp[n][m]
}
