//! Distance metric implementations.
//!
//! Space-optimized dynamic-programming implementations of Levenshtein and
//! Damerau-Levenshtein distance, plus the normalized similarity ratio the
//! fuzzy trie queries use as their default scorer. All functions operate
//! on characters, not bytes, so multi-byte UTF-8 input is handled
//! correctly.

use smallvec::SmallVec;

/// Compute standard Levenshtein distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions,
/// and substitutions required to transform `source` into `target`.
///
/// # Example
///
/// ```rust
/// use fuzzytrie::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("test", "test"), 0);
/// ```
pub fn levenshtein(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows suffice without transpositions.
    let mut prev_row = vec![0usize; n + 1];
    let mut curr_row = vec![0usize; n + 1];

    for (j, cell) in prev_row.iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute Damerau-Levenshtein distance between two strings.
///
/// Extends [`levenshtein`] so that transposing two adjacent characters
/// also counts as a single edit. This is the metric used by
/// [`Trie::edit_distance`](crate::trie::Trie::edit_distance).
///
/// # Example
///
/// ```rust
/// use fuzzytrie::distance::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("ab", "ba"), 1);
/// assert_eq!(damerau_levenshtein("test", "tset"), 1);
/// ```
pub fn damerau_levenshtein(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Transpositions reach back two rows.
    let mut two_ago = vec![0usize; n + 1];
    let mut prev_row = vec![0usize; n + 1];
    let mut curr_row = vec![0usize; n + 1];

    for (j, cell) in prev_row.iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1
                && j > 1
                && source_chars[i - 1] == target_chars[j - 2]
                && source_chars[i - 2] == target_chars[j - 1]
            {
                curr_row[j] = curr_row[j].min(two_ago[j - 2] + 1); // transposition
            }
        }

        std::mem::swap(&mut two_ago, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Normalized similarity ratio in `[0, 1]`.
///
/// Defined as `1 - d / max_len` where `d` is the Damerau-Levenshtein
/// distance and `max_len` the longer character length. Two empty strings
/// are fully similar. Because `d >= |len_a - len_b|`, the result never
/// exceeds `min_len / max_len`, the O(1) length bound
/// [`Trie::fuzzy_search`](crate::trie::Trie::fuzzy_search) prunes with.
///
/// # Example
///
/// ```rust
/// use fuzzytrie::distance::similarity;
///
/// assert_eq!(similarity("book", "book"), 1.0);
/// assert_eq!(similarity("book", "books"), 0.8);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a == 0 && len_b == 0 {
        return 1.0;
    }

    let max_len = len_a.max(len_b);
    1.0 - damerau_levenshtein(a, b) as f64 / max_len as f64
}
