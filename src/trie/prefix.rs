//! Prefix-length helpers shared by insertion, bulk construction, and the
//! descent primitive.

/// Length in bytes of the longest common prefix of `a` and `b`, aligned
/// to a character boundary in both strings.
///
/// Comparing characters rather than bytes keeps edge splits from landing
/// inside a multi-byte UTF-8 sequence.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) if x == y => len += x.len_utf8(),
            _ => return len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_basic() {
        assert_eq!(common_prefix_len("apple", "apply"), 4);
        assert_eq!(common_prefix_len("car", "care"), 3);
        assert_eq!(common_prefix_len("dog", "cat"), 0);
        assert_eq!(common_prefix_len("same", "same"), 4);
    }

    #[test]
    fn test_common_prefix_empty() {
        assert_eq!(common_prefix_len("", "anything"), 0);
        assert_eq!(common_prefix_len("anything", ""), 0);
        assert_eq!(common_prefix_len("", ""), 0);
    }

    #[test]
    fn test_common_prefix_char_aligned() {
        // 'é' and 'ñ' share a UTF-8 lead byte but no character.
        assert_eq!(common_prefix_len("éclair", "ñoqui"), 0);
        assert_eq!(common_prefix_len("café", "cafés"), "café".len());
    }
}
