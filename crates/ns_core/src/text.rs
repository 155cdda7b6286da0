/// Returns the first `n` characters of `s` without splitting a UTF-8
/// sequence. Windows elsewhere in the pipeline (fetch cap, prompt and
/// fallback windows) count characters, not bytes.
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_input_is_returned_whole() {
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("abc", 3), "abc");
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("日本語のテキスト", 3), "日本語");
    }

    #[test]
    fn empty_input() {
        assert_eq!(char_prefix("", 5), "");
    }
}
