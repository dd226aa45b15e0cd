//! Greedy word wrapping to a fixed column count.
//!
//! Lines break at the last whitespace that fits. A word is only split when
//! it is longer than a whole line on its own. Whitespace at the end of a
//! wrapped line, and at the start of every continuation line, is dropped.
//! Hard newlines in the input are kept; each input line wraps on its own.

/// Wrap `text` to at most `width` characters per line.
///
/// ```
/// use tp::template::wrap::fill;
///
/// assert_eq!(
///     fill("This is a very long line that should wrap correctly.", 20),
///     "This is a very long\nline that should\nwrap correctly."
/// );
/// ```
pub fn fill(text: &str, width: usize) -> String {
    let width = width.max(1);
    text.split('\n')
        .map(|line| wrap_line(line, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A run of either whitespace or non-whitespace characters.
#[derive(Debug)]
struct Chunk {
    text: String,
    len: usize,
    space: bool,
}

impl Chunk {
    fn new(text: String, space: bool) -> Self {
        let len = text.chars().count();
        Self { text, len, space }
    }

    /// Split off the first `n` characters.
    fn split_head(&mut self, n: usize) -> Chunk {
        let at = self
            .text
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        let tail = self.text.split_off(at);
        let head = std::mem::replace(&mut self.text, tail);
        self.len -= n.min(self.len);
        Chunk::new(head, self.space)
    }
}

fn split_chunks(line: &str) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut current = String::new();
    let mut in_space = false;

    for ch in line.chars() {
        let space = ch.is_whitespace();
        if space != in_space && !current.is_empty() {
            chunks.push(Chunk::new(std::mem::take(&mut current), in_space));
        }
        in_space = space;
        // Tabs, carriage returns and friends all print as a plain space.
        current.push(if space { ' ' } else { ch });
    }
    if !current.is_empty() {
        chunks.push(Chunk::new(current, in_space));
    }
    chunks
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut chunks = split_chunks(line);
    chunks.reverse();
    let mut lines: Vec<String> = Vec::new();

    while !chunks.is_empty() {
        let mut current: Vec<Chunk> = Vec::new();
        let mut current_len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| c.space) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.pop() {
            if current_len + chunk.len <= width {
                current_len += chunk.len;
                current.push(chunk);
            } else {
                chunks.push(chunk);
                break;
            }
        }

        if let Some(chunk) = chunks.last_mut()
            && chunk.len > width
        {
            let space_left = width - current_len;
            if space_left > 0 {
                current.push(chunk.split_head(space_left));
            }
        }

        if current.last().is_some_and(|c| c.space) {
            current.pop();
        }

        if !current.is_empty() {
            lines.push(current.into_iter().map(|c| c.text).collect());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_sentence() {
        assert_eq!(
            fill("This is a very long line that should wrap correctly.", 20),
            "This is a very long\nline that should\nwrap correctly."
        );
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(fill("Hello world", 32), "Hello world");
    }

    #[test]
    fn test_exact_width_fits() {
        assert_eq!(fill("abcde fghij", 11), "abcde fghij");
        assert_eq!(fill("abcde fghij", 10), "abcde\nfghij");
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(fill("abcdefghij", 4), "abcd\nefgh\nij");
    }

    #[test]
    fn test_long_word_fills_current_line_first() {
        assert_eq!(fill("ab cdefghij", 5), "ab cd\nefghi\nj");
    }

    #[test]
    fn test_trailing_whitespace_dropped() {
        assert_eq!(fill("Hello ", 32), "Hello");
        assert_eq!(fill("   ", 32), "");
    }

    #[test]
    fn test_leading_whitespace_kept_on_first_line_only() {
        assert_eq!(fill(" world", 32), " world");
        assert_eq!(fill("aaaa bbbb", 4), "aaaa\nbbbb");
    }

    #[test]
    fn test_inner_spaces_preserved() {
        assert_eq!(fill("a  b", 10), "a  b");
    }

    #[test]
    fn test_hard_newlines_preserved() {
        assert_eq!(fill("one\n\ntwo", 32), "one\n\ntwo");
        assert_eq!(fill("aaa bbb\nccc", 3), "aaa\nbbb\nccc");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(fill("żółw żółw", 4), "żółw\nżółw");
    }

    #[test]
    fn test_tabs_become_spaces() {
        assert_eq!(fill("a\tb", 10), "a b");
    }

    #[test]
    fn test_zero_width_treated_as_one() {
        assert_eq!(fill("ab", 0), "a\nb");
    }

    #[test]
    fn test_empty() {
        assert_eq!(fill("", 10), "");
    }
}
