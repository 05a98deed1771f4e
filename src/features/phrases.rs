// Repeated-phrase matcher for the structure feature.
//
// Scans the original text left to right. At each position the shortest
// admissible window (`min_len` characters) is the candidate refrain: any
// longer repeated run necessarily repeats its own `min_len` prefix, so the
// shortest window is always enough to witness a repeat. The earliest later
// occurrence that does not overlap the window closes the match, the whole
// span up to the end of that occurrence is consumed, and scanning resumes
// right after it.
//
// Unless `cross_lines` is set, neither the window nor anything between it
// and its repeat may contain a line terminator, so a refrain only counts
// when it recurs on the same line.

use super::traits::PhraseCounter;

/// Default structural-refrain matcher.
#[derive(Debug, Clone)]
pub struct RefrainMatcher {
    /// Window length in characters
    pub min_len: usize,
    /// Allow the window and its repeat to be on different lines
    pub cross_lines: bool,
}

impl Default for RefrainMatcher {
    fn default() -> Self {
        Self {
            min_len: 10,
            cross_lines: false,
        }
    }
}

impl PhraseCounter for RefrainMatcher {
    fn count_repeated_phrases(&self, text: &str) -> usize {
        let chars: Vec<char> = text.chars().collect();
        let width = self.min_len.max(1);

        let mut count = 0;
        let mut pos = 0;
        while pos + 2 * width <= chars.len() {
            match self.match_end(&chars, pos, width) {
                Some(end) => {
                    count += 1;
                    pos = end;
                }
                None => pos += 1,
            }
        }
        count
    }
}

impl RefrainMatcher {
    /// End (exclusive) of the match that starts at `start`, if any.
    fn match_end(&self, chars: &[char], start: usize, width: usize) -> Option<usize> {
        let window = &chars[start..start + width];
        if !self.cross_lines && window.iter().copied().any(is_line_terminator) {
            return None;
        }

        let mut probe = start + width;
        while probe + width <= chars.len() {
            if chars[probe..probe + width] == *window {
                return Some(probe + width);
            }
            if !self.cross_lines && is_line_terminator(chars[probe]) {
                return None;
            }
            probe += 1;
        }
        None
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
