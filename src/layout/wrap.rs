use crate::units::Px;
use std::collections::VecDeque;

/// Word-wraps text set in a proportional font, yielding one line at a time.
///
/// Each explicit line of the input (see [hard_lines]) is wrapped on its own,
/// so hard breaks in the input always survive. Within a line, words are
/// placed greedily: a word that would push the line past the pixel budget
/// starts a new line instead. A single word that is wider than the budget on
/// its own is placed alone on a line and left intact, unless
/// [WordWrap::break_long_words] is enabled.
///
/// Widths come from `width_of`, which is asked for the width of each character
/// in the text (callers usually back it with a cache).
///
/// Emitted lines are trimmed of surrounding whitespace. The iterator always
/// yields at least one line, which is empty if the input was.
pub struct WordWrap<'t, F> {
    lines: HardLines<'t>,
    budget: Px,
    width_of: F,
    break_long_words: bool,
    pending: VecDeque<String>,
    emitted: bool,
}

/// Wrap `text` so that no line is wider than `budget`. See [WordWrap].
pub fn word_wrap<F>(text: &str, budget: Px, width_of: F) -> WordWrap<'_, F>
where
    F: FnMut(char) -> Px,
{
    WordWrap {
        lines: hard_lines(text),
        budget,
        width_of,
        break_long_words: false,
        pending: VecDeque::new(),
        emitted: false,
    }
}

/// Collapses hard breaks into spaces so that the whole text is reflowed as a
/// single paragraph, then wraps it and joins the wrapped lines with `\n`.
pub fn reflow<F>(text: &str, budget: Px, width_of: F) -> String
where
    F: FnMut(char) -> Px,
{
    word_wrap(&flatten_paragraph(text), budget, width_of)
        .collect::<Vec<String>>()
        .join("\n")
}

/// Replaces each hard break with a space
pub(crate) fn flatten_paragraph(text: &str) -> String {
    hard_lines(text).collect::<Vec<&str>>().join(" ")
}

fn is_hard_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into its explicit lines. A line ends at `\n`, `\r\n`, a lone
/// `\r`, a vertical tab, a form feed, the file, group and record separators,
/// NEL, or the Unicode line and paragraph separators. A break at the very end
/// does not start another line, and empty text has no lines at all.
pub fn hard_lines(text: &str) -> HardLines<'_> {
    HardLines { rest: text }
}

/// Iterator returned by [hard_lines]
#[derive(Debug, Clone)]
pub struct HardLines<'t> {
    rest: &'t str,
}

impl<'t> Iterator for HardLines<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((at, ch)) = self.rest.char_indices().find(|(_, ch)| is_hard_break(*ch)) else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..at];
        let mut next = at + ch.len_utf8();
        if ch == '\r' && self.rest[next..].starts_with('\n') {
            next += 1;
        }
        self.rest = &self.rest[next..];
        Some(line)
    }
}

impl<'t, F> WordWrap<'t, F>
where
    F: FnMut(char) -> Px,
{
    /// When enabled, a word wider than the budget is broken between characters
    /// instead of overflowing the line. Every piece holds at least one
    /// character, so a single character wider than the budget still overflows.
    pub fn break_long_words(mut self, enabled: bool) -> Self {
        self.break_long_words = enabled;
        self
    }

    fn width_of_token(&mut self, token: &str) -> Px {
        token.chars().map(&mut self.width_of).sum()
    }

    /// Splits an over-wide word into pieces that each fit the budget, with
    /// empty whitespace runs between them
    fn split_long_word<'a>(&mut self, word: &'a str, tokens: &mut Vec<&'a str>) {
        let mut start = 0;
        let mut total = Px::ZERO;
        for (i, ch) in word.char_indices() {
            let w = (self.width_of)(ch);
            if i > start && total + w > self.budget {
                tokens.push(&word[start..i]);
                tokens.push("");
                start = i;
                total = Px::ZERO;
            }
            total += w;
        }
        tokens.push(&word[start..]);
    }

    fn wrap_line(&mut self, line: &str) {
        let mut tokens = split_whitespace_runs(line);
        if self.break_long_words {
            let mut split = Vec::with_capacity(tokens.len());
            for (index, token) in tokens.into_iter().enumerate() {
                if index % 2 == 0 && self.width_of_token(token) > self.budget {
                    self.split_long_word(token, &mut split);
                } else {
                    split.push(token);
                }
            }
            tokens = split;
        }
        // pair the final word with an empty whitespace run
        tokens.push("");

        let widths: Vec<Px> = tokens
            .iter()
            .map(|token| self.width_of_token(token))
            .collect();

        let mut start = 0;
        let mut total = Px::ZERO;
        let mut index = 0;
        while index < tokens.len() {
            if total + widths[index] > self.budget {
                // a word that doesn't fit even on its own still goes on a line
                let end = if index == start { index + 2 } else { index };
                self.pending.push_back(tokens[start..end].concat().trim().to_string());
                start = end;
                total = Px::ZERO;
                if end == index + 2 {
                    index += 2;
                    continue;
                }
            }
            total += widths[index] + widths[index + 1];
            index += 2;
        }

        if start < tokens.len() {
            self.pending.push_back(tokens[start..].concat().trim().to_string());
        }
    }
}

impl<'t, F> Iterator for WordWrap<'t, F>
where
    F: FnMut(char) -> Px,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                self.emitted = true;
                return Some(line);
            }

            match self.lines.next() {
                Some(line) => self.wrap_line(line),
                None if !self.emitted => {
                    self.emitted = true;
                    return Some(String::new());
                }
                None => return None,
            }
        }
    }
}

/// Splits a line into alternating runs of non-whitespace and whitespace. The
/// result always starts and ends with a non-whitespace run (either of which may
/// be empty), so it has an odd number of tokens and concatenates back to
/// `line`.
pub(crate) fn split_whitespace_runs(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = false;
    for (i, ch) in line.char_indices() {
        if ch.is_whitespace() != in_whitespace {
            tokens.push(&line[start..i]);
            start = i;
            in_whitespace = !in_whitespace;
        }
    }
    tokens.push(&line[start..]);
    if in_whitespace {
        tokens.push("");
    }
    tokens
}
