//! Tag scanner for color markup.
//!
//! Splits input text into literal spans and tag tokens. A tag token is a
//! `[`, an optional `/`, one or more ASCII letters and a `]`. Anything else,
//! including brackets around other characters, stays in the literal spans.

use std::ops::Range;

/// A `[name]` or `[/name]` token found in the input.
///
/// The scanner does not know which names are meaningful; it reports every
/// token that fits the grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagToken {
    /// Byte range of the whole token, brackets included.
    pub span: Range<usize>,
    /// True for `[/name]`.
    pub closing: bool,
    /// The tag name, lowercased.
    pub name: String,
}

/// A token produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Raw text between tags. Escape sequences are still present.
    Text(&'a str),
    /// A tag token.
    Tag(TagToken),
}

/// Scanner for color markup text.
///
/// Yields tokens left to right. Empty literal spans (between adjacent tags,
/// or at either end of the input) are skipped.
///
/// # Examples
///
/// ```
/// use markup::parser::{Scanner, Token};
///
/// let tokens: Vec<_> = Scanner::new("[red]Hello[/red]").collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Text("Hello"));
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// The next tag token at or after `pos`, if already located.
    pending: Option<TagToken>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
        }
    }

    /// Find the leftmost tag token starting at or after `from`.
    fn find_tag(&self, from: usize) -> Option<TagToken> {
        let bytes = self.input.as_bytes();
        let mut start = from;

        while let Some(offset) = bytes[start..].iter().position(|&b| b == b'[') {
            let open = start + offset;
            if let Some(token) = self.match_tag_at(open) {
                return Some(token);
            }
            start = open + 1;
        }

        None
    }

    /// Try to match a whole tag token beginning with the `[` at `open`.
    fn match_tag_at(&self, open: usize) -> Option<TagToken> {
        let bytes = self.input.as_bytes();
        let mut cursor = open + 1;

        let closing = bytes.get(cursor) == Some(&b'/');
        if closing {
            cursor += 1;
        }

        let name_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_alphabetic) {
            cursor += 1;
        }

        if cursor == name_start || bytes.get(cursor) != Some(&b']') {
            return None;
        }

        Some(TagToken {
            span: open..cursor + 1,
            closing,
            name: self.input[name_start..cursor].to_ascii_lowercase(),
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let tag = match self.pending.take() {
            Some(tag) => Some(tag),
            None => self.find_tag(self.pos),
        };

        match tag {
            Some(tag) if tag.span.start == self.pos => {
                self.pos = tag.span.end;
                Some(Token::Tag(tag))
            }
            Some(tag) => {
                let text = &self.input[self.pos..tag.span.start];
                self.pos = tag.span.start;
                self.pending = Some(tag);
                Some(Token::Text(text))
            }
            None => {
                let text = &self.input[self.pos..];
                self.pos = self.input.len();
                Some(Token::Text(text))
            }
        }
    }
}

/// Collect only the tag tokens of `input`, in order.
pub fn scan_tags(input: &str) -> Vec<TagToken> {
    Scanner::new(input)
        .filter_map(|token| match token {
            Token::Tag(tag) => Some(tag),
            Token::Text(_) => None,
        })
        .collect()
}
