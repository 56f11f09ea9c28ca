//! Character-level CSV state machine
//!
//! Scans the input once, left to right, with one character of lookahead.
//! Outside quotes `,` ends a field and `\n`, `\r`, `\r\n` or `\n\r` end a row.
//! Inside quotes every character is literal except `""` (an escaped quote)
//! and the closing `"`.

use std::iter::Peekable;
use std::mem;
use std::str::Chars;

use super::{ParseOptions, Row};

/// Tokenizer state for a single parse call
#[derive(Debug)]
pub struct Tokenizer {
    options: ParseOptions,
    rows: Vec<Row>,
    row: Row,
    field: String,
    in_quotes: bool,
    /// Byte range of `field` covered by quoted sections
    quoted_span: Option<(usize, usize)>,
}

impl Tokenizer {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            rows: Vec::new(),
            row: Vec::new(),
            field: String::new(),
            in_quotes: false,
            quoted_span: None,
        }
    }

    /// Consume the tokenizer and return every emitted row, blank rows included
    ///
    /// A leading byte order mark is not part of the first cell.
    pub fn tokenize(mut self, text: &str) -> Vec<Row> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if self.in_quotes {
                self.quoted_char(ch, &mut chars);
            } else {
                self.plain_char(ch, &mut chars);
            }
        }

        // Input without a trailing newline, or an unterminated quote
        if !self.field.is_empty() || !self.row.is_empty() {
            self.end_row();
        }

        self.rows
    }

    fn quoted_char(&mut self, ch: char, chars: &mut Peekable<Chars<'_>>) {
        if ch != '"' {
            self.field.push(ch);
            return;
        }

        if chars.peek() == Some(&'"') {
            chars.next();
            self.field.push('"');
        } else {
            self.in_quotes = false;
            self.close_quote();
        }
    }

    fn plain_char(&mut self, ch: char, chars: &mut Peekable<Chars<'_>>) {
        match ch {
            '"' => {
                self.in_quotes = true;
                self.open_quote();
            }
            ',' => self.end_field(),
            '\n' => {
                self.end_row();
                if chars.peek() == Some(&'\r') {
                    chars.next();
                }
            }
            '\r' => {
                self.end_row();
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => self.field.push(ch),
        }
    }

    fn open_quote(&mut self) {
        let at = self.field.len();
        self.quoted_span = Some(match self.quoted_span {
            Some((start, _)) => (start, at),
            None => (at, at),
        });
    }

    fn close_quote(&mut self) {
        if let Some((start, _)) = self.quoted_span {
            self.quoted_span = Some((start, self.field.len()));
        }
    }

    fn end_field(&mut self) {
        if self.in_quotes {
            // Unterminated quote at end of input: the quoted span runs to the end
            self.in_quotes = false;
            self.close_quote();
        }

        let raw = mem::take(&mut self.field);
        let span = self.quoted_span.take();

        let value = match span {
            Some((start, end)) if !self.options.trim_quoted_fields => {
                let (head, rest) = raw.split_at(start);
                let (quoted, tail) = rest.split_at(end - start);
                format!("{}{}{}", head.trim_start(), quoted, tail.trim_end())
            }
            _ => raw.trim().to_string(),
        };

        self.row.push(value);
    }

    fn end_row(&mut self) {
        self.end_field();
        let row = mem::take(&mut self.row);
        self.rows.push(row);
    }
}
