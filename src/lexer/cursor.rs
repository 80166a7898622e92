use lazy_static::lazy_static;
use regex::Regex;
use std::rc::Rc;

use crate::Position;

lazy_static! {
    /// Decimal digits (`Nd`) only; `²`, `½` and roman numerals are not digits.
    static ref DIGIT: Regex = Regex::new(r"^\p{Nd}$").unwrap();
    static ref LETTER: Regex = Regex::new(r"^\p{L}$").unwrap();
}

fn matches_class(class: &Regex, ch: char) -> bool {
    class.is_match(ch.encode_utf8(&mut [0; 4]))
}

pub fn is_digit_char(ch: char) -> bool {
    matches_class(&DIGIT, ch)
}

pub fn is_letter_char(ch: char) -> bool {
    matches_class(&LETTER, ch)
}

/// Walks the program one character at a time, keeping line, column and byte
/// offset in step.
///
/// End of input is reported as `None`; advancing past it is a no-op.
#[derive(Debug, Clone)]
pub struct Cursor {
    pos: Position,
}

impl Cursor {
    pub fn new(source: Rc<str>) -> Self {
        Cursor {
            pos: Position::start(source),
        }
    }

    pub fn current_char(&self) -> Option<char> {
        self.pos.source[self.pos.offset..].chars().next()
    }

    /// Moves past the current character and returns the new current one.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;

        if ch == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }
        self.pos.offset += ch.len_utf8();

        self.current_char()
    }

    /// Independent copy of the current position, unaffected by later advances.
    pub fn snapshot(&self) -> Position {
        self.pos.clone()
    }

    pub fn is_eof(&self) -> bool {
        self.pos.is_eof()
    }

    pub fn is_letter(&self) -> bool {
        self.current_char().is_some_and(is_letter_char)
    }

    pub fn is_digit(&self) -> bool {
        self.current_char().is_some_and(is_digit_char)
    }

    pub fn is_letter_or_digit(&self) -> bool {
        self.is_letter() || self.is_digit()
    }

    pub fn is_whitespace(&self) -> bool {
        self.current_char().is_some_and(char::is_whitespace)
    }

    pub fn is_newline(&self) -> bool {
        self.current_char() == Some('\n')
    }

    pub fn is(&self, expected: char) -> bool {
        self.current_char() == Some(expected)
    }

    pub fn eat_while(&mut self, predicate: impl Fn(&Cursor) -> bool) {
        while !self.is_eof() && predicate(self) {
            self.advance();
        }
    }
}
