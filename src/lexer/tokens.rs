use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("m1", TokenKind::M1);
        map
    };

    /// Single digits and single non-digits, strictly alternating.
    static ref IDENT_PATTERN: Regex =
        Regex::new(r"^\p{Nd}?(?:[^\p{Nd}]\p{Nd})*[^\p{Nd}]?$").unwrap();
}

/// Checks the identifier grammar: no two neighbouring characters may both be
/// digits or both be non-digits, so `a1b2` and `1a` pass while `ab` and `a11`
/// do not.
pub fn is_valid_ident(word: &str) -> bool {
    IDENT_PATTERN.is_match(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Carries the code the name dictionary assigned to the spelling.
    Ident(u32),

    // Reserved
    For,
    If,
    M1,

    EndOfProgram,
}

impl TokenKind {
    pub fn domain(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "IDENT",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::M1 => "M1",
            TokenKind::EndOfProgram => "ENDOFPROGRAM",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.domain())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Ident(code) => write!(f, "{} {}: {}", self.kind, self.span, code),
            _ => write!(f, "{} {}", self.kind, self.span),
        }
    }
}

impl Token {
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfProgram
    }

    pub fn name_code(&self) -> Option<u32> {
        match self.kind {
            TokenKind::Ident(code) => Some(code),
            _ => None,
        }
    }
}
