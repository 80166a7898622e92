//! Lexical analysis module.
//!
//! This module contains the scanner that converts program text into a stream
//! of tokens. It handles:
//!
//! - Character-by-character position tracking (line, column, offset)
//! - Skipping whitespace and `/* ... */` comments
//! - Recognition of the `for`, `if` and `m1` keywords and of identifiers
//! - Reporting malformed input and recovering from it

pub mod cursor;
pub mod lexer;
pub mod tokens;
