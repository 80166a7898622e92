//! Error types and error handling for the lexer.
//!
//! This module defines the error types used while scanning and by the driver:
//!
//! - Lexical errors with source position information
//! - Name lookup failures of the session's name dictionary
//! - Driver failures (usage, reading the program)

pub mod errors;
