use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::Position;

/// A lexical error raised at a specific point of the program.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::BadComment => "BadComment",
            ErrorImpl::BadCommentEndOfFile => "BadCommentEndOfFile",
            ErrorImpl::BadCommentUnclosed => "BadCommentUnclosed",
            ErrorImpl::BadSyntax { .. } => "BadSyntax",
            ErrorImpl::VeryBadSyntax { .. } => "VeryBadSyntax",
            ErrorImpl::BadIdentSyntax { .. } => "BadIdentSyntax",
            ErrorImpl::TooManyNames { .. } => "TooManyNames",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::BadComment => {
                ErrorTip::Suggestion(String::from("`/` may only start a `/* ... */` comment"))
            }
            ErrorImpl::BadCommentEndOfFile => ErrorTip::Suggestion(String::from(
                "Comment is never closed, did you forget `*/`?",
            )),
            ErrorImpl::BadCommentUnclosed => ErrorTip::Suggestion(String::from(
                "Expected `/` after `*` to close the comment",
            )),
            ErrorImpl::BadSyntax { .. } => ErrorTip::None,
            ErrorImpl::VeryBadSyntax { found } => ErrorTip::Suggestion(format!(
                "Unexpected `{}` right after a word, separate words with whitespace",
                found
            )),
            ErrorImpl::BadIdentSyntax { word } => ErrorTip::Suggestion(format!(
                "Identifier `{}` must alternate single digits and letters",
                word
            )),
            ErrorImpl::TooManyNames { word } => ErrorTip::Suggestion(format!(
                "No name code left for `{}`",
                word
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The kinds of malformed input the scanner recovers from. The display text is
/// what ends up in the message sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("bad comment")]
    BadComment,
    #[error("bad comment end of file")]
    BadCommentEndOfFile,
    #[error("bad comment unclosed")]
    BadCommentUnclosed,
    #[error("bad syntax")]
    BadSyntax { found: char },
    #[error("very bad syntax")]
    VeryBadSyntax { found: char },
    #[error("bad ident syntax")]
    BadIdentSyntax { word: String },
    #[error("too many names")]
    TooManyNames { word: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name code {code} is out of range")]
    OutOfRange { code: u32 },
    #[error("name codes are exhausted")]
    Exhausted,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("usage: toylex <file>")]
    Usage,
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage => 1,
            CliError::Read { .. } => 2,
        }
    }
}
