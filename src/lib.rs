#![allow(clippy::module_inception)]

use std::{cmp::Ordering, fmt::Display, fs, path::Path, rc::Rc, sync::Once, time::Instant};

use tracing::info;

use crate::{errors::errors::CliError, lexer::lexer::tokenize, session::compiler::Compiler};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod session;

/// A point in the program text.
///
/// `offset` is a byte offset into `source`, `line` and `column` are 1-based and
/// count characters. Equality and ordering only look at the coordinates: every
/// position handed out during one scan shares the same source.
#[derive(Debug, Clone)]
pub struct Position {
    pub source: Rc<str>,
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    pub fn start(source: Rc<str>) -> Self {
        Position {
            source,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.line == other.line && self.column == other.column
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.offset, self.line, self.column).cmp(&(other.offset, other.line, other.column))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// Half-open stretch of source: `end` is one past the last included character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset >= self.end.offset
    }

    pub fn text(&self) -> &str {
        &self.start.source[self.start.offset..self.end.offset]
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG` is
/// set, e.g. `RUST_LOG=toylex=trace`. Logs go to stderr so stdout only carries
/// the listing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

pub fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds everything the driver prints for one program: the program text, every
/// token before the end marker, the comment spans and the recorded messages.
pub fn render_listing(source: &str) -> String {
    let mut compiler = Compiler::new();

    let start = Instant::now();
    let tokenized = tokenize(source, &mut compiler);
    info!(
        tokens = tokenized.tokens.len(),
        comments = tokenized.comments.len(),
        elapsed = ?start.elapsed(),
        "tokenized"
    );

    let mut listing = String::new();
    listing.push_str(source);
    listing.push('\n');

    for token in tokenized.tokens.iter().filter(|token| !token.is_end()) {
        listing.push_str(&token.to_string());
        listing.push('\n');
    }

    let comments = tokenized
        .comments
        .iter()
        .map(|span| span.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    listing.push_str(&format!("comments: [{}]\n", comments));
    listing.push_str(&format!("messages: {}\n", compiler.messages()));

    listing
}
