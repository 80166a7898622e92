use std::rc::Rc;

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    session::compiler::Compiler,
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    tokens::{is_valid_ident, Token, TokenKind, RESERVED_LOOKUP},
};

/// Outcome of one pass of the scanning loop.
enum Step {
    /// Something was skipped or rejected, keep scanning.
    Continue,
    Emit(Token),
}

/// Hand-written scanner producing one token per call.
///
/// Whitespace and `/* ... */` comments are skipped, malformed input is reported
/// to the session and skipped. Once the input is exhausted every call returns
/// the end-of-program token.
pub struct Scanner<'a> {
    compiler: &'a mut Compiler,
    cursor: Cursor,
    comments: Vec<Span>,
}

impl<'a> Scanner<'a> {
    pub fn new(compiler: &'a mut Compiler, source: Rc<str>) -> Self {
        Scanner {
            compiler,
            cursor: Cursor::new(source),
            comments: vec![],
        }
    }

    /// Comment spans found so far, in the order they were scanned.
    pub fn comments(&self) -> &[Span] {
        &self.comments
    }

    pub fn into_comments(self) -> Vec<Span> {
        self.comments
    }

    pub fn next_token(&mut self) -> Token {
        while !self.cursor.is_eof() {
            self.cursor.eat_while(Cursor::is_whitespace);
            if self.cursor.is_eof() {
                break;
            }

            let start = self.cursor.snapshot();

            let step = if self.cursor.is('/') {
                self.scan_comment(start)
            } else if self.cursor.is_letter_or_digit() {
                self.scan_word(start)
            } else {
                let found = self.cursor.current_char().unwrap_or_default();
                self.error(ErrorImpl::BadSyntax { found }, start);
                self.cursor.advance();
                Step::Continue
            };

            if let Step::Emit(token) = step {
                trace!(%token, "token");
                return token;
            }
        }

        self.end_of_program()
    }

    fn scan_comment(&mut self, start: Position) -> Step {
        if self.cursor.advance() != Some('*') {
            self.error(ErrorImpl::BadComment, start);
            return Step::Continue;
        }

        self.cursor.eat_while(|cursor| cursor.is('*'));
        self.cursor.eat_while(|cursor| !cursor.is('*'));
        self.cursor.eat_while(|cursor| cursor.is('*'));

        if self.cursor.is_eof() {
            let at = self.cursor.snapshot();
            self.error(ErrorImpl::BadCommentEndOfFile, at);
            return Step::Emit(self.end_of_program());
        }

        if !self.cursor.is('/') {
            let at = self.cursor.snapshot();
            self.error(ErrorImpl::BadCommentUnclosed, at);
            return Step::Continue;
        }

        let span = MK_SPAN!(start, self.cursor.snapshot());
        trace!(%span, "comment");
        self.comments.push(span);
        self.cursor.advance();

        Step::Continue
    }

    fn scan_word(&mut self, start: Position) -> Step {
        let mut word = String::new();
        while self.cursor.is_letter_or_digit() {
            if let Some(ch) = self.cursor.current_char() {
                word.push(ch);
            }
            self.cursor.advance();
        }

        if !self.cursor.is_whitespace() && !self.cursor.is_eof() {
            let found = self.cursor.current_char().unwrap_or_default();
            let at = self.cursor.snapshot();
            self.error(ErrorImpl::VeryBadSyntax { found }, at);
            self.cursor.eat_while(|cursor| !cursor.is_whitespace());
            return Step::Continue;
        }

        let classified = match RESERVED_LOOKUP.get(word.as_str()) {
            Some(kind) => Ok(*kind),
            None if is_valid_ident(&word) => match self.compiler.add_name(&word) {
                Ok(code) => Ok(TokenKind::Ident(code)),
                Err(_) => Err(ErrorImpl::TooManyNames { word }),
            },
            None => Err(ErrorImpl::BadIdentSyntax { word }),
        };

        let kind = match classified {
            Ok(kind) => kind,
            Err(error) => {
                self.error(error, start);
                self.cursor.advance();
                return Step::Continue;
            }
        };

        let token = MK_TOKEN!(kind, MK_SPAN!(start, self.cursor.snapshot()));
        self.cursor.advance();

        Step::Emit(token)
    }

    fn end_of_program(&self) -> Token {
        MK_TOKEN!(TokenKind::EndOfProgram, MK_SPAN!(self.cursor.snapshot()))
    }

    fn error(&mut self, error: ErrorImpl, position: Position) {
        self.compiler.report(Error::new(error, position));
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end-of-program token.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Everything one scan of a program produces.
#[derive(Debug, Clone)]
pub struct Tokenized {
    /// Ends with exactly one end-of-program token.
    pub tokens: Vec<Token>,
    pub comments: Vec<Span>,
}

pub fn tokenize(source: &str, compiler: &mut Compiler) -> Tokenized {
    let mut scanner = Scanner::new(compiler, Rc::from(source));

    let mut tokens = vec![];
    loop {
        let token = scanner.next_token();
        let done = token.is_end();
        tokens.push(token);
        if done {
            break;
        }
    }

    Tokenized {
        tokens,
        comments: scanner.into_comments(),
    }
}
