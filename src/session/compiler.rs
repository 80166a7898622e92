use tracing::debug;

use crate::{
    errors::errors::{Error, NameError},
    Position,
};

use super::{
    messages::{Message, Messages},
    names::NameDictionary,
};

/// Per-run state shared by the scanner and the driver.
///
/// The scanner borrows it mutably for its whole lifetime; the driver reads the
/// names and messages back once scanning is done.
#[derive(Debug, Default)]
pub struct Compiler {
    names: NameDictionary,
    messages: Messages,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler::default()
    }

    pub fn add_name(&mut self, name: &str) -> Result<u32, NameError> {
        self.names.add_name(name)
    }

    pub fn get_name(&self, code: u32) -> Result<&str, NameError> {
        self.names.get_name(code)
    }

    pub fn add_message(&mut self, text: &str, is_err: bool, position: Position) {
        let message = if is_err {
            Message::error(text)
        } else {
            Message::info(text)
        };

        debug!(%position, %message, "message recorded");
        if let Some(replaced) = self.messages.record(position, message) {
            debug!(%replaced, "message replaced at the same position");
        }
    }

    pub fn report(&mut self, error: Error) {
        debug!(
            kind = error.get_error_name(),
            tip = %error.get_tip(),
            "lexical error"
        );
        let text = error.get_kind().to_string();
        self.add_message(&text, true, error.get_position().clone());
    }

    pub fn names(&self) -> &NameDictionary {
        &self.names
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn has_errors(&self) -> bool {
        self.messages.has_errors()
    }
}
