use std::{collections::BTreeMap, fmt::Display};

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub is_err: bool,
    pub text: String,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Message {
            is_err: true,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Message {
            is_err: false,
            text: text.into(),
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_err {
            write!(f, "ERROR: {}", self.text)
        } else {
            write!(f, "INFO: {}", self.text)
        }
    }
}

/// Diagnostics keyed by the position they were raised at.
///
/// A second message at the same position replaces the first. Iteration runs
/// in source order.
#[derive(Debug, Default, Clone)]
pub struct Messages {
    entries: BTreeMap<Position, Message>,
}

impl Messages {
    pub fn new() -> Self {
        Messages::default()
    }

    /// Returns the message that was replaced, if any.
    pub fn record(&mut self, position: Position, message: Message) -> Option<Message> {
        self.entries.insert(position, message)
    }

    pub fn get(&self, position: &Position) -> Option<&Message> {
        self.entries.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Message)> {
        self.entries.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.entries.values().any(|message| message.is_err)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for Messages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (position, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", position, message)?;
        }
        write!(f, "}}")
    }
}
