use std::collections::HashMap;

use crate::errors::errors::NameError;

/// Code for the name following `len` already interned ones.
pub(crate) fn next_code(len: usize) -> Result<u32, NameError> {
    len.checked_add(1)
        .and_then(|code| u32::try_from(code).ok())
        .ok_or(NameError::Exhausted)
}

/// Interns identifier spellings to small integer codes.
///
/// Codes start at 1 and follow first-seen order. `names[code - 1]` holds the
/// spelling for `code`.
#[derive(Debug, Default, Clone)]
pub struct NameDictionary {
    codes: HashMap<String, u32>,
    names: Vec<String>,
}

impl NameDictionary {
    pub fn new() -> Self {
        NameDictionary::default()
    }

    /// Fails once every `u32` code has been handed out.
    pub fn add_name(&mut self, name: &str) -> Result<u32, NameError> {
        if let Some(code) = self.get_code(name) {
            return Ok(code);
        }

        let code = next_code(self.names.len())?;
        self.names.push(name.to_string());
        self.codes.insert(name.to_string(), code);
        Ok(code)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.codes.contains_key(name)
    }

    pub fn get_code(&self, name: &str) -> Option<u32> {
        self.codes.get(name).copied()
    }

    pub fn get_name(&self, code: u32) -> Result<&str, NameError> {
        code.checked_sub(1)
            .and_then(|index| self.names.get(index as usize))
            .map(String::as_str)
            .ok_or(NameError::OutOfRange { code })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
