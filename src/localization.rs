// Copyright (c) 2019-present Dmitry Stepanov and Fyrox Engine contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Localization of name labels and tooltips.

use fxhash::FxHashMap;
use ron::error::SpannedError;
use std::{borrow::Cow, fmt::Debug};

pub trait LocalizationService: Debug {
    /// Returns a display string for the key. Unknown keys must be returned as is.
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// A plain key to string map.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct LocalizationTable {
    entries: FxHashMap<String, String>,
}

impl LocalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a RON map, for example `{"Name": "Nom", "Size": "Taille"}`.
    pub fn from_ron_str(source: &str) -> Result<Self, SpannedError> {
        Ok(Self {
            entries: ron::from_str(source)?,
        })
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocalizationService for LocalizationTable {
    fn lookup<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.entries.get(key) {
            Some(value) => Cow::Borrowed(value.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::localization::{LocalizationService, LocalizationTable};

    #[test]
    fn test_unknown_key_falls_back() {
        let table = LocalizationTable::new().with("Name", "Nom");
        assert_eq!(table.lookup("Name"), "Nom");
        assert_eq!(table.lookup("Size"), "Size");
        assert_eq!(table.lookup(""), "");
    }

    #[test]
    fn test_from_ron() {
        let table = LocalizationTable::from_ron_str(r#"{"Name": "Nom", "Size": "Taille"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("Size"), "Taille");
        assert!(LocalizationTable::from_ron_str("{").is_err());
    }
}
