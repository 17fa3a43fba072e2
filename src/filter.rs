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

//! Filter predicates that decide which cells are visible.

use crate::{
    cell::{CellInfo, CellType},
    localization::{LocalizationService, LocalizationTable},
};

/// Decides whether a property cell is visible. Category cells are never passed to a filter,
/// their visibility is derived from their descendants.
pub trait CellFilter {
    fn matches(&self, cell: &CellInfo) -> bool;
}

impl<F> CellFilter for F
where
    F: Fn(&CellInfo) -> bool,
{
    fn matches(&self, cell: &CellInfo) -> bool {
        (self)(cell)
    }
}

/// Quick filter: case-insensitive substring match against the display name or the category of
/// a property. An empty pattern matches everything.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FilterPattern {
    pattern: String,
}

impl FilterPattern {
    pub fn new<S: AsRef<str>>(pattern: S) -> Self {
        Self {
            pattern: pattern.as_ref().trim().to_lowercase(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn matches_text(&self, text: &str) -> bool {
        self.pattern.is_empty() || text.to_lowercase().contains(&self.pattern)
    }
}

impl FilterPattern {
    /// Matches the pattern against the labels the user actually sees, that is the localized
    /// display name and the localized category of the property.
    pub fn matches_localized(
        &self,
        cell: &CellInfo,
        localization: &dyn LocalizationService,
    ) -> bool {
        if self.pattern.is_empty() {
            return true;
        }

        debug_assert_eq!(cell.cell_type, CellType::Cell);

        cell.property
            .as_ref()
            .is_some_and(|property| self.matches_text(&localization.lookup(&property.display_name)))
            || cell
                .category
                .as_deref()
                .is_some_and(|category| self.matches_text(&localization.lookup(category)))
    }
}

impl CellFilter for FilterPattern {
    fn matches(&self, cell: &CellInfo) -> bool {
        self.matches_localized(cell, &LocalizationTable::new())
    }
}

#[cfg(test)]
mod test {
    use crate::filter::FilterPattern;

    #[test]
    fn test_pattern_matching() {
        let pattern = FilterPattern::new("  Col ");
        assert_eq!(pattern.pattern(), "col");
        assert!(pattern.matches_text("Background Color"));
        assert!(!pattern.matches_text("Size"));
        assert!(FilterPattern::default().matches_text("anything"));
    }
}
