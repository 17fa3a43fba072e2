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

//! Reference path is a stack of scope segments that addresses every cell produced during a build.
//! Segments are pushed with [`ReferencePath::begin_scope`] and popped when the returned
//! [`PathScope`] is dropped, so the path stays balanced on every exit path, including `?`.

use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ReferencePath {
    segments: Vec<String>,
}

impl ReferencePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new segment. The segment is popped when the scope is dropped.
    #[must_use = "the segment is popped as soon as the scope is dropped"]
    pub fn begin_scope<S: Into<String>>(&mut self, segment: S) -> PathScope<'_> {
        self.segments.push(segment.into());
        PathScope { path: self }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Path of a category cell within the current scope, `Type[Category]`.
    pub fn category_path(&self, category: &str) -> String {
        format!("{self}[{category}]")
    }
}

impl Display for ReferencePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// An open scope of a [`ReferencePath`]. Nested scopes are opened through the guard itself.
#[derive(Debug)]
pub struct PathScope<'a> {
    path: &'a mut ReferencePath,
}

impl PathScope<'_> {
    /// Closes the scope explicitly.
    pub fn end(self) {}
}

impl Deref for PathScope<'_> {
    type Target = ReferencePath;

    fn deref(&self) -> &Self::Target {
        self.path
    }
}

impl DerefMut for PathScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.path
    }
}

impl Drop for PathScope<'_> {
    fn drop(&mut self) {
        self.path.segments.pop();
    }
}

#[cfg(test)]
mod test {
    use crate::path::ReferencePath;

    #[test]
    fn test_nested_scopes() {
        let mut path = ReferencePath::new();
        {
            let mut root = path.begin_scope("Type");
            {
                let mut a = root.begin_scope("PropA");
                let b = a.begin_scope("PropB");
                assert_eq!(b.to_string(), "Type.PropA.PropB");
                assert_eq!(b.depth(), 3);
            }
            assert_eq!(root.to_string(), "Type");
            assert_eq!(root.category_path("Category"), "Type[Category]");
        }
        assert!(path.is_empty());
    }

    #[test]
    fn test_scope_is_released_on_error() {
        fn failing_step(path: &mut ReferencePath) -> Result<(), String> {
            let scope = path.begin_scope("Broken");
            Err(format!("failed at {}", *scope))
        }

        let mut path = ReferencePath::new();
        let mut root = path.begin_scope("Type");
        assert_eq!(
            failing_step(&mut root),
            Err("failed at Type.Broken".to_string())
        );
        assert_eq!(root.segments(), ["Type".to_string()]);
        root.end();
        assert_eq!(path.depth(), 0);
    }

    #[test]
    fn test_scope_is_released_on_panic() {
        let mut path = ReferencePath::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = path.begin_scope("Panicking");
            panic!("build step failed");
        }));
        assert!(result.is_err());
        assert!(path.is_empty());
    }
}
