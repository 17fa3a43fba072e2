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

//! Presentation surface is the only way the grid talks to a widget toolkit. The grid creates
//! widgets through it and sets their layout position, width, enabled state and visibility, but
//! it never draws anything. [`WidgetTree`] is a pool-backed surface that simply records this
//! state; toolkit bindings implement [`PresentationSurface`] on top of their own widgets.

use crate::core::pool::{Handle, Pool};
use strum_macros::{AsRefStr, EnumString, VariantNames};

/// Defines how the size of a grid row or column is calculated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, AsRefStr, EnumString, VariantNames)]
pub enum SizeMode {
    /// Exactly the desired size.
    #[default]
    Strict,
    /// Fits the content.
    Auto,
    /// Takes the space left by the other rows or columns.
    Stretch,
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct GridDimension {
    pub size_mode: SizeMode,
    pub desired_size: f32,
}

impl GridDimension {
    pub fn strict(desired_size: f32) -> Self {
        Self {
            size_mode: SizeMode::Strict,
            desired_size,
        }
    }

    pub fn stretch() -> Self {
        Self {
            size_mode: SizeMode::Stretch,
            desired_size: 0.0,
        }
    }

    pub fn auto() -> Self {
        Self {
            size_mode: SizeMode::Auto,
            desired_size: 0.0,
        }
    }
}

pub type Column = GridDimension;

pub type Row = GridDimension;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, EnumString, VariantNames)]
pub enum WidgetKind {
    /// A container that lays its children out in rows and columns.
    Grid,
    /// A collapsible container with a header.
    Expander,
    /// A text block.
    Text,
    /// Any widget that edits a value.
    Editor,
}

/// Recorded state of a single widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub kind: WidgetKind,
    /// Widget class within its kind, for example `CheckBox` or `TextBox` for editors.
    pub name: String,
    pub text: String,
    pub tooltip: Option<String>,
    pub row: usize,
    pub column: usize,
    pub width: Option<f32>,
    pub enabled: bool,
    pub visible: bool,
    pub expanded: bool,
    pub parent: Handle<Widget>,
    pub children: Vec<Handle<Widget>>,
    pub rows: Vec<Row>,
    pub columns: Vec<Column>,
}

pub struct WidgetBuilder {
    kind: WidgetKind,
    name: String,
    text: String,
    tooltip: Option<String>,
    row: usize,
    column: usize,
    width: Option<f32>,
    enabled: bool,
    visible: bool,
    columns: Vec<Column>,
}

impl WidgetBuilder {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            name: Default::default(),
            text: Default::default(),
            tooltip: None,
            row: 0,
            column: 0,
            width: None,
            enabled: true,
            visible: true,
            columns: Default::default(),
        }
    }

    pub fn with_name<S: AsRef<str>>(mut self, name: S) -> Self {
        self.name = name.as_ref().to_owned();
        self
    }

    pub fn with_text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.text = text.as_ref().to_owned();
        self
    }

    /// Empty tooltips are ignored.
    pub fn with_tooltip<S: AsRef<str>>(mut self, tooltip: S) -> Self {
        let tooltip = tooltip.as_ref();
        self.tooltip = if tooltip.is_empty() {
            None
        } else {
            Some(tooltip.to_owned())
        };
        self
    }

    pub fn on_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    pub fn on_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn add_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn build(self) -> Widget {
        Widget {
            kind: self.kind,
            name: self.name,
            text: self.text,
            tooltip: self.tooltip,
            row: self.row,
            column: self.column,
            width: self.width,
            enabled: self.enabled,
            visible: self.visible,
            expanded: true,
            parent: Handle::NONE,
            children: Default::default(),
            rows: Default::default(),
            columns: self.columns,
        }
    }
}

/// Abstract widget container the grid renders into. Methods called with an invalid handle must
/// be ignored by implementations.
pub trait PresentationSurface {
    /// The widget that hosts everything the grid creates.
    fn root(&self) -> Handle<Widget>;

    fn add_widget(&mut self, parent: Handle<Widget>, widget: Widget) -> Handle<Widget>;

    /// Removes every child of the container together with its row and column definitions.
    fn clear_container(&mut self, container: Handle<Widget>);

    /// Appends a row definition and returns its index.
    fn add_row(&mut self, container: Handle<Widget>, row: Row) -> usize;

    fn set_columns(&mut self, container: Handle<Widget>, columns: Vec<Column>);

    fn set_grid_position(&mut self, widget: Handle<Widget>, row: usize, column: usize);

    fn set_text(&mut self, widget: Handle<Widget>, text: &str);

    fn text(&self, widget: Handle<Widget>) -> Option<&str>;

    fn tooltip(&self, widget: Handle<Widget>) -> Option<&str>;

    /// Row definitions of the container, empty for invalid handles.
    fn rows(&self, container: Handle<Widget>) -> &[Row];

    fn set_width(&mut self, widget: Handle<Widget>, width: f32);

    fn width(&self, widget: Handle<Widget>) -> Option<f32>;

    fn set_enabled(&mut self, widget: Handle<Widget>, enabled: bool);

    fn is_enabled(&self, widget: Handle<Widget>) -> bool;

    fn set_visibility(&mut self, widget: Handle<Widget>, visible: bool);

    fn is_visible(&self, widget: Handle<Widget>) -> bool;
}

/// Default [`PresentationSurface`] that keeps widgets in a pool.
#[derive(Debug)]
pub struct WidgetTree {
    pool: Pool<Widget>,
    root: Handle<Widget>,
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTree {
    pub fn new() -> Self {
        let mut pool = Pool::new();
        let root = pool.spawn(
            WidgetBuilder::new(WidgetKind::Grid)
                .with_name("Root")
                .build(),
        );
        Self { pool, root }
    }

    pub fn try_get(&self, handle: Handle<Widget>) -> Option<&Widget> {
        self.pool.try_borrow(handle)
    }

    pub fn try_get_mut(&mut self, handle: Handle<Widget>) -> Option<&mut Widget> {
        self.pool.try_borrow_mut(handle)
    }

    pub fn alive_count(&self) -> u32 {
        self.pool.alive_count()
    }

    /// Finds the first descendant of `from` with the given name, depth-first.
    pub fn find_by_name(&self, from: Handle<Widget>, name: &str) -> Handle<Widget> {
        let Some(widget) = self.pool.try_borrow(from) else {
            return Handle::NONE;
        };
        if widget.name == name {
            return from;
        }
        for &child in widget.children.iter() {
            let found = self.find_by_name(child, name);
            if found.is_some() {
                return found;
            }
        }
        Handle::NONE
    }

    fn remove_recursive(&mut self, handle: Handle<Widget>) {
        if let Some(widget) = self.pool.try_free(handle) {
            for child in widget.children {
                self.remove_recursive(child);
            }
        }
    }
}

impl PresentationSurface for WidgetTree {
    fn root(&self) -> Handle<Widget> {
        self.root
    }

    fn add_widget(&mut self, parent: Handle<Widget>, mut widget: Widget) -> Handle<Widget> {
        let parent = if self.pool.is_valid_handle(parent) {
            parent
        } else {
            self.root
        };
        widget.parent = parent;
        let handle = self.pool.spawn(widget);
        self.pool.borrow_mut(parent).children.push(handle);
        handle
    }

    fn clear_container(&mut self, container: Handle<Widget>) {
        let Some(widget) = self.pool.try_borrow_mut(container) else {
            return;
        };
        let children = std::mem::take(&mut widget.children);
        widget.rows.clear();
        widget.columns.clear();
        for child in children {
            self.remove_recursive(child);
        }
    }

    fn add_row(&mut self, container: Handle<Widget>, row: Row) -> usize {
        match self.pool.try_borrow_mut(container) {
            Some(widget) => {
                widget.rows.push(row);
                widget.rows.len() - 1
            }
            None => 0,
        }
    }

    fn set_columns(&mut self, container: Handle<Widget>, columns: Vec<Column>) {
        if let Some(widget) = self.pool.try_borrow_mut(container) {
            widget.columns = columns;
        }
    }

    fn set_grid_position(&mut self, widget: Handle<Widget>, row: usize, column: usize) {
        if let Some(widget) = self.pool.try_borrow_mut(widget) {
            widget.row = row;
            widget.column = column;
        }
    }

    fn set_text(&mut self, widget: Handle<Widget>, text: &str) {
        if let Some(widget) = self.pool.try_borrow_mut(widget) {
            widget.text = text.to_owned();
        }
    }

    fn text(&self, widget: Handle<Widget>) -> Option<&str> {
        self.pool.try_borrow(widget).map(|w| w.text.as_str())
    }

    fn tooltip(&self, widget: Handle<Widget>) -> Option<&str> {
        self.pool
            .try_borrow(widget)
            .and_then(|w| w.tooltip.as_deref())
    }

    fn rows(&self, container: Handle<Widget>) -> &[Row] {
        self.pool
            .try_borrow(container)
            .map(|w| w.rows.as_slice())
            .unwrap_or_default()
    }

    fn set_width(&mut self, widget: Handle<Widget>, width: f32) {
        if let Some(widget) = self.pool.try_borrow_mut(widget) {
            widget.width = Some(width);
        }
    }

    fn width(&self, widget: Handle<Widget>) -> Option<f32> {
        self.pool.try_borrow(widget).and_then(|w| w.width)
    }

    fn set_enabled(&mut self, widget: Handle<Widget>, enabled: bool) {
        if let Some(widget) = self.pool.try_borrow_mut(widget) {
            widget.enabled = enabled;
        }
    }

    fn is_enabled(&self, widget: Handle<Widget>) -> bool {
        self.pool.try_borrow(widget).is_some_and(|w| w.enabled)
    }

    fn set_visibility(&mut self, widget: Handle<Widget>, visible: bool) {
        if let Some(widget) = self.pool.try_borrow_mut(widget) {
            widget.visible = visible;
        }
    }

    fn is_visible(&self, widget: Handle<Widget>) -> bool {
        self.pool.try_borrow(widget).is_some_and(|w| w.visible)
    }
}
