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

//! Cell info tree mirrors the generated editor tree. It is rebuilt from scratch on every
//! rebuild of the grid and drives visibility and name column width propagation.

use crate::{
    core::pool::Handle,
    factory::CellEditFactory,
    filter::CellFilter,
    property::{ObjectRef, ObjectValue, PropertyDescriptor},
    surface::{PresentationSurface, Widget},
};
use std::rc::Rc;
use strum_macros::{AsRefStr, EnumString, VariantNames};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, EnumString, VariantNames)]
pub enum CellType {
    /// Groups the properties of a single category.
    Category,
    /// Edits a single property.
    Cell,
}

/// A node of the cell info tree.
#[derive(Clone, Debug)]
pub struct CellInfo {
    /// Unique key of the cell within a build, see [`crate::path::ReferencePath`].
    pub reference_path: String,
    pub category: Option<String>,
    /// The object that owns the property (or the category).
    pub owner: ObjectRef,
    /// `None` for category cells.
    pub property: Option<PropertyDescriptor>,
    pub cell_type: CellType,
    /// Category cells: the expander with the cells. Property cells: the grid the cell is on.
    pub container: Handle<Widget>,
    pub editor: Handle<Widget>,
    pub name_control: Handle<Widget>,
    /// Value of the property at the moment the cell was built or last refreshed.
    pub value: Option<ObjectValue>,
    /// The factory that built the editor.
    pub factory: Option<Rc<dyn CellEditFactory>>,
    pub layer_index: usize,
    pub visible: bool,
    /// Category cells: cells of the category. Property cells: cells of the expanded value.
    pub children: Vec<CellInfo>,
}

impl CellInfo {
    pub fn new_category(
        reference_path: String,
        category: String,
        owner: ObjectRef,
        container: Handle<Widget>,
    ) -> Self {
        Self {
            reference_path,
            category: Some(category),
            owner,
            property: None,
            cell_type: CellType::Category,
            container,
            editor: Handle::NONE,
            name_control: Handle::NONE,
            value: None,
            factory: None,
            layer_index: 0,
            visible: true,
            children: Default::default(),
        }
    }

    pub fn is_category(&self) -> bool {
        self.cell_type == CellType::Category
    }

    /// Display name of the property, or the category label for category cells.
    pub fn display_name(&self) -> &str {
        match self.property.as_ref() {
            Some(property) => &property.display_name,
            None => self.category.as_deref().unwrap_or_default(),
        }
    }

    /// Recalculates visibility of this cell and its descendants. A property cell is visible if
    /// the filter matches it, a category cell is visible if any of its descendant cells is.
    /// Widgets of a property cell stay shown while any of its nested cells is visible.
    /// Returns `true` if the cell itself or any of its descendants is visible.
    pub fn propagate_visibility(
        &mut self,
        filter: &dyn CellFilter,
        surface: &mut dyn PresentationSurface,
    ) -> bool {
        let mut any_descendant_visible = false;
        for child in self.children.iter_mut() {
            any_descendant_visible |= child.propagate_visibility(filter, surface);
        }

        match self.cell_type {
            CellType::Category => {
                self.visible = any_descendant_visible;
                surface.set_visibility(self.container, self.visible);
                self.visible
            }
            CellType::Cell => {
                self.visible = filter.matches(self);
                // The editor of an expanded object hosts the nested rows.
                let shown = self.visible || any_descendant_visible;
                surface.set_visibility(self.name_control, shown);
                surface.set_visibility(self.editor, shown);
                shown
            }
        }
    }

    /// Sets the width of every name label in this subtree, hidden ones included.
    pub fn propagate_name_width(&self, width: f32, surface: &mut dyn PresentationSurface) {
        for child in self.children.iter() {
            child.propagate_name_width(width, surface);
        }

        if self.name_control.is_some() {
            surface.set_width(self.name_control, width);
        }
    }
}

/// Anything cells could be added to.
pub trait CellInfoContainer {
    fn add(&mut self, cell: CellInfo);

    fn children(&self) -> &[CellInfo];

    /// Category inherited by the cells added to the container.
    fn category(&self) -> Option<&str> {
        None
    }
}

impl CellInfoContainer for CellInfo {
    fn add(&mut self, cell: CellInfo) {
        self.children.push(cell);
    }

    fn children(&self) -> &[CellInfo] {
        &self.children
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Depth-first, pre-order iterator over a cell tree.
pub struct CellIter<'a> {
    stack: Vec<&'a CellInfo>,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = &'a CellInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.stack.pop()?;
        self.stack.extend(cell.children.iter().rev());
        Some(cell)
    }
}

fn find_mut_in<'a>(cells: &'a mut [CellInfo], path: &str) -> Option<&'a mut CellInfo> {
    for cell in cells.iter_mut() {
        if cell.reference_path == path {
            return Some(cell);
        }
        if let Some(found) = find_mut_in(&mut cell.children, path) {
            return Some(found);
        }
    }
    None
}

/// Root of the cell info tree.
#[derive(Default, Debug, Clone)]
pub struct CellInfoCache {
    children: Vec<CellInfo>,
}

impl CellInfoContainer for CellInfoCache {
    fn add(&mut self, cell: CellInfo) {
        self.children.push(cell);
    }

    fn children(&self) -> &[CellInfo] {
        &self.children
    }
}

impl CellInfoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over every cell of the tree, depth-first.
    pub fn iter(&self) -> CellIter<'_> {
        CellIter {
            stack: self.children.iter().rev().collect(),
        }
    }

    pub fn find(&self, reference_path: &str) -> Option<&CellInfo> {
        self.iter().find(|cell| cell.reference_path == reference_path)
    }

    pub fn find_mut(&mut self, reference_path: &str) -> Option<&mut CellInfo> {
        find_mut_in(&mut self.children, reference_path)
    }

    pub fn propagate_visibility(
        &mut self,
        filter: &dyn CellFilter,
        surface: &mut dyn PresentationSurface,
    ) {
        for cell in self.children.iter_mut() {
            cell.propagate_visibility(filter, surface);
        }
    }

    pub fn propagate_name_width(&self, width: f32, surface: &mut dyn PresentationSurface) {
        for cell in self.children.iter() {
            cell.propagate_name_width(width, surface);
        }
    }
}
