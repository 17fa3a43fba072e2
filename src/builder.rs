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

//! Builds cells for the properties of an object, either grouped by category or as a single
//! alphabetic list. Both strategies share the per-property builder which also expands object
//! values recursively, guarded against cycles by [`ExpandableObjectCache`].

use crate::{
    cell::{CellInfo, CellInfoCache, CellInfoContainer, CellType},
    core::{log::Log, pool::Handle},
    expandable::ExpandableObjectCache,
    factory::{CellEditBuildContext, CellEditFactoryCollection, CellEditSyncContext},
    localization::LocalizationService,
    path::ReferencePath,
    property::{ObjectRef, PropertyDescriptor, PropertyError},
    surface::{Column, PresentationSurface, Row, Widget, WidgetBuilder, WidgetKind},
    view_model::CategoryProperties,
};

pub struct CellBuilder<'a> {
    pub factories: &'a CellEditFactoryCollection,
    pub expandable_cache: &'a mut ExpandableObjectCache,
    pub localization: &'a dyn LocalizationService,
    pub surface: &'a mut dyn PresentationSurface,
}

impl CellBuilder<'_> {
    /// Creates a category cell with an expander for every category, fills it with the cells of
    /// the category and finishes the grid with a stretchable row that takes the rest of the
    /// space.
    pub fn build_category_view(
        &mut self,
        target: &ObjectRef,
        categories: Vec<CategoryProperties>,
        grid: Handle<Widget>,
        path: &mut ReferencePath,
        cache: &mut CellInfoCache,
    ) -> Result<(), PropertyError> {
        self.surface.set_columns(grid, Vec::new());

        for (category, properties) in categories {
            let row = self.surface.add_row(grid, Row::auto());
            let expander = self.surface.add_widget(
                grid,
                WidgetBuilder::new(WidgetKind::Expander)
                    .with_name("Category")
                    .with_text(self.localization.lookup(&category))
                    .on_row(row)
                    .add_column(Column::auto())
                    .add_column(Column::stretch())
                    .build(),
            );

            let mut category_cell = CellInfo::new_category(
                path.category_path(&category),
                category,
                target.clone(),
                expander,
            );
            let result =
                self.build_properties(target, &properties, expander, path, &mut category_cell, 0);
            cache.add(category_cell);
            result?;
        }

        self.surface.add_row(grid, Row::stretch());

        Ok(())
    }

    /// Creates cells for every property directly on the grid, no category cells are made.
    pub fn build_alphabetic_view(
        &mut self,
        target: &ObjectRef,
        properties: &[PropertyDescriptor],
        grid: Handle<Widget>,
        path: &mut ReferencePath,
        cache: &mut CellInfoCache,
    ) -> Result<(), PropertyError> {
        self.surface
            .set_columns(grid, vec![Column::auto(), Column::stretch()]);

        self.build_properties(target, properties, grid, path, cache, 0)
    }

    fn build_properties(
        &mut self,
        target: &ObjectRef,
        properties: &[PropertyDescriptor],
        grid: Handle<Widget>,
        path: &mut ReferencePath,
        container: &mut dyn CellInfoContainer,
        layer_index: usize,
    ) -> Result<(), PropertyError> {
        for property in properties {
            let mut scope = path.begin_scope(property.name.as_str());
            self.build_property(target, property, grid, &mut scope, container, layer_index)?;
        }
        Ok(())
    }

    /// Builds a cell for a single property, `path` must already end with the property name.
    /// Properties that no factory accepts are skipped.
    pub fn build_property(
        &mut self,
        target: &ObjectRef,
        property: &PropertyDescriptor,
        grid: Handle<Widget>,
        path: &mut ReferencePath,
        container: &mut dyn CellInfoContainer,
        layer_index: usize,
    ) -> Result<(), PropertyError> {
        let value = property.value(target)?;

        let Some((editor, factory)) =
            self.factories
                .build_property_control(&mut CellEditBuildContext {
                    surface: &mut *self.surface,
                    container: grid,
                    target,
                    property,
                    value: &value,
                    layer_index,
                })
        else {
            Log::warn(format!(
                "Unable to create an editor for {path}: no factory accepts {}.",
                property.value_type_name
            ));
            return Ok(());
        };

        let row = self.surface.add_row(grid, Row::auto());
        let name_control = self.surface.add_widget(
            grid,
            WidgetBuilder::new(WidgetKind::Text)
                .with_name("PropertyName")
                .with_text(self.localization.lookup(&property.display_name))
                .with_tooltip(self.localization.lookup(&property.description))
                .on_row(row)
                .on_column(0)
                .build(),
        );

        self.surface.set_grid_position(editor, row, 1);
        // Read-only always wins over whatever the factory decided.
        let enabled = self.surface.is_enabled(editor) && !property.read_only;
        self.surface.set_enabled(editor, enabled);

        if !factory.handle_property_changed(&mut CellEditSyncContext {
            surface: &mut *self.surface,
            editor,
            target,
            property,
            value: &value,
        }) {
            Log::warn(format!(
                "{factory:?} was unable to show the initial value of {path}."
            ));
        }

        let category = container
            .category()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| property.category.clone());

        let mut cell = CellInfo {
            reference_path: path.to_string(),
            category: Some(category),
            owner: target.clone(),
            property: Some(property.clone()),
            cell_type: CellType::Cell,
            container: grid,
            editor,
            name_control,
            value: Some(value.clone()),
            factory: Some(factory),
            layer_index,
            visible: true,
            children: Default::default(),
        };

        if let Some(object) = value.as_object() {
            self.expand_object(object, editor, path, &mut cell, layer_index + 1)?;
        }

        container.add(cell);

        Ok(())
    }

    fn expand_object(
        &mut self,
        object: &ObjectRef,
        editor: Handle<Widget>,
        path: &mut ReferencePath,
        cell: &mut CellInfo,
        layer_index: usize,
    ) -> Result<(), PropertyError> {
        if !self.expandable_cache.add(object) {
            Log::info(format!(
                "{path} refers to {object:?} which is already expanded, it is shown collapsed."
            ));
            return Ok(());
        }

        let properties = object.properties();
        let result = self.build_properties(object, &properties, editor, path, cell, layer_index);
        self.expandable_cache.remove(object);
        result
    }
}
