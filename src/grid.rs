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

//! Property grid is the owner of everything needed to show the properties of the selected
//! object: per-grid factories, caches, the view model, the settings and the presentation
//! surface. Any change of the selected object or of the show style rebuilds the cell tree
//! from scratch, filter changes only recalculate visibility.

use crate::{
    builder::CellBuilder,
    cell::{CellInfo, CellInfoCache},
    core::{log::Log, pool::Handle},
    expandable::ExpandableObjectCache,
    factory::{clone_factory_templates, CellEditFactoryCollection, CellEditSyncContext},
    filter::CellFilter,
    localization::{LocalizationService, LocalizationTable},
    path::ReferencePath,
    property::{ObjectRef, ObjectValue, PropertyError},
    settings::{PropertyGridSettings, ShowStyle},
    surface::{Column, PresentationSurface, Row, Widget, WidgetBuilder, WidgetKind},
    view_model::PropertyGridViewModel,
};
use std::rc::Rc;

pub struct PropertyGrid {
    factories: CellEditFactoryCollection,
    expandable_cache: ExpandableObjectCache,
    cell_info_cache: CellInfoCache,
    view_model: PropertyGridViewModel,
    settings: PropertyGridSettings,
    localization: Rc<dyn LocalizationService>,
    filter: Option<Box<dyn CellFilter>>,
    surface: Box<dyn PresentationSurface>,
    header: Handle<Widget>,
    quick_filter: Handle<Widget>,
    toggle_view: Handle<Widget>,
    title: Handle<Widget>,
    name_column: Handle<Widget>,
    properties: Handle<Widget>,
}

impl PropertyGrid {
    pub fn settings(&self) -> &PropertyGridSettings {
        &self.settings
    }

    pub fn view_model(&self) -> &PropertyGridViewModel {
        &self.view_model
    }

    pub fn cell_info_cache(&self) -> &CellInfoCache {
        &self.cell_info_cache
    }

    pub fn factories(&self) -> &CellEditFactoryCollection {
        &self.factories
    }

    /// Factories of this grid only. Call [`Self::rebuild`] to apply the changes.
    pub fn factories_mut(&mut self) -> &mut CellEditFactoryCollection {
        &mut self.factories
    }

    pub fn surface(&self) -> &dyn PresentationSurface {
        &*self.surface
    }

    pub fn surface_mut(&mut self) -> &mut dyn PresentationSurface {
        &mut *self.surface
    }

    pub fn header(&self) -> Handle<Widget> {
        self.header
    }

    pub fn quick_filter(&self) -> Handle<Widget> {
        self.quick_filter
    }

    pub fn toggle_view(&self) -> Handle<Widget> {
        self.toggle_view
    }

    pub fn title(&self) -> Handle<Widget> {
        self.title
    }

    pub fn name_column(&self) -> Handle<Widget> {
        self.name_column
    }

    /// The grid that holds the generated cells.
    pub fn properties_grid(&self) -> Handle<Widget> {
        self.properties
    }

    pub fn selected_object(&self) -> Option<&ObjectRef> {
        self.view_model.selected_object()
    }

    /// Selects a new object and rebuilds the cells if it differs (by identity) from the current
    /// one. Returns `true` if the grid was rebuilt.
    pub fn set_selected_object(
        &mut self,
        object: Option<ObjectRef>,
    ) -> Result<bool, PropertyError> {
        if !self.view_model.set_selected_object(object) {
            return Ok(false);
        }
        self.rebuild()?;
        Ok(true)
    }

    pub fn show_style(&self) -> ShowStyle {
        self.settings.show_style
    }

    pub fn set_show_style(&mut self, show_style: ShowStyle) -> Result<(), PropertyError> {
        if self.settings.show_style == show_style {
            return Ok(());
        }
        self.settings.show_style = show_style;
        self.surface.set_text(self.toggle_view, show_style.as_ref());
        self.rebuild()
    }

    pub fn set_show_title(&mut self, show_title: bool) {
        self.settings.show_title = show_title;
        self.surface.set_visibility(self.title, show_title);
    }

    pub fn set_allow_filter(&mut self, allow_filter: bool) {
        self.settings.allow_filter = allow_filter;
        self.surface.set_visibility(self.header, allow_filter);
    }

    pub fn set_allow_quick_filter(&mut self, allow_quick_filter: bool) {
        self.settings.allow_quick_filter = allow_quick_filter;
        self.surface
            .set_visibility(self.quick_filter, allow_quick_filter);
    }

    pub fn set_allow_toggle_view(&mut self, allow_toggle_view: bool) {
        self.settings.allow_toggle_view = allow_toggle_view;
        self.surface.set_visibility(self.toggle_view, allow_toggle_view);
    }

    /// Applies every option at once, the cells are rebuilt only if the show style has changed.
    pub fn apply_settings(&mut self, settings: PropertyGridSettings) -> Result<(), PropertyError> {
        self.set_show_title(settings.show_title);
        self.set_allow_filter(settings.allow_filter);
        self.set_allow_quick_filter(settings.allow_quick_filter);
        self.set_allow_toggle_view(settings.allow_toggle_view);
        self.set_name_column_width(settings.name_column_width);
        self.settings.name_column_width = settings.name_column_width;
        self.set_show_style(settings.show_style)
    }

    /// Sets the quick filter pattern and refreshes visibility of the cells if it has changed.
    pub fn set_filter_pattern<S: AsRef<str>>(&mut self, pattern: S) -> bool {
        if !self.view_model.set_filter_pattern(pattern) {
            return false;
        }
        self.surface
            .set_text(self.quick_filter, self.view_model.filter_pattern().pattern());
        self.refresh_visibilities();
        true
    }

    /// Sets an additional filter, a cell is visible only if both the quick filter and this one
    /// match it.
    pub fn set_filter(&mut self, filter: Option<Box<dyn CellFilter>>) {
        self.filter = filter;
        self.refresh_visibilities();
    }

    /// Discards every cell and builds new ones for the selected object.
    pub fn rebuild(&mut self) -> Result<(), PropertyError> {
        self.surface.clear_container(self.properties);
        self.expandable_cache.clear();
        self.cell_info_cache.clear();

        let Some(target) = self.view_model.selected_object().cloned() else {
            return Ok(());
        };

        let mut path = ReferencePath::new();
        self.expandable_cache.add(&target);
        let result = {
            let mut scope = path.begin_scope(target.type_name());
            let mut builder = CellBuilder {
                factories: &self.factories,
                expandable_cache: &mut self.expandable_cache,
                localization: &*self.localization,
                surface: &mut *self.surface,
            };
            match self.settings.show_style {
                ShowStyle::Category => builder.build_category_view(
                    &target,
                    self.view_model.categories(),
                    self.properties,
                    &mut scope,
                    &mut self.cell_info_cache,
                ),
                ShowStyle::Alphabetic => builder.build_alphabetic_view(
                    &target,
                    &self.view_model.all_properties(),
                    self.properties,
                    &mut scope,
                    &mut self.cell_info_cache,
                ),
            }
        };
        self.expandable_cache.remove(&target);
        result?;

        self.refresh_visibilities();

        let width = self
            .surface
            .width(self.name_column)
            .unwrap_or(self.settings.name_column_width);
        self.sync_name_width(width, false);

        Ok(())
    }

    /// Recalculates visibility of every cell with the quick filter and the additional filter.
    pub fn refresh_visibilities(&mut self) {
        let pattern = self.view_model.filter_pattern();
        let localization = &*self.localization;
        let custom = self.filter.as_deref();
        let filter = |cell: &CellInfo| {
            pattern.matches_localized(cell, localization)
                && custom.map_or(true, |filter| filter.matches(cell))
        };
        self.cell_info_cache
            .propagate_visibility(&filter, &mut *self.surface);
    }

    /// Recalculates visibility of every cell with the given filter only.
    pub fn refresh_visibilities_with(&mut self, filter: &dyn CellFilter) {
        self.cell_info_cache
            .propagate_visibility(filter, &mut *self.surface);
    }

    /// Sets width of every name label. Does nothing if the title is hidden.
    pub fn sync_name_width(&mut self, width: f32, sync_to_title: bool) {
        if !self.settings.show_title {
            return;
        }

        self.cell_info_cache
            .propagate_name_width(width, &mut *self.surface);

        if sync_to_title {
            self.surface.set_width(self.name_column, width);
            self.settings.name_column_width = width;
        }
    }

    /// Called when the user drags the splitter of the name column.
    pub fn set_name_column_width(&mut self, width: f32) {
        self.sync_name_width(width, true);
    }

    /// Reads the live value of the property at `reference_path` and brings its editor in sync.
    /// Returns `false` if there is no property cell with such path. If the property holds an
    /// object that was replaced by another one, the whole grid is rebuilt.
    pub fn refresh_property(&mut self, reference_path: &str) -> Result<bool, PropertyError> {
        let Some(cell) = self.cell_info_cache.find_mut(reference_path) else {
            return Ok(false);
        };
        let Some(property) = cell.property.clone() else {
            return Ok(false);
        };

        let value = property.value(&cell.owner)?;

        let old_object = cell
            .value
            .as_ref()
            .and_then(ObjectValue::as_object)
            .map(ObjectRef::id);
        let new_object = value.as_object().map(ObjectRef::id);
        if old_object != new_object {
            // Nested cells belong to the old object.
            self.rebuild()?;
            return Ok(true);
        }

        cell.value = Some(value.clone());

        if let Some(factory) = cell.factory.as_ref() {
            let synced = factory.handle_property_changed(&mut CellEditSyncContext {
                surface: &mut *self.surface,
                editor: cell.editor,
                target: &cell.owner,
                property: &property,
                value: &value,
            });
            if !synced {
                Log::err(format!(
                    "{factory:?} failed to show new value {value:?} of {reference_path}."
                ));
            }
        }

        Ok(true)
    }

    /// Writes a new value of the property at `reference_path` and refreshes its cell.
    pub fn set_property_value(
        &mut self,
        reference_path: &str,
        value: ObjectValue,
    ) -> Result<bool, PropertyError> {
        let Some(cell) = self.cell_info_cache.find(reference_path) else {
            return Ok(false);
        };
        let Some(property) = cell.property.as_ref() else {
            return Ok(false);
        };

        property.set_value(&cell.owner, value)?;

        self.refresh_property(reference_path)
    }
}

pub struct PropertyGridBuilder {
    settings: PropertyGridSettings,
    factories: Option<CellEditFactoryCollection>,
    localization: Option<Rc<dyn LocalizationService>>,
    filter: Option<Box<dyn CellFilter>>,
    selected_object: Option<ObjectRef>,
}

impl Default for PropertyGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyGridBuilder {
    pub fn new() -> Self {
        Self {
            settings: Default::default(),
            factories: None,
            localization: None,
            filter: None,
            selected_object: None,
        }
    }

    pub fn with_settings(mut self, settings: PropertyGridSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_show_style(mut self, show_style: ShowStyle) -> Self {
        self.settings.show_style = show_style;
        self
    }

    /// Factories to use instead of a copy of the process-wide templates.
    pub fn with_factories(mut self, factories: CellEditFactoryCollection) -> Self {
        self.factories = Some(factories);
        self
    }

    pub fn with_localization(mut self, localization: Rc<dyn LocalizationService>) -> Self {
        self.localization = Some(localization);
        self
    }

    pub fn with_filter(mut self, filter: Box<dyn CellFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_selected_object(mut self, object: ObjectRef) -> Self {
        self.selected_object = Some(object);
        self
    }

    pub fn build(
        self,
        mut surface: Box<dyn PresentationSurface>,
    ) -> Result<PropertyGrid, PropertyError> {
        let settings = self.settings;
        let root = surface.root();

        surface.set_columns(root, vec![Column::stretch()]);
        let header_row = surface.add_row(root, Row::auto());
        let title_row = surface.add_row(root, Row::auto());
        let properties_row = surface.add_row(root, Row::stretch());

        let header = surface.add_widget(
            root,
            WidgetBuilder::new(WidgetKind::Grid)
                .with_name("Header")
                .on_row(header_row)
                .with_visibility(settings.allow_filter)
                .add_column(Column::stretch())
                .add_column(Column::auto())
                .build(),
        );
        let quick_filter = surface.add_widget(
            header,
            WidgetBuilder::new(WidgetKind::Editor)
                .with_name("QuickFilter")
                .on_column(0)
                .with_visibility(settings.allow_quick_filter)
                .build(),
        );
        let toggle_view = surface.add_widget(
            header,
            WidgetBuilder::new(WidgetKind::Editor)
                .with_name("ToggleView")
                .with_text(settings.show_style.as_ref())
                .on_column(1)
                .with_visibility(settings.allow_toggle_view)
                .build(),
        );

        let title = surface.add_widget(
            root,
            WidgetBuilder::new(WidgetKind::Grid)
                .with_name("Title")
                .on_row(title_row)
                .with_visibility(settings.show_title)
                .add_column(Column::auto())
                .add_column(Column::stretch())
                .build(),
        );
        let name_column = surface.add_widget(
            title,
            WidgetBuilder::new(WidgetKind::Text)
                .with_name("NameColumn")
                .with_text("Name")
                .with_width(settings.name_column_width)
                .on_column(0)
                .build(),
        );
        surface.add_widget(
            title,
            WidgetBuilder::new(WidgetKind::Text)
                .with_name("ValueColumn")
                .with_text("Value")
                .on_column(1)
                .build(),
        );

        let properties = surface.add_widget(
            root,
            WidgetBuilder::new(WidgetKind::Grid)
                .with_name("Properties")
                .on_row(properties_row)
                .build(),
        );

        let mut view_model = PropertyGridViewModel::new();
        view_model.set_selected_object(self.selected_object);

        let mut grid = PropertyGrid {
            factories: self.factories.unwrap_or_else(clone_factory_templates),
            expandable_cache: Default::default(),
            cell_info_cache: Default::default(),
            view_model,
            settings,
            localization: self
                .localization
                .unwrap_or_else(|| Rc::new(LocalizationTable::new())),
            filter: self.filter,
            surface,
            header,
            quick_filter,
            toggle_view,
            title,
            name_column,
            properties,
        };

        grid.rebuild()?;

        Ok(grid)
    }
}
