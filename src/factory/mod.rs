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

//! Cell edit factories build editors for properties. Factories are tried in registration order
//! and the first one that accepts a property and produces an editor wins. Supporting a new
//! property type never requires touching the grid: register a new factory instead.
//!
//! There is a process-wide list of factory templates, see [`register_factory_template`]. Every
//! grid gets its own freshly constructed copy of the templates, so factories are free to keep
//! per-grid state.

use crate::{
    core::{parking_lot::RwLock, pool::Handle},
    factory::{
        boolean::BoolCellEditFactory, expandable::ExpandableCellEditFactory,
        numeric::NumericCellEditFactory, string::StringCellEditFactory,
    },
    property::{ObjectRef, ObjectValue, PropertyDescriptor},
    surface::{PresentationSurface, Widget, WidgetBuilder, WidgetKind},
};
use lazy_static::lazy_static;
use std::{
    fmt::{Debug, Display, Formatter},
    rc::Rc,
    sync::Arc,
};

pub mod boolean;
pub mod expandable;
pub mod numeric;
pub mod string;

/// Everything a factory needs to create an editor for a property.
pub struct CellEditBuildContext<'a> {
    pub surface: &'a mut dyn PresentationSurface,
    /// The grid the editor must be added to. The caller places the editor on a row afterwards.
    pub container: Handle<Widget>,
    pub target: &'a ObjectRef,
    pub property: &'a PropertyDescriptor,
    /// Snapshot of the property value taken right before the editor is built.
    pub value: &'a ObjectValue,
    /// How deeply the property is nested in expanded objects.
    pub layer_index: usize,
}

/// Context for bringing an existing editor in sync with a new property value.
pub struct CellEditSyncContext<'a> {
    pub surface: &'a mut dyn PresentationSurface,
    pub editor: Handle<Widget>,
    pub target: &'a ObjectRef,
    pub property: &'a PropertyDescriptor,
    pub value: &'a ObjectValue,
}

pub trait CellEditFactory: Debug {
    /// Returns `true` if the factory is able to edit the property.
    fn accept(&self, property: &PropertyDescriptor) -> bool;

    /// Creates an editor. `None` means the factory changed its mind after seeing the actual
    /// value, the next factory will be tried then.
    fn create_instance(&self, ctx: &mut CellEditBuildContext<'_>) -> Option<Handle<Widget>>;

    /// Updates the editor to show the new value. Returns `false` if the value could not be
    /// shown by this factory.
    fn handle_property_changed(&self, ctx: &mut CellEditSyncContext<'_>) -> bool;
}

/// Adds a simple editor that shows its value as text.
pub fn make_text_editor<T: Display>(
    ctx: &mut CellEditBuildContext<'_>,
    name: &str,
    value: &T,
) -> Handle<Widget> {
    ctx.surface.add_widget(
        ctx.container,
        WidgetBuilder::new(WidgetKind::Editor)
            .with_name(name)
            .with_text(value.to_string())
            .build(),
    )
}

/// Shows the value of type `T` as the text of the editor.
pub fn sync_text_editor<T: Display + 'static>(ctx: &mut CellEditSyncContext<'_>) -> bool {
    match ctx.value.cast_value::<T>() {
        Some(value) => {
            ctx.surface.set_text(ctx.editor, &value.to_string());
            true
        }
        None => false,
    }
}

/// Ordered set of factories owned by a single grid.
#[derive(Default, Debug)]
pub struct CellEditFactoryCollection {
    factories: Vec<Rc<dyn CellEditFactory>>,
}

impl CellEditFactoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a factory. It has the lowest priority among the factories added so far.
    pub fn add<F: CellEditFactory + 'static>(&mut self, factory: F) {
        self.factories.push(Rc::new(factory));
    }

    pub fn add_boxed(&mut self, factory: Box<dyn CellEditFactory>) {
        self.factories.push(Rc::from(factory));
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn CellEditFactory>> {
        self.factories.iter()
    }

    /// Builds an editor with the first factory that accepts the property. Returns `None` if
    /// no factory could do that, which is a normal outcome for unsupported types.
    pub fn build_property_control(
        &self,
        ctx: &mut CellEditBuildContext<'_>,
    ) -> Option<(Handle<Widget>, Rc<dyn CellEditFactory>)> {
        let property = ctx.property;
        self.factories
            .iter()
            .filter(|factory| factory.accept(property))
            .find_map(|factory| {
                factory
                    .create_instance(ctx)
                    .map(|editor| (editor, factory.clone()))
            })
    }
}

type FactoryConstructor = Arc<dyn Fn() -> Box<dyn CellEditFactory> + Send + Sync>;

/// Templates from which per-grid factory collections are made.
#[derive(Default, Clone)]
pub struct CellEditFactoryTemplates {
    constructors: Vec<FactoryConstructor>,
}

impl Debug for CellEditFactoryTemplates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CellEditFactoryTemplates ({})", self.constructors.len())
    }
}

impl CellEditFactoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates templates for every builtin factory.
    pub fn with_builtin_factories() -> Self {
        let mut templates = Self::new();

        templates.register(|| BoolCellEditFactory);
        templates.register(StringCellEditFactory::default);

        templates.register(NumericCellEditFactory::<f64>::default);
        templates.register(NumericCellEditFactory::<f32>::default);
        templates.register(NumericCellEditFactory::<i64>::default);
        templates.register(NumericCellEditFactory::<u64>::default);
        templates.register(NumericCellEditFactory::<i32>::default);
        templates.register(NumericCellEditFactory::<u32>::default);
        templates.register(NumericCellEditFactory::<i16>::default);
        templates.register(NumericCellEditFactory::<u16>::default);
        templates.register(NumericCellEditFactory::<i8>::default);
        templates.register(NumericCellEditFactory::<u8>::default);
        templates.register(NumericCellEditFactory::<usize>::default);
        templates.register(NumericCellEditFactory::<isize>::default);

        templates.register(|| ExpandableCellEditFactory);

        templates
    }

    /// Adds a factory template. The constructor is called once per grid.
    pub fn register<F, C>(&mut self, constructor: C)
    where
        F: CellEditFactory + 'static,
        C: Fn() -> F + Send + Sync + 'static,
    {
        self.constructors
            .push(Arc::new(move || -> Box<dyn CellEditFactory> {
                Box::new(constructor())
            }));
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Constructs a fresh set of factories, keeping the registration order.
    pub fn clone_factories(&self) -> CellEditFactoryCollection {
        let mut collection = CellEditFactoryCollection::new();
        for constructor in self.constructors.iter() {
            collection.add_boxed(constructor());
        }
        collection
    }
}

lazy_static! {
    static ref FACTORY_TEMPLATES: RwLock<CellEditFactoryTemplates> =
        RwLock::new(CellEditFactoryTemplates::with_builtin_factories());
}

/// Registers a factory in the process-wide templates. Call it during application start-up,
/// before any grid is created: already created grids keep their own copies and will not see
/// the new factory.
pub fn register_factory_template<F, C>(constructor: C)
where
    F: CellEditFactory + 'static,
    C: Fn() -> F + Send + Sync + 'static,
{
    FACTORY_TEMPLATES.write().register(constructor);
}

/// Makes a per-grid copy of the process-wide templates.
pub fn clone_factory_templates() -> CellEditFactoryCollection {
    FACTORY_TEMPLATES.read().clone_factories()
}
