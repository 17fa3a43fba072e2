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

//! Fixtures shared by the tests of the crate.

use crate::{
    core::pool::Handle,
    factory::{
        CellEditBuildContext, CellEditFactory, CellEditFactoryTemplates, CellEditSyncContext,
    },
    grid::{PropertyGrid, PropertyGridBuilder},
    property::{CastError, Inspect, ObjectRef, ObjectValue, PropertyDescriptor, PropertyError, Value},
    settings::ShowStyle,
    surface::{Widget, WidgetBuilder, WidgetKind, WidgetTree},
};
use std::{
    cell::Cell,
    fmt::{Debug, Formatter},
};

/// An object with a dynamic set of properties.
#[derive(Debug)]
pub struct PropertyBag {
    type_name: &'static str,
    properties: Vec<(PropertyDescriptor, ObjectValue)>,
}

impl PropertyBag {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            properties: Default::default(),
        }
    }

    pub fn with<T: Value>(mut self, descriptor: PropertyDescriptor, value: T) -> Self {
        self.properties.push((descriptor, ObjectValue::new(value)));
        self
    }

    fn unknown(&self, name: &str) -> PropertyError {
        PropertyError::UnknownProperty {
            type_name: self.type_name,
            name: name.to_owned(),
        }
    }
}

impl Inspect for PropertyBag {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn properties(&self) -> Vec<PropertyDescriptor> {
        self.properties
            .iter()
            .map(|(descriptor, _)| descriptor.clone())
            .collect()
    }

    fn property_value(&self, name: &str) -> Result<ObjectValue, PropertyError> {
        self.properties
            .iter()
            .find(|(descriptor, _)| descriptor.name == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| self.unknown(name))
    }

    fn set_property_value(&mut self, name: &str, value: ObjectValue) -> Result<(), PropertyError> {
        let error = self.unknown(name);
        let (descriptor, current) = self
            .properties
            .iter_mut()
            .find(|(descriptor, _)| descriptor.name == name)
            .ok_or(error)?;

        if value.value_type_id() != descriptor.value_type_id {
            return Err(CastError::TypeMismatch {
                property_name: name.to_owned(),
                expected_type_name: descriptor.value_type_name,
                actual_type_name: value.value_type_name(),
            }
            .into());
        }

        *current = value;

        Ok(())
    }
}

/// A type no builtin factory knows about.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TestColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug)]
pub struct TestColorFactory;

impl CellEditFactory for TestColorFactory {
    fn accept(&self, property: &PropertyDescriptor) -> bool {
        property.is_type::<TestColor>()
    }

    fn create_instance(&self, ctx: &mut CellEditBuildContext<'_>) -> Option<Handle<Widget>> {
        let color = ctx.value.cast_clone::<TestColor>()?;
        Some(
            ctx.surface.add_widget(
                ctx.container,
                WidgetBuilder::new(WidgetKind::Editor)
                    .with_name("ColorPicker")
                    .with_text(format!("{color:?}"))
                    .build(),
            ),
        )
    }

    fn handle_property_changed(&self, ctx: &mut CellEditSyncContext<'_>) -> bool {
        match ctx.value.cast_value::<TestColor>() {
            Some(color) => {
                ctx.surface.set_text(ctx.editor, &format!("{color:?}"));
                true
            }
            None => false,
        }
    }
}

/// Counts editors it has built, used to check that grids do not share factory state.
#[derive(Default)]
pub struct CountingFactory {
    built: Cell<usize>,
}

impl Debug for CountingFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CountingFactory {{ built: {} }}", self.built.get())
    }
}

impl CellEditFactory for CountingFactory {
    fn accept(&self, property: &PropertyDescriptor) -> bool {
        property.is_type::<i32>()
    }

    fn create_instance(&self, ctx: &mut CellEditBuildContext<'_>) -> Option<Handle<Widget>> {
        self.built.set(self.built.get() + 1);
        Some(
            ctx.surface
                .add_widget(ctx.container, WidgetBuilder::new(WidgetKind::Editor).build()),
        )
    }

    fn handle_property_changed(&self, _ctx: &mut CellEditSyncContext<'_>) -> bool {
        true
    }
}

/// `Scenario { A: String in "X", B: bool in "X" (read-only), C: i32 in "Y" }`, only `A` has a
/// description.
pub fn make_scenario_object() -> ObjectRef {
    ObjectRef::new(
        PropertyBag::new("Scenario")
            .with(
                PropertyDescriptor::new::<String>("A")
                    .with_category("X")
                    .with_description("A_tip"),
                "a".to_string(),
            )
            .with(
                PropertyDescriptor::new::<bool>("B")
                    .with_category("X")
                    .with_read_only(true),
                true,
            )
            .with(PropertyDescriptor::new::<i32>("C").with_category("Y"), 3i32),
    )
}

/// `Node { Me: <itself>, Value: i32 }`
pub fn make_self_cycle() -> ObjectRef {
    let node = ObjectRef::new(
        PropertyBag::new("Node")
            .with(PropertyDescriptor::new::<ObjectRef>("Me"), Option::<()>::None)
            .with(PropertyDescriptor::new::<i32>("Value"), 1i32),
    );
    link(&node, "Me", &node);
    node
}

/// `First { Next: Second }`, `Second { Next: First }`, both in the "Links" category.
pub fn make_pair_cycle() -> ObjectRef {
    let make = |type_name: &'static str| {
        ObjectRef::new(PropertyBag::new(type_name).with(
            PropertyDescriptor::new::<ObjectRef>("Next").with_category("Links"),
            Option::<()>::None,
        ))
    };
    let first = make("First");
    let second = make("Second");
    link(&first, "Next", &second);
    link(&second, "Next", &first);
    first
}

// The placeholder values above are replaced here, the type check of the bag only allows
// `ObjectRef` values for these properties.
fn link(from: &ObjectRef, name: &str, to: &ObjectRef) {
    from.borrow_mut()
        .set_property_value(name, ObjectValue::new(to.clone()))
        .unwrap();
}

/// A grid on a [`WidgetTree`] with builtin factories only.
pub fn make_grid(object: ObjectRef, show_style: ShowStyle) -> PropertyGrid {
    PropertyGridBuilder::new()
        .with_show_style(show_style)
        .with_factories(CellEditFactoryTemplates::with_builtin_factories().clone_factories())
        .with_selected_object(object)
        .build(Box::new(WidgetTree::new()))
        .unwrap()
}
