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

//! Editor for properties whose values are objects themselves. The factory only creates the
//! expander, the grid fills it with the nested cells unless the object is already being
//! expanded higher up the path.

use crate::{
    core::pool::Handle,
    factory::{CellEditBuildContext, CellEditFactory, CellEditSyncContext},
    property::{ObjectRef, PropertyDescriptor},
    surface::{Column, Widget, WidgetBuilder, WidgetKind},
};

#[derive(Debug, Default, Copy, Clone)]
pub struct ExpandableCellEditFactory;

impl CellEditFactory for ExpandableCellEditFactory {
    fn accept(&self, property: &PropertyDescriptor) -> bool {
        property.is_type::<ObjectRef>()
    }

    fn create_instance(&self, ctx: &mut CellEditBuildContext<'_>) -> Option<Handle<Widget>> {
        let object = ctx.value.as_object()?;
        Some(
            ctx.surface.add_widget(
                ctx.container,
                WidgetBuilder::new(WidgetKind::Expander)
                    .with_name("Expander")
                    .with_text(object.type_name())
                    .add_column(Column::auto())
                    .add_column(Column::stretch())
                    .build(),
            ),
        )
    }

    fn handle_property_changed(&self, ctx: &mut CellEditSyncContext<'_>) -> bool {
        match ctx.value.as_object() {
            Some(object) => {
                let type_name = object.type_name();
                ctx.surface.set_text(ctx.editor, type_name);
                true
            }
            None => false,
        }
    }
}
