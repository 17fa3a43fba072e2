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

use crate::{
    core::pool::Handle,
    factory::{
        make_text_editor, sync_text_editor, CellEditBuildContext, CellEditFactory,
        CellEditSyncContext,
    },
    property::PropertyDescriptor,
    surface::Widget,
};

/// Edits `bool` properties with a check box.
#[derive(Debug, Default, Copy, Clone)]
pub struct BoolCellEditFactory;

impl CellEditFactory for BoolCellEditFactory {
    fn accept(&self, property: &PropertyDescriptor) -> bool {
        property.is_type::<bool>()
    }

    fn create_instance(&self, ctx: &mut CellEditBuildContext<'_>) -> Option<Handle<Widget>> {
        let value = ctx.value.cast_clone::<bool>()?;
        Some(make_text_editor(ctx, "CheckBox", &value))
    }

    fn handle_property_changed(&self, ctx: &mut CellEditSyncContext<'_>) -> bool {
        sync_text_editor::<bool>(ctx)
    }
}
