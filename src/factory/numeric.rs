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
    factory::{CellEditBuildContext, CellEditFactory, CellEditSyncContext},
    property::PropertyDescriptor,
    surface::{Widget, WidgetBuilder, WidgetKind},
};
use std::{
    fmt::{Debug, Display},
    marker::PhantomData,
};

/// A numeric type that could be edited by [`NumericCellEditFactory`].
pub trait NumericType: Copy + Debug + Display + PartialOrd + 'static {}

impl<T> NumericType for T where T: Copy + Debug + Display + PartialOrd + 'static {}

/// Edits numbers with a numeric up-down field.
#[derive(Debug)]
pub struct NumericCellEditFactory<T>
where
    T: NumericType,
{
    /// Amount of digits after the decimal point, integers ignore it.
    pub precision: usize,
    phantom: PhantomData<T>,
}

impl<T> Default for NumericCellEditFactory<T>
where
    T: NumericType,
{
    fn default() -> Self {
        Self {
            precision: 3,
            phantom: PhantomData,
        }
    }
}

impl<T> NumericCellEditFactory<T>
where
    T: NumericType,
{
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            phantom: PhantomData,
        }
    }

    fn format(&self, value: T) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl<T> CellEditFactory for NumericCellEditFactory<T>
where
    T: NumericType,
{
    fn accept(&self, property: &PropertyDescriptor) -> bool {
        property.is_type::<T>()
    }

    fn create_instance(&self, ctx: &mut CellEditBuildContext<'_>) -> Option<Handle<Widget>> {
        let value = *ctx.value.cast_value::<T>()?;
        Some(
            ctx.surface.add_widget(
                ctx.container,
                WidgetBuilder::new(WidgetKind::Editor)
                    .with_name("NumericUpDown")
                    .with_text(self.format(value))
                    .build(),
            ),
        )
    }

    fn handle_property_changed(&self, ctx: &mut CellEditSyncContext<'_>) -> bool {
        match ctx.value.cast_value::<T>() {
            Some(value) => {
                ctx.surface.set_text(ctx.editor, &self.format(*value));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::factory::numeric::NumericCellEditFactory;

    #[test]
    fn test_format() {
        assert_eq!(NumericCellEditFactory::<f32>::default().format(1.5), "1.500");
        assert_eq!(NumericCellEditFactory::<f64>::with_precision(1).format(2.26), "2.3");
        assert_eq!(NumericCellEditFactory::<i32>::default().format(-7), "-7");
    }
}
