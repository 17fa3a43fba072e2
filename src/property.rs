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

//! Property source capability. An object exposes its editable properties through the [`Inspect`]
//! trait, each property is described by a [`PropertyDescriptor`] and its values travel around as
//! type-erased [`ObjectValue`]s.

use std::{
    any::{Any, TypeId},
    cell::{Ref, RefCell, RefMut},
    fmt::{Debug, Display, Formatter},
    rc::Rc,
};

/// Category of every property that does not declare one.
pub const DEFAULT_CATEGORY: &str = "Misc";

/// Strips the module path from a fully qualified type name, keeping generic arguments intact.
pub fn short_type_name(full_name: &str) -> &str {
    let end = full_name.find('<').unwrap_or(full_name.len());
    match full_name[..end].rfind("::") {
        Some(position) => &full_name[position + 2..],
        None => full_name,
    }
}

/// An error produced by a property source while reading or writing a value.
#[derive(Debug)]
pub enum CastError {
    TypeMismatch {
        property_name: String,
        expected_type_name: &'static str,
        actual_type_name: &'static str,
    },
}

impl Display for CastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CastError::TypeMismatch {
                property_name,
                expected_type_name,
                actual_type_name,
            } => write!(
                f,
                "property {property_name} expects a value of type {expected_type_name}, got {actual_type_name}"
            ),
        }
    }
}

/// Failures of a property source. The grid never produces these by itself, it only forwards
/// them to its caller.
#[derive(Debug)]
pub enum PropertyError {
    /// The object has no property with the given name.
    UnknownProperty {
        type_name: &'static str,
        name: String,
    },
    /// An attempt to write a read-only property.
    ReadOnly { name: String },
    /// A value of a wrong type was supplied or stored.
    Cast(CastError),
    /// A source-specific failure.
    Custom(String),
}

impl From<CastError> for PropertyError {
    fn from(e: CastError) -> Self {
        Self::Cast(e)
    }
}

impl Display for PropertyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyError::UnknownProperty { type_name, name } => {
                write!(f, "{type_name} has no property named {name}")
            }
            PropertyError::ReadOnly { name } => write!(f, "property {name} is read-only"),
            PropertyError::Cast(e) => Display::fmt(e, f),
            PropertyError::Custom(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for PropertyError {}

/// Anything that can be stored in a property.
pub trait Value: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn value_type_name(&self) -> &'static str;
}

impl<T> Value for T
where
    T: Any + Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A cheaply clonable, type-erased snapshot of a property value.
#[derive(Clone)]
pub struct ObjectValue {
    value: Rc<dyn Value>,
}

impl Debug for ObjectValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&*self.value, f)
    }
}

impl ObjectValue {
    pub fn new<T: Value>(value: T) -> Self {
        Self {
            value: Rc::new(value),
        }
    }

    pub fn value_type_id(&self) -> TypeId {
        Any::type_id((*self.value).as_any())
    }

    pub fn value_type_name(&self) -> &'static str {
        (*self.value).value_type_name()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.value_type_id() == TypeId::of::<T>()
    }

    pub fn cast_value<T: 'static>(&self) -> Option<&T> {
        (*self.value).as_any().downcast_ref::<T>()
    }

    pub fn cast_clone<T: Clone + 'static>(&self) -> Option<T> {
        self.cast_value::<T>().cloned()
    }

    /// Casts the value to `T` or produces a [`CastError`] that names the property.
    pub fn try_cast<T: 'static>(&self, property_name: &str) -> Result<&T, CastError> {
        self.cast_value::<T>()
            .ok_or_else(|| CastError::TypeMismatch {
                property_name: property_name.to_owned(),
                expected_type_name: std::any::type_name::<T>(),
                actual_type_name: self.value_type_name(),
            })
    }

    /// Returns the nested object if the value is an expandable one.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        self.cast_value::<ObjectRef>()
    }
}

/// Object that exposes its properties to the grid.
pub trait Inspect: Any {
    /// Short name of the object type, it is the first segment of every reference path.
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Lists the properties of the object in declaration order.
    fn properties(&self) -> Vec<PropertyDescriptor>;

    fn property_value(&self, name: &str) -> Result<ObjectValue, PropertyError>;

    fn set_property_value(&mut self, name: &str, value: ObjectValue) -> Result<(), PropertyError>;
}

/// Identity of an inspected object. Two distinct objects never share an id even if their
/// contents are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

/// Shared reference to an inspected object. Object graphs may contain cycles, so the grid
/// always compares these by identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<dyn Inspect>>);

impl Debug for ObjectRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Never print the contents: the graph may be cyclic.
        match self.0.try_borrow() {
            Ok(object) => write!(f, "{}@{:#x}", object.type_name(), self.id().0),
            Err(_) => write!(f, "<borrowed>@{:#x}", self.id().0),
        }
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ObjectRef {}

impl ObjectRef {
    pub fn new<T: Inspect>(object: T) -> Self {
        Self(Rc::new(RefCell::new(object)))
    }

    /// Wraps an existing shared object, keeping its identity.
    pub fn from_rc<T: Inspect>(object: Rc<RefCell<T>>) -> Self {
        Self(object)
    }

    pub fn id(&self) -> ObjectId {
        ObjectId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn borrow(&self) -> Ref<'_, dyn Inspect> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, dyn Inspect> {
        self.0.borrow_mut()
    }

    pub fn type_name(&self) -> &'static str {
        self.0.borrow().type_name()
    }

    /// Enumerates browsable properties of the object.
    pub fn properties(&self) -> Vec<PropertyDescriptor> {
        self.0
            .borrow()
            .properties()
            .into_iter()
            .filter(|property| property.browsable)
            .collect()
    }
}

/// Metadata of a single property. Identity of a property is the pair of its owner object and
/// its name.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub description: String,
    pub read_only: bool,
    /// Non-browsable properties are never shown.
    pub browsable: bool,
    pub value_type_id: TypeId,
    pub value_type_name: &'static str,
}

impl PropertyDescriptor {
    pub fn new<T: 'static>(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            category: DEFAULT_CATEGORY.to_owned(),
            description: Default::default(),
            read_only: false,
            browsable: true,
            value_type_id: TypeId::of::<T>(),
            value_type_name: std::any::type_name::<T>(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_browsable(mut self, browsable: bool) -> Self {
        self.browsable = browsable;
        self
    }

    pub fn is_type<T: 'static>(&self) -> bool {
        self.value_type_id == TypeId::of::<T>()
    }

    /// Reads the current value of the property from `target`.
    pub fn value(&self, target: &ObjectRef) -> Result<ObjectValue, PropertyError> {
        target.borrow().property_value(&self.name)
    }

    /// Writes a new value of the property to `target`.
    pub fn set_value(&self, target: &ObjectRef, value: ObjectValue) -> Result<(), PropertyError> {
        if self.read_only {
            return Err(PropertyError::ReadOnly {
                name: self.name.clone(),
            });
        }

        if value.value_type_id() != self.value_type_id {
            return Err(CastError::TypeMismatch {
                property_name: self.name.clone(),
                expected_type_name: self.value_type_name,
                actual_type_name: value.value_type_name(),
            }
            .into());
        }

        target.borrow_mut().set_property_value(&self.name, value)
    }
}
