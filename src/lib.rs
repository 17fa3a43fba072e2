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

//! Property grid core. Given an object that implements [`property::Inspect`], the grid lists its
//! properties, asks pluggable cell edit factories for an editor of every property and records
//! the result in a tree of cells mirroring the editor tree.
//!
//! ## Factories
//!
//! Support of a property type is added by registering a [`factory::CellEditFactory`]. Factories
//! are tried in registration order, the first one that accepts a property builds its editor.
//! Properties that nobody accepts are skipped. Every grid gets its own copy of the registered
//! factories, see [`factory::register_factory_template`].
//!
//! ## Nested objects
//!
//! A property whose value is an [`property::ObjectRef`] is expanded in place: the properties of
//! the nested object become child cells of the property cell. Objects that are already being
//! expanded higher up the path are shown collapsed, so self-referencing object graphs are safe.
//!
//! ## Layouts
//!
//! Properties are either grouped by category (every group gets an expander) or listed
//! alphabetically, see [`settings::ShowStyle`]. Filtering and name column width changes walk the
//! cell tree without rebuilding it.
//!
//! The crate does not draw anything, it talks to a [`surface::PresentationSurface`] that is
//! implemented on top of a real widget toolkit. [`surface::WidgetTree`] is a headless one.

#![forbid(unsafe_code)]
#![allow(clippy::float_cmp)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]

pub use fyrox_core as core;

pub mod builder;
pub mod cell;
pub mod expandable;
pub mod factory;
pub mod filter;
pub mod grid;
pub mod localization;
pub mod path;
pub mod property;
pub mod settings;
pub mod surface;
pub mod view_model;

#[cfg(test)]
pub(crate) mod test;
