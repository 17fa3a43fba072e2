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

//! View model of the grid: the selected object, the quick filter and the two ways of ordering
//! the properties of an object.

use crate::{
    filter::FilterPattern,
    property::{ObjectRef, PropertyDescriptor},
};
use fxhash::FxHashMap;

/// Properties of a single category.
pub type CategoryProperties = (String, Vec<PropertyDescriptor>);

/// Groups properties by category. Categories keep the order in which they are first seen,
/// properties keep the order of the source.
pub fn group_by_category(properties: Vec<PropertyDescriptor>) -> Vec<CategoryProperties> {
    let mut groups: Vec<CategoryProperties> = Vec::new();
    let mut indices: FxHashMap<String, usize> = FxHashMap::default();
    for property in properties {
        match indices.get(&property.category) {
            Some(&index) => groups[index].1.push(property),
            None => {
                indices.insert(property.category.clone(), groups.len());
                groups.push((property.category.clone(), vec![property]));
            }
        }
    }
    groups
}

/// Sorts properties by display name, ignoring case. The sort is stable.
pub fn sort_by_display_name(mut properties: Vec<PropertyDescriptor>) -> Vec<PropertyDescriptor> {
    properties.sort_by_cached_key(|property| property.display_name.to_lowercase());
    properties
}

#[derive(Default, Debug, Clone)]
pub struct PropertyGridViewModel {
    selected_object: Option<ObjectRef>,
    filter_pattern: FilterPattern,
}

impl PropertyGridViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_object(&self) -> Option<&ObjectRef> {
        self.selected_object.as_ref()
    }

    /// Returns `true` if the selection has changed. Objects are compared by identity.
    pub fn set_selected_object(&mut self, object: Option<ObjectRef>) -> bool {
        if self.selected_object == object {
            return false;
        }
        self.selected_object = object;
        true
    }

    pub fn filter_pattern(&self) -> &FilterPattern {
        &self.filter_pattern
    }

    /// Returns `true` if the pattern has changed.
    pub fn set_filter_pattern<S: AsRef<str>>(&mut self, pattern: S) -> bool {
        let pattern = FilterPattern::new(pattern);
        if self.filter_pattern == pattern {
            return false;
        }
        self.filter_pattern = pattern;
        true
    }

    /// Browsable properties of the selected object in declaration order.
    pub fn properties(&self) -> Vec<PropertyDescriptor> {
        self.selected_object
            .as_ref()
            .map(ObjectRef::properties)
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<CategoryProperties> {
        group_by_category(self.properties())
    }

    pub fn all_properties(&self) -> Vec<PropertyDescriptor> {
        sort_by_display_name(self.properties())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        property::{ObjectRef, PropertyDescriptor},
        test::{make_scenario_object, PropertyBag},
        view_model::{group_by_category, sort_by_display_name, PropertyGridViewModel},
    };

    fn names(properties: &[PropertyDescriptor]) -> Vec<&str> {
        properties.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let groups = group_by_category(vec![
            PropertyDescriptor::new::<i32>("a").with_category("Z"),
            PropertyDescriptor::new::<i32>("b").with_category("A"),
            PropertyDescriptor::new::<i32>("c").with_category("Z"),
            PropertyDescriptor::new::<i32>("d"),
        ]);
        let categories = groups.iter().map(|(c, _)| c.as_str()).collect::<Vec<_>>();
        assert_eq!(categories, ["Z", "A", "Misc"]);
        assert_eq!(names(&groups[0].1), ["a", "c"]);
    }

    #[test]
    fn test_alphabetic_order() {
        let sorted = sort_by_display_name(vec![
            PropertyDescriptor::new::<i32>("b"),
            PropertyDescriptor::new::<i32>("x").with_display_name("A second"),
            PropertyDescriptor::new::<i32>("C"),
            PropertyDescriptor::new::<i32>("y").with_display_name("a first"),
        ]);
        assert_eq!(names(&sorted), ["y", "x", "b", "C"]);
    }

    #[test]
    fn test_selection_compares_identity() {
        let object = ObjectRef::new(PropertyBag::new("Thing"));
        let mut view_model = PropertyGridViewModel::new();
        assert!(view_model.properties().is_empty());
        assert!(view_model.set_selected_object(Some(object.clone())));
        assert!(!view_model.set_selected_object(Some(object)));
        assert!(view_model.set_selected_object(Some(ObjectRef::new(PropertyBag::new("Thing")))));
        assert!(view_model.set_selected_object(None));
    }

    #[test]
    fn test_view_model_groups_selected_object() {
        let mut view_model = PropertyGridViewModel::new();
        view_model.set_selected_object(Some(make_scenario_object()));

        let categories = view_model.categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(names(&categories[0].1), ["A", "B"]);
        assert_eq!(names(&categories[1].1), ["C"]);
        assert_eq!(names(&view_model.all_properties()), ["A", "B", "C"]);

        assert!(view_model.set_filter_pattern("a"));
        assert!(!view_model.set_filter_pattern(" A "));
    }
}
