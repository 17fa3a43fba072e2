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

//! Set of objects that are currently being expanded along the active build path. It is the cycle
//! guard for self-referencing object graphs: an object that is already open is never expanded
//! again.

use crate::property::{ObjectId, ObjectRef};
use fxhash::FxHashSet;

#[derive(Default, Debug, Clone)]
pub struct ExpandableObjectCache {
    objects: FxHashSet<ObjectId>,
}

impl ExpandableObjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the object as open. Returns `false` if it is open already, in this case the
    /// caller must not recurse into the object.
    pub fn add(&mut self, object: &ObjectRef) -> bool {
        self.objects.insert(object.id())
    }

    /// Closes the object, so it could be expanded again on another branch of the graph.
    pub fn remove(&mut self, object: &ObjectRef) -> bool {
        self.objects.remove(&object.id())
    }

    pub fn contains(&self, object: &ObjectRef) -> bool {
        self.objects.contains(&object.id())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
mod test {
    use crate::{expandable::ExpandableObjectCache, property::ObjectRef, test::PropertyBag};

    #[test]
    fn test_add_refuses_open_object() {
        let object = ObjectRef::new(PropertyBag::new("Node"));
        let mut cache = ExpandableObjectCache::new();

        assert!(cache.add(&object));
        assert!(!cache.add(&object.clone()));
        assert!(cache.contains(&object));

        assert!(cache.remove(&object));
        assert!(cache.add(&object));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_equal_objects_are_distinct() {
        let a = ObjectRef::new(PropertyBag::new("Node"));
        let b = ObjectRef::new(PropertyBag::new("Node"));
        let mut cache = ExpandableObjectCache::new();

        assert!(cache.add(&a));
        assert!(cache.add(&b));
        assert_eq!(cache.len(), 2);
    }
}
