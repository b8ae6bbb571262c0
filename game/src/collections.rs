use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// Catalogue of items addressed by unique name, kept in insertion order.
pub struct Dictionary<T> {
    names: HashMap<String, usize>,
    items: Vec<T>,
}

impl<T> Default for Dictionary<T> {
    fn default() -> Self {
        Self {
            names: HashMap::default(),
            items: vec![],
        }
    }
}

impl<T: Debug> Debug for Dictionary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DictionaryError {
    NameNotFound { name: String },
}

impl<T> Dictionary<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns false and keeps the existing item if the name is already taken.
    pub fn insert(&mut self, name: String, item: T) -> bool {
        if self.names.contains_key(&name) {
            return false;
        }
        self.names.insert(name, self.items.len());
        self.items.push(item);
        true
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn find(&self, name: &str) -> Result<&T, DictionaryError> {
        self.names
            .get(name)
            .and_then(|index| self.items.get(*index))
            .ok_or(DictionaryError::NameNotFound {
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

#[derive(Default, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Sequence {
    value: usize,
}

impl Sequence {
    pub fn one<C, T>(&mut self, constructor: C) -> T
    where
        C: Fn(usize) -> T,
    {
        self.value += 1;
        constructor(self.value)
    }

    pub fn register(&mut self, id: usize) {
        if id > self.value {
            self.value = id
        }
    }

    pub fn introduce(&self) -> Sequence {
        Sequence { value: self.value }
    }
}
