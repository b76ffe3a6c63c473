use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::ops::Deref;
use std::rc::Rc;

pub struct Shared<T> {
    inner: Rc<T>,
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.deref(), f)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct Dictionary<K, T> {
    keys: HashMap<K, Shared<T>>,
    strings: HashMap<String, Shared<T>>,
    order: Vec<K>,
}

impl<K: Clone, T> Clone for Dictionary<K, T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            strings: self.strings.clone(),
            order: self.order.clone(),
        }
    }
}

impl<K, T> Default for Dictionary<K, T> {
    fn default() -> Self {
        Self {
            keys: HashMap::default(),
            strings: HashMap::default(),
            order: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DictionaryError {
    KeyNotFound { key: String },
    NameNotFound { name: String },
    NameDuplicated { name: String },
}

impl<K, T> Dictionary<K, T>
where
    K: Debug + Hash + Eq + Copy,
{
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn insert(&mut self, key: K, name: String, kind: T) -> Result<(), DictionaryError> {
        if self.strings.contains_key(&name) {
            return Err(DictionaryError::NameDuplicated { name });
        }
        let kind = Shared::new(kind);
        if self.keys.insert(key, kind.clone()).is_none() {
            self.order.push(key);
        }
        self.strings.insert(name, kind);
        Ok(())
    }

    pub fn get(&self, key: K) -> Result<Shared<T>, DictionaryError> {
        self.keys
            .get(&key)
            .cloned()
            .ok_or(DictionaryError::KeyNotFound {
                key: format!("{:?}", key),
            })
    }

    pub fn find(&self, name: &str) -> Result<Shared<T>, DictionaryError> {
        self.strings
            .get(name)
            .cloned()
            .ok_or(DictionaryError::NameNotFound {
                name: name.to_string(),
            })
    }

    /// Iterates kinds in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shared<T>> + '_ {
        self.order.iter().filter_map(|key| self.keys.get(key))
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
}
