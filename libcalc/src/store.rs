use num_bigint::BigInt;
use std::collections::HashMap;

/// Variables bound during a session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    bindings: HashMap<String, BigInt>,
}

impl Store {
    /// Bind `name` to `value`, replacing any previous binding
    pub fn define(&mut self, name: impl Into<String>, value: BigInt) {
        self.bindings.insert(name.into(), value);
    }

    /// Get value for `name`
    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
