//! Specialized collection types

pub use slotmap::{SlotMap, DefaultKey};

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<DefaultKey, T>;

/// Typed handle for type-safe asset references
pub struct TypedHandle<T> {
    key: DefaultKey,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

// Manual impls: deriving would put bounds on `T`.
impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> std::hash::Hash for TypedHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> std::fmt::Debug for TypedHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypedHandle").field(&self.key).finish()
    }
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> DefaultKey {
        self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Payload;

    #[test]
    fn test_typed_handle_is_copy_for_any_payload() {
        let mut map: HandleMap<u32> = HandleMap::new();
        let key = map.insert(7);

        let handle: TypedHandle<Payload> = TypedHandle::new(key);
        let copy = handle;
        assert_eq!(handle, copy);
        assert_eq!(copy.key(), key);
    }
}
