//! Arena allocation for syntax trees.
//!
//! Every node produced by the parser lives in a bump arena. Dropping the
//! arena frees the whole tree in one step.

use bumpalo::Bump;

/// A bump arena that owns tree nodes and node lists.
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Create a new arena with default capacity.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocate a value in the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Move the contents of a `Vec` into the arena as a slice.
    pub fn alloc_vec<T>(&self, items: Vec<T>) -> &[T] {
        if items.is_empty() {
            return &[];
        }
        self.bump.alloc_slice_fill_iter(items)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_vec_keeps_order() {
        let arena = Arena::new();
        let slice = arena.alloc_vec(vec![1, 2, 3]);
        assert_eq!(slice, &[1, 2, 3]);
    }

    #[test]
    fn test_alloc_empty_vec() {
        let arena = Arena::new();
        let slice: &[u8] = arena.alloc_vec(Vec::new());
        assert!(slice.is_empty());
    }
}
