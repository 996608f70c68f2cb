use std::cell::Cell;

/// A lazily computed scalar derived from the contents of a vector or matrix.
///
/// The owner is responsible for calling [`Cached::invalidate`] whenever its contents may change.
/// Since every such change requires `&mut` access to the owner, invalidation does not need
/// interior mutability; only the lazy fill from `&self` does.
#[derive(Clone, Default)]
pub(crate) struct Cached(Cell<Option<f32>>);

impl Cached {
    #[allow(clippy::declare_interior_mutable_const)]
    pub(crate) const UNSET: Self = Self(Cell::new(None));

    /// Returns the cached value, computing and storing it with `compute` if it is unset.
    #[inline]
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> f32) -> f32 {
        match self.0.get() {
            Some(value) => value,
            None => {
                let value = compute();
                self.0.set(Some(value));
                value
            }
        }
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        *self.0.get_mut() = None;
    }

    #[cfg(test)]
    pub(crate) fn get(&self) -> Option<f32> {
        self.0.get()
    }
}
