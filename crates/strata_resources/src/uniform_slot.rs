//! Lightweight uniform record container.
//!
//! Holds a small Pod record inline together with a stable id and a version
//! counter. The id is the record's identity as seen by a renderer: writers
//! mutate the record in place, so a cached GPU buffer keyed by id stays valid
//! and only needs a re-upload when the version moves.

use bytemuck::Pod;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_UNIFORM_SLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Uniform record with identity and change tracking.
///
/// # Example
/// ```
/// use strata_resources::UniformSlot;
/// use strata_resources::uniforms::GridUniforms;
///
/// let mut slot = UniformSlot::new(GridUniforms::default(), "Grid");
/// let before = slot.version();
///
/// // Writing through DerefMut bumps the version.
/// slot.line_count.x = 4.0;
/// assert!(slot.version() > before);
/// ```
#[derive(Debug)]
pub struct UniformSlot<T: Pod> {
    id: u64,
    data: T,
    version: AtomicU64,
    label: String,
}

impl<T: Pod> UniformSlot<T> {
    pub fn new(data: T, label: &str) -> Self {
        Self {
            id: NEXT_UNIFORM_SLOT_ID.fetch_add(1, Ordering::Relaxed),
            data,
            version: AtomicU64::new(0),
            label: label.to_string(),
        }
    }

    #[inline]
    pub fn get(&self) -> &T {
        &self.data
    }

    /// Replaces the whole record (bumps the version).
    pub fn set(&mut self, data: T) {
        self.data = data;
        self.mark_dirty();
    }

    /// Mutable access without a version bump.
    ///
    /// Call [`mark_dirty`](Self::mark_dirty) once after a batch of writes.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.data
    }

    #[inline]
    pub fn mark_dirty(&self) {
        self.version.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.data)
    }
}

impl<T: Pod + Default> Default for UniformSlot<T> {
    fn default() -> Self {
        Self::new(T::default(), "UniformSlot")
    }
}

// A cloned slot is a different buffer as far as the renderer is concerned.
impl<T: Pod> Clone for UniformSlot<T> {
    fn clone(&self) -> Self {
        Self {
            id: NEXT_UNIFORM_SLOT_ID.fetch_add(1, Ordering::Relaxed),
            data: self.data,
            version: AtomicU64::new(self.version.load(Ordering::Relaxed)),
            label: self.label.clone(),
        }
    }
}

impl<T: Pod> Deref for UniformSlot<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T: Pod> DerefMut for UniformSlot<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.mark_dirty();
        &mut self.data
    }
}
