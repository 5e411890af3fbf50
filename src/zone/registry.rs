//! Memoizing registry of zone descriptors
//!
//! Each valid offset field owns one slot holding an atomic pointer to a
//! heap-allocated [`ZoneDescriptor`]. Slots are filled on first lookup with a
//! compare-and-swap, so concurrent readers never block and a slot, once set,
//! never changes for the lifetime of the registry.

use alloc::boxed::Box;
use core::fmt;
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use crate::layout::OFFSET_FIELD_COUNT;
use crate::zone::ZoneDescriptor;

static GLOBAL: OffsetRegistry = OffsetRegistry::new();

/// Lock-free cache of one [`ZoneDescriptor`] per offset field
///
/// # Concurrency Behavior
/// Lookups take `&self` and are safe from any number of threads. Two threads
/// racing on an empty slot may both allocate; the loser frees its copy and
/// returns the winner's descriptor, so every caller sees the same descriptor.
///
/// # Example
/// ```rust
/// use zonestamp::zone::OffsetRegistry;
///
/// let registry = OffsetRegistry::new();
/// let first = registry.zone(1084).unwrap();
/// let second = registry.zone(1084).unwrap();
///
/// assert_eq!(first.offset_seconds(), 3600);
/// assert!(core::ptr::eq(first, second));
/// assert_eq!(registry.len(), 1);
/// ```
pub struct OffsetRegistry {
    // Slot `i` caches the descriptor of field `i + 1`.
    slots: [AtomicPtr<ZoneDescriptor>; OFFSET_FIELD_COUNT],
}

impl OffsetRegistry {
    /// Creates an empty registry
    pub const fn new() -> Self {
        Self {
            slots: [const { AtomicPtr::new(ptr::null_mut()) }; OFFSET_FIELD_COUNT],
        }
    }

    /// Returns the process-wide registry
    ///
    /// It is never torn down; descriptors it hands out live for the whole
    /// process.
    pub fn global() -> &'static OffsetRegistry {
        &GLOBAL
    }

    /// Returns the descriptor for an offset field, creating it on first use
    ///
    /// Returns `None` for the reserved zero field and for values wider than
    /// eleven bits.
    pub fn zone(&self, field: u16) -> Option<&ZoneDescriptor> {
        let slot = self.slots.get(usize::from(field).checked_sub(1)?)?;

        let current = slot.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: non-null slots point at descriptors leaked from a `Box`
            // in this registry and are only freed in `Drop`, which needs `&mut self`.
            return Some(unsafe { &*current });
        }

        let fresh = Box::into_raw(Box::new(ZoneDescriptor::from_field(field)?));
        match slot.compare_exchange(ptr::null_mut(), fresh, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => {
                // SAFETY: `fresh` is now owned by the slot; see above.
                let zone = unsafe { &*fresh };
                tracing::trace!(
                    field,
                    offset_seconds = zone.offset_seconds(),
                    "registered fixed-offset zone"
                );
                Some(zone)
            }
            Err(winner) => {
                // SAFETY: `fresh` was never published, so this is its only owner.
                drop(unsafe { Box::from_raw(fresh) });
                // SAFETY: `winner` is the non-null pointer that won the slot.
                Some(unsafe { &*winner })
            }
        }
    }

    /// Returns true if a descriptor for the field has already been created
    pub fn contains(&self, field: u16) -> bool {
        usize::from(field)
            .checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .is_some_and(|slot| !slot.load(Ordering::Acquire).is_null())
    }

    /// Returns the number of populated slots
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !slot.load(Ordering::Acquire).is_null())
            .count()
    }

    /// Returns true if no descriptor has been created yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of descriptors the registry can hold
    pub const fn capacity(&self) -> usize {
        OFFSET_FIELD_COUNT
    }
}

impl Default for OffsetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OffsetRegistry {
    fn drop(&mut self) {
        for slot in self.slots.iter_mut() {
            let zone = core::mem::replace(slot.get_mut(), ptr::null_mut());
            if !zone.is_null() {
                // SAFETY: exclusive access; the pointer came from `Box::into_raw`.
                drop(unsafe { Box::from_raw(zone) });
            }
        }
    }
}

impl fmt::Debug for OffsetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffsetRegistry")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
