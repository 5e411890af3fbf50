//! Fixed-offset zone descriptors
//!
//! This module provides the immutable [`ZoneDescriptor`] attached to decoded
//! timestamps and the [`OffsetRegistry`] that memoizes one descriptor per
//! offset field.

pub mod descriptor;
pub mod registry;

// Re-export main types
pub use descriptor::ZoneDescriptor;
pub use registry::OffsetRegistry;
