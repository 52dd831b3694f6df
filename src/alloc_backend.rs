//! The allocation mechanism used by `RawMemory`.
//!
//! By default blocks come straight from `alloc::alloc`. If the `alloc_api2` feature is
//! enabled the `Global` allocator from `allocator_api2` is used instead.
//!
//! Both backends share the same contract: `layout` must have a non-zero size, and a pointer
//! handed to `deallocate` must come from `allocate` with the same layout.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
#[cfg(not(feature = "alloc_api2"))]
mod global;

#[cfg(feature = "alloc_api2")]
pub(crate) use alloc_api2::allocate;
#[cfg(feature = "alloc_api2")]
pub(crate) use alloc_api2::deallocate;
#[cfg(not(feature = "alloc_api2"))]
pub(crate) use global::allocate;
#[cfg(not(feature = "alloc_api2"))]
pub(crate) use global::deallocate;
