//! # Advanced Vector
//!
//! The `advanced_vector` crate provides a `#[no_std]` growable array, `Vector`, built in two layers.
//!
//! `RawMemory` owns a single block of uninitialized memory sized for some number of elements and
//! nothing else. It never treats its bytes as live values, so dropping it only releases the block.
//!
//! `Vector` owns a `RawMemory` plus a length. Slots `[0, len)` hold live values and slots
//! `[len, capacity)` are uninitialized. Every value is constructed and destroyed explicitly by
//! `Vector`, which lets it keep precise guarantees about what happens when an allocation fails
//! or an element's `Default`/`Clone` panics part way through an operation.
//!
//! Allocations are fallible, meaning that instead of aborting on allocation failure the
//! operation returns a `VectorError` and the container is left exactly as it was.
//!
//! Capacity doubles each time it is exhausted, starting from 1, and never shrinks implicitly.
//!
//! # Feature Flags
//! * `alloc_api2` - Routes allocations through `allocator_api2`'s `Global` allocator instead of
//! calling `alloc::alloc` directly. Behaviour is otherwise identical.

#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod alloc_backend;
pub mod types;
mod vector;

pub use vector::RawMemory;
pub use vector::Vector;
