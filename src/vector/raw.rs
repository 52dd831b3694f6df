use core::alloc::Layout;
use core::fmt;
use core::mem;
use core::mem::MaybeUninit;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr::NonNull;
use core::slice;

use crate::alloc_backend;
use crate::types::ErrorKind;
use crate::types::VectorError;
use crate::types::VectorResult;

const fn layout_array<T>(capacity: usize) -> VectorResult<Layout> {
    let Some(len) = capacity.checked_mul(size_of::<T>()) else {
        return Err(VectorError::new(ErrorKind::CapacityOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, align_of::<T>()) else {
        return Err(VectorError::new(ErrorKind::LayoutFailure));
    };
    return Ok(lay);
}

/// A single block of uninitialized memory large enough for `capacity` values of `T`.
///
/// `RawMemory` knows nothing about which of its slots hold live values. Dropping it
/// releases the block without running any destructors, so whoever constructed values
/// in it must destroy them first.
///
/// A block with zero capacity never allocates. Neither does a block of a zero sized
/// type, whose capacity is simply recorded as requested.
pub struct RawMemory<T> {
    ptr:      NonNull<T>,
    capacity: usize,
}

impl<T> RawMemory<T> {
    /// Creates an empty block. This does not allocate.
    pub const fn new() -> Self {
        return Self {
            ptr:      NonNull::dangling(),
            capacity: 0,
        };
    }

    /// Allocates an uninitialized block for exactly `capacity` values.
    ///
    /// On failure nothing has been allocated and the error is returned as is.
    pub fn with_capacity(capacity: usize) -> VectorResult<Self> {
        let layout = layout_array::<T>(capacity)?;

        // Don't allocate anything in this case.
        if layout.size() == 0 {
            return Ok(Self {
                ptr:      NonNull::dangling(),
                capacity: capacity,
            });
        }

        let ptr = alloc_backend::allocate(layout)?;
        return Ok(Self {
            ptr:      ptr.cast(),
            capacity: capacity,
        });
    }

    /// The number of values the block can hold.
    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.capacity;
    }

    /// The start of the block, or `None` if the block has zero capacity.
    #[inline]
    pub const fn address(&self) -> Option<NonNull<T>> {
        if self.capacity == 0 {
            return None;
        }
        return Some(self.ptr);
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.ptr.as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.ptr.as_ptr();
    }

    /// Returns a pointer to the slot at `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one past the end address.
    /// Anything beyond that is a contract violation and is only caught in debug builds.
    #[inline]
    pub fn ptr_at(&self, offset: usize) -> *const T {
        debug_assert!(offset <= self.capacity);
        return self.ptr.as_ptr().wrapping_add(offset);
    }

    /// Mutable version of [`RawMemory::ptr_at`].
    #[inline]
    pub fn ptr_at_mut(&mut self, offset: usize) -> *mut T {
        debug_assert!(offset <= self.capacity);
        return self.ptr.as_ptr().wrapping_add(offset);
    }

    /// Views every slot of the block as possibly uninitialized storage.
    #[inline]
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        return unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast(), self.capacity) };
    }

    #[inline]
    pub fn as_uninit_mut_slice(&mut self) -> &mut [MaybeUninit<T>] {
        return unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.capacity) };
    }

    /// Exchanges the blocks owned by `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        let size = self.capacity * size_of::<T>();
        if size == 0 {
            return;
        }
        // Safety: the same layout was validated when the block was allocated.
        let layout = unsafe { Layout::from_size_align_unchecked(size, align_of::<T>()) };
        unsafe { alloc_backend::deallocate(self.ptr.cast(), layout) };
    }
}

impl<T> Default for RawMemory<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> Index<usize> for RawMemory<T> {
    type Output = MaybeUninit<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        return &self.as_uninit_slice()[index];
    }
}

impl<T> IndexMut<usize> for RawMemory<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        return &mut self.as_uninit_mut_slice()[index];
    }
}

impl<T> fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("address", &self.address())
            .field("capacity", &self.capacity)
            .finish()
    }
}
