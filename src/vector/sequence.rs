use core::iter;
use core::marker::PhantomData;
use core::mem;
use core::ops::Range;
use core::ptr;
use core::slice;

use super::guard::InitGuard;
use super::raw::RawMemory;
use crate::types::ErrorKind;
use crate::types::VectorError;
use crate::types::VectorResult;

/// Moves `count` values from `src` to `dst`.
///
/// Rust moves are bitwise copies that cannot fail, so this is the transfer used on
/// every reallocation. Afterwards the source slots must be treated as uninitialized.
#[inline]
unsafe fn relocate<T>(src: *const T, dst: *mut T, count: usize) {
    unsafe { ptr::copy_nonoverlapping(src, dst, count) };
}

/// A growable, contiguous sequence of `T` that manages the lifetime of its
/// values on top of a [`RawMemory`] block.
///
/// Slots `[0, len)` always hold live values and `[len, capacity)` hold
/// uninitialized memory. Capacity grows by doubling, starting at 1, and is never
/// given back by operations that remove values.
///
/// Operations that allocate return a [`VectorResult`]. If they fail the
/// sequence has not been touched.
pub struct Vector<T> {
    data: RawMemory<T>,
    len:  usize,
    _ph:  PhantomData<T>,
}

impl<T> Vector<T> {
    /// Creates an empty sequence with zero capacity. This does not allocate.
    pub const fn new() -> Self {
        return Self {
            data: RawMemory::new(),
            len:  0,
            _ph:  PhantomData,
        };
    }

    /// Creates an empty sequence with room for exactly `capacity` values.
    pub fn with_capacity(capacity: usize) -> VectorResult<Self> {
        let data = RawMemory::with_capacity(capacity)?;
        return Ok(Self {
            data: data,
            len:  0,
            _ph:  PhantomData,
        });
    }

    /// Creates a sequence of `len` default values with a capacity of exactly `len`.
    ///
    /// If `T::default()` panics part way through, the values that were already
    /// constructed are dropped and the block is released before the panic continues.
    pub fn with_len(len: usize) -> VectorResult<Self>
    where
        T: Default,
    {
        return Self::with_len_with(len, T::default);
    }

    /// Like [`Vector::with_len`] but each value is produced by calling `f`.
    pub fn with_len_with<F>(len: usize, f: F) -> VectorResult<Self>
    where
        F: FnMut() -> T,
    {
        let mut vec = Self::with_capacity(len)?;
        unsafe { vec.construct_back(iter::repeat_with(f).take(len)) };
        return Ok(vec);
    }

    /// Creates a copy with a capacity of exactly `self.len()`.
    ///
    /// A panicking `clone` leaves no copied values behind.
    pub fn try_clone(&self) -> VectorResult<Self>
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(self.len)?;
        unsafe { vec.construct_back(self.as_slice().iter().cloned()) };
        return Ok(vec);
    }

    /// Replaces the contents of `self` with copies of the values in `rhs`.
    ///
    /// If `rhs` does not fit in the current capacity a full copy is built first and then
    /// swapped in, so an allocation failure or a panicking `clone` leaves `self` untouched.
    ///
    /// Otherwise the existing block is reused: surplus values are dropped, the shared
    /// prefix is assigned with `clone_from` and any remaining values are cloned onto the
    /// end. A panic on this path can leave a mix of old and new values, but the length
    /// always matches the live values.
    pub fn assign(&mut self, rhs: &Self) -> VectorResult<()>
    where
        T: Clone,
    {
        if rhs.len > self.capacity() {
            let mut copy = rhs.try_clone()?;
            self.swap(&mut copy);
            return Ok(());
        }

        self.truncate(rhs.len);
        let (prefix, rest) = rhs.as_slice().split_at(self.len);
        self.as_mut_slice().clone_from_slice(prefix);
        unsafe { self.construct_back(rest.iter().cloned()) };
        return Ok(());
    }

    /// Moves the storage and values out into a new sequence, leaving `self` empty
    /// with zero capacity. No values are moved or copied.
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        out.swap(self);
        return out;
    }

    /// Takes over the storage and values of `rhs`. `rhs` receives what `self`
    /// held before, and is dropped by its owner as usual.
    #[inline]
    pub fn take_from(&mut self, rhs: &mut Self) {
        self.swap(rhs);
    }

    /// Exchanges the storage and length of two sequences in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Makes sure the capacity is at least `new_capacity`.
    ///
    /// Allocates a block of exactly `new_capacity` and moves the values over.
    /// Does nothing if the capacity is already large enough.
    pub fn reserve(&mut self, new_capacity: usize) -> VectorResult<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let mut new_data = RawMemory::<T>::with_capacity(new_capacity)?;
        unsafe { relocate(self.data.as_ptr(), new_data.as_mut_ptr(), self.len) };
        self.data.swap(&mut new_data);
        // `new_data` now owns the old block, every value of which was moved out.
        return Ok(());
    }

    /// Changes the length to `new_len`.
    ///
    /// Shrinking drops the values past `new_len` and keeps the capacity. Growing reserves
    /// exactly `new_len` if needed and fills the new slots with `T::default()`.
    pub fn resize(&mut self, new_len: usize) -> VectorResult<()>
    where
        T: Default,
    {
        return self.resize_with(new_len, T::default);
    }

    /// Like [`Vector::resize`] but new values are produced by calling `f`.
    ///
    /// If `f` panics the values it already produced are dropped and the length is left
    /// as it was. The capacity may have grown.
    pub fn resize_with<F>(&mut self, new_len: usize, f: F) -> VectorResult<()>
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        let extra = new_len - self.len;
        unsafe { self.construct_back(iter::repeat_with(f).take(extra)) };
        return Ok(());
    }

    /// Drops every value past `len`. The capacity is not changed.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = ptr::slice_from_raw_parts_mut(self.data.ptr_at_mut(len), self.len - len);
        self.len = len;
        unsafe { ptr::drop_in_place(tail) };
    }

    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value` to the end.
    pub fn push_back(&mut self, value: T) -> VectorResult<()> {
        self.emplace_back(|| value)?;
        return Ok(());
    }

    /// Appends a clone of `value` to the end.
    ///
    /// When the sequence has to grow, the clone is made directly in the new block
    /// before anything is moved, so a panicking `clone` leaves the sequence untouched.
    pub fn push_back_cloned(&mut self, value: &T) -> VectorResult<()>
    where
        T: Clone,
    {
        self.emplace_back(|| value.clone())?;
        return Ok(());
    }

    /// Constructs a value from `f` at the end and returns a reference to it.
    pub fn emplace_back<F>(&mut self, f: F) -> VectorResult<&mut T>
    where
        F: FnOnce() -> T,
    {
        let index = self.emplace(self.len, f)?;
        return Ok(unsafe { &mut *self.data.ptr_at_mut(index) });
    }

    /// Constructs a value from `f` at `index`, shifting everything after it one slot
    /// to the right. Returns the index of the new value.
    ///
    /// `f` always runs before any existing value is moved. If it panics, or the
    /// allocation fails, the sequence is unchanged.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> VectorResult<usize>
    where
        F: FnOnce() -> T,
    {
        assert!(index <= self.len, "emplace index {index} out of range for length {}", self.len);

        if self.len < self.capacity() {
            if index == self.len {
                let value = f();
                unsafe { self.data.ptr_at_mut(index).write(value) };
            } else {
                let value = f();
                unsafe {
                    let pos = self.data.ptr_at_mut(index);
                    ptr::copy(pos, pos.add(1), self.len - index);
                    pos.write(value);
                }
            }
        } else {
            let mut new_data = RawMemory::<T>::with_capacity(self.grown_capacity()?)?;
            let value = f();
            unsafe {
                let src = self.data.as_ptr();
                let dst = new_data.as_mut_ptr();
                dst.add(index).write(value);
                relocate(src, dst, index);
                relocate(src.add(index), dst.add(index + 1), self.len - index);
            }
            self.data.swap(&mut new_data);
        }

        self.len += 1;
        return Ok(index);
    }

    /// Inserts `value` at `index`. See [`Vector::emplace`].
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> VectorResult<usize> {
        return self.emplace(index, || value);
    }

    /// Inserts a clone of `value` at `index`. See [`Vector::emplace`].
    #[inline]
    pub fn insert_cloned(&mut self, index: usize, value: &T) -> VectorResult<usize>
    where
        T: Clone,
    {
        return self.emplace(index, || value.clone());
    }

    /// Removes and drops the value at `index`, shifting everything after it one
    /// slot to the left. Returns `index`, which now holds the following value.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(index < self.len, "erase index {index} out of range for length {}", self.len);
        let tail = self.len - index - 1;
        let removed = unsafe {
            let pos = self.data.ptr_at_mut(index);
            let removed = ptr::read(pos);
            ptr::copy(pos.add(1), pos, tail);
            removed
        };
        self.len -= 1;
        drop(removed);
        return index;
    }

    /// Drops the last value.
    ///
    /// Calling this on an empty sequence is a contract violation. It asserts in
    /// debug builds and does nothing otherwise.
    pub fn pop_back(&mut self) {
        debug_assert!(self.len > 0, "pop_back on an empty Vector");
        if self.len == 0 {
            return;
        }
        self.len -= 1;
        unsafe { ptr::drop_in_place(self.data.ptr_at_mut(self.len)) };
    }

    /// Removes the last value and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        return Some(unsafe { ptr::read(self.data.ptr_at(self.len)) });
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.data.capacity();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return unsafe { slice::from_raw_parts(self.as_ptr(), self.len) };
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        return unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) };
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.data.as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.data.as_mut_ptr();
    }

    /// The begin and end pointers of the live values.
    ///
    /// Both are invalidated by any operation that reallocates or shifts values.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        return self.as_slice().as_ptr_range();
    }

    fn grown_capacity(&self) -> VectorResult<usize> {
        if self.len == 0 {
            return Ok(1);
        }
        let Some(cap) = self.len.checked_mul(2) else {
            return Err(VectorError::new(ErrorKind::CapacityOverflow));
        };
        return Ok(cap);
    }

    /// Writes `items` into the uninitialized slots starting at `len`, growing `len`
    /// once all of them are in place.
    ///
    /// If producing an item panics, the ones already written are dropped and `len`
    /// is left unchanged.
    ///
    /// # Safety
    /// `items` must not yield more values than `capacity - len`.
    unsafe fn construct_back<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut guard = InitGuard::new(self.data.ptr_at_mut(self.len));
        for item in items {
            debug_assert!(self.len + guard.initialized() < self.capacity());
            unsafe { guard.write(item) };
        }
        self.len += guard.finish();
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}
