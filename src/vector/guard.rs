use core::mem;
use core::ptr;

/// Tracks a run of values being written into uninitialized slots.
///
/// If the guard is dropped, which happens when producing the next value panics,
/// every value written so far is dropped again so nothing leaks. `finish` disarms
/// the guard and hands ownership of the run to the caller.
pub(super) struct InitGuard<T> {
    start:       *mut T,
    initialized: usize,
}

impl<T> InitGuard<T> {
    pub(super) const fn new(start: *mut T) -> Self {
        return Self {
            start:       start,
            initialized: 0,
        };
    }

    #[inline]
    pub(super) const fn initialized(&self) -> usize {
        return self.initialized;
    }

    /// Writes `value` into the next slot of the run.
    ///
    /// # Safety
    /// The slot must be inside the same allocation as `start` and uninitialized.
    #[inline]
    pub(super) unsafe fn write(&mut self, value: T) {
        unsafe { self.start.add(self.initialized).write(value) };
        self.initialized += 1;
    }

    /// Returns how many values were written. They are no longer dropped by the guard.
    pub(super) fn finish(self) -> usize {
        let count = self.initialized;
        mem::forget(self);
        return count;
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized)) };
    }
}
