use core::alloc::Layout;
use core::ptr::NonNull;

use crate::types::ErrorKind;
use crate::types::VectorError;
use crate::types::VectorResult;

pub(crate) fn allocate(layout: Layout) -> VectorResult<NonNull<u8>> {
    // `alloc()` requires that the layout size be non-zero.
    if layout.size() == 0 {
        return Err(VectorError::new(ErrorKind::AllocFailure));
    }
    let ptr = unsafe { ::alloc::alloc::alloc(layout) };
    let Some(ptr) = NonNull::new(ptr) else {
        return Err(VectorError::new(ErrorKind::AllocFailure));
    };
    return Ok(ptr);
}

pub(crate) unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
    unsafe { ::alloc::alloc::dealloc(ptr.as_ptr(), layout) };
}
