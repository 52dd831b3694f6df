use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;

use crate::types::ErrorKind;
use crate::types::VectorError;
use crate::types::VectorResult;

#[inline]
pub(crate) fn allocate(layout: Layout) -> VectorResult<NonNull<u8>> {
    let Ok(mem) = Global.allocate(layout) else {
        return Err(VectorError::new(ErrorKind::AllocFailure));
    };
    return Ok(mem.cast());
}

#[inline]
pub(crate) unsafe fn deallocate(ptr: NonNull<u8>, layout: Layout) {
    unsafe { Global.deallocate(ptr, layout) };
}
