use std::slice;

use glow::HasContext;

/// Uploads a single struct to a GL buffer as raw bytes.
///
/// # Safety
/// Requires that T:
/// - Has a stable memory layout (`#[repr(C)]`)
/// - Contains only copy types
/// - Has no padding the shader would misread
pub(super) fn buffer_upload_struct<T>(gl: &glow::Context, target: u32, data: &T, usage: u32) {
    unsafe {
        let data_ptr = data as *const T as *const u8;
        let bytes = slice::from_raw_parts(data_ptr, size_of::<T>());
        gl.buffer_data_u8_slice(target, bytes, usage);
    }
}

/// Uploads a slice to a GL buffer as raw bytes. Same requirements as
/// [`buffer_upload_struct`].
pub(super) fn buffer_upload_array<T>(gl: &glow::Context, target: u32, data: &[T], usage: u32) {
    unsafe {
        let bytes = slice::from_raw_parts(data.as_ptr() as *const u8, size_of_val(data));
        gl.buffer_data_u8_slice(target, bytes, usage);
    }
}
