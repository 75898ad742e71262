//! # C ABI
//!
//! Entry points for native bridge code. A description returned by
//! [`ocl_describe_error`] belongs to the caller and must be given back to
//! [`ocl_release_description`].
//!

use crate::describe::describe_c_string;
use libc::c_char;
use opencl_sys::bindings::cl_int;
use std::ffi::{CStr, CString};
use std::ptr;

/// NUL terminated `operation(code) explanation`, or null if `operation` is null
/// or the description could not be allocated.
///
/// # Safety
///
/// `operation` must be null or point to a NUL terminated string that stays valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn ocl_describe_error(operation: *const c_char, code: cl_int) -> *mut c_char {
    if operation.is_null() {
        return ptr::null_mut();
    }

    // SAFETY: operation is not null and the caller guarantees it is NUL terminated.
    let operation = unsafe { CStr::from_ptr(operation) };

    match describe_c_string(operation, code) {
        Ok(description) => description.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// # Safety
///
/// `description` must be null or a pointer returned by [`ocl_describe_error`]
/// that has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn ocl_release_description(description: *mut c_char) {
    if description.is_null() {
        return;
    }

    // SAFETY: the pointer comes from CString::into_raw in ocl_describe_error.
    drop(unsafe { CString::from_raw(description) });
}
