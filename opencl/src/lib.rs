//! # opencl
//!
//! Status checks and diagnostic text for OpenCL return codes.
//!
//! https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html#error-codes
//!

pub mod describe;
pub mod error;
pub mod ffi;

// re-export
pub use opencl_sys;
