//! # opencl error
//!
//! Status checks for raw OpenCL return codes. A failed call that is checked with
//! [`cl_check_op`] keeps the name of the call, so its message is the same text
//! [`describe`](crate::describe::describe) produces for the host framework.
//!

use crate::describe::{status_name, write_description};
use io::Error as IoError;
use opencl_sys::bindings::{cl_int, CL_OUT_OF_HOST_MEMORY, CL_SUCCESS};
use std::fmt;
use std::io;

// opencl wrapper errors

pub const CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE: cl_int = -100;

pub const CL_WRAPPER_DESCRIPTION_INTERIOR_NUL: cl_int = -101;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OclError {
    // opencl error code
    Code(cl_int),
    // opencl wrapper error code
    Wrapper(cl_int),
    // opencl error code returned by a named call (clBuildProgram, clCreateContext, ...)
    Call {
        operation: &'static str,
        code: cl_int,
    },
}

pub type OclResult<T> = Result<T, OclError>;

impl OclError {
    pub fn code(&self) -> cl_int {
        match self {
            OclError::Code(code) | OclError::Wrapper(code) => *code,
            OclError::Call { code, .. } => *code,
        }
    }

    fn is_out_of_memory(&self) -> bool {
        matches!(
            self,
            OclError::Code(CL_OUT_OF_HOST_MEMORY)
                | OclError::Call {
                    code: CL_OUT_OF_HOST_MEMORY,
                    ..
                }
                | OclError::Wrapper(CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE)
        )
    }
}

impl std::error::Error for OclError {}

impl fmt::Display for OclError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OclError::Code(code) => match status_name(*code) {
                Some(name) => write!(f, "opencl error code: {code} ({name})"),
                None => write!(f, "opencl error code: {code}"),
            },
            OclError::Wrapper(code) => write!(f, "opencl wrapper error code: {code}"),
            OclError::Call { operation, code } => write_description(f, operation, *code),
        }
    }
}

// CL_CHECK
pub fn cl_check(status: cl_int) -> OclResult<()> {
    if CL_SUCCESS as cl_int == status {
        Ok(())
    } else {
        Err(OclError::Code(status))
    }
}

/// Same as [`cl_check`], the error remembers which OpenCL call returned `status`.
pub fn cl_check_op(operation: &'static str, status: cl_int) -> OclResult<()> {
    if CL_SUCCESS as cl_int == status {
        return Ok(());
    }

    tracing::debug!(operation, code = status, "opencl call failed");

    Err(OclError::Call {
        operation,
        code: status,
    })
}

impl From<OclError> for IoError {
    fn from(e: OclError) -> Self {
        let error_kind = if e.is_out_of_memory() {
            io::ErrorKind::OutOfMemory
        } else {
            io::ErrorKind::Other
        };

        Self::new(error_kind, e.to_string())
    }
}
