//! # opencl status description
//!
//! Builds the diagnostic text reported to the host framework after an OpenCL call
//! returns a status other than `CL_SUCCESS`:
//!
//! ```text
//! <operation>(<code>) <explanation>
//! ```
//!
//! ```rust
//! use opencl::describe::describe;
//!
//! let description = describe("clCreateContext", -34).unwrap();
//!
//! assert_eq!(description.as_str(), "clCreateContext(-34) CL_INVALID_CONTEXT");
//! ```
//!
//! Codes missing from the table are not an error, they are explained as
//! [`UNKNOWN_OPENCL_ERROR`].
//!

use crate::error::{
    OclError, OclResult, CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE,
    CL_WRAPPER_DESCRIPTION_INTERIOR_NUL,
};
use opencl_sys::bindings::{
    cl_int, CL_DEVICE_NOT_AVAILABLE, CL_INVALID_CONTEXT, CL_INVALID_DEVICE, CL_INVALID_MEM_OBJECT,
    CL_INVALID_VALUE, CL_OUT_OF_HOST_MEMORY, CL_SUCCESS,
};
use std::ffi::{CStr, CString};
use std::fmt;
use std::io::Write;

pub const SUCCESS_MESSAGE: &str = "Operation completed successfully.";

pub const UNKNOWN_OPENCL_ERROR: &str = "Unknown OpenCL Error";

// "(", ") "
const SEPARATORS_LEN: usize = 3;

const STATUS_EXPLANATIONS: [(cl_int, &str); 7] = [
    (CL_SUCCESS as cl_int, SUCCESS_MESSAGE),
    (CL_INVALID_VALUE, "CL_INVALID_VALUE"),
    (CL_INVALID_DEVICE, "CL_INVALID_DEVICE"),
    (CL_DEVICE_NOT_AVAILABLE, "CL_DEVICE_NOT_AVAILABLE"),
    (CL_OUT_OF_HOST_MEMORY, "CL_OUT_OF_HOST_MEMORY"),
    (CL_INVALID_CONTEXT, "CL_INVALID_CONTEXT"),
    (CL_INVALID_MEM_OBJECT, "CL_INVALID_MEM_OBJECT"),
];

/// explanation of a status code (exact match only), [`UNKNOWN_OPENCL_ERROR`] if it is not in the table
pub fn explain(code: cl_int) -> &'static str {
    STATUS_EXPLANATIONS
        .iter()
        .find(|(status, _)| *status == code)
        .map(|(_, explanation)| *explanation)
        .unwrap_or(UNKNOWN_OPENCL_ERROR)
}

/// symbolic name (CL_INVALID_VALUE, ...) of a known error code, `CL_SUCCESS` has no name
pub fn status_name(code: cl_int) -> Option<&'static str> {
    if code == CL_SUCCESS as cl_int {
        return None;
    }

    STATUS_EXPLANATIONS
        .iter()
        .find(|(status, _)| *status == code)
        .map(|(_, name)| *name)
}

pub(crate) fn write_description<W: fmt::Write>(
    w: &mut W,
    operation: &str,
    code: cl_int,
) -> fmt::Result {
    write!(w, "{operation}({code}) {}", explain(code))
}

fn decimal_len(code: cl_int) -> usize {
    let sign = usize::from(code < 0);
    let mut value = code.unsigned_abs();
    let mut digits = 1;

    while value >= 10 {
        value /= 10;
        digits += 1;
    }

    sign + digits
}

/// Owned diagnostic text, `operation(code) explanation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    text: String,
    operation_len: usize,
    code: cl_int,
}

impl Description {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn operation(&self) -> &str {
        &self.text[..self.operation_len]
    }

    pub fn status_code(&self) -> cl_int {
        self.code
    }

    pub fn explanation(&self) -> &'static str {
        explain(self.code)
    }

    pub fn is_success(&self) -> bool {
        self.code == CL_SUCCESS as cl_int
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// NUL terminated copy for native callers, fails if the operation name contains a NUL byte.
    pub fn into_c_string(self) -> OclResult<CString> {
        CString::new(self.text).map_err(|_| OclError::Wrapper(CL_WRAPPER_DESCRIPTION_INTERIOR_NUL))
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.text
    }
}

/// Empty buffer with room for `len` bytes of description and a NUL terminator.
fn reserve_description(len: usize) -> OclResult<String> {
    let capacity = len
        .checked_add(1)
        .ok_or(OclError::Wrapper(CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE))?;

    let mut text = String::new();
    text.try_reserve_exact(capacity)
        .map_err(|_| OclError::Wrapper(CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE))?;

    Ok(text)
}

/// Describe the status `code` returned by `operation`.
///
/// The buffer is reserved from the formatted length (plus the NUL byte needed by
/// [`Description::into_c_string`]), so the text is never truncated whatever the
/// length of `operation`. If the reservation fails the error is
/// `OclError::Wrapper(CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE)`.
pub fn describe(operation: &str, code: cl_int) -> OclResult<Description> {
    let explanation = explain(code);
    let len = operation.len() + decimal_len(code) + SEPARATORS_LEN + explanation.len();

    let mut text = reserve_description(len)?;

    write_description(&mut text, operation, code)
        .map_err(|_| OclError::Wrapper(CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE))?;
    debug_assert_eq!(text.len(), len);

    Ok(Description {
        text,
        operation_len: operation.len(),
        code,
    })
}

/// Same text as [`describe`], built from raw operation bytes (copied unchanged,
/// they need not be UTF-8) for native callers.
pub(crate) fn describe_c_string(operation: &CStr, code: cl_int) -> OclResult<CString> {
    let operation = operation.to_bytes();
    let explanation = explain(code);
    let len = operation.len() + decimal_len(code) + SEPARATORS_LEN + explanation.len();

    let mut bytes = reserve_description(len)?.into_bytes();
    bytes.extend_from_slice(operation);
    write!(bytes, "({code}) {explanation}")
        .map_err(|_| OclError::Wrapper(CL_WRAPPER_DESCRIPTION_ALLOCATION_FAILURE))?;
    debug_assert_eq!(bytes.len(), len);

    CString::new(bytes).map_err(|_| OclError::Wrapper(CL_WRAPPER_DESCRIPTION_INTERIOR_NUL))
}
