use opencl::describe::{describe, explain, Description, SUCCESS_MESSAGE, UNKNOWN_OPENCL_ERROR};
use opencl::error::{cl_check_op, OclError, OclResult};
use opencl::opencl_sys::bindings::{
    cl_int, CL_DEVICE_NOT_AVAILABLE, CL_INVALID_CONTEXT, CL_INVALID_DEVICE, CL_INVALID_MEM_OBJECT,
    CL_INVALID_VALUE, CL_OUT_OF_HOST_MEMORY, CL_OUT_OF_RESOURCES, CL_SUCCESS,
};
use std::thread;

const OPERATIONS: [&str; 4] = [
    "clBuildProgram",
    "clCreateContext",
    "clEnqueueNDRangeKernel",
    "clSetKernelArg",
];

fn parse_status_code(description: &str) -> Option<cl_int> {
    let start = description.find('(')?;
    let end = start + description[start..].find(')')?;

    description[start + 1..end].parse().ok()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_known_codes() {
    let known = [
        (CL_INVALID_VALUE, "CL_INVALID_VALUE"),
        (CL_INVALID_DEVICE, "CL_INVALID_DEVICE"),
        (CL_DEVICE_NOT_AVAILABLE, "CL_DEVICE_NOT_AVAILABLE"),
        (CL_OUT_OF_HOST_MEMORY, "CL_OUT_OF_HOST_MEMORY"),
        (CL_INVALID_CONTEXT, "CL_INVALID_CONTEXT"),
        (CL_INVALID_MEM_OBJECT, "CL_INVALID_MEM_OBJECT"),
    ];

    for operation in OPERATIONS {
        for (code, name) in known {
            let d = describe(operation, code).unwrap();
            println!("{d}");

            assert_eq!(d.as_str(), format!("{operation}({code}) {name}"));
        }
    }
}

#[test]
fn test_success_code() {
    let d = describe("clBuildProgram", CL_SUCCESS as cl_int).unwrap();

    assert_eq!(d.as_str(), "clBuildProgram(0) Operation completed successfully.");
    assert_eq!(d.explanation(), SUCCESS_MESSAGE);
}

#[test]
fn test_unknown_codes() {
    for code in [CL_OUT_OF_RESOURCES, -31, -35, -9999, 1, 42, i32::MIN, i32::MAX] {
        let d = describe("clEnqueueNDRangeKernel", code).unwrap();

        assert_eq!(d.explanation(), UNKNOWN_OPENCL_ERROR);
        assert!(d.as_str().ends_with(") Unknown OpenCL Error"));
    }
}

#[test]
fn test_prefix_and_code_round_trip() {
    for operation in OPERATIONS {
        for code in [0, -2, -34, -9999, 7, i32::MIN, i32::MAX] {
            let d = describe(operation, code).unwrap();
            let prefix = format!("{operation}({code}) ");

            assert!(d.as_str().starts_with(&prefix));
            assert_eq!(&d.as_str()[prefix.len()..], explain(code));
            assert_eq!(parse_status_code(d.as_str()), Some(code));
        }
    }
}

#[test]
fn test_long_operation_is_not_truncated() {
    // longer than any fixed size buffer
    let operation = "clGetKernelWorkGroupInfo".repeat(512);

    let d = describe(&operation, CL_INVALID_MEM_OBJECT).unwrap();

    assert_eq!(d.operation(), operation);
    assert_eq!(d.len(), operation.len() + "(-38) CL_INVALID_MEM_OBJECT".len());
    assert!(d.as_str().ends_with("(-38) CL_INVALID_MEM_OBJECT"));
}

#[test]
fn test_describe_from_many_threads() {
    let handles: Vec<thread::JoinHandle<Vec<Description>>> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                (0..256)
                    .map(|j| describe(OPERATIONS[(i + j) % OPERATIONS.len()], -(j as cl_int)))
                    .collect::<OclResult<Vec<_>>>()
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let descriptions = handle.join().unwrap();

        for (j, d) in descriptions.iter().enumerate() {
            assert_eq!(d.status_code(), -(j as cl_int));
            assert_eq!(parse_status_code(d.as_str()), Some(-(j as cl_int)));
        }
    }
}

#[test]
fn test_cl_check_op_message() {
    init_tracing();

    let result = cl_check_op("clCreateContext", CL_INVALID_CONTEXT);
    let e = result.unwrap_err();

    let d = describe("clCreateContext", CL_INVALID_CONTEXT).unwrap();

    assert_eq!(e.to_string(), d.as_str());
    assert_eq!(e.code(), CL_INVALID_CONTEXT);
    assert!(matches!(e, OclError::Call { operation: "clCreateContext", .. }));
}

#[test]
fn test_cl_check_op_into_io_error() {
    init_tracing();

    fn create_buffer(status: cl_int) -> std::io::Result<()> {
        cl_check_op("clCreateBuffer", status)?;
        Ok(())
    }

    assert!(create_buffer(CL_SUCCESS as cl_int).is_ok());

    let e = create_buffer(CL_OUT_OF_HOST_MEMORY).unwrap_err();
    println!("{e}");

    assert_eq!(e.kind(), std::io::ErrorKind::OutOfMemory);
    assert_eq!(e.to_string(), "clCreateBuffer(-6) CL_OUT_OF_HOST_MEMORY");
}
