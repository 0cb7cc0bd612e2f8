//! Process exit codes for the `tsm` binary.

use tsm_core::Error;

pub const SUCCESS: i32 = 0;
/// Bad arguments, city count or thread count.
pub const INVALID_INPUT: i32 = 1;
/// Matrix file missing, unreadable or malformed.
pub const FILE_ERROR: i32 = 2;
pub const ALLOCATION_FAILURE: i32 = 3;
pub const WORKER_FAILURE: i32 = 4;

pub fn code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_validation() => INVALID_INPUT,
        Some(Error::Allocation { .. }) => ALLOCATION_FAILURE,
        Some(Error::WorkerFailed(_) | Error::SpawnFailed { .. }) => WORKER_FAILURE,
        Some(Error::Io(_) | Error::Json(_) | Error::Malformed { .. }) => FILE_ERROR,
        Some(_) => INVALID_INPUT,
        None if err.downcast_ref::<std::io::Error>().is_some() => FILE_ERROR,
        None => INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn wrapped(e: Error) -> anyhow::Error {
        Err::<(), _>(e).context("while solving").unwrap_err()
    }

    #[test]
    fn validation_maps_to_one() {
        assert_eq!(code_for(&wrapped(Error::InvalidThreadCount(0))), 1);
        assert_eq!(code_for(&wrapped(Error::InvalidDimension("x".into()))), 1);
    }

    #[test]
    fn file_problems_map_to_two() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(code_for(&wrapped(Error::Io(io))), 2);
        let malformed = Error::Malformed {
            row: 1,
            column: 1,
            reason: "bad".into(),
        };
        assert_eq!(code_for(&wrapped(malformed)), 2);
    }

    #[test]
    fn resource_failures() {
        let alloc = Error::Allocation {
            what: "worker path buffer",
            len: 12,
        };
        assert_eq!(code_for(&wrapped(alloc)), 3);
        assert_eq!(code_for(&wrapped(Error::WorkerFailed(2))), 4);
    }

    #[test]
    fn spawn_failure_is_a_worker_failure_not_a_file_error() {
        let spawn = Error::SpawnFailed {
            worker: 3,
            source: std::io::Error::new(std::io::ErrorKind::WouldBlock, "no threads left"),
        };
        assert_eq!(code_for(&wrapped(spawn)), WORKER_FAILURE);
    }

    #[test]
    fn bare_io_error_is_file_error() {
        let err = anyhow::Error::new(std::io::Error::new(std::io::ErrorKind::Other, "pipe"));
        assert_eq!(code_for(&err), 2);
    }
}
