//! Error handling and exit codes.

use caccalc_core::constants::exit_codes;
use caccalc_core::CacError;

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.is::<CacError>()) {
        exit_codes::ERROR_CONFIG
    } else if err.chain().any(|cause| cause.is::<std::io::Error>()) {
        exit_codes::ERROR_IO
    } else {
        exit_codes::ERROR_GENERIC
    }
}
