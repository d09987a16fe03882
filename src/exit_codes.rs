//! Exit code constants for the promptform CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, malformed submission)
//! - 2: Configuration error
//! - 3: Form template failure
//! - 4: I/O failure (script, template or stdio)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a malformed submission.
pub const USER_ERROR: i32 = 1;

/// Config file could not be read, parsed or validated.
pub const CONFIG_ERROR: i32 = 2;

/// A form template failed to render.
pub const TEMPLATE_FAILURE: i32 = 3;

/// Reading a script or template, or talking to stdio, failed.
pub const IO_FAILURE: i32 = 4;
