//! CLI command implementations.
//!
//! One submodule per command, each exposing an `execute_*` function and an
//! options struct.

pub mod generate;
pub mod init;
pub mod render;
pub mod validate;
pub mod watch;

pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use render::{execute_render, RenderOptions};
pub use validate::{execute_validate, ValidateOptions};
pub use watch::{execute_watch, WatchOptions};
