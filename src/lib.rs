//! ERC-4337 UserOperation message shaping.
//!
//! Turns snake_case request params into the camelCase message a bundler
//! expects, passing every value through untouched.

pub mod config;
pub mod encoding;
pub mod error;
pub mod host;
pub mod shaper;
pub mod types;

pub use error::ShapeError;
pub use host::{lookup, main_function, shape_batch, HostFn, ENTRY_POINTS, MAIN_FUNCTION};
pub use shaper::{shape, shape_value};
pub use types::{UserOperationMessage, UserOperationRequest};
