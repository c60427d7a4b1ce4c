//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by every handler: MIME detection,
//! response builders and CORS header injection.

pub mod cors;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_options_response, build_redirect_response,
};
