//! HTTP protocol layer module
//!
//! Response builders and MIME detection shared by the static asset server
//! and the upload endpoint.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_error_response, build_file_response, build_json_response,
    build_preflight_response,
};
