//! Request handler module
//!
//! Request dispatch, static asset serving and the model upload endpoint.

pub mod router;
pub mod static_files;
pub mod upload;

// Re-export main entry point
pub use router::handle_request;
