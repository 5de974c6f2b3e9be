//! Upload server for GLTF/GLB models.
//!
//! Serves the front-end from a public directory and accepts model uploads on
//! `POST /api/generate`, handing each model to a [`generator::VideoGenerator`]
//! and returning the resulting job descriptor as JSON.

pub mod config;
pub mod generator;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
