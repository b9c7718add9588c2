//! Utility functions and helpers.

pub mod html;
pub mod http;

pub use http::{HttpResponse, ReqwestTransport, Transport, create_async_client};
