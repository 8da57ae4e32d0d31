//! Run a listener right before an HTTP response writes its headers.

pub mod errors;
pub mod headers;
#[cfg(test)]
mod helpers;
mod grammar;
mod on_headers;
pub mod response;
pub mod status;

pub use on_headers::*;
pub use response::*;
