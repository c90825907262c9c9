//! A Lambda function that answers every invocation with
//! `{"message":"hello-world"}` and status 200.

pub mod config;
mod handler;
pub mod invoke;
pub mod logging;
mod response;

pub use handler::handler;
pub use response::{Response, APPLICATION_JSON, CONTENT_TYPE, GREETING, STATUS_OK};
