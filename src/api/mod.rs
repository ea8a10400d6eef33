//! REST API implementation using Actix Web.

pub mod errors;
pub mod rest;
pub mod validation;
