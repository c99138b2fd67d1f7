//! Currency preference

pub mod service;

pub use service::*;
