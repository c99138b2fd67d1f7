//! Test support shared by service tests.

mod helpers;

pub(crate) use context::TestContext;
pub(crate) use helpers::catalog;
