// tests/support/mod.rs
// Shared by several integration test binaries; each binary only uses part of
// it, so silence dead_code at the module level.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
