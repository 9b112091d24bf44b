// tests/support/mod.rs
// Test-only support shared by the integration test binaries. Individual
// binaries use different subsets, which would otherwise trip dead_code and
// unused_imports warnings.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
