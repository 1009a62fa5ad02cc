// Shared helpers for the integration test crates. Each aggregator pulls
// this in with `#[path]`, so not every item is used everywhere.
#![allow(dead_code)]

pub mod fixtures;

pub mod helpers {
    pub use simprobe::test_support::*;
}
