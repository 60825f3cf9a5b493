//! Testing utilities and harness for ringpager

pub mod recording;
pub mod test_rule;

pub use recording::*;
pub use test_rule::*;
