pub mod check;

pub use check::{CheckConfig, CheckMode};
