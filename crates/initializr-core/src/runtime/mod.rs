//! Local toolchain detection
//!
//! Generated projects need a JDK to build; detection is advisory only.

pub mod check;

pub use check::{check_java, RuntimeInfo};
