//! Small shared utilities.

pub mod lock;
