//! Solver implementations for particular problem formats.
//!
//! Only the dense balanced transportation problem is supported, through
//! the [`default`] implementation.

pub mod default;
