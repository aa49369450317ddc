//! Command implementations for the tagstrip binary.

pub mod strip;
