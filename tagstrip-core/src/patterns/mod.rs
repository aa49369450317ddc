//! Pattern handling for tagstrip.
//!
//! Turns a `Blacklist` into one compiled alternation and keeps compiled
//! results in a process-wide cache, so building several engines from the same
//! blacklist compiles the regex only once.

pub mod compiler;
