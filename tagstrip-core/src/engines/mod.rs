// tagstrip-core/src/engines/mod.rs
//! Implementations of the `FilterEngine` trait.
//!
//! Each engine lives in its own file and is declared here with
//! `pub mod <engine_name>;`.

pub mod regex_engine;
