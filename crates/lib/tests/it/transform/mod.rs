//! Transform engine integration tests
//!
//! Organized by engine submodule.

mod access;
mod collection;
mod compose;
