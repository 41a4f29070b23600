//! The transform engine.
//!
//! Pure functions over [`Value`](crate::Value) trees, grouped by concern:
//!
//! - traversal: [`map`], [`filter`], [`flatten`]
//! - sequences: [`group_by`], [`group_by_with`], [`sort_by`], [`chunk`],
//!   [`unique`], [`shuffle`]
//! - structure: [`deep_clone`], [`deep_merge`], [`is_equal`]
//! - paths: [`get`], [`get_ref`], [`set`], [`has`], [`delete`]
//! - coercion: [`convert_type`]
//! - composition: [`pipe`]
//!
//! # Failure policy
//!
//! Only sequence-only operations fail, with
//! [`TransformError::NotASequence`] ("Input must be an array"). Everything
//! else degrades to a safe default (the input unchanged, an empty
//! container, or a caller-supplied default) and records the fallback as a
//! `debug` trace event.

pub mod access;
pub mod collection;
pub mod compose;
pub mod convert;
pub mod errors;
pub mod structure;

pub use access::{delete, get, get_ref, has, set};
pub use collection::{
    Key, Order, chunk, compare_values, filter, flatten, group_by, group_by_with, map, shuffle,
    sort_by, unique,
};
pub use compose::{Step, pipe};
pub use convert::{TargetType, convert_type};
pub use errors::TransformError;
pub use structure::{deep_clone, deep_merge, is_equal};
