//! Descriptor-side types for `shape2schema`.
//!
//! This crate provides the [`FieldDescriptor`] tree handed over by a
//! type-definition library, together with the two leaf operations the
//! converter builds on: [`unwrap`] (strip nullable/optional/default layers)
//! and [`classify`] (tag the remaining core descriptor with a [`Kind`]).

mod descriptor;
mod kind;
mod shape;
mod unwrap;

pub use descriptor::{DefaultProducer, FieldDescriptor};
pub use kind::{Kind, classify};
pub use shape::{Shape, ShapeEntry};
pub use unwrap::{Unwrapped, unwrap};

/// Re-export of the value type used for defaults and literals.
pub use serde_json::Value;
