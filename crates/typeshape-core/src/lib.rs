//! # typeshape-core: Value Model for Schema-Shaped Records
//!
//! The foundation every other `typeshape` crate builds on. It defines what an
//! untyped input looks like and how its runtime kind is observed, without
//! knowing anything about schemas.
//!
//! ## Key Design Principles
//!
//! 1. **Absence is `None`.** There is no `Undefined` value. A key missing
//!    from a [`Record`] is the absent value, and [`Kind::Undefined`] matches
//!    exactly that.
//!
//! 2. **Exact kind matching.** [`Kind::matches`] never coerces: the string
//!    `"9.99"` is not a number and `1` is not a boolean.
//!
//! 3. **Nominal identity.** [`ClassTag`], [`Symbol`] and [`FunctionValue`]
//!    compare by identity. A record tagged by one class is never mistaken for
//!    a structurally identical record of another.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `typeshape-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod json;
pub mod kind;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{ConversionError, UnknownKind};
pub use identity::{ClassTag, FunctionValue, Symbol};
pub use kind::{Kind, ALL_KINDS};
pub use value::{kind_name_of, Record, Value};
