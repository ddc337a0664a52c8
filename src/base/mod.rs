//! Foundation types for the bindable toolchain.
//!
//! This module provides fundamental types used throughout the engine:
//! - [`AttributeKey`] - Stable, cheap-to-clone attribute identifiers
//! - [`TypeName`] - Declared type of a nested-component slot
//! - [`Slot`] - The relation by which a parent references a nested component
//!
//! This module has NO dependencies on other bindable modules.

mod key;
mod slot;
mod type_name;

pub use key::AttributeKey;
pub use slot::Slot;
pub use type_name::TypeName;

// Re-export smol_str for convenience
pub use smol_str::SmolStr;
