//! # bindable-base
//!
//! Core library for describing the configurable attributes of pipeline
//! components (document sources, language components, term weighting,
//! clustering stages) as immutable, queryable descriptor trees.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! registry    → Thread-safe catalogue of component descriptors
//!   ↓
//! extract     → Bindable trait, DescriptorBuilder (cycle/depth checks)
//!   ↓
//! descriptor  → BindableDescriptor: views, grouping, filtering, outline
//!   ↓
//! attribute   → AttributeDescriptor, metadata, markers
//!   ↓
//! base        → Primitives (AttributeKey, TypeName, Slot)
//! ```

// ============================================================================
// MODULES (dependency order: base → attribute → descriptor → extract → registry)
// ============================================================================

/// Foundation types: AttributeKey, TypeName, Slot
pub mod base;

/// Attribute descriptors, metadata and markers
pub mod attribute;

/// The descriptor engine: grouped and filtered views over component trees
pub mod descriptor;

/// Extraction boundary: components describe themselves via `Bindable`
pub mod extract;

/// Shared catalogue of described components
pub mod registry;

/// Options for describing components
pub mod config;

/// Error types
pub mod error;

// Re-export commonly needed items
pub use attribute::{
    AttributeDescriptor, AttributeLevel, AttributeMetadata, BindableMetadata, Marker, MarkerSet,
};
pub use base::{AttributeKey, Slot, TypeName};
pub use config::DescribeOptions;
pub use descriptor::{AttributeGroups, AttributeMap, BindableDescriptor, GroupKey, GroupingMethod};
pub use error::DescriptorError;
pub use extract::{Bindable, DescriptorBuilder, NestedComponent};
pub use registry::DescriptorRegistry;
