//! # Attribute descriptors
//!
//! One configurable parameter of a pipeline component is described by an
//! [`AttributeDescriptor`]: a stable key, the declared value type, optional
//! human-readable [`AttributeMetadata`] and a set of [`Marker`] tags saying
//! when the attribute applies and in which direction it flows.
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `Init` | Bound once, when the component is initialized |
//! | `Processing` | Bound before every processing run |
//! | `Input` | Supplied by the caller |
//! | `Output` | Produced by the component |
//! | `Required` | Must be supplied |
//! | `Internal` | Hidden from end-user configuration views |
//!
//! ## Usage
//!
//! ```ignore
//! let descriptor = AttributeDescriptor::new("Lingo.desiredClusterCount", "usize")
//!     .with_markers([Marker::Processing, Marker::Input])
//!     .with_default("30")
//!     .with_metadata(AttributeMetadata::new("Cluster count").with_level(AttributeLevel::Basic));
//!
//! assert!(descriptor.has_marker(Marker::Input));
//! ```

mod descriptor;
mod marker;
mod metadata;

pub use descriptor::AttributeDescriptor;
pub use marker::{Marker, MarkerSet};
pub use metadata::{AttributeLevel, AttributeMetadata, BindableMetadata};
