//! Thread-safe catalogue of component descriptors.
//!
//! The registry owns one [`BindableDescriptor`] per component id and hands out
//! `Arc`s, so configuration UIs, CLI help and documentation generators can all
//! read the same immutable trees concurrently.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = DescriptorRegistry::new(DescriptorBuilder::new());
//! registry.describe_all(&[("lingo", &lingo), ("stc", &stc)])?;
//!
//! let lingo = registry.get("lingo").unwrap();
//! println!("{}", lingo.outline());
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rayon::prelude::*;
use smol_str::SmolStr;
use tracing::{debug, info};

use crate::descriptor::BindableDescriptor;
use crate::error::DescriptorError;
use crate::extract::{Bindable, DescriptorBuilder};

/// Component descriptors keyed by component id, in registration order.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    builder: DescriptorBuilder,
    entries: RwLock<IndexMap<SmolStr, Arc<BindableDescriptor>>>,
}

impl DescriptorRegistry {
    pub fn new(builder: DescriptorBuilder) -> Self {
        Self {
            builder,
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Register a ready-made descriptor, replacing any previous one for `id`.
    pub fn register(
        &self,
        id: impl Into<SmolStr>,
        descriptor: BindableDescriptor,
    ) -> Option<Arc<BindableDescriptor>> {
        let id = id.into();
        debug!("[REGISTRY] register '{}' ({} attribute(s))", id, descriptor.len());
        self.entries.write().insert(id, Arc::new(descriptor))
    }

    /// Describe one component and register it under `id`.
    pub fn describe(
        &self,
        id: impl Into<SmolStr>,
        component: &dyn Bindable,
    ) -> Result<Arc<BindableDescriptor>, DescriptorError> {
        let descriptor = Arc::new(self.builder.build(component)?);
        self.entries.write().insert(id.into(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Describe independent components in parallel and register them in
    /// input order.
    ///
    /// Nothing is registered if any component fails to describe.
    pub fn describe_all(
        &self,
        components: &[(&str, &(dyn Bindable + Sync))],
    ) -> Result<(), DescriptorError> {
        let described: Vec<_> = components
            .par_iter()
            .map(|(id, component)| {
                self.builder
                    .build(*component)
                    .map(|descriptor| (SmolStr::new(id), Arc::new(descriptor)))
            })
            .collect::<Result<_, _>>()?;

        let mut entries = self.entries.write();
        for (id, descriptor) in described {
            entries.insert(id, descriptor);
        }
        info!("[REGISTRY] described {} component(s)", components.len());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<BindableDescriptor>> {
        self.entries.read().get(id).cloned()
    }

    pub fn remove(&self, id: &str) -> Option<Arc<BindableDescriptor>> {
        self.entries.write().shift_remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> Vec<SmolStr> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
