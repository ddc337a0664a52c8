use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::Bindable;
use crate::attribute::AttributeDescriptor;
use crate::base::{Slot, TypeName};
use crate::config::DescribeOptions;
use crate::descriptor::BindableDescriptor;
use crate::error::DescriptorError;

/// Builds [`BindableDescriptor`] trees from [`Bindable`] components.
///
/// The builder walks the nested components depth-first. It rejects a
/// component instance that is reached again while it is still being
/// described (a cycle through shared references), nesting deeper than
/// [`DescribeOptions::max_depth`], malformed keys and duplicate slots.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    options: DescribeOptions,
}

/// One component on the path from the root to the component being described.
struct Frame {
    /// Address of the instance; `None` for zero-sized components.
    addr: Option<usize>,
    type_name: TypeName,
    /// Field of the slot this component was reached through.
    field: String,
}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DescribeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DescribeOptions {
        &self.options
    }

    /// Describe `component` and everything nested in it.
    pub fn build(&self, component: &dyn Bindable) -> Result<BindableDescriptor, DescriptorError> {
        let mut path = Vec::new();
        let descriptor = self.describe(component, String::new(), &mut path)?;
        debug!(
            "[EXTRACT] {}: {} attribute(s), {} group(s)",
            descriptor.metadata().name,
            descriptor.len(),
            descriptor.attribute_groups().len()
        );
        Ok(descriptor)
    }

    fn describe(
        &self,
        component: &dyn Bindable,
        field: String,
        path: &mut Vec<Frame>,
    ) -> Result<BindableDescriptor, DescriptorError> {
        let metadata = component.metadata();
        let frame = Frame {
            addr: instance_addr(component),
            type_name: component.type_name(),
            field,
        };

        if frame.addr.is_some()
            && path
                .iter()
                .any(|f| f.addr == frame.addr && f.type_name == frame.type_name)
        {
            path.push(frame);
            let rendered = render_path(path);
            path.pop();
            return Err(DescriptorError::cycle(metadata.name.as_str(), rendered));
        }

        if path.len() > self.options.max_depth {
            path.push(frame);
            let rendered = render_path(path);
            path.pop();
            return Err(DescriptorError::too_deep(self.options.max_depth, rendered));
        }

        let attributes = component.attributes();
        if self.options.validate_keys {
            validate_keys(&attributes, &metadata.name)?;
        }

        path.push(frame);
        let nested = self.describe_nested(component, &metadata.name, path);
        path.pop();
        let nested = nested?;

        trace!(
            "[EXTRACT] {} at depth {}: {} attribute(s), {} nested",
            metadata.name,
            path.len(),
            attributes.len(),
            nested.len()
        );

        Ok(BindableDescriptor::with_grouping(
            metadata,
            nested,
            attributes,
            self.options.default_grouping,
        ))
    }

    fn describe_nested(
        &self,
        component: &dyn Bindable,
        component_name: &str,
        path: &mut Vec<Frame>,
    ) -> Result<Vec<(Slot, BindableDescriptor)>, DescriptorError> {
        let mut seen = FxHashSet::default();
        let mut nested = Vec::new();

        for child in component.nested() {
            if !seen.insert(child.slot.field().to_string()) {
                return Err(DescriptorError::duplicate_slot(child.slot.field(), component_name));
            }
            trace!("[EXTRACT] {} -> slot {}", component_name, child.slot);
            let descriptor = self.describe(child.component, child.slot.field().to_string(), path)?;
            nested.push((child.slot, descriptor));
        }

        Ok(nested)
    }
}

/// Identity of a sized instance.
fn instance_addr(component: &dyn Bindable) -> Option<usize> {
    if std::mem::size_of_val(component) == 0 {
        return None;
    }
    Some(component as *const dyn Bindable as *const () as usize)
}

fn validate_keys(attributes: &[AttributeDescriptor], component: &str) -> Result<(), DescriptorError> {
    match attributes.iter().find(|a| !a.key().is_well_formed()) {
        Some(bad) => Err(DescriptorError::malformed_key(bad.key().as_str(), component)),
        None => Ok(()),
    }
}

/// `Root.child.grandchild`, using the root's simple type name.
fn render_path(path: &[Frame]) -> String {
    let mut rendered = String::new();
    for (i, frame) in path.iter().enumerate() {
        if i == 0 {
            rendered.push_str(frame.type_name.simple_name());
        } else {
            rendered.push('.');
            rendered.push_str(&frame.field);
        }
    }
    rendered
}
