//! Plain-text outline of a descriptor's views, for help and documentation output.

use std::fmt::Write;

use super::BindableDescriptor;
use crate::attribute::AttributeDescriptor;

impl BindableDescriptor {
    /// Render the computed views as an indented outline.
    ///
    /// ```text
    /// Lingo (grouped by STRUCTURE)
    ///   Lingo.desiredClusterCount: usize = 30 [processing, input]
    ///   [Stemmer]
    ///     Stemmer.language: String
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} (grouped by {})",
            self.metadata().label_or_name(),
            self.grouping()
        );

        for attribute in self.attribute_descriptors().values() {
            write_attribute(&mut out, attribute, 1);
        }

        for (group, attributes) in self.attribute_groups() {
            let _ = writeln!(out, "  [{}]", group);
            for attribute in attributes.values() {
                write_attribute(&mut out, attribute, 2);
            }
        }

        out
    }
}

fn write_attribute(out: &mut String, attribute: &AttributeDescriptor, indent: usize) {
    out.push_str(&"  ".repeat(indent));
    let _ = write!(out, "{}: {}", attribute.key(), attribute.value_type());

    if let Some(default) = attribute.default_value() {
        let _ = write!(out, " = {}", default);
    }

    let markers = attribute.markers();
    if !markers.is_empty() {
        let names: Vec<_> = markers.iter().map(|m| m.display()).collect();
        let _ = write!(out, " [{}]", names.join(", "));
    }

    out.push('\n');
}
