//! Options for describing components

use crate::descriptor::GroupingMethod;

/// Options controlling how component descriptors are built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeOptions {
    /// Grouping applied to freshly built descriptors
    pub default_grouping: GroupingMethod,
    /// Maximum nesting depth below the root component
    pub max_depth: usize,
    /// Reject attribute keys that are not dot-separated identifiers
    pub validate_keys: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            default_grouping: GroupingMethod::Structure,
            max_depth: 32,
            validate_keys: true,
        }
    }
}

impl DescribeOptions {
    pub fn with_grouping(mut self, grouping: GroupingMethod) -> Self {
        self.default_grouping = grouping;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_key_validation(mut self, validate_keys: bool) -> Self {
        self.validate_keys = validate_keys;
        self
    }
}
