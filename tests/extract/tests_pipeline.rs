//! The fixture pipeline described through the public API.

use std::sync::Arc;

use bindable::{
    Bindable, DescribeOptions, DescriptorBuilder, DescriptorError, DescriptorRegistry,
    GroupingMethod, TypeName,
};
use rstest::rstest;

use crate::helpers::components::{
    LINGO_KEYS, PreprocessingPipeline, SnowballStemmer, TermDocumentMatrixBuilder, lingo,
};
use crate::helpers::descriptor_assertions::{group_keys, group_labels, keys};

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_structure_view_of_pipeline() {
    let descriptor = DescriptorBuilder::new().build(&lingo()).unwrap();

    assert_eq!(
        keys(descriptor.attribute_descriptors()),
        vec!["Lingo.desiredClusterCount", "Lingo.scoreWeight", "Lingo.clusters"]
    );
    assert_eq!(
        group_labels(&descriptor),
        vec![
            "PreprocessingPipeline",
            "SnowballStemmer",
            "TermDocumentMatrixBuilder",
            "Tokenizer",
        ]
    );
    assert_eq!(
        group_keys(&descriptor, "SnowballStemmer"),
        vec!["SnowballStemmer.language"]
    );
}

#[test]
fn test_group_view_of_pipeline() {
    let builder = DescriptorBuilder::with_options(
        DescribeOptions::default().with_grouping(GroupingMethod::Group),
    );
    let descriptor = builder.build(&lingo()).unwrap();

    assert_eq!(
        keys(descriptor.attribute_descriptors()),
        vec!["Lingo.clusters", "Tokenizer.maxTokenLength"]
    );
    assert_eq!(
        group_labels(&descriptor),
        vec!["Clusters", "Language", "Matrix model", "Preprocessing"]
    );
}

#[test]
fn test_level_view_of_pipeline() {
    let descriptor = DescriptorBuilder::new()
        .build(&lingo())
        .unwrap()
        .group(GroupingMethod::Level);

    assert_eq!(group_labels(&descriptor), vec!["Basic", "Medium", "Advanced"]);
    assert_eq!(
        group_keys(&descriptor, "Basic"),
        vec!["Lingo.desiredClusterCount", "SnowballStemmer.language"]
    );
    assert_eq!(
        group_keys(&descriptor, "Advanced"),
        vec!["Lingo.scoreWeight", "PreprocessingPipeline.dfThreshold"]
    );
}

#[test]
fn test_defaults_come_from_instance() {
    let mut pipeline = lingo();
    pipeline.desired_cluster_count = 12;
    pipeline.preprocessing.stemmer = SnowballStemmer { language: "polish" };

    let descriptor = DescriptorBuilder::new().build(&pipeline).unwrap();

    assert_eq!(
        descriptor.get("Lingo.desiredClusterCount").and_then(|a| a.default_value()),
        Some("12")
    );
    assert_eq!(
        descriptor.get("SnowballStemmer.language").and_then(|a| a.default_value()),
        Some("polish")
    );
}

#[test]
fn test_slots_carry_declared_types() {
    let descriptor = DescriptorBuilder::new().build(&lingo()).unwrap();

    let declared: Vec<_> = descriptor
        .nested()
        .keys()
        .map(|slot| slot.declared_type().clone())
        .collect();
    assert_eq!(
        declared,
        vec![
            TypeName::of::<PreprocessingPipeline>(),
            TypeName::of::<TermDocumentMatrixBuilder>(),
        ]
    );
}

#[test]
fn test_outline_of_pipeline() {
    let descriptor = DescriptorBuilder::new()
        .build(&lingo())
        .unwrap()
        .only(|a| a.key().as_str().starts_with("Lingo.") || a.key().as_str().starts_with("Snowball"));

    let expected = "\
Lingo clustering (grouped by STRUCTURE)
  Lingo.desiredClusterCount: usize = 30 [processing, input]
  Lingo.scoreWeight: f64 = 0.0 [processing, input]
  Lingo.clusters: Vec<Cluster> [processing, output, internal]
  [SnowballStemmer]
    SnowballStemmer.language: String = english [init, input, required]
";
    assert_eq!(descriptor.outline(), expected);
}

#[rstest]
#[case(0, false)]
#[case(1, false)]
#[case(2, true)]
fn test_max_depth(#[case] max_depth: usize, #[case] succeeds: bool) {
    let builder =
        DescriptorBuilder::with_options(DescribeOptions::default().with_max_depth(max_depth));
    let result = builder.build(&lingo());

    assert_eq!(result.is_ok(), succeeds);
    if let Err(err) = result {
        assert!(matches!(err, DescriptorError::TooDeep { .. }), "{err}");
    }
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_describes_pipeline_stages() {
    let registry = DescriptorRegistry::default();
    let pipeline = lingo();

    let components: [(&str, &(dyn Bindable + Sync)); 3] = [
        ("lingo", &pipeline),
        ("preprocessing", &pipeline.preprocessing),
        ("stemmer", &pipeline.preprocessing.stemmer),
    ];
    registry.describe_all(&components).unwrap();

    assert_eq!(registry.ids(), vec!["lingo", "preprocessing", "stemmer"]);
    assert_eq!(registry.get("lingo").unwrap().len(), LINGO_KEYS.len());
    assert_eq!(registry.get("preprocessing").unwrap().len(), 3);
    assert_eq!(registry.get("stemmer").unwrap().len(), 1);
}

#[test]
fn test_registry_hands_out_shared_descriptors() {
    let registry = DescriptorRegistry::default();
    registry.describe("lingo", &lingo()).unwrap();

    let first = registry.get("lingo").unwrap();
    let second = registry.get("lingo").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let flat = first.flatten();
    assert_eq!(flat.len(), LINGO_KEYS.len());
    assert_eq!(first.grouping(), GroupingMethod::Structure);
}
