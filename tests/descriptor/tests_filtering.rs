//! Filtering the fixture pipeline by markers, levels and groups.

use bindable::descriptor::filter::{in_group, public, up_to_level};
use bindable::{AttributeLevel, BindableDescriptor, DescriptorBuilder, GroupingMethod, Marker};
use rstest::{fixture, rstest};

use crate::helpers::components::lingo;
use crate::helpers::descriptor_assertions::{all_view_keys, assert_same_slots, group_keys, group_labels, keys};

#[fixture]
fn described() -> BindableDescriptor {
    DescriptorBuilder::new().build(&lingo()).unwrap()
}

// ============================================================================
// Markers
// ============================================================================

#[rstest]
#[case(&[Marker::Init], vec!["SnowballStemmer.language", "Tokenizer.maxTokenLength"])]
#[case(&[Marker::Init, Marker::Required], vec!["SnowballStemmer.language"])]
#[case(&[Marker::Output], vec!["Lingo.clusters"])]
#[case(&[Marker::Output, Marker::Init], vec![])]
fn test_only_marked(
    described: BindableDescriptor,
    #[case] markers: &[Marker],
    #[case] expected: Vec<&str>,
) {
    let filtered = described.only_marked(markers);
    assert_eq!(all_view_keys(&filtered), expected);
    assert_same_slots(&filtered, &described);
}

#[rstest]
fn test_init_attributes_grouped_by_component(described: BindableDescriptor) {
    let init = described.only_marked(&[Marker::Init]);

    assert!(init.attribute_descriptors().is_empty());
    assert_eq!(group_labels(&init), vec!["SnowballStemmer", "Tokenizer"]);
}

#[rstest]
fn test_processing_inputs_of_root(described: BindableDescriptor) {
    let inputs = described.only_marked(&[Marker::Processing, Marker::Input]);

    assert_eq!(
        keys(inputs.attribute_descriptors()),
        vec!["Lingo.desiredClusterCount", "Lingo.scoreWeight"]
    );
    assert_eq!(
        group_labels(&inputs),
        vec!["PreprocessingPipeline", "TermDocumentMatrixBuilder"]
    );
}

// ============================================================================
// Predicate helpers
// ============================================================================

#[rstest]
fn test_public_hides_internal(described: BindableDescriptor) {
    let visible = described.only(public());

    assert_eq!(visible.len(), described.len() - 1);
    assert!(visible.get("Lingo.clusters").is_none());
}

#[rstest]
#[case(AttributeLevel::Basic, 4)]
#[case(AttributeLevel::Medium, 5)]
#[case(AttributeLevel::Advanced, 7)]
fn test_up_to_level(
    described: BindableDescriptor,
    #[case] level: AttributeLevel,
    #[case] expected: usize,
) {
    assert_eq!(described.only(up_to_level(level)).len(), expected);
}

#[rstest]
fn test_filter_then_group(described: BindableDescriptor) {
    let clusters = described
        .only(in_group("Clusters"))
        .group(GroupingMethod::Group);

    assert!(clusters.attribute_descriptors().is_empty());
    assert_eq!(group_labels(&clusters), vec!["Clusters"]);
    assert_eq!(
        group_keys(&clusters, "Clusters"),
        vec!["Lingo.desiredClusterCount", "Lingo.scoreWeight"]
    );
}

#[rstest]
fn test_filtered_descendant_keeps_its_slot(described: BindableDescriptor) {
    let init = described.only_marked(&[Marker::Init]);

    let stemmer = init.descendant(["preprocessing", "stemmer"]).unwrap();
    assert_eq!(keys(stemmer.direct_attributes()), vec!["SnowballStemmer.language"]);

    let matrix = init.descendant(["matrix_builder"]).unwrap();
    assert!(matrix.direct_attributes().is_empty());
}

#[rstest]
fn test_combined_predicates(described: BindableDescriptor) {
    let basic_public = described
        .only(public())
        .only(up_to_level(AttributeLevel::Basic));

    assert_eq!(
        all_view_keys(&basic_public),
        vec![
            "Lingo.desiredClusterCount",
            "SnowballStemmer.language",
            "Tokenizer.maxTokenLength",
        ]
    );
}
