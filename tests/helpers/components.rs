//! A small clustering pipeline used as a fixture across tests.
//!
//! ```text
//! Lingo
//! ├── preprocessing: PreprocessingPipeline
//! │   ├── tokenizer: Tokenizer
//! │   └── stemmer: SnowballStemmer
//! └── matrix_builder: TermDocumentMatrixBuilder
//! ```

use bindable::{
    AttributeDescriptor, AttributeLevel, AttributeMetadata, Bindable, BindableMetadata, Marker,
    NestedComponent,
};

pub struct Tokenizer {
    pub max_token_length: usize,
}

impl Bindable for Tokenizer {
    fn metadata(&self) -> BindableMetadata {
        BindableMetadata::new("Tokenizer")
    }

    fn attributes(&self) -> Vec<AttributeDescriptor> {
        vec![
            AttributeDescriptor::new("Tokenizer.maxTokenLength", "usize")
                .with_default(self.max_token_length.to_string())
                .with_markers([Marker::Init, Marker::Input]),
        ]
    }
}

pub struct SnowballStemmer {
    pub language: &'static str,
}

impl Bindable for SnowballStemmer {
    fn metadata(&self) -> BindableMetadata {
        BindableMetadata::new("SnowballStemmer").with_label("Snowball stemmer")
    }

    fn attributes(&self) -> Vec<AttributeDescriptor> {
        vec![
            AttributeDescriptor::new("SnowballStemmer.language", "String")
                .with_default(self.language)
                .with_markers([Marker::Init, Marker::Input, Marker::Required])
                .with_metadata(
                    AttributeMetadata::new("Language")
                        .with_group("Language")
                        .with_level(AttributeLevel::Basic),
                ),
        ]
    }
}

pub struct PreprocessingPipeline {
    pub tokenizer: Tokenizer,
    pub stemmer: SnowballStemmer,
}

impl Bindable for PreprocessingPipeline {
    fn metadata(&self) -> BindableMetadata {
        BindableMetadata::new("PreprocessingPipeline")
    }

    fn attributes(&self) -> Vec<AttributeDescriptor> {
        vec![
            AttributeDescriptor::new("PreprocessingPipeline.dfThreshold", "usize")
                .with_default("1")
                .with_markers([Marker::Processing, Marker::Input])
                .with_metadata(
                    AttributeMetadata::new("Word document frequency threshold")
                        .with_group("Preprocessing")
                        .with_level(AttributeLevel::Advanced),
                ),
        ]
    }

    fn nested(&self) -> Vec<NestedComponent<'_>> {
        vec![
            NestedComponent::of("tokenizer", &self.tokenizer),
            NestedComponent::of("stemmer", &self.stemmer),
        ]
    }
}

pub struct TermDocumentMatrixBuilder {
    pub maximum_matrix_size: usize,
}

impl Bindable for TermDocumentMatrixBuilder {
    fn metadata(&self) -> BindableMetadata {
        BindableMetadata::new("TermDocumentMatrixBuilder")
    }

    fn attributes(&self) -> Vec<AttributeDescriptor> {
        vec![
            AttributeDescriptor::new("TermDocumentMatrixBuilder.maximumMatrixSize", "usize")
                .with_default(self.maximum_matrix_size.to_string())
                .with_markers([Marker::Processing, Marker::Input])
                .with_metadata(
                    AttributeMetadata::new("Maximum matrix size")
                        .with_group("Matrix model")
                        .with_level(AttributeLevel::Medium),
                ),
        ]
    }
}

pub struct Lingo {
    pub desired_cluster_count: usize,
    pub preprocessing: PreprocessingPipeline,
    pub matrix_builder: TermDocumentMatrixBuilder,
}

impl Bindable for Lingo {
    fn metadata(&self) -> BindableMetadata {
        BindableMetadata::new("Lingo")
            .with_label("Lingo clustering")
            .with_description("Clusters documents by discovering frequent phrases.")
    }

    fn attributes(&self) -> Vec<AttributeDescriptor> {
        vec![
            AttributeDescriptor::new("Lingo.desiredClusterCount", "usize")
                .with_default(self.desired_cluster_count.to_string())
                .with_markers([Marker::Processing, Marker::Input])
                .with_metadata(
                    AttributeMetadata::new("Cluster count")
                        .with_group("Clusters")
                        .with_level(AttributeLevel::Basic),
                ),
            AttributeDescriptor::new("Lingo.scoreWeight", "f64")
                .with_default("0.0")
                .with_markers([Marker::Processing, Marker::Input])
                .with_metadata(
                    AttributeMetadata::new("Size-score sorting ratio")
                        .with_group("Clusters")
                        .with_level(AttributeLevel::Advanced),
                ),
            AttributeDescriptor::new("Lingo.clusters", "Vec<Cluster>")
                .with_markers([Marker::Processing, Marker::Output, Marker::Internal]),
        ]
    }

    fn nested(&self) -> Vec<NestedComponent<'_>> {
        vec![
            NestedComponent::of("preprocessing", &self.preprocessing),
            NestedComponent::of("matrix_builder", &self.matrix_builder),
        ]
    }
}

pub fn lingo() -> Lingo {
    Lingo {
        desired_cluster_count: 30,
        preprocessing: PreprocessingPipeline {
            tokenizer: Tokenizer {
                max_token_length: 255,
            },
            stemmer: SnowballStemmer { language: "english" },
        },
        matrix_builder: TermDocumentMatrixBuilder {
            maximum_matrix_size: 37500,
        },
    }
}

/// Every attribute key declared anywhere in the `lingo()` tree.
pub const LINGO_KEYS: [&str; 7] = [
    "Lingo.desiredClusterCount",
    "Lingo.scoreWeight",
    "Lingo.clusters",
    "PreprocessingPipeline.dfThreshold",
    "Tokenizer.maxTokenLength",
    "SnowballStemmer.language",
    "TermDocumentMatrixBuilder.maximumMatrixSize",
];
