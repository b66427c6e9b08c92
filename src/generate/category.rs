//! Suffix-based file classification

use std::fmt;

/// Semantic category of a file or directory
///
/// Declaration order is the order in which directory summaries inspect
/// buckets; it does not encode classification precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Model,
    Dataset,
    Code,
    Docs,
    Metadata,
    Unknown,
}

impl Category {
    pub const COUNT: usize = 6;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Model,
        Category::Dataset,
        Category::Code,
        Category::Docs,
        Category::Metadata,
        Category::Unknown,
    ];

    /// Position of this category in [`Category::ALL`]
    pub fn index(self) -> usize {
        match self {
            Category::Model => 0,
            Category::Dataset => 1,
            Category::Code => 2,
            Category::Docs => 3,
            Category::Metadata => 4,
            Category::Unknown => 5,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Model => "model",
            Category::Dataset => "dataset",
            Category::Code => "code",
            Category::Docs => "docs",
            Category::Metadata => "metadata",
            Category::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

pub const MODEL_WEIGHT_SUFFIXES: &[&str] = &[
    ".safetensors",
    ".pkl",
    ".joblib",
    // PyTorch
    ".bin",
    ".pth",
    ".pt",
    ".mar",
    ".pt2",
    ".ptl",
    // TensorFlow
    ".pb",
    ".ckpt",
    ".tflite",
    ".tfrecords",
    // NumPy
    ".npy",
    ".npz",
    // Keras and others
    ".keras",
    ".h5",
    ".caffemodel",
    ".pmml",
    ".coreml",
    ".gguf",
    ".ggml",
    ".ggmf",
    ".llamafile",
    ".onnx",
];

pub const METADATA_SUFFIXES: &[&str] = &[".json", ".yaml", ".xml", ".txt"];

pub const DOCS_SUFFIXES: &[&str] = &[".md", ".adoc", ".html", ".pdf"];

pub const DATASET_SUFFIXES: &[&str] = &[".tar", ".zip", ".parquet", ".csv"];

/// Tables checked in precedence order; the first hit wins
const SUFFIX_TABLES: [(Category, &[&str]); 4] = [
    (Category::Model, MODEL_WEIGHT_SUFFIXES),
    (Category::Metadata, METADATA_SUFFIXES),
    (Category::Docs, DOCS_SUFFIXES),
    (Category::Dataset, DATASET_SUFFIXES),
];

/// Classifies a file by its name alone
///
/// Suffix matching is case-sensitive. Names that match no table, including
/// source code, are [`Category::Unknown`].
pub fn classify_file_name(file_name: &str) -> Category {
    SUFFIX_TABLES
        .iter()
        .find(|(_, suffixes)| suffixes.iter().any(|suffix| file_name.ends_with(suffix)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Unknown)
}
