use serde::{Deserialize, Serialize};

/// Directory of the bundled Greengenes 13_8 OTU release, relative to the package root
pub const DATASET_DIR: &str = "gg_13_8_otus";

/// A reference-data file shipped alongside this crate.
///
/// Each variant maps to a fixed relative path under the package root. The lane
/// mask is not a file and lives in [`crate::core::mask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceFile {
    /// Greengenes 13_8 97% OTU representative sequences
    Sequences,
    /// Greengenes 13_8 97% OTU taxonomy assignments
    Taxonomy,
    /// Greengenes 13_8 85% OTU aligned representative sequences
    Alignment,
}

impl ReferenceFile {
    /// Every file-backed reference, in listing order
    pub const fn all() -> [Self; 3] {
        [Self::Sequences, Self::Taxonomy, Self::Alignment]
    }

    /// Path segments relative to the package root
    pub const fn segments(self) -> [&'static str; 3] {
        match self {
            Self::Sequences => [DATASET_DIR, "rep_set", "97_otus.fasta"],
            Self::Taxonomy => [DATASET_DIR, "taxonomy", "97_otu_taxonomy.txt"],
            Self::Alignment => [DATASET_DIR, "rep_set_aligned", "85_otus.fasta"],
        }
    }

    /// Short identifier used on the command line and in output
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sequences => "sequences",
            Self::Taxonomy => "taxonomy",
            Self::Alignment => "alignment",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Sequences => "Greengenes 13_8 97% OTU representative sequences",
            Self::Taxonomy => "Greengenes 13_8 97% OTU taxonomy",
            Self::Alignment => "Greengenes 13_8 85% OTU template alignment",
        }
    }
}

impl std::fmt::Display for ReferenceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
