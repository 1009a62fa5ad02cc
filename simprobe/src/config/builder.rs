// simprobe/src/config/builder.rs

use crate::config::aid_list::{AidListEntry, euicc_first};
use crate::config::catalog::{
    CandidateAid, CatalogFile, DataTag, candidate_aids, get_data_tags, well_known_files,
};

/// What a scan probes and reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub candidates: Vec<CandidateAid>,
    pub files: Vec<CatalogFile>,
    pub get_data_tags: Vec<DataTag>,
    /// Send `SELECT` with an empty name before anything else
    pub probe_default: bool,
    /// Read EF_DIR to list applications
    pub read_directory: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            candidates: candidate_aids(),
            files: well_known_files(),
            get_data_tags: get_data_tags(),
            probe_default: true,
            read_directory: true,
        }
    }
}

impl ScanConfig {
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::new()
    }
}

/// Helper to construct a ScanConfig, starting from the static catalogs.
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Replace the candidate list.
    pub fn candidates(mut self, candidates: Vec<CandidateAid>) -> Self {
        self.config.candidates = candidates;
        self
    }

    /// Append entries loaded from an AID list, eUICC entries first.
    pub fn with_aid_list(mut self, entries: &[AidListEntry]) -> Self {
        let extra = euicc_first(entries)
            .into_iter()
            .filter(|e| !self.config.candidates.iter().any(|c| c.aid == e.aid))
            .map(|e| CandidateAid::new(e.aid.clone(), &e.description))
            .collect::<Vec<_>>();
        self.config.candidates.extend(extra);
        self
    }

    pub fn files(mut self, files: Vec<CatalogFile>) -> Self {
        self.config.files = files;
        self
    }

    pub fn get_data_tags(mut self, tags: Vec<DataTag>) -> Self {
        self.config.get_data_tags = tags;
        self
    }

    pub fn probe_default(mut self, enabled: bool) -> Self {
        self.config.probe_default = enabled;
        self
    }

    pub fn read_directory(mut self, enabled: bool) -> Self {
        self.config.read_directory = enabled;
        self
    }

    pub fn build(self) -> ScanConfig {
        self.config
    }
}

impl Default for ScanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
