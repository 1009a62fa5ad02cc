// simprobe/src/config/mod.rs

pub mod aid_list;
pub mod builder;
pub mod catalog;

pub use aid_list::{
    AidListEntry, euicc_first, find_best_aid, load_aid_list, parse_aid_list, search_aid_list,
};
pub use builder::{ScanConfig, ScanConfigBuilder};
pub use catalog::{
    CANDIDATE_AIDS, CandidateAid, CatalogFile, DataTag, GET_DATA_TAGS, WELL_KNOWN_FILES,
    candidate_aids, get_data_tags, well_known_files,
};
