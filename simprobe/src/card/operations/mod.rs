pub mod application;
pub mod directory;
pub mod read;
pub mod select;

// Re-export the operations at the operations root so callers can use
// `crate::card::operations::read_file(...)` directly.
pub use application::read_application;
pub use directory::{
    DirectoryListing, enumerate_via_candidates, enumerate_via_directory, found, parse_ef_dir,
};
pub use read::{get_data, get_response, read_binary_at, read_file};
pub use select::{ProbeOutcome, probe_aid, probe_default_application, select_application};
