pub mod extract;
pub mod orchestrator;
pub mod report;

pub use extract::{extract_candidate_lines, TRACK_SEPARATOR};
pub use orchestrator::{CatalogSearch, PlaylistGenerator, VibeCurator};
pub use report::{FailedLookup, ResolutionReport, RunOutcome};
