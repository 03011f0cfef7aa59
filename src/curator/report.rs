use serde::{Deserialize, Serialize};

use crate::spotify::TrackRecord;

/// A candidate line whose catalog request errored, as opposed to returning nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedLookup {
    pub query: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    pub candidates: usize,
    pub resolved: usize,
    pub misses: Vec<String>,
    pub failures: Vec<FailedLookup>,
}

impl ResolutionReport {
    pub fn new(candidates: usize) -> Self {
        Self {
            candidates,
            ..Default::default()
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// At least one candidate resolved.
    Success {
        raw: String,
        records: Vec<TrackRecord>,
        report: ResolutionReport,
    },
    /// The model answered but nothing in it could be resolved.
    Empty { raw: String, report: ResolutionReport },
    /// Generation failed; nothing was resolved.
    Failed { reason: String },
}

impl RunOutcome {
    pub fn report(&self) -> Option<&ResolutionReport> {
        match self {
            RunOutcome::Success { report, .. } | RunOutcome::Empty { report, .. } => Some(report),
            RunOutcome::Failed { .. } => None,
        }
    }

    pub fn records(&self) -> &[TrackRecord] {
        match self {
            RunOutcome::Success { records, .. } => records,
            _ => &[],
        }
    }
}
