use serde::{Deserialize, Serialize};
use std::fmt;

use crate::curator::RunOutcome;
use crate::spotify::TrackRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VibeKind {
    Mood,
    Playlist,
}

impl fmt::Display for VibeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VibeKind::Mood => write!(f, "Mood"),
            VibeKind::Playlist => write!(f, "Playlist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeEntry {
    pub kind: VibeKind,
    pub text: String,
}

/// How the most recent run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Ready,
    Empty,
    Failed(String),
}

/// What the presenter should show for the session right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView<'a> {
    Idle,
    Empty,
    Ready(&'a [TrackRecord]),
    Failed(&'a str),
}

/// Per-session vibe history and current playlist. Lives as long as the
/// interactive session that owns it; nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionState {
    history: Vec<VibeEntry>,
    playlist: Vec<TrackRecord>,
    last_run: Option<RunStatus>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished run into the session. History and playlist change together;
    /// a failed run only updates the status.
    pub fn apply(&mut self, mood: &str, outcome: &RunOutcome) {
        let (raw, records, status) = match outcome {
            RunOutcome::Success { raw, records, .. } => (raw, records.clone(), RunStatus::Ready),
            RunOutcome::Empty { raw, .. } => (raw, Vec::new(), RunStatus::Empty),
            RunOutcome::Failed { reason } => {
                self.last_run = Some(RunStatus::Failed(reason.clone()));
                return;
            }
        };

        self.history.push(VibeEntry {
            kind: VibeKind::Mood,
            text: mood.to_string(),
        });
        self.history.push(VibeEntry {
            kind: VibeKind::Playlist,
            text: raw.clone(),
        });
        self.playlist = records;
        self.last_run = Some(status);
    }

    pub fn history(&self) -> &[VibeEntry] {
        &self.history
    }

    pub fn playlist(&self) -> &[TrackRecord] {
        &self.playlist
    }

    pub fn last_run(&self) -> Option<&RunStatus> {
        self.last_run.as_ref()
    }

    pub fn view(&self) -> SessionView<'_> {
        match &self.last_run {
            None => SessionView::Idle,
            Some(RunStatus::Ready) => SessionView::Ready(&self.playlist),
            Some(RunStatus::Empty) => SessionView::Empty,
            Some(RunStatus::Failed(reason)) => SessionView::Failed(reason),
        }
    }
}
