pub mod config;
pub mod curator;
pub mod error;
pub mod export;
pub mod gemini;
pub mod presenter;
pub mod repl;
pub mod session;
pub mod spotify;

pub use config::Config;
pub use curator::{CatalogSearch, PlaylistGenerator, ResolutionReport, RunOutcome, VibeCurator};
pub use error::{AppError, Result};
pub use export::ExportFormat;
pub use gemini::GeminiClient;
pub use session::{SessionState, SessionView, VibeEntry, VibeKind};
pub use spotify::{CatalogClient, TrackRecord};
