use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::curator::extract::extract_candidate_lines;
use crate::curator::report::{FailedLookup, ResolutionReport, RunOutcome};
use crate::error::Result;
use crate::gemini::build_prompt;
use crate::session::SessionState;
use crate::spotify::TrackRecord;

/// Turns a prompt into free-text playlist output.
#[async_trait]
pub trait PlaylistGenerator {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Looks up one free-text query and returns the top hit, if any.
#[async_trait]
pub trait CatalogSearch {
    async fn search_track(&self, query: &str) -> Result<Option<TrackRecord>>;
}

#[async_trait]
impl<'a, T> PlaylistGenerator for &'a T
where
    T: PlaylistGenerator + Sync + ?Sized,
{
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }
}

#[async_trait]
impl<'a, T> CatalogSearch for &'a T
where
    T: CatalogSearch + Sync + ?Sized,
{
    async fn search_track(&self, query: &str) -> Result<Option<TrackRecord>> {
        (**self).search_track(query).await
    }
}

pub struct VibeCurator<G, C> {
    generator: G,
    catalog: C,
    show_progress: bool,
}

impl<G, C> VibeCurator<G, C>
where
    G: PlaylistGenerator + Sync,
    C: CatalogSearch + Sync,
{
    pub fn new(generator: G, catalog: C) -> Self {
        Self {
            generator,
            catalog,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the pipeline for a non-blank mood and apply the result to the session.
    /// Returns `None` without touching anything when the mood is blank.
    pub async fn submit(&self, session: &mut SessionState, mood: &str) -> Option<RunOutcome> {
        if mood.trim().is_empty() {
            debug!("Ignoring blank mood");
            return None;
        }

        let outcome = self.run(mood).await;
        session.apply(mood, &outcome);
        Some(outcome)
    }

    /// Generate, extract, then resolve every candidate line in order.
    pub async fn run(&self, mood: &str) -> RunOutcome {
        info!("Curating playlist for mood: {}", mood);

        let prompt = build_prompt(mood);

        let spinner = self.spinner("Finding your vibe...");
        let generated = self.generator.generate(&prompt).await;
        spinner.finish_and_clear();

        let raw = match generated {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Playlist generation failed: {}", e);
                return RunOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let candidates = extract_candidate_lines(&raw);
        let (records, report) = self.resolve_all(&candidates).await;

        info!(
            "Resolved {}/{} candidate tracks ({} misses, {} failed lookups)",
            report.resolved,
            report.candidates,
            report.misses.len(),
            report.failures.len()
        );

        if records.is_empty() {
            RunOutcome::Empty { raw, report }
        } else {
            RunOutcome::Success {
                raw,
                records,
                report,
            }
        }
    }

    async fn resolve_all(&self, candidates: &[String]) -> (Vec<TrackRecord>, ResolutionReport) {
        let mut report = ResolutionReport::new(candidates.len());
        let mut records = Vec::new();

        let pb = self.progress_bar(candidates.len() as u64);

        for line in candidates {
            let query = line.trim();
            pb.set_message(query.to_string());

            match self.catalog.search_track(query).await {
                Ok(Some(record)) => {
                    debug!("Resolved '{}' to {}", query, record.spotify_url);
                    report.resolved += 1;
                    records.push(record);
                }
                Ok(None) => {
                    debug!("No match for: {}", query);
                    report.misses.push(query.to_string());
                }
                Err(e) => {
                    warn!("Catalog lookup failed for '{}': {}", query, e);
                    report.failures.push(FailedLookup {
                        query: query.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        (records, report)
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("  {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl PlaylistGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct EchoCatalog;

    #[async_trait]
    impl CatalogSearch for EchoCatalog {
        async fn search_track(&self, query: &str) -> Result<Option<TrackRecord>> {
            match query.split_once(" – ") {
                Some((name, artist)) if name != "Unknown" => Ok(Some(TrackRecord::mock(name, artist))),
                Some(_) => Ok(None),
                None => Err(AppError::Generation("unexpected query".into())),
            }
        }
    }

    #[tokio::test]
    async fn test_run_trims_queries_and_keeps_order() {
        let curator = VibeCurator::new(
            CannedGenerator("Late Night 🌙\n  Teardrop – Massive Attack \nUnknown – Nobody\nNumb – Linkin Park"),
            EchoCatalog,
        )
        .with_progress(false);

        let outcome = curator.run("sleepless").await;
        let titles: Vec<_> = outcome.records().iter().map(|r| r.title.as_str()).collect();

        assert_eq!(titles, vec!["Teardrop – Massive Attack", "Numb – Linkin Park"]);
        let report = outcome.report().unwrap();
        assert_eq!(report.candidates, 3);
        assert_eq!(report.resolved, 2);
        assert_eq!(report.misses, vec!["Unknown – Nobody"]);
    }

    #[tokio::test]
    async fn test_run_without_candidates_is_empty() {
        let curator = VibeCurator::new(CannedGenerator("Just vibes, no songs"), EchoCatalog)
            .with_progress(false);

        match curator.run("calm").await {
            RunOutcome::Empty { raw, report } => {
                assert_eq!(raw, "Just vibes, no songs");
                assert_eq!(report.candidates, 0);
            }
            other => panic!("expected empty outcome, got {:?}", other),
        }
    }
}
