use colored::Colorize;
use std::fmt::Write;

use crate::curator::ResolutionReport;
use crate::session::{SessionView, VibeEntry};
use crate::spotify::TrackRecord;

pub fn render_banner() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "🎧 VibeDJ".cyan().bold());
    let _ = writeln!(out, "{}", "🌀 A Playlist Generator That Feels Your Mood".cyan());
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Tell me how you're feeling, and I'll whip up a playlist that matches your soul.");
    let _ = writeln!(out, "Sad breakup? Existential crisis? Gym grind? I've got a track for that. 💿");
    out
}

pub fn render_footer() -> String {
    format!(
        "{}\n{}",
        "“You bring the feels. I bring the beats.” 🎵".italic(),
        "Built with 🎧, APIs, and late-night vibes.".dimmed()
    )
}

pub fn render_playlist(tracks: &[TrackRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "🎶 Your Playlist".bold());
    for track in tracks {
        let _ = writeln!(out, "{}", track.title.bold());
        if let Some(preview) = &track.preview_url {
            let _ = writeln!(out, "  Preview: {}", preview);
        }
        let _ = writeln!(out, "  Open on Spotify: {}", track.spotify_url.cyan());
        let _ = writeln!(out, "---");
    }
    out
}

/// The "open all songs" panel, only shown when asked for.
pub fn render_links(tracks: &[TrackRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "🎧 Open all songs in Spotify".bold());
    for track in tracks {
        let _ = writeln!(out, "- {}: {}", track.title, track.spotify_url);
    }
    out
}

pub fn render_history(history: &[VibeEntry]) -> String {
    if history.is_empty() {
        return format!("{}\n", "No vibes yet this session".yellow());
    }

    let mut out = String::new();
    for (i, entry) in history.iter().enumerate() {
        let _ = writeln!(out, "{:2}. {}: {}", i + 1, entry.kind.to_string().green(), entry.text);
    }
    out
}

/// Counts of dropped candidates. Failed lookups are called out separately from misses.
pub fn render_report(report: &ResolutionReport) -> String {
    let mut out = format!(
        "Matched {}/{} suggested tracks",
        report.resolved, report.candidates
    );
    if report.has_failures() {
        let _ = write!(
            out,
            " ({})",
            format!("{} lookups failed", report.failures.len()).red()
        );
    }
    out.push('\n');
    out
}

pub fn render_view(view: SessionView<'_>) -> String {
    match view {
        SessionView::Idle => format!(
            "{}\n",
            "What's your mood? 🧠💭 (e.g. heartbroken, excited, chaotic, sleepy...)".cyan()
        ),
        SessionView::Empty => format!(
            "{}\n",
            "No tracks could be resolved for that vibe. Try describing it differently.".yellow()
        ),
        SessionView::Failed(reason) => format!("{} {}\n", "Couldn't build a playlist:".red(), reason),
        SessionView::Ready(tracks) => render_playlist(tracks),
    }
}
