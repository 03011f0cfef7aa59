use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::error::{AppError, Result};
use crate::spotify::TrackRecord;

const FILE_STEM: &str = "vibedj_playlist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Txt];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.{}", FILE_STEM, self.extension())
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Txt => "text/plain",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Txt => write!(f, "TXT"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::UnknownFormat(s.to_string()))
    }
}

/// Serialize the playlist into the given format.
pub fn encode(format: ExportFormat, records: &[TrackRecord]) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        ExportFormat::Csv => encode_csv(records),
        ExportFormat::Txt => Ok(encode_txt(records)),
    }
}

fn encode_csv(records: &[TrackRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // Written explicitly so an empty playlist still gets a header row.
    writer.write_record(["title", "preview_url", "spotify_url"])?;
    for record in records {
        writer.write_record([
            record.title.as_str(),
            record.preview_url.as_deref().unwrap_or_default(),
            record.spotify_url.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Io(std::io::Error::other(e)))
}

// Plain hyphen here, unlike the en dash inside titles; existing exports look like this.
fn encode_txt(records: &[TrackRecord]) -> String {
    records
        .iter()
        .map(|track| format!("{} - {}", track.title, track.spotify_url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the playlist to `dir/vibedj_playlist.<ext>` and return the path.
pub fn write_export(format: ExportFormat, records: &[TrackRecord], dir: &Path) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(AppError::NothingToExport);
    }

    let data = encode(format, records)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(format.file_name());
    fs::write(&path, data)?;

    info!("{} playlist saved to: {}", format, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TrackRecord> {
        vec![
            TrackRecord::new(
                "Heartbreak Anthem",
                "Galantis",
                Some("https://p.scdn.co/mp3-preview/abc".into()),
                "https://open.spotify.com/track/1".into(),
            ),
            TrackRecord::new(
                "Hello, Goodbye",
                "The Beatles",
                None,
                "https://open.spotify.com/track/2".into(),
            ),
        ]
    }

    #[test]
    fn test_parse_format_case_insensitive() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" Txt ".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert!(matches!("xml".parse::<ExportFormat>(), Err(AppError::UnknownFormat(_))));
    }

    #[test]
    fn test_file_names_and_mime_types() {
        assert_eq!(ExportFormat::Json.file_name(), "vibedj_playlist.json");
        assert_eq!(ExportFormat::Csv.file_name(), "vibedj_playlist.csv");
        assert_eq!(ExportFormat::Txt.file_name(), "vibedj_playlist.txt");
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv");
    }

    #[test]
    fn test_json_reparses_to_same_records() {
        let records = sample();
        let json = encode(ExportFormat::Json, &records).unwrap();

        assert!(json.contains("\n  {"));
        assert!(json.contains("\"preview_url\": null"));
        let parsed: Vec<TrackRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let csv_text = encode(ExportFormat::Csv, &sample()).unwrap();
        assert!(csv_text.starts_with("title,preview_url,spotify_url\n"));

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["title", "preview_url", "spotify_url"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 3);
        assert_eq!(&rows[1][0], "Hello, Goodbye – The Beatles");
        assert_eq!(&rows[1][1], "");
        assert_eq!(&rows[0][1], "https://p.scdn.co/mp3-preview/abc");
    }

    #[test]
    fn test_txt_uses_plain_hyphen() {
        let txt = encode(ExportFormat::Txt, &sample()).unwrap();
        assert_eq!(
            txt,
            "Heartbreak Anthem – Galantis - https://open.spotify.com/track/1\n\
             Hello, Goodbye – The Beatles - https://open.spotify.com/track/2"
        );
    }

    #[test]
    fn test_write_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports");

        let path = write_export(ExportFormat::Txt, &sample(), &target).unwrap();

        assert_eq!(path, target.join("vibedj_playlist.txt"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn test_write_export_refuses_empty_playlist() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_export(ExportFormat::Json, &[], dir.path());
        assert!(matches!(result, Err(AppError::NothingToExport)));
    }
}
