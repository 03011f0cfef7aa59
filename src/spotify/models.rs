use serde::{Deserialize, Serialize};

/// One song after catalog lookup. `title` is "Track Name – Primary Artist".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub title: String,
    pub preview_url: Option<String>,
    pub spotify_url: String,
}

impl TrackRecord {
    pub fn new(name: &str, artist: &str, preview_url: Option<String>, spotify_url: String) -> Self {
        Self {
            title: format!("{} – {}", name, artist),
            preview_url,
            spotify_url,
        }
    }
}

#[cfg(test)]
impl TrackRecord {
    pub fn mock(name: &str, artist: &str) -> Self {
        Self::new(
            name,
            artist,
            Some("https://p.scdn.co/mp3-preview/mock".to_string()),
            "https://open.spotify.com/track/mock".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_uses_en_dash() {
        let record = TrackRecord::new("Numb", "Linkin Park", None, "https://open.spotify.com/track/1".into());
        assert_eq!(record.title, "Numb – Linkin Park");
        assert!(record.preview_url.is_none());
    }
}
