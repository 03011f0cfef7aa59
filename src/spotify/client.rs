use async_trait::async_trait;
use rspotify::{
    model::{FullTrack, SearchResult, SearchType},
    prelude::*,
    ClientCredsSpotify, Credentials,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::curator::CatalogSearch;
use crate::error::Result;
use crate::spotify::models::TrackRecord;

/// Catalog search over the public Spotify API using client credentials.
/// No user login is involved, only the app's id and secret.
pub struct CatalogClient {
    client: ClientCredsSpotify,
}

impl CatalogClient {
    /// Requests the client-credentials token up front so bad credentials fail
    /// at startup instead of on the first search.
    pub async fn new(config: &Config) -> Result<Self> {
        let creds = Credentials::new(&config.spotify_client_id, &config.spotify_client_secret);
        let client = ClientCredsSpotify::new(creds);

        client.request_token().await?;
        info!("Authenticated with Spotify using client credentials");

        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogSearch for CatalogClient {
    async fn search_track(&self, query: &str) -> Result<Option<TrackRecord>> {
        let result = self
            .client
            .search(query, SearchType::Track, None, None, Some(1), None)
            .await?;

        let items = match result {
            SearchResult::Tracks(page) => page.items,
            _ => Vec::new(),
        };

        let record = first_track_record(items);
        if record.is_none() {
            debug!("No catalog match for: {}", query);
        }
        Ok(record)
    }
}

/// Map the top search hit to a track record. An empty result, or a hit without a
/// Spotify web link, yields nothing.
pub fn first_track_record(items: Vec<FullTrack>) -> Option<TrackRecord> {
    let track = items.into_iter().next()?;

    let Some(spotify_url) = track.external_urls.get("spotify").cloned() else {
        debug!("Skipping match without a Spotify link: {}", track.name);
        return None;
    };

    let artist = track
        .artists
        .first()
        .map(|a| a.name.as_str())
        .unwrap_or_default();

    Some(TrackRecord::new(&track.name, artist, track.preview_url, spotify_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_track(name: &str, artists: &[&str], preview_url: Option<&str>, spotify_url: Option<&str>) -> FullTrack {
        let external_urls = match spotify_url {
            Some(url) => serde_json::json!({ "spotify": url }),
            None => serde_json::json!({}),
        };
        let artists: Vec<_> = artists
            .iter()
            .map(|artist| {
                serde_json::json!({
                    "external_urls": {},
                    "href": null,
                    "id": null,
                    "name": artist,
                    "type": "artist",
                    "uri": null
                })
            })
            .collect();

        serde_json::from_value(serde_json::json!({
            "album": {
                "album_type": "album",
                "artists": [],
                "available_markets": [],
                "external_urls": {},
                "href": null,
                "id": null,
                "images": [],
                "name": "Mock Album",
                "release_date": "2002-03-25",
                "release_date_precision": "day",
                "type": "album"
            },
            "artists": artists,
            "available_markets": [],
            "disc_number": 1,
            "duration_ms": 185000,
            "explicit": false,
            "external_ids": {},
            "external_urls": external_urls,
            "href": null,
            "id": "2nLtzopw4rPReszdYBJU6h",
            "is_local": false,
            "name": name,
            "popularity": 80,
            "preview_url": preview_url,
            "track_number": 13,
            "type": "track",
            "uri": "spotify:track:2nLtzopw4rPReszdYBJU6h"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_search_yields_no_record() {
        assert_eq!(first_track_record(Vec::new()), None);
    }

    #[test]
    fn test_maps_top_hit_with_first_artist() {
        let items = vec![
            full_track(
                "Numb",
                &["Linkin Park", "Jay-Z"],
                Some("https://p.scdn.co/mp3-preview/numb"),
                Some("https://open.spotify.com/track/2nLtzopw4rPReszdYBJU6h"),
            ),
            full_track("In the End", &["Linkin Park"], None, Some("https://open.spotify.com/track/other")),
        ];

        let record = first_track_record(items).unwrap();

        assert_eq!(record.title, "Numb – Linkin Park");
        assert_eq!(record.preview_url.as_deref(), Some("https://p.scdn.co/mp3-preview/numb"));
        assert_eq!(record.spotify_url, "https://open.spotify.com/track/2nLtzopw4rPReszdYBJU6h");
    }

    #[test]
    fn test_missing_preview_stays_absent() {
        let items = vec![full_track(
            "Teardrop",
            &["Massive Attack"],
            None,
            Some("https://open.spotify.com/track/teardrop"),
        )];

        let record = first_track_record(items).unwrap();

        assert_eq!(record.title, "Teardrop – Massive Attack");
        assert_eq!(record.preview_url, None);
    }

    #[test]
    fn test_hit_without_spotify_link_is_a_miss() {
        let items = vec![full_track("Teardrop", &["Massive Attack"], None, None)];
        assert_eq!(first_track_record(items), None);
    }
}
