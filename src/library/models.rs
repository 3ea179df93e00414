use serde::{Deserialize, Deserializer, Serialize};

pub type SongId = u64;

/// Genre assigned to the stats snapshot of a brand new document.
pub const DEFAULT_FAVORITE_GENRE: &str = "Pop";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// Display duration, `m:ss`. Never parsed.
    pub duration: String,
    pub plays: u64,
    pub rating: f64,
    pub color: String,
    pub waveform: Vec<u8>,
}

/// Cached counters persisted alongside the songs.
///
/// `total_plays` and `total_songs` are maintained by seeding and by recorded
/// plays, `total_duration` and `favorite_genre` are written once at seed time.
/// None of them are recomputed from the songs on read, see
/// [`crate::library::aggregator`] for the live counterparts.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_plays: u64,
    pub total_songs: u64,
    #[serde(deserialize_with = "deserialize_display_text")]
    pub total_duration: String,
    pub favorite_genre: String,
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            total_plays: 0,
            total_songs: 0,
            total_duration: "0".to_owned(),
            favorite_genre: DEFAULT_FAVORITE_GENRE.to_owned(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Document {
    pub songs: Vec<Song>,
    /// Carried through untouched.
    pub playlists: Vec<serde_json::Value>,
    pub stats: Stats,
}

impl Document {
    pub fn find_song(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn find_song_mut(&mut self, id: SongId) -> Option<&mut Song> {
        self.songs.iter_mut().find(|s| s.id == id)
    }

    /// Whether the stored counters agree with the song set.
    pub fn counters_in_sync(&self) -> bool {
        self.stats.total_songs == self.songs.len() as u64
            && self.stats.total_plays == self.songs.iter().map(|s| s.plays).sum::<u64>()
    }
}

/// Documents written by older builds store `totalDuration` as the number `0`
/// until they get seeded, later ones as display text.
fn deserialize_display_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DisplayText {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match DisplayText::deserialize(deserializer)? {
        DisplayText::Text(text) => text,
        DisplayText::Number(number) => number.to_string(),
    })
}
