use super::error::LibraryResult;
use super::models::Song;
use super::store::DocumentStore;
use tracing::info;

/// Display total written into the stats of a freshly seeded library.
pub const SEEDED_TOTAL_DURATION: &str = "1:45:20";

#[allow(clippy::too_many_arguments)]
fn song(
    id: u64,
    title: &str,
    artist: &str,
    album: &str,
    genre: &str,
    duration: &str,
    plays: u64,
    rating: f64,
    color: &str,
    waveform: [u8; 10],
) -> Song {
    Song {
        id,
        title: title.to_owned(),
        artist: artist.to_owned(),
        album: album.to_owned(),
        genre: genre.to_owned(),
        duration: duration.to_owned(),
        plays,
        rating,
        color: color.to_owned(),
        waveform: waveform.to_vec(),
    }
}

/// The catalog installed on first run.
pub fn sample_songs() -> Vec<Song> {
    vec![
        song(
            1,
            "Midnight City",
            "M83",
            "Hurry Up, We're Dreaming",
            "Electronic",
            "4:04",
            245,
            4.8,
            "#8b5cf6",
            [30, 60, 40, 80, 30, 70, 50, 90, 40, 60],
        ),
        song(
            2,
            "Blinding Lights",
            "The Weeknd",
            "After Hours",
            "R&B",
            "3:22",
            189,
            4.9,
            "#ef4444",
            [40, 70, 50, 85, 45, 75, 55, 95, 50, 70],
        ),
        song(
            3,
            "Levitating",
            "Dua Lipa",
            "Future Nostalgia",
            "Pop",
            "3:24",
            167,
            4.7,
            "#f59e0b",
            [35, 65, 45, 75, 40, 70, 55, 85, 45, 65],
        ),
        song(
            4,
            "good 4 u",
            "Olivia Rodrigo",
            "SOUR",
            "Pop Rock",
            "2:58",
            154,
            4.6,
            "#10b981",
            [45, 75, 55, 85, 50, 80, 60, 90, 55, 75],
        ),
        song(
            5,
            "Stay",
            "The Kid LAROI, Justin Bieber",
            "F*CK LOVE 3",
            "Pop",
            "2:21",
            132,
            4.5,
            "#3b82f6",
            [30, 60, 40, 70, 35, 65, 45, 75, 40, 60],
        ),
        song(
            6,
            "Heat Waves",
            "Glass Animals",
            "Dreamland",
            "Indie Pop",
            "3:59",
            178,
            4.8,
            "#ec4899",
            [40, 70, 50, 80, 45, 75, 55, 85, 50, 70],
        ),
    ]
}

/// Installs the sample catalog if the library has no songs.
///
/// Returns whether anything was written.
pub fn seed_if_empty(store: &DocumentStore) -> LibraryResult<bool> {
    if store.read(|document| !document.songs.is_empty()) {
        return Ok(false);
    }

    let seeded = store.update(|document| {
        if !document.songs.is_empty() {
            return false;
        }
        let songs = sample_songs();
        document.stats.total_songs = songs.len() as u64;
        document.stats.total_plays = songs.iter().map(|s| s.plays).sum();
        document.stats.total_duration = SEEDED_TOTAL_DURATION.to_owned();
        document.songs = songs;
        true
    })?;

    if seeded {
        info!(
            "Seeded library with {} sample songs.",
            store.get_songs_count()
        );
    }
    Ok(seeded)
}
