use super::error::LibraryResult;
use super::models::SongId;
use super::store::DocumentStore;
use serde::Serialize;
use tracing::warn;

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlayOutcome {
    Recorded {
        song_id: SongId,
        plays: u64,
        total_plays: u64,
    },
    /// No song has the requested id, nothing changed.
    UnknownSong { song_id: SongId },
}

impl PlayOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, PlayOutcome::Recorded { .. })
    }
}

/// Counts one play of `song_id` and persists the document.
///
/// The song counter and `stats.totalPlays` move together inside the store's
/// critical section. An unknown id changes nothing, is not an error and does
/// not touch the file.
pub fn record_play(store: &DocumentStore, song_id: SongId) -> LibraryResult<PlayOutcome> {
    let recorded = store.update_if(|document| {
        let song = document.find_song_mut(song_id)?;
        song.plays += 1;
        let plays = song.plays;
        document.stats.total_plays += 1;
        Some(PlayOutcome::Recorded {
            song_id,
            plays,
            total_plays: document.stats.total_plays,
        })
    })?;

    Ok(recorded.unwrap_or_else(|| {
        warn!("Play requested for unknown song {}", song_id);
        PlayOutcome::UnknownSong { song_id }
    }))
}
