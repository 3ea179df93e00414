//! Load-time checks for the library document.
//!
//! Only duplicated song ids make a document unusable: ids are what plays get
//! recorded against. Everything else is reported so it shows up in the logs,
//! and the document is served as it is.

use super::models::{Document, SongId};
use std::collections::HashSet;
use std::fmt;

pub const MAX_RATING: f64 = 5.0;
pub const MAX_WAVEFORM_SAMPLE: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationProblem {
    DuplicateSongId {
        id: SongId,
    },
    RatingOutOfRange {
        id: SongId,
        rating: f64,
    },
    WaveformSampleOutOfRange {
        id: SongId,
        sample: u8,
    },
    StaleCounter {
        counter: &'static str,
        stored: u64,
        actual: u64,
    },
}

impl ValidationProblem {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ValidationProblem::DuplicateSongId { .. })
    }
}

impl fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationProblem::DuplicateSongId { id } => {
                write!(f, "Song id {} is used more than once", id)
            }
            ValidationProblem::RatingOutOfRange { id, rating } => {
                write!(
                    f,
                    "Song {} has rating {} outside of 0.0-{:.1}",
                    id, rating, MAX_RATING
                )
            }
            ValidationProblem::WaveformSampleOutOfRange { id, sample } => {
                write!(
                    f,
                    "Song {} has waveform sample {} above {}",
                    id, sample, MAX_WAVEFORM_SAMPLE
                )
            }
            ValidationProblem::StaleCounter {
                counter,
                stored,
                actual,
            } => {
                write!(
                    f,
                    "Stored {} is {} but the songs add up to {}",
                    counter, stored, actual
                )
            }
        }
    }
}

pub fn validate_document(document: &Document) -> Vec<ValidationProblem> {
    let mut problems = vec![];
    let mut seen_ids = HashSet::new();

    for song in document.songs.iter() {
        if !seen_ids.insert(song.id) {
            problems.push(ValidationProblem::DuplicateSongId { id: song.id });
        }
        if !(0.0..=MAX_RATING).contains(&song.rating) {
            problems.push(ValidationProblem::RatingOutOfRange {
                id: song.id,
                rating: song.rating,
            });
        }
        if let Some(sample) = song
            .waveform
            .iter()
            .copied()
            .find(|s| *s > MAX_WAVEFORM_SAMPLE)
        {
            problems.push(ValidationProblem::WaveformSampleOutOfRange {
                id: song.id,
                sample,
            });
        }
    }

    let actual_songs = document.songs.len() as u64;
    if document.stats.total_songs != actual_songs {
        problems.push(ValidationProblem::StaleCounter {
            counter: "totalSongs",
            stored: document.stats.total_songs,
            actual: actual_songs,
        });
    }
    let actual_plays: u64 = document.songs.iter().map(|s| s.plays).sum();
    if document.stats.total_plays != actual_plays {
        problems.push(ValidationProblem::StaleCounter {
            counter: "totalPlays",
            stored: document.stats.total_plays,
            actual: actual_plays,
        });
    }

    problems
}
