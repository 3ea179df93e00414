//! Views derived from the current song set.
//!
//! Everything here is recomputed from the songs on each call, in contrast with
//! the stored [`Stats`](super::Stats) counters.

use super::models::Song;
use serde::Serialize;
use std::cmp::Reverse;

pub const MAX_STARS: u8 = 5;

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub struct StarRating {
    pub filled: u8,
    pub empty: u8,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySummary {
    pub total_songs: usize,
    pub total_plays: u64,
    /// None when there are no songs to average.
    pub average_rating: Option<f64>,
    pub favorite_genre: Option<String>,
    pub genre_distribution: Vec<GenreCount>,
    pub top_songs: Vec<Song>,
}

pub fn total_plays(songs: &[Song]) -> u64 {
    songs.iter().map(|s| s.plays).sum()
}

pub fn total_songs(songs: &[Song]) -> usize {
    songs.len()
}

/// Mean rating rounded to one decimal place.
pub fn average_rating(songs: &[Song]) -> Option<f64> {
    if songs.is_empty() {
        return None;
    }
    let mean = songs.iter().map(|s| s.rating).sum::<f64>() / songs.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Number of songs per genre, most common first.
///
/// Genres with the same count keep the order in which they first appear.
pub fn genre_distribution(songs: &[Song]) -> Vec<GenreCount> {
    let mut distribution: Vec<GenreCount> = vec![];
    for song in songs.iter() {
        match distribution.iter_mut().find(|g| g.genre == song.genre) {
            Some(entry) => entry.count += 1,
            None => distribution.push(GenreCount {
                genre: song.genre.clone(),
                count: 1,
            }),
        }
    }
    // sort_by_key is stable
    distribution.sort_by_key(|g| Reverse(g.count));
    distribution
}

/// Distinct genres in first-seen order.
pub fn unique_genres(songs: &[Song]) -> Vec<String> {
    let mut genres: Vec<String> = vec![];
    for song in songs.iter() {
        if !genres.contains(&song.genre) {
            genres.push(song.genre.clone());
        }
    }
    genres
}

pub fn favorite_genre(songs: &[Song]) -> Option<String> {
    genre_distribution(songs).into_iter().next().map(|g| g.genre)
}

/// The `n` most played songs. Ties keep their original order.
pub fn top_songs(songs: &[Song], n: usize) -> Vec<&Song> {
    let mut ranked: Vec<&Song> = songs.iter().collect();
    ranked.sort_by_key(|s| Reverse(s.plays));
    ranked.truncate(n);
    ranked
}

pub fn star_rating(rating: f64) -> StarRating {
    let filled = rating.floor().clamp(0.0, MAX_STARS as f64) as u8;
    StarRating {
        filled,
        empty: MAX_STARS - filled,
    }
}

impl LibrarySummary {
    pub fn compute(songs: &[Song], top_n: usize) -> LibrarySummary {
        let genre_distribution = genre_distribution(songs);
        LibrarySummary {
            total_songs: total_songs(songs),
            total_plays: total_plays(songs),
            average_rating: average_rating(songs),
            favorite_genre: genre_distribution.first().map(|g| g.genre.clone()),
            genre_distribution,
            top_songs: top_songs(songs, top_n).into_iter().cloned().collect(),
        }
    }
}
