//! The music library document and everything that reads or changes it.

pub mod aggregator;
mod error;
mod models;
pub mod playback;
pub mod seed;
mod store;
pub mod validation;

pub use aggregator::{GenreCount, LibrarySummary, StarRating};
pub use error::{LibraryError, LibraryResult};
pub use models::{Document, Song, SongId, Stats, DEFAULT_FAVORITE_GENRE};
pub use playback::{record_play, PlayOutcome};
pub use seed::seed_if_empty;
pub use store::DocumentStore;
pub use validation::ValidationProblem;
