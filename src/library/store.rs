use super::error::{LibraryError, LibraryResult};
use super::models::{Document, Song, SongId, Stats};
use super::validation::{validate_document, ValidationProblem};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Owner of the library document, both in memory and on disk.
///
/// Every read and every write goes through the same mutex, so a mutation and
/// the save that follows it are never interleaved with another request.
#[derive(Debug)]
pub struct DocumentStore {
    file_path: PathBuf,
    document: Mutex<Document>,
}

fn read_document(file_path: &Path) -> LibraryResult<Document> {
    let content = std::fs::read_to_string(file_path).map_err(|source| LibraryError::Io {
        path: file_path.to_owned(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LibraryError::Malformed {
        path: file_path.to_owned(),
        source,
    })
}

/// Writes the whole document next to its destination and renames it into
/// place, readers never observe a half-written file.
fn write_document(file_path: &Path, document: &Document) -> LibraryResult<()> {
    let save_error = |reason: String| LibraryError::Save {
        path: file_path.to_owned(),
        reason,
    };

    let json_string =
        serde_json::to_string_pretty(document).map_err(|err| save_error(err.to_string()))?;

    let dir = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file =
        tempfile::NamedTempFile::new_in(dir).map_err(|err| save_error(err.to_string()))?;
    temp_file
        .write_all(json_string.as_bytes())
        .and_then(|_| temp_file.as_file().sync_all())
        .map_err(|err| save_error(err.to_string()))?;
    temp_file
        .persist(file_path)
        .map_err(|err| save_error(err.error.to_string()))?;
    Ok(())
}

impl DocumentStore {
    /// Loads the document at `file_path`, creating an empty one first if the
    /// file does not exist yet.
    pub fn load<P: AsRef<Path>>(file_path: P) -> LibraryResult<DocumentStore> {
        let file_path = file_path.as_ref().to_owned();

        if !file_path.exists() {
            info!("No library document at {:?}, creating one.", file_path);
            write_document(&file_path, &Document::default())?;
        }

        let document = read_document(&file_path)?;

        let (fatal, non_fatal): (Vec<ValidationProblem>, Vec<ValidationProblem>) =
            validate_document(&document)
                .into_iter()
                .partition(ValidationProblem::is_fatal);
        if !fatal.is_empty() {
            return Err(LibraryError::InvalidDocument(fatal));
        }
        for problem in non_fatal.iter() {
            warn!("Library document {:?}: {}", file_path, problem);
        }

        Ok(DocumentStore {
            file_path,
            document: Mutex::new(document),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    // A panic inside a critical section cannot leave a half-applied mutation
    // behind, the guarded document is always whole.
    fn lock(&self) -> MutexGuard<'_, Document> {
        self.document.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_songs(&self) -> Vec<Song> {
        self.lock().songs.clone()
    }

    pub fn get_song(&self, id: SongId) -> Option<Song> {
        self.lock().find_song(id).cloned()
    }

    pub fn get_stats(&self) -> Stats {
        self.lock().stats.clone()
    }

    pub fn get_songs_count(&self) -> usize {
        self.lock().songs.len()
    }

    pub fn snapshot(&self) -> Document {
        self.lock().clone()
    }

    /// Runs `f` against the current document without copying it.
    pub fn read<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.lock())
    }

    /// Overwrites the file with the in-memory document.
    pub fn save(&self) -> LibraryResult<()> {
        let document = self.lock();
        write_document(&self.file_path, &document)?;
        debug!("Saved library document to {:?}", self.file_path);
        Ok(())
    }

    /// Applies `mutate` and saves the result while holding the lock.
    ///
    /// When the save fails the in-memory change is kept and the error is
    /// returned, the next successful save will persist it.
    pub fn update<R>(&self, mutate: impl FnOnce(&mut Document) -> R) -> LibraryResult<R> {
        let mut document = self.lock();
        let result = mutate(&mut document);
        write_document(&self.file_path, &document)?;
        debug!("Saved library document to {:?}", self.file_path);
        Ok(result)
    }

    /// Like [`DocumentStore::update`], but the document is only written when
    /// `mutate` returns `Some`. `None` means nothing was changed.
    pub fn update_if<R>(
        &self,
        mutate: impl FnOnce(&mut Document) -> Option<R>,
    ) -> LibraryResult<Option<R>> {
        let mut document = self.lock();
        let Some(result) = mutate(&mut document) else {
            return Ok(None);
        };
        write_document(&self.file_path, &document)?;
        debug!("Saved library document to {:?}", self.file_path);
        Ok(Some(result))
    }
}
