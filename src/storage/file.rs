use super::format::{TimetableDecoder, encode_timetable};
use super::{FolderStatus, StorageError, StorageResult};
use crate::user::User;
use log::{info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const FILE_EXTENSION: &str = "txt";

/// Per-user timetable files in one flat data folder.
///
/// The folder is fixed at construction; there is no process-wide path state.
/// All I/O is synchronous and blocking, and `save` offers no atomicity: the
/// header write truncates the file and every following line is appended.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn user_file_path(&self, username: &str) -> PathBuf {
        self.data_dir.join(format!("{username}.{FILE_EXTENSION}"))
    }

    /// Creates the data folder if absent. Idempotent; failure is reported
    /// through the returned status, never as an error.
    pub fn ensure_data_dir(&self) -> FolderStatus {
        if self.data_dir.exists() {
            return FolderStatus::AlreadyExists;
        }
        match fs::create_dir_all(&self.data_dir) {
            Ok(()) => {
                info!("created data folder {}", self.data_dir.display());
                FolderStatus::Created
            }
            Err(err) => {
                warn!(
                    "failed to create data folder {}: {err}",
                    self.data_dir.display()
                );
                FolderStatus::Failed
            }
        }
    }

    /// Lists the data folder and rebuilds one user per stored file, deriving
    /// each username from the filename up to the first '.'. An unlistable or
    /// missing folder means no data; files that cannot be read or parsed are
    /// skipped with a warning.
    pub fn discover_users(&self) -> Vec<User> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(err) => {
                info!("no data found in {}: {err}", self.data_dir.display());
                return Vec::new();
            }
        };

        let mut users = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("unreadable directory entry: {err}");
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            let Some((username, _)) = file_name.split_once('.') else {
                warn!("skipping {file_name}: no file extension");
                continue;
            };
            if username.is_empty() {
                warn!("skipping {file_name}: empty username");
                continue;
            }
            let mut user = User::new(username);
            match self.load(&mut user) {
                Ok(()) => users.push(user),
                Err(err) => warn!("failed to load timetable for '{username}': {err}"),
            }
        }
        users
    }

    /// Reads the user's file line by line, feeding each line to the decoder
    /// and appending the recovered tasks to the user's timetable. A missing
    /// file is `NotFound`.
    pub fn load(&self, user: &mut User) -> StorageResult<()> {
        let path = self.user_file_path(user.name());
        let file = File::open(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(path.clone()),
            _ => StorageError::Io(err),
        })?;

        let mut decoder = TimetableDecoder::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            decoder.feed(&line, user.timetable_mut())?;
        }
        Ok(())
    }

    /// Creates an empty file for a new user. A file that already exists is
    /// reported and left untouched.
    pub fn create_user_file(&self, user: &User) -> StorageResult<()> {
        let path = self.user_file_path(user.name());
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                info!("file created: {}", path.display());
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                info!("file {} already exists", path.display());
                Ok(())
            }
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    /// Renders the user's full timetable and writes it to the user's file,
    /// replacing any previous content. The first line truncates, each
    /// subsequent line appends; a crash mid-save leaves a partial file.
    pub fn save(&self, user: &User) -> StorageResult<()> {
        let path = self.user_file_path(user.name());
        let lines = encode_timetable(user.name(), user.timetable());
        for (idx, line) in lines.iter().enumerate() {
            write_to_file(&path, &format!("{line}\n"), idx > 0)?;
        }
        info!("timetable has been written to {}", path.display());
        Ok(())
    }
}

/// Writes `text` to `path`, either appending or truncating first.
pub fn write_to_file(path: &Path, text: &str, append: bool) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    file.write_all(text.as_bytes())
}
