pub mod storage;
pub mod task;
pub mod timetable;
pub mod user;

pub use storage::file::{FileStore, write_to_file};
pub use storage::format::{TimetableDecoder, decode_timetable, encode_timetable};
pub use storage::{FolderStatus, StorageError, StorageResult};
pub use task::{Day, Task};
pub use timetable::Timetable;
pub use user::{User, UserList};
