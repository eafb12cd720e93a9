mod directory;
mod directory_entry;

pub use directory::Directory;
pub use directory_entry::DirectoryEntry;
