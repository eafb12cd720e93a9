mod clean_text;
mod detail_page;
mod directory_page;
mod error;
mod static_selector;
mod text_content;

pub use clean_text::{remove_double_spaces, strip_layout_whitespace};
pub use detail_page::FoundationDetails;
pub use directory_page::{Directory, DirectoryEntry};
pub use error::Error;
pub use text_content::text_content;
