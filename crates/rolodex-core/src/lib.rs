pub mod directory;
pub mod domain;
pub mod dto;
pub mod error;
pub mod search;
pub mod seed;
pub mod time;

pub use directory::{ContactField, Directory, EditBuffer, UploadTicket};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use search::{search, SearchQuery};
