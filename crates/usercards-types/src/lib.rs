pub mod directory;
pub mod error;
pub mod record;

pub use directory::Directory;
pub use error::{Error, Result};
pub use record::UserRecord;
