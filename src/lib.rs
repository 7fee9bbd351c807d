pub mod api;
pub mod content;
pub mod errors;
pub mod manifest;
pub mod scaffold;
pub mod vfs;

pub use api::{create_structure, NoteCamError};
pub use scaffold::ScaffoldReport;
