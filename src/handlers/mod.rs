pub mod projects;
pub mod status;
pub mod whoami;

pub use projects::projects_get;
pub use status::{health, root};
pub use whoami::whoami_get;
