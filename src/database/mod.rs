pub mod manager;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::PgProjectSource;
