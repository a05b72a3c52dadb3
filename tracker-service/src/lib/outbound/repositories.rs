pub mod action;
pub mod project;
pub mod user;

pub use action::SqliteActionRepository;
pub use project::SqliteProjectRepository;
pub use user::SqliteUserRepository;
