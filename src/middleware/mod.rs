pub mod auth;
pub mod flash;
pub mod visitors;

pub use auth::AdminSession;
