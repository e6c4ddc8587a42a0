pub mod credentials;
pub mod uploads;
pub mod visitors;

pub use credentials::CredentialFile;
pub use visitors::VisitorCounter;
