pub mod config;
pub mod context;
pub mod error;
pub mod types;

pub use context::SuiteContext;
pub use error::VerifyError;
