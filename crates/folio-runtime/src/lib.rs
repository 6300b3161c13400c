pub mod config;
pub mod error;
pub mod gate;
pub mod interchange;

pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use gate::{LoginError, PasswordCriterion, SessionGate, check_credentials, validate_password};
pub use interchange::{export_portfolio, import_portfolio};
