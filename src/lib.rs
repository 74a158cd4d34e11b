pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command, SubmitArgs};

pub use adapters::HttpSubmitter;
pub use config::TomlConfig;
pub use crate::core::{
    ContactForm, ContactSubmission, FormField, FormFields, FormVariant, SubmissionStatus,
};
pub use domain::catalog::{get_all_services, get_service_by_id, get_sub_service_by_id};
pub use utils::error::{HomecareError, Result};
pub use utils::validation::is_valid_indian_phone;
