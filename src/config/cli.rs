use crate::config::toml_config::TomlConfig;
use crate::domain::model::{FormField, FormVariant};
use crate::utils::error::{HomecareError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "seecure-homecare")]
#[command(about = "SeeCure Home Healthcare: service catalog and contact form")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Override the submission endpoint URL")]
    pub endpoint: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub request_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every service category with its sub-services
    Services {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    /// Show one service category
    Service {
        id: String,
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    /// Show one sub-service of a category
    SubService { category: String, id: String },
    /// List the areas we serve
    Areas,
    /// Show phone numbers, email and hours
    Contact,
    /// Check whether a phone number is accepted by the contact form
    CheckPhone { number: String },
    /// Send the contact form
    Submit(SubmitArgs),
}

#[derive(Debug, Clone, Args)]
pub struct SubmitArgs {
    #[arg(long, conflicts_with_all = ["first_name", "last_name"])]
    pub name: Option<String>,

    #[arg(long, requires = "last_name")]
    pub first_name: Option<String>,

    #[arg(long, requires = "first_name")]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long, help = "Sub-service id, or 'other'")]
    pub service: String,

    #[arg(long, help = "Service area, or 'other'")]
    pub area: String,

    #[arg(long)]
    pub message: String,
}

impl SubmitArgs {
    /// First/last name selects the contact-page form; otherwise the home-page form.
    pub fn variant(&self) -> FormVariant {
        if self.first_name.is_some() || self.last_name.is_some() {
            FormVariant::SplitName
        } else {
            FormVariant::SingleName
        }
    }

    /// Field values in the order a user would fill them in.
    pub fn field_values(&self) -> Vec<(FormField, String)> {
        let mut values = match self.variant() {
            FormVariant::SingleName => vec![(FormField::Name, self.name.clone().unwrap_or_default())],
            FormVariant::SplitName => vec![
                (FormField::FirstName, self.first_name.clone().unwrap_or_default()),
                (FormField::LastName, self.last_name.clone().unwrap_or_default()),
            ],
        };

        values.extend([
            (FormField::Email, self.email.clone()),
            (FormField::Phone, self.phone.clone()),
            (FormField::Service, self.service.clone()),
            (FormField::ServiceArea, self.area.clone()),
            (FormField::Message, self.message.clone()),
        ]);
        values
    }
}

impl CliConfig {
    /// File settings (or defaults) with command-line overrides applied.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut resolved = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            resolved.submission.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.request_timeout {
            resolved.submission.request_timeout_seconds = timeout;
        }
        resolved.logging.verbose |= self.verbose;
        resolved.logging.json |= self.log_json;

        resolved.validate()?;
        Ok(resolved)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url("endpoint", endpoint)?;
        }
        if let Some(timeout) = self.request_timeout {
            validate_positive_number("request_timeout", timeout, 1)?;
        }
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(HomecareError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                });
            }
        }
        Ok(())
    }
}
