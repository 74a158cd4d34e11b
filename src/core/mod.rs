pub mod submission;

pub use crate::domain::model::{
    ContactSubmission, FormField, FormFields, FormVariant, SubmissionStatus,
};
pub use crate::domain::ports::{ConfigProvider, Submitter};
pub use crate::utils::error::Result;
pub use submission::{ContactForm, PHONE_LIVE_MESSAGE};
