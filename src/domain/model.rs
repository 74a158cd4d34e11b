use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON body posted to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub service_area: String,
    pub message: String,
}

/// Which name inputs a contact form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormVariant {
    /// 首頁聯絡區塊：單一全名欄位
    #[default]
    SingleName,
    /// 聯絡頁：名、姓分開
    SplitName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    ServiceArea,
    Message,
}

impl FormField {
    /// The input name used by the form and in the JSON payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::ServiceArea => "serviceArea",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormVariant {
    /// Fields the variant collects, in display order. All of them are required.
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::SingleName => &[
                FormField::Name,
                FormField::Phone,
                FormField::Email,
                FormField::Service,
                FormField::ServiceArea,
                FormField::Message,
            ],
            Self::SplitName => &[
                FormField::FirstName,
                FormField::LastName,
                FormField::Email,
                FormField::Phone,
                FormField::Service,
                FormField::ServiceArea,
                FormField::Message,
            ],
        }
    }

    pub fn collects(&self, field: FormField) -> bool {
        self.fields().contains(&field)
    }
}

/// Raw input values of one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub service_area: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::ServiceArea => &self.service_area,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Service => &mut self.service,
            FormField::ServiceArea => &mut self.service_area,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the fields into the payload sent to the endpoint.
    pub fn to_submission(&self, variant: FormVariant) -> ContactSubmission {
        let (name, first_name, last_name) = match variant {
            FormVariant::SingleName => (self.name.clone(), None, None),
            FormVariant::SplitName => (
                format!("{} {}", self.first_name, self.last_name)
                    .trim()
                    .to_string(),
                Some(self.first_name.clone()),
                Some(self.last_name.clone()),
            ),
        };

        ContactSubmission {
            name,
            first_name,
            last_name,
            email: self.email.clone(),
            phone: self.phone.clone(),
            service: self.service.clone(),
            service_area: self.service_area.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Banner shown while the status is displayed, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(
                "Thank you! Your message has been sent successfully. We'll get back to you soon.",
            ),
            Self::Error => Some(crate::utils::error::SUBMISSION_FAILED_BANNER),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}
