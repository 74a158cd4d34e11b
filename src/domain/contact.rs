use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ContactDetails {
    pub phone_numbers: &'static [&'static str],
    pub email: &'static str,
    pub whatsapp_url: &'static str,
    pub regular_hours: &'static str,
    pub emergency_hours: &'static str,
}

pub const CONTACT_DETAILS: ContactDetails = ContactDetails {
    phone_numbers: &["9593388865", "6295328031"],
    email: "seecurehomehealthcare@gmail.com",
    whatsapp_url: "https://wa.me/9593388865",
    regular_hours: "8:00 AM - 8:00 PM",
    emergency_hours: "24/7",
};

impl ContactDetails {
    /// Number to call for urgent needs.
    pub fn emergency_number(&self) -> &'static str {
        self.phone_numbers[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::is_valid_indian_phone;

    #[test]
    fn test_published_numbers_pass_validator() {
        for number in CONTACT_DETAILS.phone_numbers {
            assert!(is_valid_indian_phone(number));
        }
        assert_eq!(CONTACT_DETAILS.emergency_number(), "9593388865");
    }
}
