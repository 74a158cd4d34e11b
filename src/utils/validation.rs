use crate::utils::error::{HomecareError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// 印度手機號碼：可選的 +91 / 091 / 91 / 0 前綴，接著 6-9 開頭的 10 位數字
static INDIAN_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:\+|0{0,2})91[\s-]?|0?)?[6-9][0-9]{9}$").expect("valid phone pattern")
});

// 與瀏覽器 <input type="email"> 相同的規則
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email pattern")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns true iff `phone` is an Indian mobile number. The value is not
/// normalized; separators are only tolerated where the pattern allows them.
pub fn is_valid_indian_phone(phone: &str) -> bool {
    INDIAN_PHONE_RE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_phone(value: &str) -> Result<()> {
    if is_valid_indian_phone(value) {
        Ok(())
    } else {
        Err(HomecareError::InvalidPhone {
            value: value.to_string(),
        })
    }
}

pub fn validate_email(value: &str) -> Result<()> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(HomecareError::InvalidEmail {
            value: value.to_string(),
        })
    }
}

/// Same rule as a `required` input: any non-empty value passes.
pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(HomecareError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HomecareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HomecareError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HomecareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HomecareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HomecareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_ten_digit_mobiles() {
        for phone in ["9876543210", "6295328031", "7000000000", "8123456789"] {
            assert!(is_valid_indian_phone(phone), "{phone} should be valid");
        }
    }

    #[test]
    fn test_accepts_country_code_prefixes() {
        for phone in [
            "+919876543210",
            "+91 9876543210",
            "+91-9876543210",
            "919876543210",
            "91 9876543210",
            "0919876543210",
            "00919876543210",
            "09876543210",
        ] {
            assert!(is_valid_indian_phone(phone), "{phone} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        for phone in [
            "",
            "5876543210",
            "987654321",
            "98765432101",
            "+1 9876543210",
            "+91  9876543210",
            "98765 43210",
            "abcdefghij",
            " 9876543210",
            "9876543210 ",
            "000919876543210",
        ] {
            assert!(!is_valid_indian_phone(phone), "{phone:?} should be invalid");
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // 阿拉伯-印度數字不算
        assert!(!is_valid_indian_phone("٩٨٧٦٥٤٣٢١٠"));
        assert!(!is_valid_indian_phone("९८७६५४३२१०"));
    }

    #[test]
    fn test_validate_phone_reports_value() {
        let err = validate_phone("12345").unwrap_err();
        assert!(matches!(err, HomecareError::InvalidPhone { ref value } if value == "12345"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("seecurehomehealthcare@gmail.com"));
        assert!(is_valid_email("john@example"));
        assert!(!is_valid_email("john.example.com"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("message", "Need a nurse").is_ok());
        assert!(validate_required("message", "").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("submission.endpoint", "https://formspree.io/f/meokkgzb").is_ok());
        assert!(validate_url("submission.endpoint", "http://localhost:8080").is_ok());
        assert!(validate_url("submission.endpoint", "").is_err());
        assert!(validate_url("submission.endpoint", "invalid-url").is_err());
        assert!(validate_url("submission.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("request_timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("request_timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("reset_delay_ms", 5000, 1, 60_000).is_ok());
        assert!(validate_range("reset_delay_ms", 0, 1, 60_000).is_err());
    }
}
