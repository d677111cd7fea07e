//! Validated types used by the `web` module, their parsing implementations
//! and the tests for those.

use lazy_regex::regex_is_match;
use unicode_segmentation::UnicodeSegmentation;

// ###################################
// ->   STRUCTS
// ###################################
/// Validated email address.
/// Accepts only `local@domain.tld` shapes: no whitespace anywhere, an `@`,
/// and a dot somewhere in the domain part.
#[derive(Debug, Clone)]
pub struct ValidEmail(String);

impl AsRef<str> for ValidEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ValidEmail {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.graphemes(true).count() > 256 {
            return Err(DataParsingError::EmailTooLong);
        }

        if regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", value) {
            Ok(ValidEmail(value.to_owned()))
        } else {
            Err(DataParsingError::EmailInvalid)
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, thiserror::Error)]
pub enum DataParsingError {
    #[error("email invalid")]
    EmailInvalid,
    #[error("email too long")]
    EmailTooLong,
}
