//! Validated value types shared across the clinic workspace.
//!
//! Entities never carry raw strings where a blank or malformed value would
//! make queries meaningless. Construction is the single validation point:
//! once a value exists, every consumer may rely on its guarantees.

/// Errors that can occur when constructing validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input was empty or contained only whitespace.
    #[error("text cannot be empty")]
    Empty,
    /// The input exceeded the maximum length for the type.
    #[error("text exceeds maximum length of {0} characters")]
    TooLong(usize),
    /// The input contained a character outside the allowed set.
    #[error("text contains characters outside the allowed set (ASCII letters and digits)")]
    InvalidCharacter,
}

/// A string type that guarantees non-empty content.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Leading and trailing whitespace is trimmed during construction.
/// Used for display strings such as full names, specializations, and status
/// labels where an empty value is never meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of surrounding whitespace. Returns
    /// `Err(TextError::Empty)` if nothing remains after trimming.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A passport number: the opaque, unique key carried by every person record.
///
/// The value is never interpreted, only compared, so validation is limited to
/// guardrails: trimmed, non-empty, bounded in length, and restricted to ASCII
/// letters and digits so the value is safe to embed in logs and reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PassportNumber(String);

impl PassportNumber {
    /// Maximum accepted length; longer inputs are pathological, not passports.
    pub const MAX_LEN: usize = 20;

    /// Creates a new `PassportNumber` from the given input.
    ///
    /// Returns `TextError::Empty` for blank input, `TextError::TooLong` when
    /// the trimmed input exceeds [`PassportNumber::MAX_LEN`], and
    /// `TextError::InvalidCharacter` for anything outside ASCII alphanumerics.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.len() > Self::MAX_LEN {
            return Err(TextError::TooLong(Self::MAX_LEN));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(TextError::InvalidCharacter);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PassportNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PassportNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PassportNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PassportNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PassportNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_trims_and_accepts() {
        let text = NonEmptyText::new("  Ada Lovelace  ").expect("should accept non-empty input");
        assert_eq!(text.as_str(), "Ada Lovelace");
    }

    #[test]
    fn test_non_empty_text_rejects_whitespace_only() {
        let err = NonEmptyText::new("   ").expect_err("whitespace-only input should fail");
        assert!(matches!(err, TextError::Empty));
    }

    #[test]
    fn test_passport_number_accepts_alphanumeric() {
        let passport = PassportNumber::new("AB1234567").expect("should accept alphanumeric input");
        assert_eq!(passport.as_str(), "AB1234567");
    }

    #[test]
    fn test_passport_number_rejects_bad_input() {
        assert!(matches!(
            PassportNumber::new("").expect_err("empty input should fail"),
            TextError::Empty
        ));
        assert!(matches!(
            PassportNumber::new("AB 123").expect_err("embedded space should fail"),
            TextError::InvalidCharacter
        ));
        assert!(matches!(
            PassportNumber::new("X".repeat(21)).expect_err("over-long input should fail"),
            TextError::TooLong(PassportNumber::MAX_LEN)
        ));
    }
}
