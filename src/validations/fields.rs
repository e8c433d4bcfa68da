// An extension trait to provide the `graphemes` method on `String` and `&str`
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(s: String) -> std::result::Result<PersonName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 256;
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|c| forbidden_characters.contains(&c));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid name.", s))
        } else {
            Ok(Self(s))
        }
    }
}
impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use regex::Regex;

#[derive(Debug)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub fn parse(s: String) -> std::result::Result<MobileNumber, String> {
        let mobile_regex = Regex::new(r"^\d{10}$").unwrap();
        if mobile_regex.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid 10 digit mobile number.", s))
        }
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn parse(s: String, field: &str) -> std::result::Result<RequiredText, String> {
        if s.trim().is_empty() {
            Err(format!("{} must not be empty.", field))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
