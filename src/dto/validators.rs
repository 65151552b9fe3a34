//! Field rules shared by the user request schemas.

use chrono::{Months, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

pub const MIN_USER_AGE_YEARS: u32 = 18;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+7 \([0-9]{3}\) [0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("valid phone regex")
});

static CREDENTIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{8,16}$").expect("valid credential regex"));

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Phone numbers are stored in the display form `+7 (XXX) XXX-XX-XX`.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(invalid(
            "pattern",
            "Phone must match the pattern +7 (XXX) XXX-XX-XX.",
        ))
    }
}

pub fn validate_login(login: &str) -> Result<(), ValidationError> {
    if CREDENTIAL_RE.is_match(login) {
        Ok(())
    } else {
        Err(invalid(
            "pattern",
            "Login must be 8 to 16 characters of latin letters, digits, '-' or '_'.",
        ))
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if CREDENTIAL_RE.is_match(password) {
        Ok(())
    } else {
        Err(invalid(
            "pattern",
            "Password must be 8 to 16 characters of latin letters, digits, '-' or '_'.",
        ))
    }
}

pub fn validate_birthday(birthday: &NaiveDate) -> Result<(), ValidationError> {
    if is_adult_on(*birthday, Utc::now().date_naive()) {
        Ok(())
    } else {
        Err(invalid("age", "User must be at least 18 years old."))
    }
}

/// Someone born on Feb 29 turns 18 on Mar 1 when the 18th year is not a leap year.
pub fn is_adult_on(birthday: NaiveDate, today: NaiveDate) -> bool {
    match today.checked_sub_months(Months::new(MIN_USER_AGE_YEARS * 12)) {
        Some(cutoff) => birthday <= cutoff,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn phone_pattern() {
        assert!(validate_phone("+7 (950) 732-13-83").is_ok());
        assert!(validate_phone("+7 950 732-13-83").is_err());
        assert!(validate_phone("+8 (950) 732-13-83").is_err());
        assert!(validate_phone("+7 (950) 732-13-833").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn login_pattern_bounds() {
        assert!(validate_login("zz_filin_zz").is_ok());
        assert!(validate_login("abcdefgh").is_ok());
        assert!(validate_login("abcdefg").is_err());
        assert!(validate_login("abcdefghijklmnopq").is_err());
        assert!(validate_login("with space1").is_err());
        assert!(validate_login("кириллица1").is_err());
    }

    #[test]
    fn password_pattern() {
        assert!(validate_password("2a_B4-cJ_q5").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("has$symbol99").is_err());
    }

    #[test]
    fn eighteenth_birthday_is_accepted() {
        let today = date(2024, 6, 15);
        assert!(is_adult_on(date(2006, 6, 15), today));
        assert!(!is_adult_on(date(2006, 6, 16), today));
        assert!(is_adult_on(date(1984, 9, 5), today));
    }

    #[test]
    fn leap_day_birthdays() {
        assert!(is_adult_on(date(2004, 2, 29), date(2022, 3, 1)));
        assert!(!is_adult_on(date(2004, 2, 29), date(2022, 2, 28)));
    }

    #[test]
    fn minor_gets_age_error() {
        let err = validate_birthday(&Utc::now().date_naive()).unwrap_err();
        assert_eq!(err.code, "age");
    }
}
