use std::collections::BTreeMap;

use email_address::{EmailAddress, Options};

use crate::model::{Field, SignupValues, UserType};

pub const MIN_PASSWORD_LEN: usize = 6;

/// First failing rule per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, rule: Result<(), &'static str>) {
        if let Err(message) = rule {
            self.0.insert(field, message);
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::parse_with_options(email, Options::default().with_required_tld()).is_ok()
}

fn required(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

fn check_user_type(value: &str) -> Result<(), &'static str> {
    value
        .parse::<UserType>()
        .map(|_| ())
        .map_err(|_| "User type is required")
}

fn check_email(value: &str) -> Result<(), &'static str> {
    required(value, "Email is required")?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err("Invalid email")
    }
}

fn check_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Password is required");
    }
    // UTF-16 code units, the unit browsers report for input length.
    if value.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err("At least 6 characters");
    }
    Ok(())
}

fn check_confirm_password(value: &str, password: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Please confirm your password");
    }
    if value != password {
        return Err("Passwords must match");
    }
    Ok(())
}

/// Checks one field against the whole record, since `confirm_password`
/// depends on `password`.
pub fn validate_field(values: &SignupValues, field: Field) -> Result<(), &'static str> {
    match field {
        Field::UserType => check_user_type(&values.user_type),
        Field::FirstName => required(&values.first_name, "First name is required"),
        Field::LastName => required(&values.last_name, "Last name is required"),
        Field::Username => required(&values.username, "Username is required"),
        Field::Email => check_email(&values.email),
        Field::Password => check_password(&values.password),
        Field::ConfirmPassword => check_confirm_password(&values.confirm_password, &values.password),
        Field::Country => required(&values.country, "Country is required"),
    }
}

pub fn validate(values: &SignupValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        errors.insert(field, validate_field(values, field));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_grammar() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("john.example.com"));
        assert!(!is_valid_email("john@localhost"));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&SignupValues::default());
        // user_type defaults to researcher
        assert_eq!(errors.get(Field::UserType), None);
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Please confirm your password"));
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn required_text_is_taken_as_typed() {
        let values = SignupValues { first_name: "  ".into(), ..SignupValues::default() };
        assert_eq!(validate_field(&values, Field::FirstName), Ok(()));

        let values = SignupValues { first_name: String::new(), ..SignupValues::default() };
        assert_eq!(validate_field(&values, Field::FirstName), Err("First name is required"));
    }

    #[test]
    fn padded_email_is_invalid() {
        let values = SignupValues { email: "ada@example.com ".into(), ..SignupValues::default() };
        assert_eq!(validate_field(&values, Field::Email), Err("Invalid email"));
    }

    #[test]
    fn password_length_counts_utf16_units() {
        let values = SignupValues { password: "ñandúé".into(), ..SignupValues::default() };
        assert_eq!(validate_field(&values, Field::Password), Ok(()));

        // each emoji is a surrogate pair
        let values = SignupValues { password: "🔑🔑🔑".into(), ..SignupValues::default() };
        assert_eq!(validate_field(&values, Field::Password), Ok(()));

        let values = SignupValues { password: "🔑🔑".into(), ..SignupValues::default() };
        assert_eq!(validate_field(&values, Field::Password), Err("At least 6 characters"));
    }
}
