use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Researcher,
    Investor,
    InstitutionStaff,
    ServiceProvider,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Researcher,
        UserType::Investor,
        UserType::InstitutionStaff,
        UserType::ServiceProvider,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Researcher => "researcher",
            UserType::Investor => "investor",
            UserType::InstitutionStaff => "institution_staff",
            UserType::ServiceProvider => "service_provider",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::Researcher => "Researcher",
            UserType::Investor => "Investor",
            UserType::InstitutionStaff => "Institution Staff",
            UserType::ServiceProvider => "Service Provider",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUserType(pub String);

impl fmt::Display for UnknownUserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown user type: {:?}", self.0)
    }
}

impl std::error::Error for UnknownUserType {}

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|user_type| user_type.as_str() == s)
            .ok_or_else(|| UnknownUserType(s.to_string()))
    }
}

/// Everything the sign-up form holds. `user_type` stays a raw string because
/// it comes straight from a `<select>` and is checked by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupValues {
    pub user_type: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub country: String,
}

impl Default for SignupValues {
    fn default() -> Self {
        Self {
            user_type: UserType::default().as_str().to_string(),
            first_name: String::new(),
            last_name: String::new(),
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            country: String::new(),
        }
    }
}

impl SignupValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::UserType => &self.user_type,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Country => &self.country,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::UserType => &mut self.user_type,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::Country => &mut self.country,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    UserType,
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    Country,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::UserType,
        Field::FirstName,
        Field::LastName,
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Country,
    ];

    /// Form/wire name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::UserType => "user_type",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::Country => "country",
        }
    }
}

/// Body posted to `/signup/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPayload {
    pub user_type: UserType,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl SignupPayload {
    /// Builds the payload from already validated values. Returns `None` when
    /// the user type does not parse, which validation rules out.
    pub fn from_values(values: &SignupValues, send_confirm_password: bool) -> Option<Self> {
        let user_type = values.user_type.parse().ok()?;
        Some(Self {
            user_type,
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            username: values.username.clone(),
            email: values.email.clone(),
            password: values.password.clone(),
            country: values.country.clone(),
            confirm_password: send_confirm_password.then(|| values.confirm_password.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: u64,
    pub full_name: String,
    #[serde(default)]
    pub official_name: String,
    #[serde(default)]
    pub cca2: String,
    #[serde(default)]
    pub ccn3: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub cioc: String,
    #[serde(default)]
    pub flag_shape: String,
}

impl Country {
    /// Text of the selector entry, flag first.
    pub fn display_name(&self) -> String {
        if self.flag_shape.is_empty() {
            self.full_name.clone()
        } else {
            format!("{} {}", self.flag_shape, self.full_name)
        }
    }
}

/// Paginated envelope returned by `/countries/`. Only `results` is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountriesPage {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Country>,
}
