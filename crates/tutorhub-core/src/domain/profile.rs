use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::sanitize;
use super::truncate_to_micros;
use crate::error::ValidationError;

/// Marketplace participant kind, stored as a small integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileType {
    Student = 0,
    Tutor = 1,
}

impl ProfileType {
    /// Fallible conversion from the stored integer. Anything outside
    /// {0, 1} is rejected.
    pub fn from_i16(value: i16) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(Self::Student),
            1 => Ok(Self::Tutor),
            _ => Err(ValidationError::OutOfRange {
                field: "profile type",
            }),
        }
    }

    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

/// Raw, unvalidated input for constructing a [`Profile`].
///
/// `last_edit_at: None` means "now"; `id: None` means the profile has not
/// been persisted yet.
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub profile_type: i16,
    pub github_token: String,
    pub bio: String,
    pub rate: Decimal,
    pub image: String,
    pub last_edit_at: Option<DateTime<Utc>>,
    pub activation_token: Option<String>,
    pub password_hash: String,
    pub password_salt: String,
}

/// Profile entity - one marketplace participant (student or tutor).
///
/// All fields are private; construction and every mutation run the same
/// per-field validation, so a `Profile` value is always well-formed.
/// `id` is `Some` exactly when the entity has been persisted, and
/// `activation_token` is `Some` exactly while the account is pending
/// email confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    id: Option<i64>,
    name: String,
    email: String,
    profile_type: ProfileType,
    github_token: String,
    bio: String,
    rate: Decimal,
    image: String,
    last_edit_at: DateTime<Utc>,
    activation_token: Option<String>,
    password_hash: String,
    password_salt: String,
}

pub const NAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 128;
pub const BIO_MAX: usize = 500;
pub const GITHUB_TOKEN_LEN: usize = 64;
pub const IMAGE_LEN: usize = 32;
pub const ACTIVATION_TOKEN_LEN: usize = 32;
pub const PASSWORD_HASH_LEN: usize = 128;
pub const PASSWORD_SALT_LEN: usize = 64;

impl Profile {
    /// Validate every field and build the entity. Atomic: the first
    /// failing field aborts construction with its error.
    pub fn new(input: ProfileInput) -> Result<Self, ValidationError> {
        Ok(Self {
            id: check_id(input.id, "profile id")?,
            name: check_name(&input.name)?,
            email: check_email(&input.email)?,
            profile_type: ProfileType::from_i16(input.profile_type)?,
            github_token: check_github_token(&input.github_token)?,
            bio: check_bio(&input.bio)?,
            rate: check_rate(input.rate)?,
            image: check_image(&input.image)?,
            last_edit_at: truncate_to_micros(input.last_edit_at.unwrap_or_else(Utc::now)),
            activation_token: check_activation_token(input.activation_token.as_deref())?,
            password_hash: check_password_hash(&input.password_hash)?,
            password_salt: check_password_salt(&input.password_salt)?,
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn profile_type(&self) -> ProfileType {
        self.profile_type
    }

    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn last_edit_at(&self) -> DateTime<Utc> {
        self.last_edit_at
    }

    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn password_salt(&self) -> &str {
        &self.password_salt
    }

    /// Set or clear the store-assigned id. Repositories call this after
    /// a successful insert.
    pub fn set_id(&mut self, id: Option<i64>) -> Result<(), ValidationError> {
        self.id = check_id(id, "profile id")?;
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = check_name(name)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = check_email(email)?;
        Ok(())
    }

    pub fn set_profile_type(&mut self, profile_type: i16) -> Result<(), ValidationError> {
        self.profile_type = ProfileType::from_i16(profile_type)?;
        Ok(())
    }

    pub fn set_github_token(&mut self, token: &str) -> Result<(), ValidationError> {
        self.github_token = check_github_token(token)?;
        Ok(())
    }

    pub fn set_bio(&mut self, bio: &str) -> Result<(), ValidationError> {
        self.bio = check_bio(bio)?;
        Ok(())
    }

    pub fn set_rate(&mut self, rate: Decimal) -> Result<(), ValidationError> {
        self.rate = check_rate(rate)?;
        Ok(())
    }

    pub fn set_image(&mut self, image: &str) -> Result<(), ValidationError> {
        self.image = check_image(image)?;
        Ok(())
    }

    pub fn set_activation_token(&mut self, token: Option<&str>) -> Result<(), ValidationError> {
        self.activation_token = check_activation_token(token)?;
        Ok(())
    }

    /// Mark the account as activated.
    pub fn activate(&mut self) {
        self.activation_token = None;
    }

    /// Stamp the entity with the current time.
    pub fn touch(&mut self) {
        self.last_edit_at = truncate_to_micros(Utc::now());
    }
}

pub(super) fn check_id(id: Option<i64>, field: &'static str) -> Result<Option<i64>, ValidationError> {
    match id {
        None => Ok(None),
        Some(id) if id > 0 => Ok(Some(id)),
        Some(_) => Err(ValidationError::OutOfRange { field }),
    }
}

fn check_name(raw: &str) -> Result<String, ValidationError> {
    let name = sanitize::clean_text(raw);
    if name.is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    if name.chars().count() > NAME_MAX {
        return Err(ValidationError::TooLong {
            field: "name",
            max: NAME_MAX,
        });
    }
    Ok(name)
}

fn check_email(raw: &str) -> Result<String, ValidationError> {
    let email = sanitize::clean_email(raw);
    if email.is_empty() {
        return Err(ValidationError::Empty { field: "email" });
    }
    if email.chars().count() > EMAIL_MAX {
        return Err(ValidationError::TooLong {
            field: "email",
            max: EMAIL_MAX,
        });
    }
    Ok(email)
}

fn check_github_token(raw: &str) -> Result<String, ValidationError> {
    let token = sanitize::clean_text(raw);
    if token.is_empty() {
        return Err(ValidationError::Empty {
            field: "github token",
        });
    }
    if token.chars().count() != GITHUB_TOKEN_LEN {
        return Err(ValidationError::WrongLength {
            field: "github token",
            expected: GITHUB_TOKEN_LEN,
        });
    }
    Ok(token)
}

fn check_bio(raw: &str) -> Result<String, ValidationError> {
    let bio = sanitize::clean_text(raw);
    if bio.is_empty() {
        return Err(ValidationError::Empty { field: "bio" });
    }
    if bio.chars().count() > BIO_MAX {
        return Err(ValidationError::TooLong {
            field: "bio",
            max: BIO_MAX,
        });
    }
    Ok(bio)
}

fn check_rate(rate: Decimal) -> Result<Decimal, ValidationError> {
    // Positive and within the DECIMAL(5,2) column. Midpoints round away
    // from zero, so 25.005 stores as 25.01.
    if rate <= Decimal::ZERO || rate > Decimal::new(99_999, 2) {
        return Err(ValidationError::OutOfRange { field: "rate" });
    }
    Ok(rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn check_image(raw: &str) -> Result<String, ValidationError> {
    let image = sanitize::clean_text(raw);
    if image.is_empty() {
        return Err(ValidationError::Empty { field: "image" });
    }
    if image.chars().count() != IMAGE_LEN {
        return Err(ValidationError::WrongLength {
            field: "image",
            expected: IMAGE_LEN,
        });
    }
    Ok(image)
}

fn check_activation_token(raw: Option<&str>) -> Result<Option<String>, ValidationError> {
    // None short-circuits: an activated account carries no token.
    let Some(raw) = raw else { return Ok(None) };
    let token = sanitize::clean_hex(raw);
    if !sanitize::is_hex(&token) {
        return Err(ValidationError::NotHex {
            field: "activation token",
        });
    }
    if token.len() != ACTIVATION_TOKEN_LEN {
        return Err(ValidationError::WrongLength {
            field: "activation token",
            expected: ACTIVATION_TOKEN_LEN,
        });
    }
    Ok(Some(token))
}

fn check_password_hash(raw: &str) -> Result<String, ValidationError> {
    let hash = sanitize::clean_hex(raw);
    if hash.is_empty() {
        return Err(ValidationError::Empty {
            field: "password hash",
        });
    }
    if !sanitize::is_hex(&hash) {
        return Err(ValidationError::NotHex {
            field: "password hash",
        });
    }
    if hash.len() != PASSWORD_HASH_LEN {
        return Err(ValidationError::WrongLength {
            field: "password hash",
            expected: PASSWORD_HASH_LEN,
        });
    }
    Ok(hash)
}

fn check_password_salt(raw: &str) -> Result<String, ValidationError> {
    let salt = sanitize::clean_hex(raw);
    if !sanitize::is_hex(&salt) {
        return Err(ValidationError::NotHex {
            field: "password salt",
        });
    }
    if salt.len() != PASSWORD_SALT_LEN {
        return Err(ValidationError::WrongLength {
            field: "password salt",
            expected: PASSWORD_SALT_LEN,
        });
    }
    Ok(salt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_input() -> ProfileInput {
        ProfileInput {
            id: None,
            name: "John Smith".to_string(),
            email: "test@phpunit.de".to_string(),
            profile_type: 0,
            github_token: "a".repeat(64),
            bio: "This is a bio".to_string(),
            rate: dec!(25.00),
            image: "b".repeat(32),
            last_edit_at: None,
            activation_token: None,
            password_hash: "c".repeat(128),
            password_salt: "d".repeat(64),
        }
    }

    #[test]
    fn constructs_from_valid_input() {
        let profile = Profile::new(valid_input()).unwrap();
        assert_eq!(profile.id(), None);
        assert_eq!(profile.name(), "John Smith");
        assert_eq!(profile.email(), "test@phpunit.de");
        assert_eq!(profile.profile_type(), ProfileType::Student);
        assert_eq!(profile.github_token().len(), 64);
        assert_eq!(profile.bio(), "This is a bio");
        assert_eq!(profile.rate(), dec!(25.00));
        assert_eq!(profile.image().len(), 32);
        assert_eq!(profile.activation_token(), None);
    }

    #[test]
    fn name_is_sanitized_and_bounded() {
        let mut input = valid_input();
        input.name = "  John <b>Smith</b>  ".to_string();
        let profile = Profile::new(input).unwrap();
        assert_eq!(profile.name(), "John Smith");

        let mut input = valid_input();
        input.name = "<script></script>".to_string();
        assert_eq!(
            Profile::new(input).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );

        let mut input = valid_input();
        input.name = "x".repeat(51);
        assert_eq!(
            Profile::new(input).unwrap_err(),
            ValidationError::TooLong {
                field: "name",
                max: 50
            }
        );
    }

    #[test]
    fn email_is_bounded() {
        let mut input = valid_input();
        input.email = format!("{}@example.com", "x".repeat(128));
        assert!(matches!(
            Profile::new(input).unwrap_err(),
            ValidationError::TooLong { field: "email", .. }
        ));
    }

    #[test]
    fn profile_type_accepts_only_student_and_tutor() {
        for value in [0, 1] {
            let mut input = valid_input();
            input.profile_type = value;
            assert!(Profile::new(input).is_ok());
        }
        for value in [-1, 2, 7] {
            let mut input = valid_input();
            input.profile_type = value;
            assert_eq!(
                Profile::new(input).unwrap_err(),
                ValidationError::OutOfRange {
                    field: "profile type"
                }
            );
        }
    }

    #[test]
    fn github_token_must_be_exactly_64_chars() {
        let mut input = valid_input();
        input.github_token = "a".repeat(63);
        assert_eq!(
            Profile::new(input).unwrap_err(),
            ValidationError::WrongLength {
                field: "github token",
                expected: 64
            }
        );
    }

    #[test]
    fn rate_must_be_positive() {
        for rate in [dec!(0), dec!(-5)] {
            let mut input = valid_input();
            input.rate = rate;
            assert_eq!(
                Profile::new(input).unwrap_err(),
                ValidationError::OutOfRange { field: "rate" }
            );
        }
    }

    #[test]
    fn rate_at_upper_bound() {
        let mut input = valid_input();
        input.rate = dec!(999.99);
        assert_eq!(Profile::new(input).unwrap().rate(), dec!(999.99));
    }

    #[test]
    fn rate_above_upper_bound() {
        let mut input = valid_input();
        input.rate = dec!(1000.00);
        assert_eq!(
            Profile::new(input).unwrap_err(),
            ValidationError::OutOfRange { field: "rate" }
        );
    }

    #[test]
    fn rate_is_normalized_to_two_decimals() {
        let mut input = valid_input();
        input.rate = dec!(25.005);
        assert_eq!(Profile::new(input).unwrap().rate(), dec!(25.01));

        let mut input = valid_input();
        input.rate = dec!(25.004);
        assert_eq!(Profile::new(input).unwrap().rate(), dec!(25.00));
    }

    #[test]
    fn activation_token_null_short_circuits() {
        let mut input = valid_input();
        input.activation_token = None;
        assert_eq!(Profile::new(input).unwrap().activation_token(), None);
    }

    #[test]
    fn activation_token_is_lowercased_hex() {
        let mut input = valid_input();
        input.activation_token = Some("ABCDEF0123456789ABCDEF0123456789".to_string());
        let profile = Profile::new(input).unwrap();
        assert_eq!(
            profile.activation_token(),
            Some("abcdef0123456789abcdef0123456789")
        );

        let mut input = valid_input();
        input.activation_token = Some("zz".repeat(16));
        assert_eq!(
            Profile::new(input).unwrap_err(),
            ValidationError::NotHex {
                field: "activation token"
            }
        );
    }

    #[test]
    fn password_hash_format_is_enforced() {
        let mut input = valid_input();
        input.password_hash = "g".repeat(128);
        assert!(matches!(
            Profile::new(input).unwrap_err(),
            ValidationError::NotHex { .. }
        ));

        let mut input = valid_input();
        input.password_hash = "a".repeat(127);
        assert!(matches!(
            Profile::new(input).unwrap_err(),
            ValidationError::WrongLength { .. }
        ));
    }

    #[test]
    fn failed_mutation_leaves_prior_state() {
        let mut profile = Profile::new(valid_input()).unwrap();
        assert!(profile.set_name("").is_err());
        assert_eq!(profile.name(), "John Smith");

        assert!(profile.set_rate(dec!(-1)).is_err());
        assert_eq!(profile.rate(), dec!(25.00));
    }

    #[test]
    fn setting_an_already_valid_value_is_idempotent() {
        let mut profile = Profile::new(valid_input()).unwrap();
        profile.set_name("John Smith").unwrap();
        assert_eq!(profile.name(), "John Smith");
    }

    #[test]
    fn id_must_be_positive_when_present() {
        let mut input = valid_input();
        input.id = Some(0);
        assert!(Profile::new(input).is_err());

        let mut profile = Profile::new(valid_input()).unwrap();
        profile.set_id(Some(42)).unwrap();
        assert_eq!(profile.id(), Some(42));
    }

    #[test]
    fn activate_clears_the_token() {
        let mut input = valid_input();
        input.activation_token = Some("0".repeat(32));
        let mut profile = Profile::new(input).unwrap();
        assert!(profile.activation_token().is_some());
        profile.activate();
        assert_eq!(profile.activation_token(), None);
    }
}
