//! Field validators
//!
//! Every rule is a pure function of the field value plus an explicit
//! [`ValidationContext`]. Rules never fail hard: a broken value is reported as
//! an [`ErrorReason`] and nothing else.

use super::field::{FieldKey, FieldValue, ProductType};
use crate::state::reference::ReferenceData;
use chrono::{Days, NaiveDate};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use thiserror::Error;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const EMAIL_MAX_LENGTH: usize = 100;
pub const COMMENTS_MAX_LENGTH: usize = 250;

/// Date format produced by the date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static POSTAL_CODE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code pattern compiles"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{8}$").expect("phone pattern compiles"));

// Local part and dot-separated domain labels; overall lengths are checked separately
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

const EMAIL_MAX_TOTAL: usize = 254;
const EMAIL_MAX_LOCAL: usize = 64;

/// Why a field value was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum ErrorReason {
    #[error("Este campo es obligatorio")]
    Required,

    #[error("Email inválido")]
    InvalidEmail,

    #[error("Mínimo {0} caracteres")]
    TooShort(usize),

    #[error("Máximo {0} caracteres")]
    TooLong(usize),

    #[error("Formato inválido")]
    PatternMismatch,

    #[error("Teléfono debe empezar por 6-9 y tener 9 dígitos")]
    InvalidPhone,

    #[error("El código postal debe tener 5 dígitos")]
    InvalidPostalCode,

    #[error("El código postal no corresponde a ninguna provincia")]
    NoSuchProvince,

    #[error("La fecha debe ser a partir de mañana")]
    InvalidDate,
}

/// Inputs the rules need besides the value itself
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub reference: &'a ReferenceData,
    /// Current date; date rules compare against the day after it
    pub today: NaiveDate,
}

impl<'a> ValidationContext<'a> {
    pub fn new(reference: &'a ReferenceData, today: NaiveDate) -> Self {
        Self { reference, today }
    }

    /// First acceptable appointment date
    pub fn tomorrow(&self) -> Option<NaiveDate> {
        tomorrow(self.today)
    }
}

/// Outcome of running a field's rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Never empty
    Invalid(BTreeSet<ErrorReason>),
}

impl ValidationResult {
    pub fn invalid(reason: ErrorReason) -> Self {
        ValidationResult::Invalid(BTreeSet::from([reason]))
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn into_errors(self) -> BTreeSet<ErrorReason> {
        match self {
            ValidationResult::Valid => BTreeSet::new(),
            ValidationResult::Invalid(reasons) => reasons,
        }
    }
}

/// A single check attached to a field
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    RequiredTrue,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Pattern(&'static LazyLock<Regex>),
    Phone,
    PostalCode,
    MinDate,
}

impl Rule {
    pub fn apply(self, value: &FieldValue, ctx: &ValidationContext) -> Result<(), ErrorReason> {
        match self {
            Rule::Required => match value {
                FieldValue::Text(s) | FieldValue::Date(s) => required_text(s),
                FieldValue::Multi(items) => required_selection(items),
                FieldValue::Choice(choice) => required_choice(*choice),
                FieldValue::Bool(checked) => required_true(*checked),
            },
            Rule::RequiredTrue => required_true(value.as_bool()),
            Rule::MinLength(min) => min_length(value.as_text(), min),
            Rule::MaxLength(max) => max_length(value.as_text(), max),
            Rule::Email => email(value.as_text()),
            Rule::Pattern(re) => pattern(value.as_text(), re),
            Rule::Phone => phone(value.as_text()),
            Rule::PostalCode => postal_code(value.as_text(), ctx.reference),
            Rule::MinDate => min_date(value.as_text(), ctx.today),
        }
    }
}

/// Rules for a field, in the order they are evaluated
pub fn rules_for(key: FieldKey) -> Vec<Rule> {
    match key {
        FieldKey::Name => vec![
            Rule::Required,
            Rule::MinLength(NAME_MIN_LENGTH),
            Rule::MaxLength(NAME_MAX_LENGTH),
        ],
        FieldKey::Email => vec![Rule::Required, Rule::Email, Rule::MaxLength(EMAIL_MAX_LENGTH)],
        FieldKey::Phone => vec![Rule::Phone],
        FieldKey::PostalCode => vec![
            Rule::Required,
            Rule::Pattern(&POSTAL_CODE_SHAPE),
            Rule::PostalCode,
        ],
        FieldKey::Province => vec![],
        FieldKey::ProductType => vec![Rule::Required],
        FieldKey::Conditions => vec![Rule::Required],
        FieldKey::DesiredDate => vec![Rule::Required, Rule::MinDate],
        FieldKey::Comments => vec![Rule::MaxLength(COMMENTS_MAX_LENGTH)],
        FieldKey::AcceptTerms => vec![Rule::RequiredTrue],
    }
}

/// Run a field's rules in order and report the first failure
pub fn validate_field(
    key: FieldKey,
    value: &FieldValue,
    ctx: &ValidationContext,
) -> ValidationResult {
    rules_for(key)
        .into_iter()
        .find_map(|rule| rule.apply(value, ctx).err())
        .map_or(ValidationResult::Valid, ValidationResult::invalid)
}

pub fn required_text(value: &str) -> Result<(), ErrorReason> {
    if value.is_empty() {
        Err(ErrorReason::Required)
    } else {
        Ok(())
    }
}

pub fn required_true(value: bool) -> Result<(), ErrorReason> {
    if value {
        Ok(())
    } else {
        Err(ErrorReason::Required)
    }
}

pub fn required_selection(items: &[String]) -> Result<(), ErrorReason> {
    if items.is_empty() {
        Err(ErrorReason::Required)
    } else {
        Ok(())
    }
}

pub fn required_choice(choice: Option<ProductType>) -> Result<(), ErrorReason> {
    choice.map(|_| ()).ok_or(ErrorReason::Required)
}

/// Empty values are left to `required`
pub fn min_length(value: &str, min: usize) -> Result<(), ErrorReason> {
    let len = value.chars().count();
    if len > 0 && len < min {
        Err(ErrorReason::TooShort(min))
    } else {
        Ok(())
    }
}

pub fn max_length(value: &str, max: usize) -> Result<(), ErrorReason> {
    if value.chars().count() > max {
        Err(ErrorReason::TooLong(max))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), ErrorReason> {
    if value.is_empty() {
        return Ok(());
    }
    let local_len = value.split('@').next().map_or(0, str::len);
    if value.len() > EMAIL_MAX_TOTAL || local_len > EMAIL_MAX_LOCAL || !EMAIL.is_match(value) {
        return Err(ErrorReason::InvalidEmail);
    }
    Ok(())
}

pub fn pattern(value: &str, re: &Regex) -> Result<(), ErrorReason> {
    if value.is_empty() || re.is_match(value) {
        Ok(())
    } else {
        Err(ErrorReason::PatternMismatch)
    }
}

/// Optional Spanish phone number: nine digits, leading 6-9
pub fn phone(value: &str) -> Result<(), ErrorReason> {
    if value.is_empty() || PHONE.is_match(value) {
        Ok(())
    } else {
        Err(ErrorReason::InvalidPhone)
    }
}

/// Five digits whose two-digit prefix names a province
pub fn postal_code(value: &str, reference: &ReferenceData) -> Result<(), ErrorReason> {
    if value.is_empty() {
        return Ok(());
    }
    if !POSTAL_CODE_SHAPE.is_match(value) {
        return Err(ErrorReason::InvalidPostalCode);
    }
    reference
        .province_for_postal_code(value)
        .map(|_| ())
        .ok_or(ErrorReason::NoSuchProvince)
}

/// Date must parse and fall on or after the day after `today`.
/// Depends on the ambient date, so callers pass a fresh `today` each time.
pub fn min_date(value: &str, today: NaiveDate) -> Result<(), ErrorReason> {
    if value.is_empty() {
        return Ok(());
    }
    let date = parse_date(value).ok_or(ErrorReason::InvalidDate)?;
    match tomorrow(today) {
        Some(first) if date >= first => Ok(()),
        _ => Err(ErrorReason::InvalidDate),
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn tomorrow(today: NaiveDate) -> Option<NaiveDate> {
    today.checked_add_days(Days::new(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn ctx() -> ValidationContext<'static> {
        ValidationContext::new(ReferenceData::spanish(), today())
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    mod phone_rule {
        use super::*;

        #[test]
        fn test_empty_is_valid() {
            assert_eq!(phone(""), Ok(()));
        }

        #[test]
        fn test_leading_digits_6_to_9_pass() {
            for number in ["612345678", "712345678", "812345678", "912345678"] {
                assert_eq!(phone(number), Ok(()), "{number}");
            }
        }

        #[test]
        fn test_other_leading_digits_fail() {
            assert_eq!(phone("512345678"), Err(ErrorReason::InvalidPhone));
            assert_eq!(phone("012345678"), Err(ErrorReason::InvalidPhone));
        }

        #[test]
        fn test_wrong_length_or_characters_fail() {
            assert_eq!(phone("61234567"), Err(ErrorReason::InvalidPhone));
            assert_eq!(phone("6123456789"), Err(ErrorReason::InvalidPhone));
            assert_eq!(phone("6123 5678"), Err(ErrorReason::InvalidPhone));
            assert_eq!(phone("+34612345678"), Err(ErrorReason::InvalidPhone));
        }

        #[test]
        fn test_non_ascii_digits_fail() {
            // Arabic-Indic and fullwidth digits
            assert_eq!(phone("6١٢٣٤٥٦٧٨"), Err(ErrorReason::InvalidPhone));
            assert_eq!(phone("６１２３４５６７８"), Err(ErrorReason::InvalidPhone));
        }
    }

    mod postal_code_rule {
        use super::*;

        #[test]
        fn test_known_prefix_passes() {
            let reference = ReferenceData::spanish();
            assert_eq!(postal_code("28001", reference), Ok(()));
            assert_eq!(postal_code("52001", reference), Ok(()));
        }

        #[test]
        fn test_unknown_prefix_is_no_such_province() {
            let reference = ReferenceData::spanish();
            assert_eq!(postal_code("99999", reference), Err(ErrorReason::NoSuchProvince));
            assert_eq!(postal_code("00123", reference), Err(ErrorReason::NoSuchProvince));
            assert_eq!(postal_code("53000", reference), Err(ErrorReason::NoSuchProvince));
        }

        #[test]
        fn test_bad_shape() {
            let reference = ReferenceData::spanish();
            assert_eq!(postal_code("2800", reference), Err(ErrorReason::InvalidPostalCode));
            assert_eq!(postal_code("28a01", reference), Err(ErrorReason::InvalidPostalCode));
            assert_eq!(postal_code("٢٨٠٠١", reference), Err(ErrorReason::InvalidPostalCode));
        }

        #[test]
        fn test_non_ascii_digits_are_a_format_error() {
            assert_eq!(
                validate_field(FieldKey::PostalCode, &text("٢٨٠٠١"), &ctx()),
                ValidationResult::invalid(ErrorReason::PatternMismatch)
            );
            assert_eq!(
                validate_field(FieldKey::PostalCode, &text("２８００１"), &ctx()),
                ValidationResult::invalid(ErrorReason::PatternMismatch)
            );
        }

        #[test]
        fn test_field_chain_reports_pattern_before_shape() {
            assert_eq!(
                validate_field(FieldKey::PostalCode, &text("2800"), &ctx()),
                ValidationResult::invalid(ErrorReason::PatternMismatch)
            );
            assert_eq!(
                validate_field(FieldKey::PostalCode, &text(""), &ctx()),
                ValidationResult::invalid(ErrorReason::Required)
            );
            assert_eq!(
                validate_field(FieldKey::PostalCode, &text("99999"), &ctx()),
                ValidationResult::invalid(ErrorReason::NoSuchProvince)
            );
        }
    }

    mod date_rule {
        use super::*;

        #[test]
        fn test_tomorrow_passes() {
            assert_eq!(min_date("2026-10-20", today()), Ok(()));
        }

        #[test]
        fn test_today_fails() {
            assert_eq!(min_date("2026-10-19", today()), Err(ErrorReason::InvalidDate));
        }

        #[test]
        fn test_past_and_future() {
            assert_eq!(min_date("2025-01-01", today()), Err(ErrorReason::InvalidDate));
            assert_eq!(min_date("2030-01-01", today()), Ok(()));
        }

        #[test]
        fn test_unparseable_is_invalid_date() {
            assert_eq!(min_date("mañana", today()), Err(ErrorReason::InvalidDate));
            assert_eq!(min_date("2026-02-30", today()), Err(ErrorReason::InvalidDate));
        }

        #[test]
        fn test_result_follows_the_given_today() {
            let later = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
            assert_eq!(min_date("2026-10-20", later), Err(ErrorReason::InvalidDate));
        }

        #[test]
        fn test_last_representable_day_has_no_tomorrow() {
            assert_eq!(min_date("2026-10-20", NaiveDate::MAX), Err(ErrorReason::InvalidDate));
        }
    }

    mod text_rules {
        use super::*;

        #[test]
        fn test_name_chain() {
            let c = ctx();
            assert_eq!(
                validate_field(FieldKey::Name, &text(""), &c),
                ValidationResult::invalid(ErrorReason::Required)
            );
            assert_eq!(
                validate_field(FieldKey::Name, &text("A"), &c),
                ValidationResult::invalid(ErrorReason::TooShort(2))
            );
            assert!(validate_field(FieldKey::Name, &text("Ana"), &c).is_valid());
            assert_eq!(
                validate_field(FieldKey::Name, &text(&"a".repeat(101)), &c),
                ValidationResult::invalid(ErrorReason::TooLong(100))
            );
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            assert_eq!(min_length("Ñu", 2), Ok(()));
            assert_eq!(max_length(&"á".repeat(100), 100), Ok(()));
        }

        #[test]
        fn test_email() {
            assert_eq!(email("ana@x.com"), Ok(()));
            assert_eq!(email("ana.garcia+citas@optica.es"), Ok(()));
            assert_eq!(email("ana@"), Err(ErrorReason::InvalidEmail));
            assert_eq!(email("@x.com"), Err(ErrorReason::InvalidEmail));
            assert_eq!(email("ana x@x.com"), Err(ErrorReason::InvalidEmail));
            assert_eq!(email(""), Ok(()));
        }

        #[test]
        fn test_email_too_long_after_format() {
            let long = format!("{}@{}.com", "a".repeat(60), "x".repeat(45));
            assert_eq!(
                validate_field(FieldKey::Email, &text(&long), &ctx()),
                ValidationResult::invalid(ErrorReason::TooLong(100))
            );
        }

        #[test]
        fn test_comments_optional_but_bounded() {
            let c = ctx();
            assert!(validate_field(FieldKey::Comments, &text(""), &c).is_valid());
            assert_eq!(
                validate_field(FieldKey::Comments, &text(&"x".repeat(251)), &c),
                ValidationResult::invalid(ErrorReason::TooLong(250))
            );
        }
    }

    mod other_fields {
        use super::*;

        #[test]
        fn test_terms_must_be_true() {
            let c = ctx();
            assert_eq!(
                validate_field(FieldKey::AcceptTerms, &FieldValue::Bool(false), &c),
                ValidationResult::invalid(ErrorReason::Required)
            );
            assert!(validate_field(FieldKey::AcceptTerms, &FieldValue::Bool(true), &c).is_valid());
        }

        #[test]
        fn test_conditions_need_a_selection() {
            let c = ctx();
            assert_eq!(
                validate_field(FieldKey::Conditions, &FieldValue::Multi(vec![]), &c),
                ValidationResult::invalid(ErrorReason::Required)
            );
            assert!(validate_field(
                FieldKey::Conditions,
                &FieldValue::selection(["Miopía"]),
                &c
            )
            .is_valid());
        }

        #[test]
        fn test_product_type_required() {
            let c = ctx();
            assert_eq!(
                validate_field(FieldKey::ProductType, &FieldValue::Choice(None), &c),
                ValidationResult::invalid(ErrorReason::Required)
            );
            assert!(validate_field(
                FieldKey::ProductType,
                &FieldValue::Choice(Some(ProductType::ContactLenses)),
                &c
            )
            .is_valid());
        }

        #[test]
        fn test_required_checkbox_must_be_checked() {
            let c = ctx();
            assert_eq!(
                Rule::Required.apply(&FieldValue::Bool(false), &c),
                Err(ErrorReason::Required)
            );
            assert_eq!(Rule::Required.apply(&FieldValue::Bool(true), &c), Ok(()));
        }

        #[test]
        fn test_province_has_no_rules() {
            assert!(validate_field(FieldKey::Province, &text(""), &ctx()).is_valid());
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ErrorReason::TooShort(2).to_string(), "Mínimo 2 caracteres");
        assert_eq!(ErrorReason::TooLong(250).to_string(), "Máximo 250 caracteres");
        assert_eq!(
            ErrorReason::NoSuchProvince.to_string(),
            "El código postal no corresponde a ninguna provincia"
        );
    }
}
