//! # Field validators
//!
//! Pure functions, one per kind of field. Each takes the raw value as the form
//! holds it and returns `Ok(())` or the [`FieldError`] to show under the field.
//! The first failing rule wins, in the order the rules are listed:
//!
//! | Validator | Rules |
//! |-----------|-------|
//! | [`person_name`] | required, no digits, at least `name_min_len`, at most `name_max_len` characters |
//! | [`required_text`] | required |
//! | [`gender`] | required |
//! | [`birth_date`] | required, parses, not after [`Rules::today`] |
//! | [`disorders`] | at least one selected, none twice |
//! | [`workspace`] | required, one of the workspace templates |
//! | [`workspace_list`] | at least one entry non-empty after trimming (list-level) |
//!
//! Birth dates are calendar dates. [`parse_birth_date`] accepts what a browser
//! date input produces (`YYYY-MM-DD`) and RFC 3339 timestamps, which are
//! converted to the *local* date so a timestamp near midnight does not shift
//! a day the way a UTC conversion would.

use chrono::{DateTime, Local, NaiveDate};
use store::config::ValidationConfig;
use store::{Disorder, Gender, WorkspaceTemplate};

use crate::error::{FieldError, ListError};

/// Inputs the validators need besides the field value.
#[derive(Clone, Debug, PartialEq)]
pub struct Rules {
    /// Latest acceptable birth date.
    pub today: NaiveDate,
    pub name_min_len: usize,
    pub name_max_len: usize,
}

impl Rules {
    pub fn new(config: &ValidationConfig, today: NaiveDate) -> Self {
        Self {
            today,
            name_min_len: config.name_min_len,
            name_max_len: config.name_max_len,
        }
    }

    /// Rules with `today` taken from the local clock.
    pub fn local(config: &ValidationConfig) -> Self {
        Self::new(config, Local::now().date_naive())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::local(&ValidationConfig::default())
    }
}

pub fn required_text(label: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required(label));
    }
    Ok(())
}

pub fn person_name(label: &'static str, value: &str, rules: &Rules) -> Result<(), FieldError> {
    required_text(label, value)?;
    let value = value.trim();
    if value.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::ContainsDigits(label));
    }
    let len = value.chars().count();
    if len < rules.name_min_len {
        return Err(FieldError::TooShort {
            label,
            min: rules.name_min_len,
        });
    }
    if len > rules.name_max_len {
        return Err(FieldError::TooLong {
            label,
            max: rules.name_max_len,
        });
    }
    Ok(())
}

pub fn gender(value: Option<Gender>) -> Result<Gender, FieldError> {
    value.ok_or(FieldError::Required("Gender"))
}

pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

pub fn birth_date(raw: &str, rules: &Rules) -> Result<NaiveDate, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::Required("Date of birth"));
    }
    let date = parse_birth_date(raw).ok_or(FieldError::InvalidDate)?;
    if date > rules.today {
        return Err(FieldError::FutureDate);
    }
    Ok(date)
}

/// Format a birth date input as `YYYY-MM-DD` from its local calendar components.
pub fn normalize_birth_date(raw: &str) -> Option<String> {
    parse_birth_date(raw).map(|date| date.format("%Y-%m-%d").to_string())
}

pub fn disorders(selected: &[Disorder]) -> Result<(), FieldError> {
    if selected.is_empty() {
        return Err(FieldError::NoDisorder);
    }
    for (i, disorder) in selected.iter().enumerate() {
        if selected[..i].contains(disorder) {
            return Err(FieldError::DuplicateDisorder(*disorder));
        }
    }
    Ok(())
}

pub fn workspace(raw: &str) -> Result<WorkspaceTemplate, FieldError> {
    required_text("Workspace template", raw)?;
    Ok(raw.parse::<WorkspaceTemplate>()?)
}

pub fn workspace_list(entries: &[String]) -> Result<(), ListError> {
    if entries.iter().all(|name| name.trim().is_empty()) {
        return Err(ListError::NoWorkspace);
    }
    Ok(())
}

pub fn whole_number(label: &'static str, raw: &str) -> Result<u32, FieldError> {
    required_text(label, raw)?;
    raw.trim()
        .parse::<u32>()
        .map_err(|_| FieldError::NotANumber(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Rules {
        Rules::new(
            &ValidationConfig::default(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
    }

    #[test]
    fn test_names_with_digits_are_rejected() {
        let long = "x9".repeat(40);
        for input in ["1", "J0hn", "Anna2", "42", " Mary 3 ", long.as_str()] {
            assert_eq!(
                person_name("First name", input, &rules()),
                Err(FieldError::ContainsDigits("First name")),
                "{input:?}"
            );
        }
        assert_eq!(
            person_name("Last name", "Sm1th", &rules()).unwrap_err().to_string(),
            "Last name cannot contain numbers"
        );
    }

    #[test]
    fn test_name_length_bounds() {
        let rules = rules();
        assert_eq!(
            person_name("First name", "A", &rules).unwrap_err().to_string(),
            "First name must be at least 2 characters"
        );
        assert_eq!(
            person_name("First name", &"a".repeat(51), &rules)
                .unwrap_err()
                .to_string(),
            "First name cannot exceed 50 characters"
        );
        assert!(person_name("First name", "Al", &rules).is_ok());
        // surrounding whitespace does not count towards the length
        assert_eq!(
            person_name("First name", " A ", &rules),
            Err(FieldError::TooShort {
                label: "First name",
                min: 2
            })
        );
        assert!(person_name("First name", &format!("  {}  ", "b".repeat(50)), &rules).is_ok());
        assert!(person_name("First name", &"é".repeat(50), &rules).is_ok());
    }

    #[test]
    fn test_name_required() {
        assert_eq!(
            person_name("First name", "   ", &rules()).unwrap_err().to_string(),
            "First name is required"
        );
    }

    #[test]
    fn test_future_birth_dates_are_rejected() {
        let rules = rules();
        for raw in ["2024-06-16", "2030-01-01", "2999-12-31"] {
            assert_eq!(birth_date(raw, &rules), Err(FieldError::FutureDate), "{raw}");
        }
        assert_eq!(
            FieldError::FutureDate.to_string(),
            "Birth date cannot be in the future"
        );
    }

    #[test]
    fn test_past_birth_dates_are_accepted() {
        let rules = rules();
        for raw in ["2024-06-15", "2000-02-29", "1931-11-03"] {
            assert!(birth_date(raw, &rules).is_ok(), "{raw}");
        }
    }

    #[test]
    fn test_birth_date_required_and_valid() {
        let rules = rules();
        assert_eq!(
            birth_date("", &rules).unwrap_err().to_string(),
            "Date of birth is required"
        );
        assert_eq!(birth_date("2023-02-30", &rules), Err(FieldError::InvalidDate));
        assert_eq!(birth_date("yesterday", &rules), Err(FieldError::InvalidDate));
    }

    #[test]
    fn test_normalize_keeps_calendar_date() {
        assert_eq!(normalize_birth_date("2023-07-04").as_deref(), Some("2023-07-04"));
        assert_eq!(normalize_birth_date(" 2023-07-04 ").as_deref(), Some("2023-07-04"));
        assert_eq!(normalize_birth_date("not a date"), None);
    }

    #[test]
    fn test_normalize_timestamp_uses_local_date() {
        let raw = "2023-07-04T12:00:00+00:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(normalize_birth_date(raw), Some(expected));
    }

    #[test]
    fn test_disorders_min_selection() {
        assert_eq!(
            disorders(&[]).unwrap_err().to_string(),
            "At least one disorder must be selected"
        );
        assert!(disorders(&[Disorder::Epilepsy]).is_ok());
        assert_eq!(
            disorders(&[Disorder::Et, Disorder::Ocd, Disorder::Et])
                .unwrap_err()
                .to_string(),
            "ET is selected more than once"
        );
    }

    #[test]
    fn test_workspace_entry() {
        assert_eq!(workspace("Right"), Ok(WorkspaceTemplate::Right));
        assert_eq!(
            workspace(" ").unwrap_err().to_string(),
            "Workspace template is required"
        );
        assert_eq!(
            workspace("Top").unwrap_err().to_string(),
            "Top is not a valid workspace template"
        );
    }

    #[test]
    fn test_workspace_list_needs_one_named_entry() {
        assert_eq!(workspace_list(&[]), Err(ListError::NoWorkspace));
        assert_eq!(
            workspace_list(&["".to_string(), "  ".to_string()]),
            Err(ListError::NoWorkspace)
        );
        assert!(workspace_list(&["".to_string(), "Both".to_string()]).is_ok());
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number("Age", "21"), Ok(21));
        assert_eq!(whole_number("Age", ""), Err(FieldError::Required("Age")));
        assert_eq!(
            whole_number("Age", "-3").unwrap_err().to_string(),
            "Age must be a whole number"
        );
    }
}
