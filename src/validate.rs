use thiserror::Error;

use crate::calc::{parse_mark, MARK_COUNT};

/// User-input validation failures, one per field. Checks run in the order the
/// variants are listed and the first failure is the only one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name should only contain letters.")]
    InvalidName,
    #[error("Age should be a positive integer.")]
    InvalidAge,
    #[error("All marks must be between 1 and 100.")]
    InvalidMarks,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidName => "invalid_name",
            ValidationError::InvalidAge => "invalid_age",
            ValidationError::InvalidMarks => "invalid_marks",
        }
    }
}

/// Parsed form input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInput {
    pub name: String,
    pub age: i64,
    pub marks: [i64; MARK_COUNT],
}

/// Validates the raw form fields: name first, then age, then marks.
/// Name must be non-empty ASCII letters and spaces; age an integer > 0;
/// every mark an integer in [1,100].
pub fn validate(
    name: &str,
    age: &str,
    marks: &[String; MARK_COUNT],
) -> Result<ValidInput, ValidationError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidName);
    }

    let age: i64 = age
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAge)?;
    if age <= 0 {
        return Err(ValidationError::InvalidAge);
    }

    let mut parsed = [0_i64; MARK_COUNT];
    for (i, raw) in marks.iter().enumerate() {
        parsed[i] = parse_mark(raw).ok_or(ValidationError::InvalidMarks)?;
    }

    Ok(ValidInput {
        name: name.to_string(),
        age,
        marks: parsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(raw: [&str; MARK_COUNT]) -> [String; MARK_COUNT] {
        raw.map(str::to_string)
    }

    fn good_marks() -> [String; MARK_COUNT] {
        marks(["80", "70", "90", "60", "50"])
    }

    #[test]
    fn accepts_name_with_internal_spaces() {
        let input = validate("Jane Doe", "20", &good_marks()).expect("valid");
        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.age, 20);
        assert_eq!(input.marks, [80, 70, 90, 60, 50]);
    }

    #[test]
    fn rejects_bad_names() {
        for name in ["", "Jane1", "J@ne", "Jane-Doe", "Jane.", "42"] {
            assert_eq!(
                validate(name, "20", &good_marks()),
                Err(ValidationError::InvalidName),
                "name {:?}",
                name
            );
        }
    }

    #[test]
    fn rejects_bad_ages() {
        for age in ["0", "-1", "3.5", "abc", ""] {
            assert_eq!(
                validate("Jane", age, &good_marks()),
                Err(ValidationError::InvalidAge),
                "age {:?}",
                age
            );
        }
    }

    #[test]
    fn rejects_out_of_range_marks() {
        for bad in ["0", "101", "-5", "abc", ""] {
            let mut m = good_marks();
            m[3] = bad.to_string();
            assert_eq!(
                validate("Jane", "20", &m),
                Err(ValidationError::InvalidMarks),
                "mark {:?}",
                bad
            );
        }
    }

    #[test]
    fn first_failing_field_wins() {
        // Name, age, and marks all invalid: name is reported.
        let m = marks(["0", "", "", "", ""]);
        assert_eq!(
            validate("Jane1", "-1", &m),
            Err(ValidationError::InvalidName)
        );
        // Age and marks invalid: age is reported.
        assert_eq!(validate("Jane", "-1", &m), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn messages_match_the_form() {
        assert_eq!(
            ValidationError::InvalidName.to_string(),
            "Name should only contain letters."
        );
        assert_eq!(
            ValidationError::InvalidAge.to_string(),
            "Age should be a positive integer."
        );
        assert_eq!(
            ValidationError::InvalidMarks.to_string(),
            "All marks must be between 1 and 100."
        );
    }
}
