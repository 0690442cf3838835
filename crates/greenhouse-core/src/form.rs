//! Input forms for the presentation layer
//!
//! The store never validates what it is given. Callers build one of these
//! forms from user input and call `validated` before writing.

use chrono::NaiveDate;
use thiserror::Error;

use crate::watering;

/// Errors raised while validating user input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Plant name was empty after trimming
    #[error("Plant name is required!")]
    NameRequired,

    /// Journal notes were empty after trimming
    #[error("Both date and notes are required!")]
    NotesRequired,

    /// A date was not in `YYYY-MM-DD` form
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parse a user-supplied `YYYY-MM-DD` date
///
/// Input is trimmed and unpadded fields such as `2024-3-1` are accepted; the
/// date is normalized when it is written.
///
/// # Errors
/// Returns `FormError::InvalidDate` if the text is not a valid date
pub fn parse_date(text: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(text.trim(), watering::DATE_FORMAT)
        .map_err(|_| FormError::InvalidDate(text.to_string()))
}

/// Fields submitted when adding or editing a plant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantForm {
    pub name: String,
    pub date_planted: Option<NaiveDate>,
    pub care_plan: Option<String>,
}

impl PlantForm {
    /// Trim the text fields and check that a name was given
    ///
    /// A blank care plan becomes `None`.
    ///
    /// # Errors
    /// Returns `FormError::NameRequired` if the name is blank
    pub fn validated(self) -> Result<Self, FormError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }

        let care_plan = self
            .care_plan
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            name,
            date_planted: self.date_planted,
            care_plan,
        })
    }
}

/// Fields submitted when adding or editing a journal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalForm {
    pub entry_date: NaiveDate,
    pub notes: String,
}

impl JournalForm {
    /// Trim the notes and check they are not blank
    ///
    /// # Errors
    /// Returns `FormError::NotesRequired` if the notes are blank
    pub fn validated(self) -> Result<Self, FormError> {
        let notes = self.notes.trim().to_string();
        if notes.is_empty() {
            return Err(FormError::NotesRequired);
        }
        Ok(Self {
            entry_date: self.entry_date,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_form_trims() {
        let form = PlantForm {
            name: "  Fern ".to_string(),
            date_planted: None,
            care_plan: Some(" water weekly\n".to_string()),
        }
        .validated()
        .unwrap();

        assert_eq!(form.name, "Fern");
        assert_eq!(form.care_plan.as_deref(), Some("water weekly"));
    }

    #[test]
    fn test_plant_form_requires_name() {
        let err = PlantForm {
            name: "   ".to_string(),
            date_planted: None,
            care_plan: None,
        }
        .validated()
        .unwrap_err();

        assert_eq!(err, FormError::NameRequired);
        assert_eq!(err.to_string(), "Plant name is required!");
    }

    #[test]
    fn test_plant_form_blank_care_plan_is_none() {
        let form = PlantForm {
            name: "Fern".to_string(),
            date_planted: None,
            care_plan: Some("  ".to_string()),
        }
        .validated()
        .unwrap();

        assert_eq!(form.care_plan, None);
    }

    #[test]
    fn test_journal_form_requires_notes() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            JournalForm {
                entry_date: date,
                notes: "\n ".to_string(),
            }
            .validated(),
            Err(FormError::NotesRequired)
        );

        let form = JournalForm {
            entry_date: date,
            notes: " New leaf ".to_string(),
        }
        .validated()
        .unwrap();
        assert_eq!(form.notes, "New leaf");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            parse_date(" 2024-3-1 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            parse_date("03/01/2024"),
            Err(FormError::InvalidDate("03/01/2024".to_string()))
        );
    }
}
