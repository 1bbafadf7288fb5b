use store::Student;

use crate::draft::Draft;
use crate::error::FieldError;
use crate::validate::{self, Rules};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StudentField {
    Name,
    Age,
    Major,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StudentEdit {
    Name(String),
    Age(String),
    Major(String),
}

/// Student form: every field required, age a whole number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub age: String,
    pub major: String,
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age.to_string(),
            major: student.major.clone(),
        }
    }
}

impl Draft for StudentDraft {
    type Field = StudentField;
    type Edit = StudentEdit;
    type Record = Student;

    const NOUN: &'static str = "student";

    fn fields(&self) -> Vec<StudentField> {
        vec![StudentField::Name, StudentField::Age, StudentField::Major]
    }

    fn apply(&mut self, edit: StudentEdit) -> Option<StudentField> {
        let field = match edit {
            StudentEdit::Name(value) => {
                self.name = value;
                StudentField::Name
            }
            StudentEdit::Age(value) => {
                self.age = value;
                StudentField::Age
            }
            StudentEdit::Major(value) => {
                self.major = value;
                StudentField::Major
            }
        };
        Some(field)
    }

    fn validate_field(&self, field: StudentField, _rules: &Rules) -> Result<(), FieldError> {
        match field {
            StudentField::Name => validate::required_text("Name", &self.name),
            StudentField::Age => validate::whole_number("Age", &self.age).map(drop),
            StudentField::Major => validate::required_text("Major", &self.major),
        }
    }

    fn finalize(&self, _rules: &Rules) -> Result<Student, FieldError> {
        Ok(Student {
            name: self.name.trim().to_string(),
            age: validate::whole_number("Age", &self.age)?,
            major: self.major.trim().to_string(),
        })
    }

    fn summary(record: &Student) -> Vec<(&'static str, String)> {
        vec![
            ("Name", record.name.clone()),
            ("Age", record.age.to_string()),
            ("Major", record.major.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_fields() {
        let rules = Rules::default();
        let mut draft = StudentDraft::default();
        assert_eq!(draft.apply(StudentEdit::Age("twenty".to_string())), Some(StudentField::Age));
        assert_eq!(
            draft.validate_field(StudentField::Age, &rules).unwrap_err().to_string(),
            "Age must be a whole number"
        );
        assert_eq!(
            draft.validate_field(StudentField::Major, &rules).unwrap_err().to_string(),
            "Major is required"
        );

        draft.apply(StudentEdit::Name("Lior".to_string()));
        draft.apply(StudentEdit::Age(" 23 ".to_string()));
        draft.apply(StudentEdit::Major("Chemistry".to_string()));
        let student = draft.finalize(&rules).unwrap();
        assert_eq!(student.age, 23);
        assert_eq!(student.major, "Chemistry");
    }
}
