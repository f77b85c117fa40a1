// crates/domain/src/model/student.rs
use serde::{Deserialize, Serialize};
use student_analytics_shared_kernel::{Age, DomainError, DomainResult, FirstName, Grade};

/// Immutable student record.
///
/// Records carry no identity beyond their field values; two students with the
/// same name, age, grade and enrolment flag are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    first_name: FirstName,
    age: Age,
    grade: Grade,
    is_current: bool,
}

impl Student {
    pub fn new(first_name: impl Into<FirstName>, age: u32, grade: i32, is_current: bool) -> Self {
        Self {
            first_name: first_name.into(),
            age: Age::new(age),
            grade: Grade::new(grade),
            is_current,
        }
    }

    pub fn builder() -> StudentBuilder {
        StudentBuilder::default()
    }

    #[inline]
    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    #[inline]
    pub fn age(&self) -> Age {
        self.age
    }

    #[inline]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// `true` while the student is actively enrolled.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.is_current
    }
}

#[derive(Debug, Default)]
pub struct StudentBuilder {
    first_name: Option<FirstName>,
    age: Age,
    grade: Grade,
    is_current: bool,
}

impl StudentBuilder {
    pub fn first_name(mut self, name: impl Into<FirstName>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = Age::new(age);
        self
    }

    pub fn grade(mut self, grade: i32) -> Self {
        self.grade = Grade::new(grade);
        self
    }

    pub fn current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }

    pub fn enrolled(self) -> Self {
        self.current(true)
    }

    pub fn inactive(self) -> Self {
        self.current(false)
    }

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStudent`] when no first name was supplied.
    pub fn build(self) -> DomainResult<Student> {
        let first_name = self.first_name.ok_or_else(|| DomainError::InvalidStudent {
            field: "first_name".to_string(),
            reason: "a first name is required".to_string(),
        })?;

        Ok(Student {
            first_name,
            age: self.age,
            grade: self.grade,
            is_current: self.is_current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_inactive() {
        let student = Student::builder().first_name("Ann").age(22).grade(60).build().unwrap();
        assert_eq!(student, Student::new("Ann", 22, 60, false));
        assert!(!student.is_current());
    }

    #[test]
    fn builder_requires_first_name() {
        let err = Student::builder().age(30).enrolled().build().unwrap_err();
        assert!(matches!(err, DomainError::InvalidStudent { ref field, .. } if field == "first_name"));
    }

    #[test]
    fn deserializes_from_json_fixture() {
        let json = r#"{ "first_name": "Bob", "age": 25, "grade": 70, "is_current": true }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.first_name().as_str(), "Bob");
        assert_eq!(student.age().value(), 25);
        assert_eq!(student.grade().value(), 70);
        assert!(student.is_current());
    }
}
