/// tests/common/builders.rs
use student_analytics::Student;

/// The three-student roster used throughout the docs.
#[allow(dead_code)]
pub fn reference_roster() -> Vec<Student> {
    vec![
        Student::new("Ann", 22, 60, false),
        Student::new("Bob", 25, 70, true),
        Student::new("Ann", 23, 50, false),
    ]
}

#[allow(dead_code)]
pub fn inactive(name: &str, age: u32, grade: i32) -> Student {
    Student::builder()
        .first_name(name)
        .age(age)
        .grade(grade)
        .inactive()
        .build()
        .expect("name supplied")
}

#[allow(dead_code)]
pub fn enrolled(name: &str, age: u32, grade: i32) -> Student {
    Student::builder()
        .first_name(name)
        .age(age)
        .grade(grade)
        .enrolled()
        .build()
        .expect("name supplied")
}
