//! Field validation of entities before they are written.
//!
//! The pipeline asks a `Validator` for every violation of a model and fails the
//! operation with all of them at once. `FieldValidator` holds the default rules.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::model::{
    faculty::Faculty,
    group::Group,
    lesson::Lesson,
    lesson_time::LessonTime,
    person::{Lecturer, Person, Student},
};

/// At least two non-blank symbols at the start, anything after.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S{2,}.*$").expect("Invalid name pattern"));

/// A plus sign followed by exactly twelve digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{12}$").expect("Invalid phone pattern"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern")
});

/// Checks a model's fields and reports every violation found.
pub trait Validator<T>: Send + Sync {
    /// Returns one message per violated rule, in field order. Empty means valid.
    fn validate(&self, value: &T) -> Vec<String>;
}

/// Default field rules for every entity kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

fn check_name(violations: &mut Vec<String>, field: &str, value: &str) {
    if !NAME_PATTERN.is_match(value) {
        violations.push(format!(
            "{} must have at least two symbols and start with non-white space",
            field
        ));
    }
}

fn check_reference(violations: &mut Vec<String>, field: &str, id: i32) {
    if id <= 0 {
        violations.push(format!("{} must reference a stored record", field));
    }
}

fn check_person(violations: &mut Vec<String>, person: &Person) {
    check_name(violations, "Person first name", &person.first_name);
    check_name(violations, "Person last name", &person.last_name);

    if !PHONE_PATTERN.is_match(&person.phone_number) {
        violations.push(
            "Person phone number must start with \"+\" followed by twelve digits".to_string(),
        );
    }
    if !EMAIL_PATTERN.is_match(&person.email) {
        violations.push("Person email must be formatted well".to_string());
    }
}

impl Validator<Faculty> for FieldValidator {
    fn validate(&self, faculty: &Faculty) -> Vec<String> {
        let mut violations = Vec::new();
        check_name(&mut violations, "Faculty name", &faculty.name);
        violations
    }
}

impl Validator<Group> for FieldValidator {
    fn validate(&self, group: &Group) -> Vec<String> {
        let mut violations = Vec::new();
        check_name(&mut violations, "Group name", &group.name);
        check_reference(&mut violations, "Group faculty", group.faculty_id);
        violations
    }
}

impl Validator<Lecturer> for FieldValidator {
    fn validate(&self, lecturer: &Lecturer) -> Vec<String> {
        let mut violations = Vec::new();
        check_person(&mut violations, &lecturer.person);
        violations
    }
}

impl Validator<Student> for FieldValidator {
    fn validate(&self, student: &Student) -> Vec<String> {
        let mut violations = Vec::new();
        check_person(&mut violations, &student.person);
        check_reference(&mut violations, "Student group", student.group_id);
        violations
    }
}

impl Validator<LessonTime> for FieldValidator {
    fn validate(&self, lesson_time: &LessonTime) -> Vec<String> {
        let mut violations = Vec::new();
        if lesson_time.start_time >= lesson_time.end_time {
            violations.push("LessonTime start time must be before its end time".to_string());
        }
        violations
    }
}

impl Validator<Lesson> for FieldValidator {
    fn validate(&self, lesson: &Lesson) -> Vec<String> {
        let mut violations = Vec::new();
        check_name(&mut violations, "Lesson name", &lesson.name);
        check_name(&mut violations, "Lesson audience", &lesson.audience);
        check_reference(&mut violations, "Lesson time", lesson.lesson_time_id);
        check_reference(&mut violations, "Lesson lecturer", lesson.lecturer_id);
        check_reference(&mut violations, "Lesson group", lesson.group_id);
        violations
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use entity::sea_orm_active_enums::{DayOfWeek, Gender};

    use super::*;

    fn lecturer(phone_number: &str, email: &str) -> Lecturer {
        Lecturer {
            person: Person {
                id: 0,
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                gender: Gender::Female,
                phone_number: phone_number.to_string(),
                email: email.to_string(),
            },
        }
    }

    #[test]
    fn accepts_valid_faculty() {
        let faculty = Faculty {
            id: 0,
            name: "Test Faculty".to_string(),
        };

        assert!(FieldValidator.validate(&faculty).is_empty());
    }

    /// Names must start with two non-blank symbols.
    #[test]
    fn rejects_blank_or_short_names() {
        for name in [" Test", "T", "", "  ", "a b"] {
            let faculty = Faculty {
                id: 0,
                name: name.to_string(),
            };

            assert_eq!(
                FieldValidator.validate(&faculty),
                vec!["Faculty name must have at least two symbols and start with non-white space"],
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn validates_phone_number_format() {
        assert!(FieldValidator
            .validate(&lecturer("+380501234567", "g@navy.mil"))
            .is_empty());

        for phone in ["380501234567", "+38050123456", "+3805012345678", "+38050123456a"] {
            let violations = FieldValidator.validate(&lecturer(phone, "g@navy.mil"));

            assert_eq!(violations.len(), 1, "{phone} should be rejected");
            assert!(violations[0].starts_with("Person phone number"));
        }
    }

    #[test]
    fn validates_email_format() {
        for email in ["plain", "no-domain@", "@no-local.com", "two@@at.com", "sp ace@x.com"] {
            let violations = FieldValidator.validate(&lecturer("+380501234567", email));

            assert_eq!(
                violations,
                vec!["Person email must be formatted well"],
                "{email} should be rejected"
            );
        }
    }

    /// Every violation is reported, not only the first.
    #[test]
    fn aggregates_violations_in_field_order() {
        let lesson = Lesson {
            id: 0,
            name: " ".to_string(),
            audience: "A".to_string(),
            day: DayOfWeek::Monday,
            lesson_time_id: 0,
            lecturer_id: 1,
            group_id: -3,
        };

        let violations = FieldValidator.validate(&lesson);

        assert_eq!(violations.len(), 4);
        assert!(violations[0].starts_with("Lesson name"));
        assert!(violations[1].starts_with("Lesson audience"));
        assert!(violations[2].starts_with("Lesson time"));
        assert!(violations[3].starts_with("Lesson group"));
    }

    #[test]
    fn rejects_lesson_time_ending_before_start() {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

        let reversed = LessonTime {
            id: 0,
            start_time: at(10, 30),
            end_time: at(9, 0),
        };
        let empty = LessonTime {
            id: 0,
            start_time: at(9, 0),
            end_time: at(9, 0),
        };

        assert_eq!(FieldValidator.validate(&reversed).len(), 1);
        assert_eq!(FieldValidator.validate(&empty).len(), 1);
    }

    #[test]
    fn requires_student_group() {
        let student = Student {
            person: lecturer("+380501234567", "s@uni.edu").person,
            group_id: 0,
        };

        assert_eq!(
            FieldValidator.validate(&student),
            vec!["Student group must reference a stored record"]
        );
    }
}
