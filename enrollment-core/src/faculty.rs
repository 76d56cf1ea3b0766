use core::hash::{Hash, Hasher};
use core::ops::RangeInclusive;

use tracing::debug;

use crate::conflict::check_conflict;
use crate::course::Course;
use crate::error::FacultyError;
use crate::student::{non_blank, valid_email};

/// How many courses a faculty member may be asked to teach.
pub const MAX_COURSES: RangeInclusive<u8> = 1..=3;

/// An instructor and the courses they teach.
///
/// A faculty member can be assigned more courses than `max_courses`, which
/// makes them [overloaded](Self::is_overloaded). Equality and hashing ignore
/// the assigned courses.
#[derive(Debug, Clone)]
pub struct Faculty {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    max_courses: u8,
    courses: Vec<Course>,
}

impl Faculty {
    pub fn new(
        id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        max_courses: u8,
    ) -> Result<Self, FacultyError> {
        let mut faculty = Self {
            id: non_blank(id, FacultyError::Id)?,
            first_name: non_blank(first_name, FacultyError::FirstName)?,
            last_name: non_blank(last_name, FacultyError::LastName)?,
            email: String::new(),
            max_courses: *MAX_COURSES.start(),
            courses: Vec::new(),
        };
        faculty.set_email(email)?;
        faculty.set_max_courses(max_courses)?;
        Ok(faculty)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), FacultyError> {
        if !valid_email(email) {
            return Err(FacultyError::Email(email.to_owned()));
        }
        email.clone_into(&mut self.email);
        Ok(())
    }

    #[must_use]
    pub const fn max_courses(&self) -> u8 {
        self.max_courses
    }

    pub fn set_max_courses(&mut self, max_courses: u8) -> Result<(), FacultyError> {
        if !MAX_COURSES.contains(&max_courses) {
            return Err(FacultyError::MaxCourses(max_courses));
        }
        self.max_courses = max_courses;
        Ok(())
    }

    /// Courses taught, in assignment order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn is_overloaded(&self) -> bool {
        self.courses.len() > usize::from(self.max_courses)
    }

    fn check_assign(&self, course: &Course) -> Result<(), FacultyError> {
        for taught in &self.courses {
            if taught.is_duplicate(course) {
                return Err(FacultyError::AlreadyAssigned(course.name().to_owned()));
            }
            check_conflict(taught, course)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn can_assign(&self, course: &Course) -> bool {
        self.check_assign(course).is_ok()
    }

    /// Makes this faculty member the instructor of `course`, replacing any
    /// previous one. Refused if a course with the same name is already taught
    /// or the meeting times conflict.
    pub fn assign(&mut self, course: &mut Course) -> Result<(), FacultyError> {
        self.check_assign(course)?;
        course
            .set_instructor_id(Some(self.id.as_str()))
            .map_err(|_| FacultyError::Id)?;
        debug!(faculty = %self.id, course = course.name(), "assigned course");
        self.courses.push(course.clone());
        Ok(())
    }

    /// Returns whether `course` was taught by this faculty member. Its
    /// instructor is cleared only if it is still this one.
    pub fn unassign(&mut self, course: &mut Course) -> bool {
        let Some(index) = self.courses.iter().position(|taught| {
            taught.name() == course.name() && taught.section() == course.section()
        }) else {
            return false;
        };
        self.courses.remove(index);
        if course.instructor_id() == Some(self.id.as_str()) {
            course.clear_instructor();
        }
        debug!(faculty = %self.id, course = course.name(), "unassigned course");
        true
    }

    /// Drops every assignment and clears the instructor of each course in
    /// `catalog` that this faculty member teaches.
    pub fn reset<'c>(&mut self, catalog: impl IntoIterator<Item = &'c mut Course>) {
        for course in catalog {
            if course.instructor_id() == Some(self.id.as_str()) {
                course.clear_instructor();
            }
        }
        self.courses.clear();
        debug!(faculty = %self.id, "reset teaching schedule");
    }
}

impl PartialEq for Faculty {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.email == other.email
            && self.max_courses == other.max_courses
    }
}

impl Eq for Faculty {}

impl Hash for Faculty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.email.hash(state);
        self.max_courses.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Faculty;
    use crate::activity::TimeInterval;
    use crate::course::Course;
    use crate::error::{ConflictError, FacultyError};

    fn faculty(max_courses: u8) -> Faculty {
        Faculty::new("sesmith5", "Sarah", "Smith", "sesmith5@ncsu.edu", max_courses).unwrap()
    }

    fn course(name: &str, section: &str, days: &str, start: u16, end: u16) -> Course {
        Course::new(
            name,
            "Title",
            section,
            3,
            None,
            10,
            TimeInterval::parse(days, start, end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn identity_checks() {
        for (id, first, last, email, max, error) in [
            (" ", "Sarah", "Smith", "s@ncsu.edu", 2, FacultyError::Id),
            ("ss", "", "Smith", "s@ncsu.edu", 2, FacultyError::FirstName),
            ("ss", "Sarah", " ", "s@ncsu.edu", 2, FacultyError::LastName),
            (
                "ss",
                "Sarah",
                "Smith",
                "s.ncsu@edu",
                2,
                FacultyError::Email("s.ncsu@edu".to_owned()),
            ),
            ("ss", "Sarah", "Smith", "s@ncsu.edu", 0, FacultyError::MaxCourses(0)),
            ("ss", "Sarah", "Smith", "s@ncsu.edu", 4, FacultyError::MaxCourses(4)),
        ] {
            assert_eq!(Faculty::new(id, first, last, email, max).unwrap_err(), error);
        }
        let mut faculty = faculty(3);
        assert_eq!(faculty.max_courses(), 3);
        faculty.set_max_courses(1).unwrap();
        assert_eq!(faculty.set_max_courses(4), Err(FacultyError::MaxCourses(4)));
        assert_eq!(faculty.max_courses(), 1);
    }

    #[test]
    fn assigning_sets_the_instructor() {
        let mut faculty = faculty(2);
        let mut csc216 = course("CSC216", "001", "MW", 1330, 1445);
        faculty.assign(&mut csc216).unwrap();
        assert_eq!(csc216.instructor_id(), Some("sesmith5"));
        assert_eq!(faculty.courses(), [csc216.clone()]);

        assert!(faculty.unassign(&mut csc216));
        assert_eq!(csc216.instructor_id(), None);
        assert!(faculty.courses().is_empty());
        assert!(!faculty.unassign(&mut csc216));
    }

    #[test]
    fn duplicates_and_conflicts_are_refused() {
        let mut faculty = faculty(3);
        faculty
            .assign(&mut course("CSC216", "001", "MW", 1330, 1445))
            .unwrap();

        let mut other_section = course("CSC216", "002", "TH", 800, 915);
        let error = faculty.assign(&mut other_section).unwrap_err();
        assert_eq!(error.to_string(), "Already assigned CSC216");
        assert_eq!(other_section.instructor_id(), None);

        let mut overlapping = course("CSC226", "001", "M", 1400, 1500);
        assert!(!faculty.can_assign(&overlapping));
        let error = faculty.assign(&mut overlapping).unwrap_err();
        assert!(matches!(
            error,
            FacultyError::Conflict(ConflictError::ScheduleConflict { .. })
        ));
        assert_eq!(
            error.to_string(),
            "The course cannot be assigned due to a conflict."
        );
        assert_eq!(faculty.courses().len(), 1);
    }

    #[test]
    fn overloaded_past_max_courses() {
        let mut faculty = faculty(1);
        faculty
            .assign(&mut course("CSC216", "001", "MW", 1330, 1445))
            .unwrap();
        assert!(!faculty.is_overloaded());
        faculty
            .assign(&mut course("CSC226", "001", "TH", 1330, 1445))
            .unwrap();
        assert!(faculty.is_overloaded());
        faculty.set_max_courses(2).unwrap();
        assert!(!faculty.is_overloaded());
    }

    #[test]
    fn reset_clears_only_own_courses() {
        let mut faculty = faculty(3);
        let mut catalog = vec![
            course("CSC216", "001", "MW", 1330, 1445),
            course("CSC226", "001", "TH", 1330, 1445),
            course("CSC230", "001", "F", 1330, 1445),
        ];
        faculty.assign(&mut catalog[0]).unwrap();
        faculty.assign(&mut catalog[1]).unwrap();
        catalog[2].set_instructor_id(Some("jdyoung2")).unwrap();

        faculty.reset(&mut catalog);
        assert!(faculty.courses().is_empty());
        assert_eq!(catalog[0].instructor_id(), None);
        assert_eq!(catalog[1].instructor_id(), None);
        assert_eq!(catalog[2].instructor_id(), Some("jdyoung2"));
    }
}
