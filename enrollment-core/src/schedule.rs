use core::fmt;

use itertools::Itertools as _;
use tracing::debug;

use crate::conflict::check_conflict;
use crate::course::Course;
use crate::error::ScheduleError;

pub const DEFAULT_TITLE: &str = "My Schedule";

/// The courses one person is taking. Course names are unique and no two
/// courses conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    title: String,
    courses: Vec<Course>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            courses: Vec::new(),
        }
    }
}

impl Schedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), ScheduleError> {
        if title.trim().is_empty() {
            return Err(ScheduleError::InvalidTitle);
        }
        title.clone_into(&mut self.title);
        Ok(())
    }

    fn check_add(&self, course: &Course) -> Result<(), ScheduleError> {
        for existing in &self.courses {
            if existing.is_duplicate(course) {
                return Err(ScheduleError::AlreadyEnrolled(course.name().to_owned()));
            }
            check_conflict(existing, course)?;
        }
        Ok(())
    }

    /// Appends `course` unless a course with the same name is already on the
    /// schedule or it conflicts with one that is.
    pub fn add_course(&mut self, course: Course) -> Result<(), ScheduleError> {
        self.check_add(&course)?;
        debug!(course = course.name(), schedule = %self.title, "added course");
        self.courses.push(course);
        Ok(())
    }

    #[must_use]
    pub fn can_add(&self, course: &Course) -> bool {
        self.check_add(course).is_ok()
    }

    /// Returns whether `course` was on the schedule.
    pub fn remove_course(&mut self, course: &Course) -> bool {
        let Some(index) = self.courses.iter().position(|existing| existing == course) else {
            return false;
        };
        self.courses.remove(index);
        true
    }

    /// Drops every course and restores the default title.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn credits(&self) -> u32 {
        self.courses
            .iter()
            .map(|course| u32::from(course.credits()))
            .sum()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.title)?;
        if self.courses.is_empty() {
            f.write_str("no courses")
        } else {
            f.write_str(&self.courses.iter().join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Schedule, DEFAULT_TITLE};
    use crate::activity::TimeInterval;
    use crate::course::Course;
    use crate::error::{ConflictError, ScheduleError};

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
    fn add_and_remove() {
        let mut schedule = Schedule::new();
        assert_eq!(schedule.title(), DEFAULT_TITLE);
        let csc216 = course("CSC216", "001", "MW", 1330, 1445);
        let csc226 = course("CSC226", "001", "TH", 1330, 1445);
        schedule.add_course(csc216.clone()).unwrap();
        schedule.add_course(csc226.clone()).unwrap();
        assert_eq!(schedule.courses(), [csc216.clone(), csc226.clone()]);
        assert_eq!(schedule.credits(), 6);
        assert!(schedule.remove_course(&csc216));
        assert!(!schedule.remove_course(&csc216));
        assert_eq!(schedule.courses(), [csc226]);
    }

    #[test]
    fn same_name_is_already_enrolled() {
        let mut schedule = Schedule::new();
        schedule
            .add_course(course("CSC216", "001", "MW", 1330, 1445))
            .unwrap();
        let other_section = course("CSC216", "002", "TH", 800, 915);
        assert!(!schedule.can_add(&other_section));
        let error = schedule.add_course(other_section).unwrap_err();
        assert_eq!(error, ScheduleError::AlreadyEnrolled("CSC216".to_owned()));
        assert_eq!(error.to_string(), "You are already enrolled in CSC216");
    }

    #[test]
    fn conflicting_course_is_refused() {
        let mut schedule = Schedule::new();
        schedule
            .add_course(course("CSC216", "001", "MW", 1330, 1445))
            .unwrap();
        let error = schedule
            .add_course(course("MA141", "001", "WF", 1445, 1600))
            .unwrap_err();
        assert!(matches!(
            error,
            ScheduleError::Conflict(ConflictError::ScheduleConflict { .. })
        ));
        assert_eq!(
            error.to_string(),
            "The course cannot be added due to a conflict."
        );
        assert_eq!(schedule.courses().len(), 1);
        assert!(schedule.can_add(&course("MA141", "001", "A", 0, 0)));
    }

    #[test]
    fn title_and_reset() {
        let mut schedule = Schedule::new();
        assert_eq!(schedule.set_title(" "), Err(ScheduleError::InvalidTitle));
        schedule.set_title("Fall").unwrap();
        schedule
            .add_course(course("CSC216", "001", "MW", 1330, 1445))
            .unwrap();
        assert_eq!(
            schedule.to_string(),
            "Fall: CSC216-001 Title (MW 1:30PM-2:45PM)"
        );
        schedule.reset();
        assert_eq!(schedule, Schedule::new());
        assert_eq!(schedule.to_string(), "My Schedule: no courses");
    }
}
