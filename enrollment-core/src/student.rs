use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use enrollment_config::StudentLimits;

use crate::course::Course;
use crate::error::{ScheduleError, StudentError};
use crate::roll::CanReceiveActivity;
use crate::schedule::Schedule;

/// Unique, non-blank student identifier such as a unity id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: &str) -> Result<Self, StudentError> {
        if id.trim().is_empty() {
            return Err(StudentError::Id);
        }
        Ok(Self(id.to_owned()))
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StudentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn non_blank<E>(value: &str, error: E) -> Result<String, E> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(value.to_owned())
    }
}

pub(crate) fn valid_email(email: &str) -> bool {
    email
        .find('@')
        .is_some_and(|at| email[at + 1..].contains('.'))
}

/// A student and their schedule.
///
/// Equality and ordering look at the personal data only, never at the
/// schedule. Students sort by last name, then first name, then id.
#[derive(Debug, Clone)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    email: String,
    max_credits: u8,
    limits: StudentLimits,
    schedule: Schedule,
}

impl Student {
    /// Student with the default credit limits, allowed the highest load.
    pub fn new(
        id: StudentId,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Self, StudentError> {
        Self::with_limits(id, first_name, last_name, email, StudentLimits::default())
    }

    pub fn with_limits(
        id: StudentId,
        first_name: &str,
        last_name: &str,
        email: &str,
        limits: StudentLimits,
    ) -> Result<Self, StudentError> {
        let mut student = Self {
            id,
            first_name: non_blank(first_name, StudentError::FirstName)?,
            last_name: non_blank(last_name, StudentError::LastName)?,
            email: String::new(),
            max_credits: limits.max_credits,
            limits,
            schedule: Schedule::new(),
        };
        student.set_email(email)?;
        Ok(student)
    }

    #[must_use]
    pub const fn id(&self) -> &StudentId {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: &str) -> Result<(), StudentError> {
        self.first_name = non_blank(first_name, StudentError::FirstName)?;
        Ok(())
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: &str) -> Result<(), StudentError> {
        self.last_name = non_blank(last_name, StudentError::LastName)?;
        Ok(())
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Needs an `@` with a `.` somewhere after it.
    pub fn set_email(&mut self, email: &str) -> Result<(), StudentError> {
        if !valid_email(email) {
            return Err(StudentError::Email(email.to_owned()));
        }
        email.clone_into(&mut self.email);
        Ok(())
    }

    #[must_use]
    pub const fn max_credits(&self) -> u8 {
        self.max_credits
    }

    pub fn set_max_credits(&mut self, max_credits: u8) -> Result<(), StudentError> {
        if !self.limits.allows_max_credits(max_credits) {
            return Err(StudentError::MaxCredits(max_credits));
        }
        self.max_credits = max_credits;
        Ok(())
    }

    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut Schedule {
        &mut self.schedule
    }

    /// Whether `course` fits the schedule and the credit load.
    #[must_use]
    pub fn can_add(&self, course: &Course) -> bool {
        self.schedule.can_add(course)
            && self.schedule.credits() + u32::from(course.credits())
                <= u32::from(self.max_credits)
    }
}

/// A promoted student gets the course on their schedule, subject to the
/// schedule's own duplicate and conflict checks.
impl CanReceiveActivity<Course> for Student {
    type Error = ScheduleError;

    fn receive_activity(&mut self, activity: &Course) -> Result<(), Self::Error> {
        self.schedule.add_course(activity.clone())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.email == other.email
            && self.max_credits == other.max_credits
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.first_name.hash(state);
        self.last_name.hash(state);
        self.email.hash(state);
        self.max_credits.hash(state);
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.email.cmp(&other.email))
            .then_with(|| self.max_credits.cmp(&other.max_credits))
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
