//! Course enrollment: name validation, meeting times and schedule conflicts,
//! course rosters with a waitlist that fills seats as they open, and the
//! students and faculty on either side of a course.

pub mod activity;
pub mod conflict;
pub mod course;
pub mod error;
pub mod faculty;
pub mod roll;
pub mod schedule;
pub mod student;
pub mod validator;

pub use activity::{MeetingDays, MeetingTime, ScheduledActivity, TimeInterval};
pub use conflict::{check_conflict, conflicts};
pub use course::Course;
pub use enrollment_config::{RosterLimits, StudentLimits};
pub use error::{Error, Result};
pub use faculty::Faculty;
pub use roll::{CanReceiveActivity, DropOutcome, EnrollmentRoster, Placement, RosterStatus};
pub use schedule::Schedule;
pub use student::{Student, StudentId};
pub use validator::NameValidator;
