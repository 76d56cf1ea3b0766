use enrollment_collections::QueueError;
use thiserror::Error;

/// Reason a course name was rejected by the name state machine. The messages
/// are part of the public contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidTransition {
    #[error("Course name can only contain letters and digits.")]
    NotAlphanumeric,
    #[error("Course name must start with a letter.")]
    MustStartWithLetter,
    #[error("Course name cannot start with more than 4 letters.")]
    TooManyLetters,
    #[error("Course name must have 3 digits.")]
    MustHaveThreeDigits,
    #[error("Course name can only have 3 digits.")]
    TooManyDigits,
    #[error("Course name can only have a 1 letter suffix.")]
    SuffixTooLong,
    #[error("Course name cannot contain digits after the suffix.")]
    DigitAfterSuffix,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("invalid title")]
    InvalidTitle,
    #[error("invalid meeting days {0:?}")]
    InvalidMeetingDays(String),
    #[error("invalid meeting time {0}, expected hour * 100 + minute")]
    InvalidTime(u16),
    #[error("meeting ends at {end} before it starts at {start}")]
    EndBeforeStart { start: u16, end: u16 },
    #[error("arranged meetings cannot have a start or end time")]
    ArrangedWithTime,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("schedule conflict between {existing} and {candidate}")]
    ScheduleConflict { existing: String, candidate: String },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentRefusal {
    #[error("entity has no identifier")]
    Anonymous,
    #[error("already on the roll")]
    AlreadyEnrolled,
    #[error("already on the waitlist")]
    AlreadyWaitlisted,
    #[error("the waitlist is full")]
    WaitlistFull,
    /// The roll or waitlist turned down an entity that passed every check
    /// above. Only reachable if the two lists disagree with the roster's
    /// bookkeeping.
    #[error("roster storage rejected the entity: {0}")]
    Storage(QueueError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("invalid enrollment: {0}")]
    InvalidEnrollment(EnrollmentRefusal),
    #[error("invalid enrollment cap {0}")]
    InvalidCapacity(usize),
    #[error("{0}")]
    InvalidLimits(String),
    #[error("waitlisted entity could not take the open seat: {0}")]
    PromotionRefused(String),
}

impl From<EnrollmentRefusal> for RosterError {
    fn from(value: EnrollmentRefusal) -> Self {
        Self::InvalidEnrollment(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("invalid course name {name:?}")]
    NameLength { name: String },
    #[error("invalid course name: {0}")]
    Name(#[from] InvalidTransition),
    #[error("invalid section {0:?}")]
    Section(String),
    #[error("invalid credits {0}")]
    Credits(u8),
    #[error("invalid instructor id")]
    InstructorId,
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error(transparent)]
    Roster(#[from] RosterError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("You are already enrolled in {0}")]
    AlreadyEnrolled(String),
    #[error("The course cannot be added due to a conflict.")]
    Conflict(#[from] ConflictError),
    #[error("schedule title cannot be empty")]
    InvalidTitle,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudentError {
    #[error("invalid student id")]
    Id,
    #[error("invalid first name")]
    FirstName,
    #[error("invalid last name")]
    LastName,
    #[error("invalid email {0:?}")]
    Email(String),
    #[error("invalid max credits {0}")]
    MaxCredits(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacultyError {
    #[error("invalid faculty id")]
    Id,
    #[error("invalid first name")]
    FirstName,
    #[error("invalid last name")]
    LastName,
    #[error("invalid email {0:?}")]
    Email(String),
    #[error("invalid max courses {0}")]
    MaxCourses(u8),
    #[error("Already assigned {0}")]
    AlreadyAssigned(String),
    #[error("The course cannot be assigned due to a conflict.")]
    Conflict(#[from] ConflictError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Name(#[from] InvalidTransition),
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    Faculty(#[from] FacultyError),
}

pub type Result<T> = core::result::Result<T, Error>;
