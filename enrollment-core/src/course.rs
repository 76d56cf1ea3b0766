use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::activity::{ScheduledActivity, TimeInterval};
use crate::error::{ActivityError, CourseError, RosterError};
use crate::roll::{CanReceiveActivity, DropOutcome, EnrollmentRoster};
use crate::student::StudentId;
use crate::validator::NameValidator;

const NAME_LENGTH: core::ops::RangeInclusive<usize> = 4..=8;
const SECTION_LENGTH: usize = 3;
const CREDITS: core::ops::RangeInclusive<u8> = 1..=5;

/// A course section as offered in the catalog, together with its roll.
///
/// Equality, hashing and ordering look at the catalog data only, never at the
/// roll. Copies, such as the ones on a schedule, keep the roll as it was when
/// they were made.
#[derive(Debug, Clone)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: Option<String>,
    interval: TimeInterval,
    roll: EnrollmentRoster<StudentId>,
}

impl Course {
    /// The roll starts empty with the default roster limits.
    pub fn new(
        name: &str,
        title: &str,
        section: &str,
        credits: u8,
        instructor_id: Option<&str>,
        enrollment_cap: usize,
        interval: TimeInterval,
    ) -> Result<Self, CourseError> {
        if !NAME_LENGTH.contains(&name.len()) {
            return Err(CourseError::NameLength {
                name: name.to_owned(),
            });
        }
        NameValidator::validate(name)?;
        let mut course = Self {
            name: name.to_owned(),
            title: String::new(),
            section: String::new(),
            credits: 0,
            instructor_id: None,
            interval,
            roll: EnrollmentRoster::new(enrollment_cap)?,
        };
        course.set_title(title)?;
        course.set_section(section)?;
        course.set_credits(credits)?;
        course.set_instructor_id(instructor_id)?;
        Ok(course)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), CourseError> {
        if title.is_empty() {
            return Err(ActivityError::InvalidTitle.into());
        }
        title.clone_into(&mut self.title);
        Ok(())
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Sections are exactly three digits, e.g. `001`.
    pub fn set_section(&mut self, section: &str) -> Result<(), CourseError> {
        if section.len() != SECTION_LENGTH || !section.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(CourseError::Section(section.to_owned()));
        }
        section.clone_into(&mut self.section);
        Ok(())
    }

    #[must_use]
    pub const fn credits(&self) -> u8 {
        self.credits
    }

    pub fn set_credits(&mut self, credits: u8) -> Result<(), CourseError> {
        if !CREDITS.contains(&credits) {
            return Err(CourseError::Credits(credits));
        }
        self.credits = credits;
        Ok(())
    }

    /// `None` while no instructor is assigned.
    #[must_use]
    pub fn instructor_id(&self) -> Option<&str> {
        self.instructor_id.as_deref()
    }

    pub fn set_instructor_id(&mut self, instructor_id: Option<&str>) -> Result<(), CourseError> {
        if instructor_id.is_some_and(str::is_empty) {
            return Err(CourseError::InstructorId);
        }
        self.instructor_id = instructor_id.map(str::to_owned);
        Ok(())
    }

    pub fn clear_instructor(&mut self) {
        self.instructor_id = None;
    }

    pub fn set_interval(&mut self, interval: TimeInterval) {
        self.interval = interval;
    }

    /// Two offerings of the same course, possibly different sections.
    #[must_use]
    pub fn is_duplicate(&self, other: &Self) -> bool {
        self.name == other.name
    }

    #[must_use]
    pub const fn roll(&self) -> &EnrollmentRoster<StudentId> {
        &self.roll
    }

    pub fn roll_mut(&mut self) -> &mut EnrollmentRoster<StudentId> {
        &mut self.roll
    }

    /// Drops `student` from the roll. The student promoted into the freed
    /// seat receives this course as it is now, see
    /// [`EnrollmentRoster::drop_and_promote`].
    pub fn drop_student<'r, R, F>(
        &mut self,
        student: &StudentId,
        resolve: F,
    ) -> Result<DropOutcome<StudentId>, RosterError>
    where
        R: CanReceiveActivity<Self> + ?Sized + 'r,
        F: FnOnce(&StudentId) -> Option<&'r mut R>,
    {
        self.roll.offer_seat(student, &*self, resolve)?;
        self.roll.drop(student)
    }

    fn catalog_key(&self) -> (&str, &str, &str, u8, Option<&str>, &TimeInterval) {
        (
            self.name.as_str(),
            self.section.as_str(),
            self.title.as_str(),
            self.credits,
            self.instructor_id.as_deref(),
            &self.interval,
        )
    }
}

impl ScheduledActivity for Course {
    fn title(&self) -> &str {
        &self.title
    }

    fn interval(&self) -> &TimeInterval {
        &self.interval
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_key() == other.catalog_key()
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.catalog_key().hash(state);
    }
}

/// By name, then section, then title.
impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.catalog_key().cmp(&other.catalog_key())
    }
}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} ({})",
            self.name, self.section, self.title, self.interval
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Course;
    use crate::activity::{ScheduledActivity, TimeInterval};
    use crate::error::{ActivityError, CourseError, InvalidTransition, RosterError};
    use crate::roll::{CanReceiveActivity, DropOutcome};
    use crate::student::StudentId;

    fn course(name: &str, section: &str, title: &str) -> Result<Course, CourseError> {
        Course::new(
            name,
            title,
            section,
            3,
            Some("sesmith5"),
            10,
            TimeInterval::parse("MW", 1330, 1445).unwrap(),
        )
    }

    fn id(n: usize) -> StudentId {
        StudentId::new(&format!("s{n:02}")).unwrap()
    }

    #[derive(Default)]
    struct Transcript(Vec<Course>);

    impl CanReceiveActivity<Course> for Transcript {
        type Error = CourseError;

        fn receive_activity(&mut self, activity: &Course) -> Result<(), Self::Error> {
            self.0.push(activity.clone());
            Ok(())
        }
    }

    #[test]
    fn valid_course() {
        let course = course("CSC216", "001", "Software Development Fundamentals").unwrap();
        assert_eq!(course.name(), "CSC216");
        assert_eq!(course.section(), "001");
        assert_eq!(course.title(), "Software Development Fundamentals");
        assert_eq!(course.instructor_id(), Some("sesmith5"));
        assert_eq!(
            course.to_string(),
            "CSC216-001 Software Development Fundamentals (MW 1:30PM-2:45PM)"
        );
    }

    #[test]
    fn name_checks() {
        assert_eq!(
            course("E11", "001", "Intro").unwrap_err(),
            CourseError::NameLength {
                name: "E11".to_owned()
            }
        );
        assert!(matches!(
            course("CSCI2161", "001", "Intro").unwrap_err(),
            CourseError::Name(InvalidTransition::TooManyDigits)
        ));
        assert!(matches!(
            course("CSCI216AB", "001", "Intro").unwrap_err(),
            CourseError::NameLength { .. }
        ));
        assert!(course("E115", "001", "Intro").is_ok());
        assert!(course("CSCI216A", "001", "Intro").is_ok());
    }

    #[test]
    fn field_checks() {
        assert_eq!(
            course("CSC216", "01", "Intro").unwrap_err(),
            CourseError::Section("01".to_owned())
        );
        assert_eq!(
            course("CSC216", "0a1", "Intro").unwrap_err(),
            CourseError::Section("0a1".to_owned())
        );
        assert_eq!(
            course("CSC216", "001", "").unwrap_err(),
            CourseError::Activity(ActivityError::InvalidTitle)
        );
        let mut course = course("CSC216", "001", "Intro").unwrap();
        assert_eq!(course.set_credits(0), Err(CourseError::Credits(0)));
        assert_eq!(course.set_credits(6), Err(CourseError::Credits(6)));
        course.set_credits(5).unwrap();
        assert_eq!(
            course.set_instructor_id(Some("")),
            Err(CourseError::InstructorId)
        );
        course.set_instructor_id(None).unwrap();
        assert_eq!(course.instructor_id(), None);
    }

    #[test]
    fn ordering_and_duplicates() {
        let a = course("CSC216", "001", "B").unwrap();
        let b = course("CSC216", "002", "A").unwrap();
        let c = course("CSC116", "003", "C").unwrap();
        let mut courses = vec![a.clone(), b.clone(), c.clone()];
        courses.sort();
        assert_eq!(courses, [c.clone(), a.clone(), b.clone()]);
        assert!(a.is_duplicate(&b));
        assert!(!a.is_duplicate(&c));
    }

    #[test]
    fn roll_belongs_to_course() {
        let mut course = course("CSC216", "001", "Intro").unwrap();
        assert_eq!(course.roll().enrollment_cap(), 10);
        assert_eq!(course.roll().open_seats(), 10);
        course.roll_mut().enroll(id(0)).unwrap();
        assert!(course.roll().is_enrolled(&id(0)));

        let copy = course.clone();
        course.roll_mut().set_enrollment_cap(20).unwrap();
        assert_eq!(copy, course);

        assert_eq!(
            Course::new("CSC216", "Intro", "001", 3, None, 5, *course.interval()).unwrap_err(),
            CourseError::Roster(RosterError::InvalidCapacity(5))
        );
    }

    #[test]
    fn promoted_student_receives_the_current_course() {
        let mut course = course("CSC216", "001", "Intro").unwrap();
        for n in 0..11 {
            course.roll_mut().enroll(id(n)).unwrap();
        }
        course.set_interval(TimeInterval::parse("TH", 800, 915).unwrap());
        course.set_title("Intro to Java").unwrap();

        let mut transcript = Transcript::default();
        let outcome = course
            .drop_student(&id(3), |next| {
                assert_eq!(next, &id(10));
                Some(&mut transcript)
            })
            .unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Dropped {
                promoted: Some(id(10))
            }
        );
        assert_eq!(transcript.0, [course.clone()]);
        assert_eq!(transcript.0[0].interval().to_string(), "TH 8:00AM-9:15AM");
        assert!(course.roll().is_enrolled(&id(10)));
    }
}
