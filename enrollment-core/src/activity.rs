use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use itertools::Itertools as _;

use crate::conflict;
use crate::error::{ActivityError, ConflictError};

bitflags! {
    /// Days an activity meets on. `ARRANGED` marks an activity without a fixed
    /// meeting time and is never combined with a weekday.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct MeetingDays: u8 {
        const MONDAY = 1;
        const TUESDAY = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY = 1 << 3;
        const FRIDAY = 1 << 4;
        const ARRANGED = 1 << 5;
    }
}

const DAY_LETTERS: [(MeetingDays, char); 5] = [
    (MeetingDays::MONDAY, 'M'),
    (MeetingDays::TUESDAY, 'T'),
    (MeetingDays::WEDNESDAY, 'W'),
    (MeetingDays::THURSDAY, 'H'),
    (MeetingDays::FRIDAY, 'F'),
];

const ARRANGED_LETTER: char = 'A';

impl MeetingDays {
    pub const WEEKDAYS: Self = Self::MONDAY
        .union(Self::TUESDAY)
        .union(Self::WEDNESDAY)
        .union(Self::THURSDAY)
        .union(Self::FRIDAY);

    #[must_use]
    pub const fn weekdays(self) -> Self {
        self.intersection(Self::WEEKDAYS)
    }

    #[must_use]
    pub const fn is_arranged(self) -> bool {
        self.contains(Self::ARRANGED)
    }

    /// Either exactly `ARRANGED` or a non-empty set of weekdays.
    #[must_use]
    pub fn is_well_formed(self) -> bool {
        self == Self::ARRANGED || (!self.is_empty() && !self.is_arranged())
    }

    fn from_letter(letter: char) -> Option<Self> {
        DAY_LETTERS
            .iter()
            .find(|(_, day_letter)| *day_letter == letter)
            .map(|(day, _)| *day)
    }
}

impl FromStr for MeetingDays {
    type Err = ActivityError;

    /// Parses the day letters `M T W H F`, or `A` on its own.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ActivityError::InvalidMeetingDays(s.to_owned());
        match s {
            "" => return Err(invalid()),
            "A" => return Ok(Self::ARRANGED),
            _ => {}
        }
        s.chars().try_fold(Self::empty(), |days, letter| {
            let day = Self::from_letter(letter)
                .filter(|day| !days.contains(*day))
                .ok_or_else(invalid)?;
            Ok(days | day)
        })
    }
}

impl fmt::Display for MeetingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_arranged() {
            write!(f, "{ARRANGED_LETTER}")?;
        }
        let letters = DAY_LETTERS
            .iter()
            .filter(|(day, _)| self.contains(*day))
            .map(|(_, letter)| letter)
            .join("");
        f.write_str(&letters)
    }
}

/// Time of day in the `hour * 100 + minute` encoding, e.g. `1330` for 1:30PM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeetingTime(u16);

impl MeetingTime {
    pub const MIDNIGHT: Self = Self(0);
    const MAX_HOUR: u16 = 23;
    const MAX_MINUTE: u16 = 59;

    pub const fn new(encoded: u16) -> Result<Self, ActivityError> {
        if encoded / 100 > Self::MAX_HOUR || encoded % 100 > Self::MAX_MINUTE {
            return Err(ActivityError::InvalidTime(encoded));
        }
        Ok(Self(encoded))
    }

    #[must_use]
    pub const fn encoded(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 100
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 100
    }

    #[must_use]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.hour() * 60 + self.minute()
    }
}

impl TryFrom<u16> for MeetingTime {
    type Error = ActivityError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, meridiem) = match self.hour() {
            0 => (12, "AM"),
            hour @ 1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            hour => (hour - 12, "PM"),
        };
        write!(f, "{hour}:{:02}{meridiem}", self.minute())
    }
}

/// When an activity meets. Arranged intervals start and end at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeInterval {
    days: MeetingDays,
    start: MeetingTime,
    end: MeetingTime,
}

impl TimeInterval {
    pub fn new(days: MeetingDays, start: u16, end: u16) -> Result<Self, ActivityError> {
        if !days.is_well_formed() {
            return Err(ActivityError::InvalidMeetingDays(days.to_string()));
        }
        let start = MeetingTime::new(start)?;
        let end = MeetingTime::new(end)?;
        if days.is_arranged() && (start != MeetingTime::MIDNIGHT || end != MeetingTime::MIDNIGHT) {
            return Err(ActivityError::ArrangedWithTime);
        }
        if start > end {
            return Err(ActivityError::EndBeforeStart {
                start: start.encoded(),
                end: end.encoded(),
            });
        }
        Ok(Self { days, start, end })
    }

    /// Parses the day letters and validates the times in one step.
    pub fn parse(days: &str, start: u16, end: u16) -> Result<Self, ActivityError> {
        Self::new(days.parse()?, start, end)
    }

    #[must_use]
    pub const fn arranged() -> Self {
        Self {
            days: MeetingDays::ARRANGED,
            start: MeetingTime::MIDNIGHT,
            end: MeetingTime::MIDNIGHT,
        }
    }

    /// Replaces days and times together. On error nothing changes.
    pub fn set(&mut self, days: MeetingDays, start: u16, end: u16) -> Result<(), ActivityError> {
        *self = Self::new(days, start, end)?;
        Ok(())
    }

    #[must_use]
    pub const fn days(&self) -> MeetingDays {
        self.days
    }

    #[must_use]
    pub const fn start(&self) -> MeetingTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> MeetingTime {
        self.end
    }

    #[must_use]
    pub const fn is_arranged(&self) -> bool {
        self.days.is_arranged()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_arranged() {
            f.write_str("Arranged")
        } else {
            write!(f, "{} {}-{}", self.days, self.start, self.end)
        }
    }
}

/// Anything with a title and a meeting time that can clash with another
/// activity.
pub trait ScheduledActivity {
    fn title(&self) -> &str;

    fn interval(&self) -> &TimeInterval;

    fn check_conflict(&self, other: &dyn ScheduledActivity) -> Result<(), ConflictError> {
        conflict::check_conflict(self, other)
    }
}
