use core::fmt;

use enrollment_collections::list::Iter;
use enrollment_collections::{BoundedUniqueList, FifoWaitQueue, QueueError};
use enrollment_config::RosterLimits;
use tracing::{debug, trace, warn};

use crate::error::{EnrollmentRefusal, RosterError};

/// Something that can be handed a confirmed seat in an activity `A`, e.g. a
/// student whose schedule gains the course.
pub trait CanReceiveActivity<A: ?Sized> {
    type Error: fmt::Display;

    fn receive_activity(&mut self, activity: &A) -> Result<(), Self::Error>;
}

/// Where [`EnrollmentRoster::enroll`] put an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Roll,
    /// 1-based place in the waitlist.
    Waitlist { position: usize },
}

/// What [`EnrollmentRoster::drop`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome<E> {
    /// Removed from the roll. `promoted` took the freed seat and still has to
    /// receive the activity unless [`EnrollmentRoster::drop_and_promote`] was
    /// used.
    Dropped { promoted: Option<E> },
    /// Removed from the waitlist.
    Withdrawn,
    NotEnrolled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterStatus {
    HasOpenSeats,
    FullNoWaitlist,
    FullWithWaitlist(usize),
}

/// Enrolled and waitlisted entities of one activity, usually owned by that
/// activity (see [`Course::roll`](crate::Course::roll)).
///
/// An entity is on at most one of roll and waitlist. Entities are told apart by
/// equality and must expose a non-blank identifier through [`AsRef<str>`].
#[derive(Debug, Clone)]
pub struct EnrollmentRoster<E> {
    roll: BoundedUniqueList<E>,
    waitlist: FifoWaitQueue<E>,
    limits: RosterLimits,
}

fn is_blank<E: AsRef<str>>(entity: &E) -> bool {
    entity.as_ref().trim().is_empty()
}

fn storage(error: impl Into<QueueError>) -> EnrollmentRefusal {
    EnrollmentRefusal::Storage(error.into())
}

impl<E> EnrollmentRoster<E> {
    /// Roster with the default limits: enrollment cap between 10 and 250 and
    /// room for 10 on the waitlist.
    pub fn new(enrollment_cap: usize) -> Result<Self, RosterError> {
        Self::with_limits(enrollment_cap, RosterLimits::default())
    }

    /// Fails with [`RosterError::InvalidLimits`] if `limits` do not pass
    /// [`RosterLimits::validate`].
    pub fn with_limits(enrollment_cap: usize, limits: RosterLimits) -> Result<Self, RosterError> {
        limits
            .validate()
            .map_err(|error| RosterError::InvalidLimits(error.to_string()))?;
        if !limits.allows_cap(enrollment_cap) {
            return Err(RosterError::InvalidCapacity(enrollment_cap));
        }
        Ok(Self {
            roll: BoundedUniqueList::new(enrollment_cap),
            waitlist: FifoWaitQueue::new(limits.waitlist_capacity),
            limits,
        })
    }

    #[must_use]
    pub const fn enrollment_cap(&self) -> usize {
        self.roll.capacity()
    }

    /// Fails if `enrollment_cap` is outside the limits or below the number of
    /// enrolled entities. Raising the cap does not promote anyone.
    pub fn set_enrollment_cap(&mut self, enrollment_cap: usize) -> Result<(), RosterError> {
        if !self.limits.allows_cap(enrollment_cap) {
            return Err(RosterError::InvalidCapacity(enrollment_cap));
        }
        self.roll
            .set_capacity(enrollment_cap)
            .map_err(|_| RosterError::InvalidCapacity(enrollment_cap))?;
        debug!(enrollment_cap, "changed enrollment cap");
        Ok(())
    }

    #[must_use]
    pub fn open_seats(&self) -> usize {
        self.enrollment_cap().saturating_sub(self.roll.len())
    }

    #[must_use]
    pub fn number_enrolled(&self) -> usize {
        self.roll.len()
    }

    #[must_use]
    pub fn number_on_waitlist(&self) -> usize {
        self.waitlist.len()
    }

    #[must_use]
    pub fn status(&self) -> RosterStatus {
        match (self.open_seats(), self.waitlist.len()) {
            (1.., _) => RosterStatus::HasOpenSeats,
            (0, 0) => RosterStatus::FullNoWaitlist,
            (0, waiting) => RosterStatus::FullWithWaitlist(waiting),
        }
    }

    /// Enrolled entities in enrollment order.
    #[must_use]
    pub const fn roll(&self) -> Iter<'_, E> {
        self.roll.iter()
    }

    /// Waitlisted entities, next to be promoted first.
    #[must_use]
    pub const fn waitlist(&self) -> Iter<'_, E> {
        self.waitlist.iter()
    }

    #[must_use]
    pub const fn limits(&self) -> &RosterLimits {
        &self.limits
    }
}

impl<E: AsRef<str> + PartialEq> EnrollmentRoster<E> {
    fn check_enroll(&self, entity: &E) -> Result<(), EnrollmentRefusal> {
        if is_blank(entity) {
            Err(EnrollmentRefusal::Anonymous)
        } else if self.roll.contains(entity) {
            Err(EnrollmentRefusal::AlreadyEnrolled)
        } else if self.waitlist.contains(entity) {
            Err(EnrollmentRefusal::AlreadyWaitlisted)
        } else if self.waitlist.is_full() {
            Err(EnrollmentRefusal::WaitlistFull)
        } else {
            Ok(())
        }
    }

    /// Whether [`enroll`](Self::enroll) would accept `entity`.
    #[must_use]
    pub fn can_enroll(&self, entity: &E) -> bool {
        self.check_enroll(entity).is_ok()
    }

    #[must_use]
    pub fn is_enrolled(&self, entity: &E) -> bool {
        self.roll.contains(entity)
    }

    #[must_use]
    pub fn is_waitlisted(&self, entity: &E) -> bool {
        self.waitlist.contains(entity)
    }

    /// Puts `entity` on the roll if there is an open seat, otherwise at the end
    /// of the waitlist. A full waitlist refuses everyone, even while seats are
    /// open.
    pub fn enroll(&mut self, entity: E) -> Result<Placement, RosterError> {
        self.check_enroll(&entity).inspect_err(|reason| {
            trace!(entity = entity.as_ref(), %reason, "refused enrollment");
        })?;
        let placement = if self.roll.is_full() {
            Placement::Waitlist {
                position: self.waitlist.len() + 1,
            }
        } else {
            Placement::Roll
        };
        debug!(entity = entity.as_ref(), ?placement, "enrolling");
        match placement {
            Placement::Roll => self.roll.push_back(entity).map_err(storage)?,
            Placement::Waitlist { .. } => self.waitlist.enqueue(entity).map_err(storage)?,
        }
        Ok(placement)
    }
}

impl<E: AsRef<str> + PartialEq + Clone> EnrollmentRoster<E> {
    /// Removes `entity` from the roll or the waitlist. Dropping someone who is
    /// on neither is not an error.
    ///
    /// Freeing a seat moves the head of the waitlist onto the roll. The
    /// promoted entity is returned and is not told about its new seat, see
    /// [`drop_and_promote`](Self::drop_and_promote) for that.
    pub fn drop(&mut self, entity: &E) -> Result<DropOutcome<E>, RosterError> {
        if is_blank(entity) {
            return Err(EnrollmentRefusal::Anonymous.into());
        }
        if self.roll.remove_item(entity).is_some() {
            debug!(entity = entity.as_ref(), "dropped from roll");
            let promoted = self.promote()?;
            return Ok(DropOutcome::Dropped { promoted });
        }
        if self.waitlist.withdraw(entity).is_some() {
            debug!(entity = entity.as_ref(), "withdrew from waitlist");
            return Ok(DropOutcome::Withdrawn);
        }
        trace!(entity = entity.as_ref(), "nothing to drop");
        Ok(DropOutcome::NotEnrolled)
    }

    fn promote(&mut self) -> Result<Option<E>, RosterError> {
        let Ok(next) = self.waitlist.dequeue() else {
            return Ok(None);
        };
        self.roll.push_back(next.clone()).map_err(storage)?;
        debug!(entity = next.as_ref(), "promoted from waitlist");
        Ok(Some(next))
    }

    /// Asks the entity that a drop of `entity` would promote to receive
    /// `activity`. Nothing changes here; a drop that frees no seat for the
    /// waitlist asks nobody.
    pub(crate) fn offer_seat<'r, A, R, F>(
        &self,
        entity: &E,
        activity: &A,
        resolve: F,
    ) -> Result<(), RosterError>
    where
        A: ?Sized,
        R: CanReceiveActivity<A> + ?Sized + 'r,
        F: FnOnce(&E) -> Option<&'r mut R>,
    {
        if is_blank(entity) {
            return Err(EnrollmentRefusal::Anonymous.into());
        }
        let Some(next) = self.waitlist.peek().filter(|_| self.roll.contains(entity)) else {
            return Ok(());
        };
        let Some(receiver) = resolve(next) else {
            warn!(entity = next.as_ref(), "no receiver for promoted entity");
            return Err(RosterError::PromotionRefused(format!(
                "{} cannot be found",
                next.as_ref()
            )));
        };
        receiver.receive_activity(activity).map_err(|error| {
            warn!(entity = next.as_ref(), %error, "promotion refused");
            RosterError::PromotionRefused(error.to_string())
        })
    }

    /// Like [`drop`](Self::drop), but the entity promoted into the freed seat
    /// receives `activity` through `resolve`, which maps the promoted
    /// identifier to its receiver.
    ///
    /// The receiver is asked before anything changes. If it cannot be resolved
    /// or refuses, the result is [`RosterError::PromotionRefused`] and the
    /// roster is left as it was.
    pub fn drop_and_promote<'r, A, R, F>(
        &mut self,
        entity: &E,
        activity: &A,
        resolve: F,
    ) -> Result<DropOutcome<E>, RosterError>
    where
        A: ?Sized,
        R: CanReceiveActivity<A> + ?Sized + 'r,
        F: FnOnce(&E) -> Option<&'r mut R>,
    {
        self.offer_seat(entity, activity, resolve)?;
        self.drop(entity)
    }
}
