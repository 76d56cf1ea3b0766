//! Containers backing enrollment rolls and waitlists: a linked list with a
//! hard capacity that refuses equal elements, and a FIFO queue built on it.

pub mod error;
pub mod list;
pub mod queue;

pub use error::{CollectionError, QueueError};
pub use list::BoundedUniqueList;
pub use queue::FifoWaitQueue;
