//! Scheduled notifications posted to a Discord channel.
//!
//! - [`schedule`] - computes the next firing time of a daily, weekly or monthly schedule
//! - [`messages`] - notification embeds
//! - [`notifier`] - builds each notification from the tracker and posts it

pub mod messages;
pub mod notifier;
pub mod schedule;

pub use crate::notifications::notifier::{Notification, Notifier};
pub use crate::notifications::schedule::Schedule;
