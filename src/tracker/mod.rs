//! Books, movies, activities and their daily reports.
//!
//! - [`structs`] - domain types and their sheet row layout
//! - [`service`] - the [`Tracker`] reading and writing them through a data source
//! - [`query`] - searches and report filters
//! - [`stats`] - aggregations for statistics and scheduled reports

pub mod query;
pub mod service;
pub mod stats;
pub mod structs;

pub use crate::tracker::query::SearchScope;
pub use crate::tracker::service::{NewItem, Tracker};
pub use crate::tracker::structs::{Category, Item, Report, Status};
