//! Gather Core Types
//!
//! This crate provides the foundational types used throughout Gather:
//! - Identity types (RecordId) and identifier generation (IdSource)
//! - Collection names and lookup descriptions (Collection, Lookup)
//! - Record structures (Account, Event, Location, AttendanceLink)
//! - Patch structures for partial updates
//! - The Record trait that ties a record to its collection, patch and key

mod collection;
mod entity;
mod id;
mod record;

pub use collection::*;
pub use entity::*;
pub use id::*;
pub use record::*;
