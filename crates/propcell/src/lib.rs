#![forbid(unsafe_code)]

//! Synchronous observable value cells.
//!
//! # Role
//! `propcell` provides two tightly coupled primitives for single-threaded,
//! in-process change notification:
//!
//! - [`Event`]: an ordered multicast callback registry with synchronous
//!   fan-out.
//! - [`RefProperty`] / [`OwnedProperty`]: value cells (borrowing or owning
//!   their storage) whose mutating operations trigger an internal [`Event`]
//!   after every write.
//!
//! Both property types implement the [`PropertyCell`] capability trait, so
//! embedding code can be generic over the ownership mode.
//!
//! # Usage model
//! Strictly single-threaded and synchronous: every operation runs to
//! completion before returning, observers are invoked inline on the mutating
//! call, and no internal synchronization exists. Exclusive access is
//! mediated by `&mut self` receivers, so concurrent misuse is a compile
//! error rather than a runtime hazard.
//!
//! ```
//! use propcell::RefProperty;
//!
//! let mut hp = 100u32;
//! let mut prop = RefProperty::bind(&mut hp);
//! prop.observe(|v| println!("hp is now {v}"));
//! prop.set(85); // writes through to `hp`, then notifies
//! ```

pub mod event;
pub mod property;

pub use event::Event;
pub use property::{OwnedProperty, PropertyCell, RefProperty};
