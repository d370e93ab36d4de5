//! Domain layer for the activity signup service.
//!
//! Holds the activity model, the error taxonomy, the seed catalog and the
//! [`store::ActivityStore`] abstraction the HTTP layer talks to.

pub mod activity;
pub mod error;
pub mod seed;
pub mod store;
