//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on GPUI and represent the registration domain.

mod user;

pub use user::*;
