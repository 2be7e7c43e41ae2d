//! rosterdb - an in-memory store of person records
//!
//! Records (id, name, age, salary) live in an ordered in-memory store
//! with add/edit/delete, exact-match search, stable in-place sorting and
//! flat-text persistence. The `cli` module wraps the store in a menu
//! shell and a few one-shot commands.

pub mod cli;
pub mod observability;
pub mod record;
pub mod store;
