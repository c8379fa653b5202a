//! Save parsing and collectible reconciliation for Hogwarts Legacy.
//!
//! The pipeline is strictly linear: the [`container`] parser pulls the
//! character metadata and the embedded SQLite image out of a `.sav` file,
//! [`query`] runs the fixed table queries against that image, and
//! [`reconcile`] compares the results with the [`catalog`]. The
//! [`core_api`] module wraps the whole thing behind an engine/session pair.

pub mod catalog;
pub mod container;
pub mod core_api;
pub mod layout;
pub mod query;
pub mod reader;
pub mod reconcile;
pub mod saves;
