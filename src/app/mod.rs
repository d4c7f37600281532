//! Application layer: the state container and screen routing.
//!
//! This module ties the leaf components together. The data flow is
//! unidirectional and synchronous:
//!
//! ```text
//! user intent → Router / AppContext mutation → stores updated
//!                                   │
//!                    catalog::query recomputes derived view
//!                                   │
//!                         screens re-render from it
//! ```
//!
//! # Modules
//!
//! - [`context`]: [`AppContext`], the explicitly owned state container
//! - [`router`]: [`Router`], [`Page`], and [`Screen`]

pub mod context;
pub mod router;

pub use context::AppContext;
pub use router::{Page, Router, Screen};
