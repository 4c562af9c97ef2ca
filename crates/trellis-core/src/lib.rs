//! # Trellis core
//!
//! The data side of the renderer: the visual tree handed to the host
//! toolkit, the modifier bag attached to each node, and the small amount of
//! shared machinery widgets need at render time.
//!
//! - [`View`] / [`ViewKind`] — the visual vocabulary. Host primitives
//!   (safe area, drawers, tab bars, scroll containers) appear here as
//!   opaque kinds; Trellis composes them but never implements them.
//! - [`Modifier`] — builder-style layout/visual attributes.
//! - [`Signal`] — observable slot for transient interaction state.
//! - [`locals`] — ambient tab-controller context for bottom-navigation
//!   subtrees.
//!
//! ## Signals
//!
//! ```rust
//! use trellis_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Ambient tab controller
//!
//! ```rust
//! use trellis_core::*;
//!
//! assert!(tab_controller().is_none());
//!
//! let ctrl = TabController::new(0);
//! with_tab_controller(ctrl, || {
//!     let c = require_tab_controller();
//!     c.set_current_index(2);
//!     assert_eq!(c.current_index(), 2);
//! });
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod signal;
pub mod view;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use signal::*;
pub use view::*;
