//! # Sequence Panel Layer
//!
//! The public, user-facing layer: one [`SequenceView`] per displayed chain,
//! mapping between the 3D selection world and the linear sequence panel.
//!
//! - [`wrapper`] - The view itself: observed-set construction, selection
//!   propagation, sequence-to-selection queries, per-position accessors
//! - [`color`] - Residue colors and the TOML-loadable panel theme
//! - [`error`] - Binding failures
//!
//! Views are created when a chain enters the panel and dropped when it
//! leaves; they never outlive or mutate the structure they read.

pub mod color;
pub mod error;
pub mod wrapper;

pub use color::{Color, PanelTheme, ThemeError};
pub use error::PanelError;
pub use wrapper::SequenceView;
