//! Text layout: greedy wrap, bounded font-fit search, block placement and painting.
//!
//! Sizes are derived from the card width so a layout scales with the card. Every painted line is
//! measured against the text box width; no line is drawn wider than it.

/// Font-fit search.
pub mod fit;
/// Block placement and painting.
pub mod layout;
/// Greedy word wrap.
pub mod wrap;

pub use fit::{Fit, FitParams, fit_text};
pub use layout::{
    LayoutResult, Salutation, compute_layout, compute_simple, layout_and_paint, paint_simple,
};
pub use wrap::wrap_words;
