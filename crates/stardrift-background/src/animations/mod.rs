//! Backdrop animations.
//!
//! The starfield and the floaters keep state between frames; the nebula glow
//! is computed from position only.

pub mod floaters;
pub mod nebula;
pub mod starfield;
