//! # LabelKit Core
//!
//! Core types and utilities for LabelKit.
//! Provides the millimetre/pixel/percentage conversions shared by every
//! rendering surface, the plain geometry value types, the engine constants
//! and the error taxonomy.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod units;

pub use error::{ensure_dimension, Error, Result, SymbolError};
pub use geometry::{Point, Rect, Size};
pub use units::{mm_to_px, percent_to_px, px_to_mm, px_to_percent, surface_factor};
