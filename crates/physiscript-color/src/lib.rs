//! Physiscript color system
//!
//! This crate provides color handling for physiscript, including:
//! - An RGBA [`Color`] value type with RGB/HTML/hex conversions
//! - The predefined color palette and its constant identifiers
//! - A read-only [`ColorRegistry`] for name lookup and enumeration
//!
//! # Example
//!
//! ```rust
//! use physiscript_color::{Color, ColorRegistry};
//!
//! let registry = ColorRegistry::new();
//!
//! let red = registry.get("red")?;
//! assert_eq!(red.rgb(), (255, 0, 0));
//! assert_eq!(red.html(false), "#FF0000");
//!
//! // Constant-based access yields the same colors
//! assert_eq!(physiscript_color::consts::RED, red);
//! # Ok::<(), physiscript_color::ColorError>(())
//! ```

mod color;
mod error;
mod palette;
mod registry;

pub use color::Color;
pub use error::ColorError;
pub use palette::{constant_ident, consts, COLOR_COUNT, PALETTE};
pub use registry::ColorRegistry;
