//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the display/formatting engine.
//! CONTEXT: Re-exports the cell value type and its constructors for use by
//! the table builders, the game data crate, and the renderers.

pub mod displayable;
pub mod number_format;

// Re-export commonly used types at the crate root
pub use displayable::{
    blank, ceil, checked, fixed, fixed_with_unit, group, humanize_name, integer, item,
    item_group, large, n_of, number, percent, ratio, text, time, Displayable, NumberError,
    ToDisplayable,
};
pub use number_format::{format_number, NumberFormat};
