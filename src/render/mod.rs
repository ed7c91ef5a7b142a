//! Rendering: options, alignment resolution, cell and table assembly.

mod align;
mod cell;
mod options;
mod table;

pub use align::resolve_column_alignment;
pub use cell::render_cell;
pub use options::RenderOptions;
pub use table::{
    is_heading_row, render_table, render_table_cell, render_table_row, WRAPPER_CLASS,
};
