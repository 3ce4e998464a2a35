//! Rendering module: block trees to formatted text, macro stripping.

mod block;
mod macros;

pub use block::{render_block, render_entry};
pub use macros::MacroNormalizer;
