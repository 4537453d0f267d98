//! Display-only view of the organ state: which glyph is lit and which
//! sprite set is shown.

mod glyph;
mod view;

pub use glyph::{Glyph, SpriteSet, SpriteShape};
pub use view::{GlyphState, HELP_LINES, PanelView};
