use super::glyph::{Glyph, SpriteSet};
use crate::pitch::Direction;

/// Help lines shown beside the organ.
pub const HELP_LINES: [&str; 3] = ["[Z]:Play", "[C]:Shift Octave", "[K]:Kris"];

/// A glyph and whether it is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphState {
    pub glyph: Glyph,
    pub active: bool,
}

/// Everything a renderer needs to draw the panel for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub sprite_set: SpriteSet,
    pub glyphs: [GlyphState; 9],
}

impl PanelView {
    pub fn new(direction: Direction, octave_shift: bool) -> Self {
        let glyphs = Glyph::ALL.map(|glyph| GlyphState {
            glyph,
            active: match glyph {
                Glyph::Direction(d) => d == direction,
                Glyph::ShiftOctave => octave_shift,
            },
        });
        Self {
            sprite_set: SpriteSet::for_octave_shift(octave_shift),
            glyphs,
        }
    }

    pub fn active_glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.glyphs.iter().filter(|g| g.active).map(|g| g.glyph)
    }
}
