use crate::pitch::Direction;

/// Sprite artwork family. The lower set is shown while the octave is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSet {
    Higher,
    Lower,
}

impl SpriteSet {
    pub fn for_octave_shift(octave_shift: bool) -> Self {
        if octave_shift { Self::Lower } else { Self::Higher }
    }
}

/// Sprite shape, rotated per glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteShape {
    Dot,
    Arrow,
    DiagonalArrow,
    Shift,
}

/// One of the nine panel glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Direction(Direction),
    ShiftOctave,
}

impl Glyph {
    /// Display order on the panel.
    pub const ALL: [Glyph; 9] = [
        Glyph::Direction(Direction::None),
        Glyph::Direction(Direction::Right),
        Glyph::Direction(Direction::DownRight),
        Glyph::Direction(Direction::Down),
        Glyph::Direction(Direction::DownLeft),
        Glyph::Direction(Direction::Left),
        Glyph::Direction(Direction::UpLeft),
        Glyph::Direction(Direction::Up),
        Glyph::ShiftOctave,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Direction(direction) => direction.id(),
            Self::ShiftOctave => "shift-octave",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Direction(Direction::None) => '●',
            Self::Direction(Direction::Right) => '→',
            Self::Direction(Direction::DownRight) => '↘',
            Self::Direction(Direction::Down) => '↓',
            Self::Direction(Direction::DownLeft) => '↙',
            Self::Direction(Direction::Left) => '←',
            Self::Direction(Direction::UpLeft) => '↖',
            Self::Direction(Direction::Up) => '↑',
            Self::ShiftOctave => 'ꕷ',
        }
    }

    pub fn shape(self) -> SpriteShape {
        match self {
            Self::Direction(Direction::None) => SpriteShape::Dot,
            Self::Direction(
                Direction::DownRight | Direction::DownLeft | Direction::UpLeft,
            ) => SpriteShape::DiagonalArrow,
            Self::Direction(_) => SpriteShape::Arrow,
            Self::ShiftOctave => SpriteShape::Shift,
        }
    }

    /// Clockwise rotation applied to the base sprite, in degrees.
    /// The base arrow points down; the base diagonal points down-right.
    pub fn rotation_deg(self) -> f32 {
        match self {
            Self::Direction(Direction::Right) => 270.0,
            Self::Direction(Direction::DownLeft | Direction::Left) => 90.0,
            Self::Direction(Direction::UpLeft | Direction::Up) => 180.0,
            _ => 0.0,
        }
    }
}
