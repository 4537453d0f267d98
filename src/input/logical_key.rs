/// The fixed set of keys the organ reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Up,
    Down,
    Left,
    Right,
    /// Held modifier: transposes the played note down one octave.
    OctaveShift,
    /// Main trigger.
    Play,
    /// Easter-egg trigger.
    EasterEgg,
}

impl LogicalKey {
    pub const COUNT: usize = 7;

    pub const ALL: [LogicalKey; Self::COUNT] = [
        LogicalKey::Up,
        LogicalKey::Down,
        LogicalKey::Left,
        LogicalKey::Right,
        LogicalKey::OctaveShift,
        LogicalKey::Play,
        LogicalKey::EasterEgg,
    ];

    /// Map a DOM-style key name to a logical key.
    ///
    /// Arrow names match exactly; letter keys match case-insensitively.
    /// Anything else is untracked.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ if name.eq_ignore_ascii_case("c") => Some(Self::OctaveShift),
            _ if name.eq_ignore_ascii_case("z") => Some(Self::Play),
            _ if name.eq_ignore_ascii_case("k") => Some(Self::EasterEgg),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::OctaveShift => 4,
            Self::Play => 5,
            Self::EasterEgg => 6,
        }
    }

    /// Arrow keys. Only these suppress the host's default key action.
    pub fn is_directional(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// Keys whose rising edge starts a voice.
    pub fn is_trigger(self) -> bool {
        matches!(self, Self::Play | Self::EasterEgg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_names_are_case_sensitive() {
        assert_eq!(
            LogicalKey::from_key_name("ArrowRight"),
            Some(LogicalKey::Right)
        );
        assert_eq!(LogicalKey::from_key_name("arrowright"), None);
        assert_eq!(LogicalKey::from_key_name("ARROWUP"), None);
    }

    #[test]
    fn letter_keys_ignore_case() {
        for (lower, upper, key) in [
            ("c", "C", LogicalKey::OctaveShift),
            ("z", "Z", LogicalKey::Play),
            ("k", "K", LogicalKey::EasterEgg),
        ] {
            assert_eq!(LogicalKey::from_key_name(lower), Some(key));
            assert_eq!(LogicalKey::from_key_name(upper), Some(key));
        }
    }

    #[test]
    fn untracked_keys_map_to_none() {
        for name in ["x", "Enter", " ", "", "Shift", "zz", "Arrow"] {
            assert_eq!(LogicalKey::from_key_name(name), None, "{name:?}");
        }
    }

    #[test]
    fn indices_are_dense_and_unique() {
        let mut seen = [false; LogicalKey::COUNT];
        for key in LogicalKey::ALL {
            assert!(!seen[key.index()]);
            seen[key.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn classification() {
        assert!(LogicalKey::Left.is_directional());
        assert!(!LogicalKey::OctaveShift.is_directional());
        assert!(LogicalKey::Play.is_trigger());
        assert!(LogicalKey::EasterEgg.is_trigger());
        assert!(!LogicalKey::Down.is_trigger());
    }
}
