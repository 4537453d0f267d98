use super::direction::Direction;

/// Semitones in one octave.
pub const OCTAVE: i32 = 12;

/// Fixed semitone offset above the recorded note for each direction.
pub fn interval(direction: Direction) -> i32 {
    match direction {
        Direction::None => 0,
        Direction::Right => 2,
        Direction::DownRight => 4,
        Direction::Down => 5,
        Direction::DownLeft => 7,
        Direction::Left => 9,
        Direction::UpLeft => 11,
        Direction::Up => 12,
    }
}

/// Semitone offset including the octave-shift modifier. Range is -12..=12.
pub fn semitone_offset(direction: Direction, octave_shift: bool) -> i32 {
    let semitones = interval(direction);
    if octave_shift {
        semitones - OCTAVE
    } else {
        semitones
    }
}

/// Playback-rate multiplier: `2^(semitones / 12)`. Always in `[0.5, 2.0]`.
pub fn pitch(direction: Direction, octave_shift: bool) -> f64 {
    let semitones = semitone_offset(direction, octave_shift);
    2.0_f64.powf(f64::from(semitones) / f64::from(OCTAVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn none_is_unity() {
        assert!((pitch(Direction::None, false) - 1.0).abs() < EPS);
        assert!((pitch(Direction::None, true) - 0.5).abs() < EPS);
    }

    #[test]
    fn up_is_one_octave() {
        assert!((pitch(Direction::Up, false) - 2.0).abs() < EPS);
        assert!((pitch(Direction::Up, true) - 1.0).abs() < EPS);
    }

    #[test]
    fn right_is_a_whole_tone() {
        assert!((pitch(Direction::Right, false) - 1.122_462_048).abs() < 1e-6);
    }

    #[test]
    fn shifted_down_right() {
        assert_eq!(semitone_offset(Direction::DownRight, true), -8);
        assert!((pitch(Direction::DownRight, true) - 0.629_960_525).abs() < 1e-6);
    }

    #[test]
    fn intervals_ascend_with_direction_order() {
        let intervals: Vec<_> = Direction::ALL.iter().map(|&d| interval(d)).collect();
        assert_eq!(intervals, vec![0, 2, 4, 5, 7, 9, 11, 12]);
    }

    proptest! {
        #[test]
        fn pitch_follows_equal_temperament(index in 0usize..8, shift in any::<bool>()) {
            let direction = Direction::ALL[index];
            let base = f64::from(interval(direction));
            let semitones = if shift { base - 12.0 } else { base };
            let rate = pitch(direction, shift);
            prop_assert!((rate - 2.0_f64.powf(semitones / 12.0)).abs() < EPS);
            prop_assert!(rate > 0.0 && rate <= 2.0);
        }
    }
}
