//! Wave curve geometry
//!
//! The wave is three connected quadratic Bézier segments laid out on a grid
//! of fifths of the widget width:
//!
//! ```text
//!  x:   0    1/5   2/5   3/5   4/5   5/5        7/5
//!       ●     ·     ●     ·     ●     ·          ●
//!     start  top   mid  -mid   mid   top        end
//! ```
//!
//! `mid` and `top` scale with height and waviness. The last segment ends at
//! 7/5 of the width, past the right edge, which gives the wave its long tail.

use sinwave_core::{Path, Point};
use sinwave_paint::PathBuilder;

use crate::state::WaveState;

/// Number of grid steps across the widget width
const WAVE_STEPS: f32 = 5.0;

/// Grid index of the final end point
const TAIL_STEP: f32 = 7.0;

const MID_FACTOR: f32 = 0.25;
const TOP_FACTOR: f32 = 0.75;

/// One quadratic segment of the wave
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

/// Heights of the wave's middle and top control points
pub fn amplitudes(state: &WaveState) -> (f32, f32) {
    let mid = state.height() * MID_FACTOR * state.waviness();
    let top = state.height() * TOP_FACTOR * state.waviness();
    (mid, top)
}

/// The three segments of the wave for `state`
pub fn segments(state: &WaveState) -> [QuadSegment; 3] {
    let step = state.width() / WAVE_STEPS;
    let x = |n: f32| step * n;
    let (mid, top) = amplitudes(state);

    let start = Point::new(0.0, 0.0);
    let first_end = Point::new(x(2.0), mid);
    let second_end = Point::new(x(4.0), mid);

    [
        QuadSegment {
            start,
            control: Point::new(x(1.0), top),
            end: first_end,
        },
        QuadSegment {
            start: first_end,
            control: Point::new(x(3.0), -mid),
            end: second_end,
        },
        QuadSegment {
            start: second_end,
            control: Point::new(x(5.0), top),
            end: Point::new(x(TAIL_STEP), 0.0),
        },
    ]
}

/// Rebuild the wave path into `builder` and return it
pub fn build_path(state: &WaveState, builder: &mut PathBuilder) -> Path {
    let wave = segments(state);

    builder.reset().move_to(wave[0].start.x, wave[0].start.y);
    for segment in wave {
        builder.quad_to(
            segment.control.x,
            segment.control.y,
            segment.end.x,
            segment.end.y,
        );
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinwave_core::PathCommand;

    fn state(width: f32, height: f32, waviness: f32) -> WaveState {
        let mut state = WaveState::new(waviness);
        state.set_size(width, height);
        state
    }

    #[test]
    fn test_amplitudes_full_waviness() {
        assert_eq!(amplitudes(&state(500.0, 100.0, 1.0)), (25.0, 75.0));
    }

    #[test]
    fn test_reference_segments() {
        let [a, b, c] = segments(&state(500.0, 100.0, 1.0));

        assert_eq!(a.start, Point::new(0.0, 0.0));
        assert_eq!((a.control, a.end), (Point::new(100.0, 75.0), Point::new(200.0, 25.0)));
        assert_eq!((b.control, b.end), (Point::new(300.0, -25.0), Point::new(400.0, 25.0)));
        assert_eq!((c.control, c.end), (Point::new(500.0, 75.0), Point::new(700.0, 0.0)));
    }

    #[test]
    fn test_segments_are_connected() {
        let [a, b, c] = segments(&state(360.0, 48.0, 0.3));
        assert_eq!(a.end, b.start);
        assert_eq!(b.end, c.start);
    }

    #[test]
    fn test_flat_when_waviness_zero() {
        let s = state(500.0, 100.0, 0.0);
        assert_eq!(amplitudes(&s), (0.0, 0.0));

        for segment in segments(&s) {
            assert_eq!(segment.control.y, 0.0);
            assert_eq!(segment.end.y, 0.0);
        }
        assert_eq!(segments(&s)[2].end, Point::new(700.0, 0.0));
    }

    #[test]
    fn test_tail_extends_past_width() {
        let [.., tail] = segments(&state(1000.0, 10.0, 0.5));
        assert_eq!(tail.end.x, 1400.0);
    }

    #[test]
    fn test_build_path_commands() {
        let mut builder = PathBuilder::new();
        let path = build_path(&state(500.0, 100.0, 1.0), &mut builder);

        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::ZERO));
        assert_eq!(
            path.to_svg_data(),
            "M0 0 Q100 75 200 25 Q300 -25 400 25 Q500 75 700 0"
        );
    }

    #[test]
    fn test_build_path_deterministic() {
        let s = state(413.0, 77.0, 0.37);
        let mut builder = PathBuilder::new();

        let first = build_path(&s, &mut builder);
        let second = build_path(&s, &mut builder);
        assert_eq!(first, second);
    }
}
