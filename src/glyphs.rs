//! Stroke outlines for the class labels.
//!
//! Coordinates are in pixels relative to the baseline-left corner of the glyph, with
//! y growing upwards. Capitals are 10 pixels tall.

type Stroke = &'static [(i32, i32)];

const C: &[Stroke] = &[&[
    (8, 8),
    (7, 9),
    (5, 10),
    (3, 10),
    (1, 9),
    (0, 7),
    (0, 3),
    (1, 1),
    (3, 0),
    (5, 0),
    (7, 1),
    (8, 2),
]];

const M: &[Stroke] = &[&[(0, 0), (0, 10), (4, 0), (8, 10), (8, 0)]];

const F: &[Stroke] = &[&[(0, 0), (0, 10), (7, 10)], &[(0, 5), (5, 5)]];

/// Polylines tracing `c`, or `None` for characters without an outline.
pub fn strokes(c: char) -> Option<&'static [Stroke]> {
    match c.to_ascii_uppercase() {
        'C' => Some(C),
        'M' => Some(M),
        'F' => Some(F),
        _ => None,
    }
}
