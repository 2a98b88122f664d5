use image::math::Rect;
use imageproc::point::Point;
use num_traits::{Num, ToPrimitive};

/// Calculates the pixel-inclusive axis-aligned bounding rectangle of a set of points.
///
/// The points are treated as pixel centers, so a single point yields a 1×1
/// rectangle and a contour running from x = 2 to x = 6 is 5 pixels wide.
/// Coordinates below zero are clamped to zero.
///
/// This version is generic over numeric types that implement `PartialOrd`, making it
/// suitable for both integer and floating-point coordinates.
///
/// # Returns
///
/// `None` if `points` is empty.
///
/// # Examples
///
/// ```
/// use imageproc::point::Point;
/// use web_particles::rect::bounding_rect;
///
/// let outline = [
///     Point { x: 50, y: 10 },
///     Point { x: 90, y: 50 },
///     Point { x: 50, y: 90 },
///     Point { x: 10, y: 50 },
/// ];
///
/// let bounds = bounding_rect(&outline).unwrap();
///
/// assert_eq!((bounds.x, bounds.y), (10, 10));
/// assert_eq!((bounds.width, bounds.height), (81, 81));
/// ```
pub fn bounding_rect<T>(points: &[Point<T>]) -> Option<Rect>
where
    T: Copy + PartialOrd + Num + ToPrimitive,
{
    let (first, rest) = points.split_first()?;
    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;

    // `T` is only `PartialOrd`, so floats are supported and `min`/`max` are unavailable.
    for p in rest {
        if p.x < min_x {
            min_x = p.x;
        }
        if p.x > max_x {
            max_x = p.x;
        }
        if p.y < min_y {
            min_y = p.y;
        }
        if p.y > max_y {
            max_y = p.y;
        }
    }

    let x = min_x.to_u32().unwrap_or(0);
    let y = min_y.to_u32().unwrap_or(0);

    let width = max_x.to_u32().unwrap_or(0).saturating_sub(x) + 1;
    let height = max_y.to_u32().unwrap_or(0).saturating_sub(y) + 1;

    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

/// Center of a rectangle, rounded down to whole pixels.
pub fn center(rect: &Rect) -> (i32, i32) {
    (
        (rect.x + rect.width / 2) as i32,
        (rect.y + rect.height / 2) as i32,
    )
}
