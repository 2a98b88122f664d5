use image::GrayImage;
use imageproc::{
    contours::{BorderType, Contour, find_contours},
    point::Point,
};
use num::{Num, NumCast};
use num_traits::AsPrimitive;

use crate::constants::{MAX_PARTICLE_AREA, MIN_PARTICLE_AREA};

/// Finds the outermost borders of the foreground regions in a binary image.
///
/// Every non-zero pixel is foreground. Hole borders, and any outer border nested
/// inside a hole, are discarded. The remaining point chains are compressed with
/// [`simplify_chain`].
pub fn find_external_contours(binary: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(binary)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
        .map(|contour| Contour {
            points: simplify_chain(&contour.points),
            ..contour
        })
        .collect()
}

/// Compresses a closed chain of neighbouring points.
///
/// A point is dropped when the step into it equals the step out of it, so
/// horizontal, vertical and diagonal runs keep only their end points. The
/// enclosed area is unchanged.
pub fn simplify_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    points
        .iter()
        .enumerate()
        .filter(|&(i, p)| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            (p.x - prev.x, p.y - prev.y) != (next.x - p.x, next.y - p.y)
        })
        .map(|(_, p)| *p)
        .collect()
}

/// Calculates the area enclosed by a closed polygon with the shoelace formula.
///
/// The result is non-negative regardless of the winding direction. Polygons with
/// fewer than 3 points enclose nothing and have an area of `0.0`.
pub fn contour_area<T>(points: &[Point<T>]) -> f64
where
    T: Num + NumCast + Copy + AsPrimitive<f64>,
{
    if points.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p1, p2)| {
            let (x1, y1): (f64, f64) = (p1.x.as_(), p1.y.as_());
            let (x2, y2): (f64, f64) = (p2.x.as_(), p2.y.as_());
            x1 * y2 - x2 * y1
        })
        .sum();

    twice_area.abs() / 2.0
}

/// Whether an area is strictly inside the particle size window.
pub fn is_particle_area(area: f64) -> bool {
    area > MIN_PARTICLE_AREA && area < MAX_PARTICLE_AREA
}

/// Diameter of the circle whose area equals `area`.
pub fn equivalent_diameter(area: f64) -> f64 {
    (4.0 * area / std::f64::consts::PI).sqrt()
}

/// Pairs each contour with its area and keeps those passing [`is_particle_area`].
///
/// Takes ownership of the input so no points are cloned. The input order is
/// preserved.
pub fn filter_by_area_owned<T>(contours: Vec<Contour<T>>) -> Vec<(Contour<T>, f64)>
where
    T: Num + NumCast + Copy + AsPrimitive<f64>,
{
    contours
        .into_iter()
        .filter_map(|contour| {
            let area = contour_area(&contour.points);
            is_particle_area(area).then_some((contour, area))
        })
        .collect()
}
