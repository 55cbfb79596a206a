use crate::error::PolyError;
use crate::geom::Point;

#[inline]
fn min(a: f64, b: f64) -> f64 {
    if a > b { b } else { a }
}

#[inline]
fn max(a: f64, b: f64) -> f64 {
    if a < b { b } else { a }
}

// Ray casting (even-odd rule)
// https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
pub fn inside(point: Point, polygon: &[Point]) -> Result<bool, PolyError> {
    if polygon.is_empty() {
        return Err(PolyError::InvalidArgument("polygon has no vertices".into()));
    }
    Ok(ray_cast(point, polygon))
}

/// Casts a horizontal ray from `point` towards +x and toggles on every edge
/// it crosses. `polygon` must not be empty.
///
/// Vertex 0 is visited twice (n + 1 iterations) so the closing edge is
/// always tested. The lower y bound is exclusive and the upper bound
/// inclusive, so a shared vertex is only counted for one of its edges.
pub(crate) fn ray_cast(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    let mut p1 = polygon[0];
    let mut xints = 0.0;
    let mut inside = false;
    for i in 0..=n {
        let p2 = polygon[i % n];
        if point.y > min(p1.y, p2.y) && point.y <= max(p1.y, p2.y) && point.x <= max(p1.x, p2.x) {
            // horizontal edges never get here, xints is always fresh
            if p1.y != p2.y {
                xints = (point.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
            }
            if p1.x == p2.x || point.x <= xints {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}

#[cfg(test)]
fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

#[test]
fn min_max_test() {
    assert_eq!(min(1.0, 2.0), 1.0);
    assert_eq!(min(2.0, 1.0), 1.0);
    assert_eq!(max(1.0, 2.0), 2.0);
    assert_eq!(max(-1.0, -2.0), -1.0);
}

#[test]
fn square_test() {
    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    assert_eq!(inside(Point::new(2.0, 2.0), &square), Ok(true));
    assert_eq!(inside(Point::new(5.0, 5.0), &square), Ok(false));
    assert_eq!(inside(Point::new(-1.0, 2.0), &square), Ok(false));
    assert_eq!(inside(Point::new(2.0, -0.5), &square), Ok(false));
}

#[test]
fn square_left_edge_test() {
    // Both vertical edges span y = 2 and pass the x bound, so the ray
    // toggles twice and the point on the left edge comes out as outside.
    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    assert_eq!(inside(Point::new(0.0, 2.0), &square), Ok(false));
    // right edge only toggles once
    assert_eq!(inside(Point::new(4.0, 2.0), &square), Ok(true));
    // top edge is horizontal and never counted
    assert_eq!(inside(Point::new(2.0, 4.0), &square), Ok(true));
    // bottom edge: lower bound is exclusive
    assert_eq!(inside(Point::new(2.0, 0.0), &square), Ok(false));
}

#[test]
fn triangle_test() {
    let triangle = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]);
    assert_eq!(inside(Point::new(5.0, 1.0), &triangle), Ok(true));
    assert_eq!(inside(Point::new(5.0, -1.0), &triangle), Ok(false));
    assert_eq!(inside(Point::new(1.0, 9.0), &triangle), Ok(false));
    assert_eq!(inside(Point::new(9.0, 9.0), &triangle), Ok(false));
}

#[test]
fn vertex_pass_through_test() {
    // ray from (0, 10) touches only the apex: both apex edges have the apex as
    // their upper end, so it counts twice and cancels
    let triangle = pts(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)]);
    assert_eq!(inside(Point::new(0.0, 10.0), &triangle), Ok(false));

    // ray through the side vertex (4, 2): only the edge below it counts
    let diamond = pts(&[(0.0, 2.0), (2.0, 0.0), (4.0, 2.0), (2.0, 4.0)]);
    assert_eq!(inside(Point::new(1.0, 2.0), &diamond), Ok(true));
    assert_eq!(inside(Point::new(-1.0, 2.0), &diamond), Ok(false));
    assert_eq!(inside(Point::new(5.0, 2.0), &diamond), Ok(false));
}

#[test]
fn empty_polygon_test() {
    let r = inside(Point::new(0.0, 0.0), &[]);
    assert!(matches!(r, Err(PolyError::InvalidArgument(_))));
}

#[test]
fn degenerate_polygon_test() {
    let single = pts(&[(1.0, 1.0)]);
    assert_eq!(inside(Point::new(1.0, 1.0), &single), Ok(false));
    assert_eq!(inside(Point::new(0.0, 0.0), &single), Ok(false));
    let segment = pts(&[(0.0, 0.0), (0.0, 4.0)]);
    // the segment is walked there and back, toggling twice
    assert_eq!(inside(Point::new(-1.0, 2.0), &segment), Ok(false));
}

#[test]
fn closed_ring_test() {
    let open = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let closed = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    for &(x, y) in &[(2.0, 2.0), (5.0, 5.0), (0.0, 2.0), (3.9, 0.1), (-0.1, 3.0)] {
        let p = Point::new(x, y);
        assert_eq!(inside(p, &open), inside(p, &closed));
    }
}

#[test]
fn concave_test() {
    // L shape, notch in the top right corner
    let l = pts(&[(0.0, 0.0), (6.0, 0.0), (6.0, 3.0), (3.0, 3.0), (3.0, 6.0), (0.0, 6.0)]);
    assert_eq!(inside(Point::new(1.0, 1.0), &l), Ok(true));
    assert_eq!(inside(Point::new(5.0, 1.0), &l), Ok(true));
    assert_eq!(inside(Point::new(1.0, 5.0), &l), Ok(true));
    assert_eq!(inside(Point::new(5.0, 5.0), &l), Ok(false));
    assert_eq!(inside(Point::new(4.0, 4.5), &l), Ok(false));
}

#[test]
fn idempotent_test() {
    let l = pts(&[(0.0, 0.0), (6.0, 0.0), (6.0, 3.0), (3.0, 3.0), (3.0, 6.0), (0.0, 6.0)]);
    for &(x, y) in &[(1.0, 1.0), (5.0, 5.0), (3.0, 3.0), (-2.0, 0.5)] {
        let p = Point::new(x, y);
        assert_eq!(inside(p, &l), inside(p, &l));
    }
}

#[test]
fn winding_direction_test() {
    let l = pts(&[(0.0, 0.0), (6.0, 0.0), (6.0, 3.0), (3.0, 3.0), (3.0, 6.0), (0.0, 6.0)]);
    let mut reversed = l.clone();
    reversed.reverse();
    let points = [
        (1.0, 1.0),
        (5.0, 1.0),
        (1.0, 5.0),
        (5.0, 5.0),
        (7.0, 1.0),
        (2.5, 2.5),
        (-1.0, 4.0),
    ];
    for &(x, y) in &points {
        let p = Point::new(x, y);
        assert_eq!(inside(p, &l), inside(p, &reversed));
    }
}

#[test]
fn translation_test() {
    let triangle = [(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
    let points = [(5.0, 1.0), (5.0, -1.0), (2.0, 3.0), (8.0, 9.0), (11.0, 1.0)];
    for &(dx, dy) in &[(100.0, -50.0), (-3.0, 7.0), (1024.0, 2048.0)] {
        let moved: Vec<Point> = triangle.iter().map(|&(x, y)| Point::new(x + dx, y + dy)).collect();
        for &(x, y) in &points {
            let a = inside(Point::new(x, y), &pts(&triangle));
            let b = inside(Point::new(x + dx, y + dy), &moved);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn convex_test() {
    // regular-ish hexagon
    let hex = pts(&[(2.0, 0.0), (6.0, 0.0), (8.0, 4.0), (6.0, 8.0), (2.0, 8.0), (0.0, 4.0)]);
    for i in 1..8 {
        for j in 1..8 {
            let (x, y) = (2.0 + i as f64 * 0.5, 0.5 + j as f64 * 0.9);
            assert_eq!(inside(Point::new(x, y), &hex), Ok(true), "({}, {})", x, y);
        }
    }
    for &(x, y) in &[(-1.0, 4.0), (9.0, 4.0), (4.0, -1.0), (4.0, 9.0), (100.0, 100.0)] {
        assert_eq!(inside(Point::new(x, y), &hex), Ok(false));
    }
}
