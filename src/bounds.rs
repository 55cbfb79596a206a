use crate::geom::{Point, Polygon};

pub trait Bounds {
    fn contains(&self, point: Point) -> bool;
}

impl Bounds for Polygon {
    fn contains(&self, point: Point) -> bool {
        Polygon::contains(self, point)
    }
}

/// Finds, for every point, the region that contains it.
///
/// Regions are scanned in order and a later match overwrites an earlier one,
/// so with overlapping regions the point is assigned to the last of them.
/// `None` means no region contains the point.
pub fn points_in_polygons<B: Bounds>(points: &[Point], regions: &[B]) -> Vec<Option<usize>> {
    points
        .iter()
        .map(|&p| {
            let mut found = None;
            for (j, region) in regions.iter().enumerate() {
                if region.contains(p) {
                    found = Some(j);
                }
            }
            found
        })
        .collect()
}

#[cfg(test)]
fn poly(coords: &[(f64, f64)]) -> Polygon {
    Polygon::try_from(coords.to_vec()).unwrap()
}

#[test]
fn points_in_polygons_test() {
    let left = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let right = poly(&[(10.0, 0.0), (14.0, 0.0), (14.0, 4.0), (10.0, 4.0)]);
    let points = [
        Point::new(2.0, 2.0),
        Point::new(12.0, 1.0),
        Point::new(7.0, 2.0),
        Point::new(2.0, 9.0),
    ];
    let r = points_in_polygons(&points, &[left, right]);
    assert_eq!(r, vec![Some(0), Some(1), None, None]);
}

#[test]
fn points_in_polygons_overlap_test() {
    let outer = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let inner = poly(&[(2.0, 2.0), (5.0, 2.0), (5.0, 5.0), (2.0, 5.0)]);
    let points = [Point::new(3.0, 3.0), Point::new(8.0, 8.0)];
    let r = points_in_polygons(&points, &[outer.clone(), inner.clone()]);
    assert_eq!(r, vec![Some(1), Some(0)]);
    let r = points_in_polygons(&points, &[inner, outer]);
    assert_eq!(r, vec![Some(1), Some(1)]);
}

#[test]
fn points_in_polygons_empty_test() {
    let square = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    assert!(points_in_polygons(&[], &[square]).is_empty());
    let none: [Polygon; 0] = [];
    assert_eq!(points_in_polygons(&[Point::new(1.0, 1.0)], &none), vec![None]);
}

#[test]
fn bounds_trait_test() {
    struct Everywhere;
    impl Bounds for Everywhere {
        fn contains(&self, _point: Point) -> bool {
            true
        }
    }
    let r = points_in_polygons(&[Point::new(-100.0, 3.0)], &[Everywhere, Everywhere]);
    assert_eq!(r, vec![Some(1)]);
}
