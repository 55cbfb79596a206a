use crate::error::PolyError;
use crate::poly::ray_cast;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<geo_types::Coord<f64>> for Point {
    fn from(c: geo_types::Coord<f64>) -> Self {
        Self { x: c.x, y: c.y }
    }
}

/// A non-empty ring of vertices with finite coordinates.
///
/// The ring is implicitly closed, so the edge from the last vertex back to
/// the first is always part of the boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, PolyError> {
        if vertices.is_empty() {
            return Err(PolyError::InvalidArgument("polygon has no vertices".into()));
        }
        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PolyError::InvalidArgument(format!(
                "vertex {} is not finite: {:?}",
                i, vertices[i]
            )));
        }
        Ok(Self(vertices))
    }

    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // always false, an empty ring cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Even-odd test against this ring. Never fails since the ring is
    /// known to be non-empty.
    pub fn contains(&self, point: Point) -> bool {
        ray_cast(point, &self.0)
    }
}

impl TryFrom<Vec<(f64, f64)>> for Polygon {
    type Error = PolyError;

    fn try_from(pairs: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Polygon::new(pairs.into_iter().map(Point::from).collect())
    }
}

#[test]
fn polygon_new_test() {
    assert_eq!(
        Polygon::new(vec![]),
        Err(PolyError::InvalidArgument("polygon has no vertices".into()))
    );
    let r = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)]);
    assert!(matches!(r, Err(PolyError::InvalidArgument(_))));
    let r = Polygon::new(vec![Point::new(f64::INFINITY, 0.0)]);
    assert!(matches!(r, Err(PolyError::InvalidArgument(_))));

    let p = Polygon::try_from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]).unwrap();
    assert_eq!(p.len(), 3);
    assert!(!p.is_empty());
    assert_eq!(p.vertices()[1], Point::new(4.0, 0.0));
}

#[test]
fn polygon_contains_test() {
    let square = Polygon::try_from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
    assert!(square.contains(Point::new(2.0, 2.0)));
    assert!(!square.contains(Point::new(5.0, 5.0)));
}
