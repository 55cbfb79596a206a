//! Turns loosely typed text input into validated [`Point`]s and
//! [`Polygon`]s. Everything past this module works on checked values only.

use log::debug;
use serde::Deserialize;

use crate::error::PolyError;
use crate::geom::{Point, Polygon};

/// Parses a point given as `x,y`.
pub fn parse_point(s: &str) -> Result<Point, PolyError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(PolyError::Decode(format!("expected x,y but got '{}'", s)));
    }
    let coord = |c: &str| {
        c.trim()
            .parse::<f64>()
            .map_err(|e| PolyError::Decode(format!("bad coordinate '{}': {}", c.trim(), e)))
    };
    let p = Point::new(coord(parts[0])?, coord(parts[1])?);
    if !p.is_finite() {
        return Err(PolyError::InvalidArgument(format!("point is not finite: {:?}", p)));
    }
    Ok(p)
}

/// Parses a WKT `POLYGON`. Only the exterior ring is used, interior rings
/// are ignored.
pub fn parse_wkt(wkt: &str) -> Result<Polygon, PolyError> {
    use wkt::TryFromWkt;
    let p: geo_types::Polygon<f64> = geo_types::Polygon::try_from_wkt_str(wkt)
        .map_err(|e| PolyError::Decode(format!("invalid WKT: {}", e)))?;
    if !p.interiors().is_empty() {
        debug!("Ignoring {} interior rings", p.interiors().len());
    }
    let vertices: Vec<Point> = p.exterior().coords().map(|c| Point::from(*c)).collect();
    debug!("Parsed WKT polygon with {} vertices", vertices.len());
    Polygon::new(vertices)
}

/// Parses a polygon given as a JSON array of `[x, y]` pairs.
pub fn parse_json_polygon(json: &str) -> Result<Polygon, PolyError> {
    let pairs: Vec<(f64, f64)> = serde_json::from_str(json)
        .map_err(|e| PolyError::Decode(format!("invalid JSON polygon: {}", e)))?;
    debug!("Parsed JSON polygon with {} vertices", pairs.len());
    Polygon::try_from(pairs)
}

#[derive(Deserialize)]
struct BatchDoc {
    points: Vec<(f64, f64)>,
    polygons: Vec<Vec<(f64, f64)>>,
}

pub struct Batch {
    pub points: Vec<Point>,
    pub polygons: Vec<Polygon>,
}

/// Parses a batch document: `{"points": [[x, y], ...], "polygons": [[[x, y], ...], ...]}`.
pub fn parse_batch(json: &str) -> Result<Batch, PolyError> {
    let doc: BatchDoc = serde_json::from_str(json)
        .map_err(|e| PolyError::Decode(format!("invalid batch document: {}", e)))?;
    let points: Vec<Point> = doc.points.into_iter().map(Point::from).collect();
    if let Some(i) = points.iter().position(|p| !p.is_finite()) {
        return Err(PolyError::InvalidArgument(format!("point {} is not finite", i)));
    }
    let polygons = doc
        .polygons
        .into_iter()
        .enumerate()
        .map(|(j, pairs)| {
            Polygon::try_from(pairs).map_err(|e| match e {
                PolyError::InvalidArgument(m) => {
                    PolyError::InvalidArgument(format!("polygon {}: {}", j, m))
                }
                other => other,
            })
        })
        .collect::<Result<Vec<Polygon>, PolyError>>()?;
    debug!("Parsed batch of {} points and {} polygons", points.len(), polygons.len());
    Ok(Batch { points, polygons })
}

#[test]
fn parse_point_test() {
    assert_eq!(parse_point("2,2"), Ok(Point::new(2.0, 2.0)));
    assert_eq!(parse_point(" 2.5 , -1 "), Ok(Point::new(2.5, -1.0)));
    assert!(matches!(parse_point("1"), Err(PolyError::Decode(_))));
    assert!(matches!(parse_point("1,2,3"), Err(PolyError::Decode(_))));
    assert!(matches!(parse_point("a,b"), Err(PolyError::Decode(_))));
    assert!(matches!(parse_point("NaN,1"), Err(PolyError::InvalidArgument(_))));
    assert!(matches!(parse_point("1,inf"), Err(PolyError::InvalidArgument(_))));
}

#[test]
fn parse_wkt_test() {
    let denmark = "POLYGON ((7.87 54.69, 7.78 57.25, 9.63 58.08, 10.71 58.11, 12.05 56.69, 13.15 56.42, 14.2 55.47, 15.5 55.33, 15.28 54.64, 12.98 54.94, 12.29 54.35, 12.46 53.64, 11.41 53.42, 10.07 53.18, 8.78 53.52, 7.87 54.69))";
    let p = parse_wkt(denmark).unwrap();
    assert_eq!(p.vertices().len(), 16);
    assert_eq!(p.vertices()[0], Point::new(7.87, 54.69));
    assert_eq!(p.vertices()[15], Point::new(7.87, 54.69));
    assert!(p.contains(Point::new(10.0, 56.0)));
    assert!(!p.contains(Point::new(56.0, 10.0)));
}

#[test]
fn parse_wkt_holes_test() {
    let wkt = "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (4 4, 6 4, 6 6, 4 6, 4 4))";
    let p = parse_wkt(wkt).unwrap();
    assert_eq!(p.vertices().len(), 5);
    assert!(p.contains(Point::new(5.0, 5.0)));
}

#[test]
fn parse_wkt_error_test() {
    assert!(matches!(parse_wkt("POLYGON ((0 0, 1"), Err(PolyError::Decode(_))));
    assert!(matches!(parse_wkt("POINT (1 2)"), Err(PolyError::Decode(_))));
    assert!(matches!(parse_wkt("POLYGON EMPTY"), Err(_)));
}

#[test]
fn parse_json_polygon_test() {
    let p = parse_json_polygon("[[0, 0], [4, 0], [4, 4], [0, 4]]").unwrap();
    assert_eq!(p.vertices().len(), 4);
    assert!(p.contains(Point::new(2.0, 2.0)));
    assert!(matches!(parse_json_polygon("[]"), Err(PolyError::InvalidArgument(_))));
    assert!(matches!(parse_json_polygon("[[0, 0], [1]]"), Err(PolyError::Decode(_))));
    assert!(matches!(parse_json_polygon("{\"x\": 1}"), Err(PolyError::Decode(_))));
}

#[test]
fn parse_batch_test() {
    let json = r#"{
        "points": [[2, 2], [12, 1]],
        "polygons": [
            [[0, 0], [4, 0], [4, 4], [0, 4]],
            [[10, 0], [14, 0], [14, 4], [10, 4]]
        ]
    }"#;
    let b = parse_batch(json).unwrap();
    assert_eq!(b.points, vec![Point::new(2.0, 2.0), Point::new(12.0, 1.0)]);
    assert_eq!(b.polygons.len(), 2);

    let json = r#"{"points": [[1, 1]], "polygons": [[[0, 0], [1, 0]], []]}"#;
    match parse_batch(json) {
        Err(PolyError::InvalidArgument(m)) => assert!(m.starts_with("polygon 1:")),
        _ => panic!("expected invalid argument"),
    }
    assert!(matches!(parse_batch(r#"{"points": []}"#), Err(PolyError::Decode(_))));
}
