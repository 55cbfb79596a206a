use serde::Serialize;
use strum::{Display, EnumString};

use crate::geom::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct ContainsReport {
    point: (f64, f64),
    inside: bool,
}

#[derive(Serialize)]
struct LocateReport {
    point: (f64, f64),
    polygon: Option<usize>,
}

pub fn render_contains(
    format: OutputFormat,
    point: Point,
    inside: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(inside.to_string()),
        OutputFormat::Json => serde_json::to_string(&ContainsReport {
            point: (point.x, point.y),
            inside,
        }),
    }
}

pub fn render_locate(
    format: OutputFormat,
    points: &[Point],
    found: &[Option<usize>],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(points
            .iter()
            .zip(found)
            .map(|(p, f)| match f {
                Some(j) => format!("{},{}\t{}", p.x, p.y, j),
                None => format!("{},{}\t-", p.x, p.y),
            })
            .collect::<Vec<String>>()
            .join("\n")),
        OutputFormat::Json => {
            let reports: Vec<LocateReport> = points
                .iter()
                .zip(found)
                .map(|(p, &polygon)| LocateReport { point: (p.x, p.y), polygon })
                .collect();
            serde_json::to_string(&reports)
        }
    }
}

#[test]
fn output_format_test() {
    use std::str::FromStr;
    assert_eq!(OutputFormat::from_str("text"), Ok(OutputFormat::Text));
    assert_eq!(OutputFormat::from_str("json"), Ok(OutputFormat::Json));
    assert!(OutputFormat::from_str("xml").is_err());
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn render_contains_test() {
    let p = Point::new(2.0, 2.5);
    assert_eq!(render_contains(OutputFormat::Text, p, true).unwrap(), "true");
    assert_eq!(
        render_contains(OutputFormat::Json, p, false).unwrap(),
        r#"{"point":[2.0,2.5],"inside":false}"#
    );
}

#[test]
fn render_locate_test() {
    let points = [Point::new(2.0, 2.0), Point::new(7.5, 1.0)];
    let found = [Some(0), None];
    assert_eq!(render_locate(OutputFormat::Text, &points, &found).unwrap(), "2,2\t0\n7.5,1\t-");
    assert_eq!(
        render_locate(OutputFormat::Json, &points, &found).unwrap(),
        r#"[{"point":[2.0,2.0],"polygon":0},{"point":[7.5,1.0],"polygon":null}]"#
    );
}
