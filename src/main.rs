use std::error::Error;
use std::process;
use clap::{Parser, Subcommand, Args};
use simple_logger::SimpleLogger;
use log::{info, LevelFilter};

use inpoly::decode::{parse_batch, parse_json_polygon, parse_point, parse_wkt, Batch};
use inpoly::output::{render_contains, render_locate, OutputFormat};
use inpoly::{points_in_polygons, Polygon};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test whether a point is inside a polygon
    Contains(Contains),
    /// Find the polygon containing each point of a batch
    Locate(Locate),
}

#[derive(Args)]
struct Contains {
    /// Point to test (x,y)
    #[clap(short, long, allow_hyphen_values = true)]
    point: String,

    /// Polygon as WKT
    #[clap(short, long, conflicts_with = "json", required_unless_present = "json")]
    wkt: Option<String>,

    /// Polygon as a JSON array of [x, y] pairs
    #[clap(short, long)]
    json: Option<String>,

    /// Output format (text or json)
    #[clap(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args)]
struct Locate {
    /// JSON file with "points" and "polygons"
    #[clap(short, long)]
    input: String,

    /// Output format (text or json)
    #[clap(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn polygon_arg(wkt: Option<&str>, json: Option<&str>) -> Result<Polygon, Box<dyn Error>> {
    match (wkt, json) {
        (Some(wkt), _) => Ok(parse_wkt(wkt)?),
        (None, Some(json)) => Ok(parse_json_polygon(json)?),
        (None, None) => Err("either --wkt or --json is required".into()),
    }
}

fn read_batch(path: &str) -> Result<Batch, Box<dyn Error>> {
    info!("Reading {}", path);
    let json = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    Ok(parse_batch(&json)?)
}

fn contains(args: &Contains) -> Result<String, Box<dyn Error>> {
    let point = parse_point(&args.point)?;
    let polygon = polygon_arg(args.wkt.as_deref(), args.json.as_deref())?;
    info!("Testing point against polygon with {} vertices", polygon.len());
    let inside = polygon.contains(point);
    Ok(render_contains(args.format, point, inside)?)
}

fn locate(args: &Locate) -> Result<String, Box<dyn Error>> {
    let batch = read_batch(&args.input)?;
    info!("Locating {} points in {} polygons", batch.points.len(), batch.polygons.len());
    let found = points_in_polygons(&batch.points, &batch.polygons);
    info!("Located {} points", found.iter().filter(|f| f.is_some()).count());
    Ok(render_locate(args.format, &batch.points, &found)?)
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    match &cli.command {
        Commands::Contains(args) => contains(args),
        Commands::Locate(args) => locate(args),
    }
}

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    let cli = Cli::parse();
    info!("Initializing");
    match run(&cli) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
    info!("Done!");
}

#[cfg(test)]
fn run_args(args: &[&str]) -> Result<String, Box<dyn Error>> {
    let cli = Cli::try_parse_from(std::iter::once("inpoly").chain(args.iter().copied()))?;
    run(&cli)
}

#[test]
fn contains_command_test() {
    let square = "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))";
    assert_eq!(run_args(&["contains", "-p", "2,2", "-w", square]).unwrap(), "true");
    assert_eq!(run_args(&["contains", "-p", "-1,2", "-w", square]).unwrap(), "false");
    let json = "[[0, 0], [10, 0], [5, 10]]";
    assert_eq!(run_args(&["contains", "-p", "5,1", "-j", json]).unwrap(), "true");
    assert_eq!(
        run_args(&["contains", "-p", "5,-1", "--json", json, "-f", "json"]).unwrap(),
        r#"{"point":[5.0,-1.0],"inside":false}"#
    );
}

#[test]
fn contains_command_error_test() {
    let square = "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))";
    // neither or both polygon arguments are rejected by clap
    assert!(run_args(&["contains", "-p", "2,2"]).is_err());
    assert!(run_args(&["contains", "-p", "2,2", "-w", square, "-j", "[[0, 0]]"]).is_err());
    assert!(run_args(&["contains", "-p", "2,2", "-w", square, "-f", "xml"]).is_err());

    let e = run_args(&["contains", "-p", "1", "-w", square]).unwrap_err();
    assert_eq!(e.to_string(), "Could not decode input: expected x,y but got '1'");
    let e = run_args(&["contains", "-p", "2,2", "-j", "[]"]).unwrap_err();
    assert_eq!(e.to_string(), "Invalid argument: polygon has no vertices");
}

#[test]
fn polygon_arg_test() {
    let p = polygon_arg(Some("POLYGON ((0 0, 4 0, 4 4, 0 0))"), None).unwrap();
    assert_eq!(p.len(), 4);
    let p = polygon_arg(None, Some("[[0, 0], [4, 0], [4, 4]]")).unwrap();
    assert_eq!(p.len(), 3);
    // wkt wins when both are given
    let p = polygon_arg(Some("POLYGON ((0 0, 4 0, 4 4, 0 0))"), Some("[[0, 0]]")).unwrap();
    assert_eq!(p.len(), 4);
    let e = polygon_arg(None, None).unwrap_err();
    assert_eq!(e.to_string(), "either --wkt or --json is required");
}

#[test]
fn locate_command_test() {
    let path = std::env::temp_dir().join(format!("inpoly-locate-{}.json", process::id()));
    let doc = r#"{
        "points": [[2, 2], [12, 1], [7, 2]],
        "polygons": [
            [[0, 0], [4, 0], [4, 4], [0, 4]],
            [[10, 0], [14, 0], [14, 4], [10, 4]]
        ]
    }"#;
    std::fs::write(&path, doc).unwrap();
    let path_str = path.to_str().unwrap();
    let text = run_args(&["locate", "-i", path_str]);
    let json = run_args(&["locate", "-i", path_str, "-f", "json"]);
    std::fs::remove_file(&path).unwrap();
    assert_eq!(text.unwrap(), "2,2\t0\n12,1\t1\n7,2\t-");
    assert_eq!(
        json.unwrap(),
        r#"[{"point":[2.0,2.0],"polygon":0},{"point":[12.0,1.0],"polygon":1},{"point":[7.0,2.0],"polygon":null}]"#
    );
}

#[test]
fn locate_missing_file_test() {
    let path = std::env::temp_dir().join("inpoly-does-not-exist.json");
    let e = run_args(&["locate", "-i", path.to_str().unwrap()]).unwrap_err();
    assert!(e.to_string().starts_with(path.to_str().unwrap()));
}
