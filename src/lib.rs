//! Point in polygon tests using the even-odd ray casting rule.

pub mod bounds;
pub mod decode;
pub mod error;
pub mod geom;
pub mod output;
pub mod poly;

pub use bounds::{points_in_polygons, Bounds};
pub use error::PolyError;
pub use geom::{Point, Polygon};
pub use poly::inside;
