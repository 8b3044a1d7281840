use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::{Shape, ShapeError};

/// A list of shapes read from TOML, one `[[shapes]]` table per shape.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Catalog {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Parses a catalog. `nan` and `inf` are valid TOML floats but are
    /// refused as dimensions, as in the text notation.
    pub fn from_toml(s: &str) -> Result<Self, ShapeError> {
        let catalog: Catalog = toml::from_str(s)?;
        for shape in &catalog.shapes {
            if let Some(d) = shape.dimensions().into_iter().find(|d| !d.is_finite()) {
                return Err(ShapeError::Dimension(d.to_string()));
            }
        }
        Ok(catalog)
    }

    pub fn to_toml(&self) -> Result<String, ShapeError> {
        Ok(toml::to_string(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShapeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ShapeError::Io {
            path: path.to_owned(),
            source,
        })?;
        let catalog = Self::from_toml(&content)?;
        log::debug!(
            "loaded {} shape(s) from {}",
            catalog.shapes.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn areas(&self) -> impl Iterator<Item = (Shape, f64)> + '_ {
        self.shapes.iter().map(|s| (*s, s.area()))
    }

    pub fn total_area(&self) -> f64 {
        self.areas().map(|(_, a)| a).sum()
    }
}

#[cfg(test)]
const SAMPLE: &str = r#"
[[shapes]]
kind = "circle"
radius = 2.0

[[shapes]]
kind = "square"
side = 5.0

[[shapes]]
kind = "rectangle"
length = 3.0
width = 4.0
"#;

#[test]
fn parse() {
    use crate::{circle, rectangle, square};

    let catalog = Catalog::from_toml(SAMPLE).unwrap();
    assert_eq!(
        catalog.shapes,
        vec![circle(2.0), square(5.0), rectangle(3.0, 4.0)]
    );

    let total = catalog.total_area();
    assert!(crate::shape::approx_eq(total, 4.0 * core::f64::consts::PI + 37.0));
    assert!(Catalog::from_toml("").unwrap().shapes.is_empty());
}

#[test]
fn write() {
    let catalog = Catalog::from_toml(SAMPLE).unwrap();
    let written = catalog.to_toml().unwrap();
    assert!(written.contains("kind = \"rectangle\""));
    assert_eq!(Catalog::from_toml(&written).unwrap(), catalog);
}

#[test]
fn invalid() {
    let unknown = "[[shapes]]\nkind = \"triangle\"\nbase = 1.0\n";
    assert!(matches!(
        Catalog::from_toml(unknown),
        Err(ShapeError::Toml(_))
    ));

    let missing = "[[shapes]]\nkind = \"rectangle\"\nlength = 1.0\n";
    assert!(matches!(
        Catalog::from_toml(missing),
        Err(ShapeError::Toml(_))
    ));

    let nan = "[[shapes]]\nkind = \"circle\"\nradius = nan\n";
    assert!(matches!(
        Catalog::from_toml(nan),
        Err(ShapeError::Dimension(d)) if d == "NaN"
    ));

    let inf = "[[shapes]]\nkind = \"rectangle\"\nlength = 2.0\nwidth = inf\n";
    assert!(matches!(
        Catalog::from_toml(inf),
        Err(ShapeError::Dimension(d)) if d == "inf"
    ));

    assert!(matches!(
        Catalog::load("does/not/exist.toml"),
        Err(ShapeError::Io { .. })
    ));
}

#[test]
fn demo_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demo.toml");
    let catalog = Catalog::load(path).unwrap();
    assert_eq!(catalog, Catalog::from_toml(SAMPLE).unwrap());
}
