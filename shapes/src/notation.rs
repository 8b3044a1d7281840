//! Text form of a shape: `circle(2)`, `square(5)`, `rectangle(3, 4)`.

use core::fmt;
use core::str::FromStr;

use crate::{Shape, ShapeError, ShapeKind};

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ShapeKind::all()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShapeError::UnknownKind(s.to_owned()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        for (i, d) in self.dimensions().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", d)?;
        }
        f.write_str(")")
    }
}

impl FromStr for Shape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || ShapeError::Syntax(s.trim().to_owned());

        let (kind, rest) = s.split_once('(').ok_or_else(syntax)?;
        let (args, trailing) = rest.split_once(')').ok_or_else(syntax)?;
        if !trailing.trim().is_empty() {
            return Err(syntax());
        }

        let kind: ShapeKind = kind.parse()?;
        let dims = if args.trim().is_empty() {
            Vec::new()
        } else {
            args.split(',')
                .map(dimension)
                .collect::<Result<Vec<_>, _>>()?
        };

        kind.build(&dims).ok_or(ShapeError::Arity {
            kind,
            found: dims.len(),
        })
    }
}

fn dimension(s: &str) -> Result<f64, ShapeError> {
    let s = s.trim();
    match s.parse::<f64>() {
        Ok(d) if d.is_finite() => Ok(d),
        _ => Err(ShapeError::Dimension(s.to_owned())),
    }
}

#[test]
fn display() {
    use crate::{circle, rectangle, square};

    assert_eq!(circle(2.0).to_string(), "circle(2)");
    assert_eq!(square(0.5).to_string(), "square(0.5)");
    assert_eq!(rectangle(3.0, 4.0).to_string(), "rectangle(3, 4)");
}

#[test]
fn parse() {
    use crate::{circle, rectangle, square};

    assert_eq!("circle(2)".parse::<Shape>().unwrap(), circle(2.0));
    assert_eq!(" Square ( 5 ) ".parse::<Shape>().unwrap(), square(5.0));
    assert_eq!(
        "RECTANGLE(3,4.5)".parse::<Shape>().unwrap(),
        rectangle(3.0, 4.5)
    );

    for shape in [circle(1.25), square(1e-3), rectangle(10.0, 0.0)] {
        assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
    }
}

#[test]
fn parse_errors() {
    let err = |s: &str| s.parse::<Shape>().unwrap_err();

    assert!(matches!(err("circle 2"), ShapeError::Syntax(_)));
    assert!(matches!(err("circle(2"), ShapeError::Syntax(_)));
    assert!(matches!(err("circle(2) x"), ShapeError::Syntax(_)));
    assert!(matches!(err("triangle(1, 2, 3)"), ShapeError::UnknownKind(k) if k == "triangle"));
    assert!(matches!(
        err("rectangle(3)"),
        ShapeError::Arity {
            kind: ShapeKind::Rectangle,
            found: 1
        }
    ));
    assert!(matches!(
        err("square()"),
        ShapeError::Arity {
            kind: ShapeKind::Square,
            found: 0
        }
    ));
    assert!(matches!(err("circle(two)"), ShapeError::Dimension(d) if d == "two"));
    assert!(matches!(err("circle(inf)"), ShapeError::Dimension(_)));
}

#[test]
fn kind_names() {
    for kind in ShapeKind::all() {
        assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
    }
    assert_eq!(" Circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
    assert!("hexagon".parse::<ShapeKind>().is_err());
}
