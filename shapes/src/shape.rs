use core::f64::consts::PI;

use serde_derive::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A closed set of plane shapes, tagged by `kind`.
///
/// Every `match` over a shape in this crate names each variant, so adding a
/// variant here stops the build until each of them handles it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    Square { side: f64 },
    Rectangle { length: f64, width: f64 },
}

/// The discriminant of a [`Shape`], without its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
}

pub fn circle(radius: f64) -> Shape {
    Shape::Circle { radius }
}

pub fn square(side: f64) -> Shape {
    Shape::Square { side }
}

pub fn rectangle(length: f64, width: f64) -> Shape {
    Shape::Rectangle { length, width }
}

/// Area of `shape`.
///
/// Dimensions are used as given; negative or zero sizes are not rejected.
///
/// A match that leaves out a variant is refused by the compiler:
///
/// ```compile_fail,E0004
/// use shapes::Shape;
///
/// fn partial(shape: Shape) -> f64 {
///     match shape {
///         Shape::Circle { radius } => radius * radius,
///         Shape::Square { side } => side * side,
///     }
/// }
/// ```
///
/// ```
/// let area = shapes::compute_area(shapes::rectangle(3.0, 4.0));
/// assert_eq!(area, 12.0);
/// ```
pub fn compute_area(shape: Shape) -> f64 {
    match shape {
        Shape::Circle { radius } => PI * radius * radius,
        Shape::Square { side } => side * side,
        Shape::Rectangle { length, width } => length * width,
    }
}

impl Shape {
    #[inline]
    pub fn area(&self) -> f64 {
        compute_area(*self)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Square { .. } => ShapeKind::Square,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Dimensions in declaration order.
    pub fn dimensions(&self) -> Vec<f64> {
        match *self {
            Shape::Circle { radius } => vec![radius],
            Shape::Square { side } => vec![side],
            Shape::Rectangle { length, width } => vec![length, width],
        }
    }
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub fn all() -> impl Iterator<Item = ShapeKind> {
        Self::iter()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    /// Number of dimensions a shape of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            ShapeKind::Circle | ShapeKind::Square => 1,
            ShapeKind::Rectangle => 2,
        }
    }

    /// Builds a shape from exactly [`arity`](Self::arity) dimensions.
    pub(crate) fn build(self, dims: &[f64]) -> Option<Shape> {
        match self {
            ShapeKind::Circle => match *dims {
                [radius] => Some(circle(radius)),
                _ => None,
            },
            ShapeKind::Square => match *dims {
                [side] => Some(square(side)),
                _ => None,
            },
            ShapeKind::Rectangle => match *dims {
                [length, width] => Some(rectangle(length, width)),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn scenarios() {
    assert!(approx_eq(circle(2.0).area(), 12.566370614));
    assert_eq!(square(5.0).area(), 25.0);
    assert_eq!(rectangle(3.0, 4.0).area(), 12.0);
    assert_eq!(circle(0.0).area(), 0.0);
}

#[test]
fn formulas() {
    let samples = [0.0, 0.5, 1.0, 2.25, 7.0, 1e3];
    for &a in &samples {
        assert!(approx_eq(compute_area(circle(a)), PI * a * a));
        assert_eq!(compute_area(square(a)), a * a);
        for &b in &samples {
            assert_eq!(compute_area(rectangle(a, b)), a * b);
        }
    }
}

#[test]
fn kinds() {
    assert_eq!(circle(1.0).kind(), ShapeKind::Circle);
    assert_eq!(square(1.0).kind(), ShapeKind::Square);
    assert_eq!(rectangle(1.0, 2.0).kind(), ShapeKind::Rectangle);

    for kind in ShapeKind::all() {
        let dims = vec![1.5; kind.arity()];
        let shape = kind.build(&dims).unwrap();
        assert_eq!(shape.kind(), kind);
        assert_eq!(shape.dimensions(), dims);
        assert!(kind.build(&[]).is_none());
    }
}

#[test]
fn every_kind_is_reachable() {
    let kinds: Vec<_> = ShapeKind::all().collect();
    assert_eq!(
        kinds,
        [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Rectangle]
    );

    // each kind round-trips through its name and builds only at its own arity
    for kind in kinds {
        let dims = [2.0, 3.0, 4.0];
        for n in 0..=dims.len() {
            let shape = kind.build(&dims[..n]);
            assert_eq!(shape.is_some(), n == kind.arity());
            if let Some(shape) = shape {
                assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
            }
        }
    }
}
