use std::path::PathBuf;

use crate::ShapeKind;

#[derive(thiserror::Error, Debug)]
pub enum ShapeError {
    #[error("malformed shape `{0}`, expected `kind(dimension, ...)`")]
    Syntax(String),
    #[error("unknown shape kind `{0}`")]
    UnknownKind(String),
    #[error("{kind} takes {} dimension(s), got {found}", .kind.arity())]
    Arity { kind: ShapeKind, found: usize },
    #[error("`{0}` is not a valid dimension")]
    Dimension(String),
    #[error("catalog couldn't be parsed")]
    Toml(#[from] toml::de::Error),
    #[error("catalog couldn't be written")]
    Serialize(#[from] toml::ser::Error),
    #[error("couldn't read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[test]
fn messages() {
    let arity = ShapeError::Arity {
        kind: ShapeKind::Rectangle,
        found: 1,
    };
    assert_eq!(arity.to_string(), "rectangle takes 2 dimension(s), got 1");
    assert_eq!(
        ShapeError::UnknownKind("hexagon".into()).to_string(),
        "unknown shape kind `hexagon`"
    );
}
