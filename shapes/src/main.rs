use std::path::PathBuf;

use anyhow::{Context, Result};
use shapes::{circle, rectangle, square, Catalog, Shape};

const HELP: &str = "\
shapes - print the area of each shape

USAGE:
  shapes [OPTIONS] [SHAPE...]

OPTIONS:
  -c, --catalog FILE    read shapes from a TOML catalog first
  -p, --precision N     print areas with N decimal places
  -h, --help            print this help

SHAPE:
  circle(RADIUS), square(SIDE), rectangle(LENGTH, WIDTH)
";

struct Args {
    catalog: Option<PathBuf>,
    precision: Option<usize>,
    shapes: Vec<String>,
}

fn parse_args(mut pargs: pico_args::Arguments) -> Result<Option<Args>> {
    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let args = Args {
        catalog: pargs.opt_value_from_str(["-c", "--catalog"])?,
        precision: pargs.opt_value_from_str(["-p", "--precision"])?,
        shapes: pargs
            .finish()
            .into_iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect(),
    };
    Ok(Some(args))
}

/// Catalog shapes first, then positional ones; the demonstration set if
/// both are empty.
fn collect(catalog: Option<Catalog>, args: &[String]) -> Result<Vec<Shape>> {
    let mut shapes = catalog.map(|c| c.shapes).unwrap_or_default();

    for s in args {
        let shape = s
            .parse::<Shape>()
            .with_context(|| format!("invalid shape argument `{}`", s))?;
        shapes.push(shape);
    }

    if shapes.is_empty() {
        log::info!("no shapes given, using the demonstration set");
        shapes = vec![
            circle(2.0),
            square(5.0),
            rectangle(3.0, 4.0),
            circle(0.0),
        ];
    }
    Ok(shapes)
}

fn format_area(area: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, area),
        None => format!("{}", area),
    }
}

/// One line per shape, plus a total when there is more than one.
fn report(shapes: Vec<Shape>, precision: Option<usize>) -> Vec<String> {
    let catalog = Catalog::new(shapes);
    let mut lines: Vec<String> = catalog
        .areas()
        .map(|(shape, area)| {
            log::debug!("{:?} -> {}", shape.kind(), area);
            format!("{} area = {}", shape, format_area(area, precision))
        })
        .collect();
    if catalog.shapes.len() > 1 {
        lines.push(format!(
            "total area = {}",
            format_area(catalog.total_area(), precision)
        ));
    }
    lines
}

fn run() -> Result<()> {
    let args = match parse_args(pico_args::Arguments::from_env())? {
        Some(args) => args,
        None => {
            print!("{}", HELP);
            return Ok(());
        }
    };

    let catalog = match &args.catalog {
        Some(path) => Some(
            Catalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?,
        ),
        None => None,
    };

    for line in report(collect(catalog, &args.shapes)?, args.precision) {
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    let _ = env_logger::try_init();

    if let Err(e) = run() {
        eprintln!("error: {:?}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn precision() {
    assert_eq!(format_area(12.0, None), "12");
    assert_eq!(format_area(std::f64::consts::PI * 4.0, Some(3)), "12.566");
}

#[test]
fn demonstration_set() {
    let shapes = collect(None, &[]).unwrap();
    assert_eq!(
        shapes,
        vec![circle(2.0), square(5.0), rectangle(3.0, 4.0), circle(0.0)]
    );
    assert!(collect(Some(Catalog::default()), &[]).unwrap().len() == 4);
}

#[test]
fn catalog_then_arguments() {
    let catalog = Catalog::new(vec![circle(1.0), square(2.0)]);
    let shapes = collect(Some(catalog), &args(&["rectangle(3, 4)", "circle(5)"])).unwrap();
    assert_eq!(
        shapes,
        vec![circle(1.0), square(2.0), rectangle(3.0, 4.0), circle(5.0)]
    );

    assert!(collect(None, &args(&["circle(5)", "hexagon(1)"])).is_err());
}

#[test]
fn total_only_for_several_shapes() {
    assert_eq!(report(vec![square(5.0)], None), vec!["square(5) area = 25"]);

    assert_eq!(
        report(vec![square(5.0), rectangle(3.0, 4.0)], Some(1)),
        vec![
            "square(5) area = 25.0",
            "rectangle(3, 4) area = 12.0",
            "total area = 37.0",
        ]
    );
}

#[test]
fn flags() {
    use std::ffi::OsString;

    let from = |list: &[&str]| {
        let list = list.iter().map(OsString::from).collect();
        parse_args(pico_args::Arguments::from_vec(list)).unwrap()
    };

    assert!(from(&["--help"]).is_none());

    let parsed = from(&["-p", "2", "square(1)", "--catalog", "demo.toml"]).unwrap();
    assert_eq!(parsed.precision, Some(2));
    assert_eq!(parsed.catalog, Some(PathBuf::from("demo.toml")));
    assert_eq!(parsed.shapes, args(&["square(1)"]));
}
