//! Renders a gallery of shapes into an SVG document
#![deny(warnings)]

use drawing::*;
use std::{
    env,
    fs::File,
    io::{BufReader, BufWriter, Write},
};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

#[derive(Debug, Default)]
struct Args {
    input_file: Option<String>,
    output_file: Option<String>,
    dump: bool,
}

impl Args {
    fn parse() -> Result<Args, Error> {
        let mut result = Args::default();
        let mut args = env::args();
        let cmd = args.next().unwrap_or_else(|| "shapes".to_owned());
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "-o" => {
                    let output = args.next().ok_or("-o requires output file argument")?;
                    result.output_file.replace(output);
                }
                "-d" => result.dump = true,
                "-h" => {
                    eprintln!("Renders a gallery of shapes into an SVG document");
                    eprintln!("\nUSAGE:");
                    eprintln!("    {} [-o <out.svg>] [-d] [<gallery.json>]", cmd);
                    eprintln!("\nARGS:");
                    eprintln!("    -o <out.svg>       output file, stdout if omitted");
                    eprintln!("    -d                 dump gallery as JSON instead of rendering");
                    eprintln!("    <gallery.json>     gallery description, built-in if omitted");
                    std::process::exit(0);
                }
                _ if result.input_file.is_none() => result.input_file = Some(arg),
                _ => return Err("unexpected positional argument".into()),
            }
        }
        Ok(result)
    }
}

/// Gallery with one of every shape laid out in a grid
fn builtin_gallery() -> Gallery {
    let shapes = vec![
        ShapeKind::Triangle,
        ShapeKind::Trapezoid(Trapezoid::default()),
        ShapeKind::Arrow,
        ShapeKind::Arc(Arc::new(Angle::ZERO, Angle::degrees(110.0), true).inset(10.0)),
        ShapeKind::Flower(Flower::default()),
        ShapeKind::Spirograph(Spirograph::default()),
        ShapeKind::Checkerboard(Checkerboard::new(8, 8)),
        ShapeKind::ColorCyclingCircle(ColorCycling::new(Circle::default(), 0.2)),
        ShapeKind::ColorCyclingRectangle(ColorCycling::new(Rectangle::default(), 0.6).with_steps(50)),
    ];
    let size = 300.0;
    let margin = 20.0;
    let mut gallery = Gallery::default();
    for (index, shape) in shapes.into_iter().enumerate() {
        let column = (index % 3) as Scalar;
        let row = (index / 3) as Scalar;
        let rect = Rect::new(
            margin + column * (size + margin),
            margin + row * (size + margin),
            size,
            size,
        );
        gallery.push(rect, shape);
    }
    gallery
}

fn write_svg(gallery: &Gallery, mut out: impl Write) -> Result<(), Error> {
    let bbox = gallery
        .bbox()
        .map(|bbox| bbox.inset(-20.0))
        .unwrap_or_default();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bbox.min_x(),
        bbox.min_y(),
        bbox.width(),
        bbox.height()
    )?;
    for item in gallery.items.iter() {
        let rect = item.rect;
        // shapes position themselves relative to the rectangle size only
        let offset = format!("translate({} {})", rect.min_x(), rect.min_y());
        let local = Rect::new(0.0, 0.0, rect.width(), rect.height());
        writeln!(out, r#"<g id="{}" transform="{}">"#, item.shape.name(), offset)?;
        let rings = item.shape.rings(local)?;
        if rings.is_empty() {
            let fill = match item.shape {
                ShapeKind::Checkerboard(_) => "black",
                _ => "none",
            };
            writeln!(
                out,
                r#"  <path fill="{}" stroke="black" stroke-width="2" stroke-linejoin="round" d="{}"/>"#,
                fill,
                item.shape.path(local).to_svg_path()
            )?;
        }
        for ring in rings.iter() {
            let gradient = format!("{}-{}", item.shape.name(), ring.index);
            writeln!(
                out,
                r#"  <linearGradient id="{}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient>"#,
                gradient,
                RGBA::from(ring.start),
                RGBA::from(ring.end)
            )?;
            writeln!(
                out,
                r#"  <path fill="none" stroke="url(#{})" d="{}"/>"#,
                gradient,
                ring.path.to_svg_path()
            )?;
        }
        writeln!(out, "</g>")?;
    }
    writeln!(out, "</svg>")?;
    Ok(())
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;
    let gallery = match &args.input_file {
        Some(input_file) => {
            let _span = tracing::info_span!("[load]", path = %input_file).entered();
            Gallery::from_json(BufReader::new(File::open(input_file)?))?
        }
        None => builtin_gallery(),
    };

    let out: Box<dyn Write> = match &args.output_file {
        Some(output_file) => Box::new(BufWriter::new(File::create(output_file)?)),
        None => Box::new(std::io::stdout().lock()),
    };
    if args.dump {
        gallery.to_json(out)?;
    } else {
        let _span = tracing::info_span!("[render]", items = gallery.items.len()).entered();
        write_svg(&gallery, out)?;
    }
    Ok(())
}
