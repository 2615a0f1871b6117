//! # pathmerge CLI
//!
//! Usage:
//!   pathmerge icon.svg -o icon.path.svg
//!   cat icon.svg | pathmerge --path-only
//!   pathmerge icon.svg --config options.json --verbose
//!   pathmerge --example > sample.svg

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use pathmerge::markup::XmlParser;
use pathmerge::Options;
use tracing::Level;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_svg());
        return;
    }

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let flag_value = |flag: &str| {
        args.windows(2)
            .find(|w| w[0] == flag)
            .map(|w| w[1].clone())
    };

    let options = match flag_value("--config") {
        Some(path) => Options::from_json(&fs::read_to_string(&path)?)?,
        None => Options::default(),
    };

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let conversion = pathmerge::convert_with(&input, &options, &XmlParser)?;
    for shape in &conversion.skipped {
        tracing::warn!(
            index = shape.index,
            kind = %shape.kind,
            reason = %shape.reason,
            "shape left out of combined path"
        );
    }

    let output = if args.iter().any(|a| a == "--path-only") {
        conversion.path_data
    } else {
        conversion.svg
    };

    match flag_value("-o") {
        Some(path) => {
            fs::write(&path, format!("{}\n", output))?;
            eprintln!("✓ Written {} bytes to {}", output.len() + 1, path);
        }
        None => println!("{}", output),
    }
    Ok(())
}

fn example_svg() -> &'static str {
    r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24">
  <rect x="3" y="4" width="18" height="16" rx="2" fill="none" stroke="currentColor" stroke-width="2"/>
  <line x1="3" y1="10" x2="21" y2="10"/>
  <line x1="8" y1="2" x2="8" y2="6"/>
  <line x1="16" y1="2" x2="16" y2="6"/>
  <circle cx="12" cy="15" r="2"/>
  <polyline points="7 15 9 15"/>
  <polygon points="15,14 17,15 15,16"/>
</svg>
"##
}
