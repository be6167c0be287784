use dotpress::{DeviceGeometry, PipelineError, builtin, generate};
use std::env;
use std::fs;

/// A simple CLI to emboss a text file as a G-code toolpath.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        eprintln!("Convert a text file to a braille embossing G-code toolpath.");
        eprintln!();
        eprintln!(
            "Usage: {} <input.txt> <output.gcode> [geometry.json] [table]",
            args[0]
        );
        eprintln!();
        eprintln!("  geometry.json  device geometry overrides (defaults are standard braille)");
        eprintln!("  table          built-in table name: 6-dot (default) or 8-dot");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    let geometry = match args.get(3) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => DeviceGeometry::default(),
    };
    let table_name = args.get(4).map(String::as_str).unwrap_or("6-dot");
    let table = builtin(table_name)
        .ok_or_else(|| PipelineError::Config(format!("unknown table '{table_name}'")))?;

    let text = fs::read_to_string(input_path)?;
    let result = generate(&text, &table, &geometry)?;
    if result.sheet.truncated {
        eprintln!("warning: text did not fully fit on the sheet, output is truncated");
    }

    fs::write(output_path, &result.gcode)?;
    println!(
        "Wrote {} instructions ({} dots) to {}",
        result.program.len(),
        result.sheet.dot_count(),
        output_path
    );
    Ok(())
}
