use blockmail::{render_document, BlockmailError, EmailDocument};
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: blockmail-render <doc.json|doc.yaml> [-o out.html]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  blockmail-render newsletter.json");
        eprintln!("  blockmail-render campaign.yaml -o campaign.html");
        process::exit(1);
    }

    let input_path = &args[1];
    let output_path = match args.get(2).map(String::as_str) {
        Some("-o") => match args.get(3) {
            Some(path) => Some(path.clone()),
            None => {
                eprintln!("✗ -o requires an output path");
                process::exit(1);
            }
        },
        Some(other) => {
            eprintln!("✗ unknown argument '{}'", other);
            process::exit(1);
        }
        None => None,
    };

    match render_file(input_path, output_path.as_deref()) {
        Ok(()) => {
            eprintln!("✓ rendered {}", input_path);
        }
        Err(e) => {
            eprintln!("✗ {} failed to render:", input_path);
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}

fn render_file(path: &str, output: Option<&str>) -> Result<(), BlockmailError> {
    let content = fs::read_to_string(path).map_err(|source| BlockmailError::Io {
        path: path.to_string(),
        source,
    })?;

    // YAML documents by extension; everything else is treated as JSON.
    let document = if path.ends_with(".yaml") || path.ends_with(".yml") {
        EmailDocument::from_yaml(&content)?
    } else {
        EmailDocument::from_json(&content)?
    };

    document.settings.validate()?;

    let html = render_document(&document);
    match output {
        Some(out_path) => fs::write(out_path, html).map_err(|source| BlockmailError::Io {
            path: out_path.to_string(),
            source,
        })?,
        None => print!("{}", html),
    }
    Ok(())
}
