use anyhow::{Context, Result};
use clap::Parser;
use epubfix::cli::{self, Cli, Command};
use epubfix::fixture;

/// Format a byte count as a human-readable size string.
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = cli::output::OutputConfig::from_global(cli.json, cli.verbose, cli.quiet);

    match cli.command {
        Command::Generate { output: out_file } => {
            fixture::writer::write_sample(&out_file)
                .with_context(|| format!("writing {}", out_file.display()))?;
            output.status(&format!("Wrote {}", out_file.display()));
            if output.verbose
                && let Ok(meta) = std::fs::metadata(&out_file)
            {
                output.detail(&format!("  Size: {}", format_size(meta.len() as usize)));
            }
        }
        Command::List => {
            if output.json {
                let items: Vec<_> = fixture::ENTRIES
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "name": e.name,
                            "size_bytes": e.content.len(),
                            "compression": if e.stored { "stored" } else { "deflated" },
                        })
                    })
                    .collect();
                output.print_json(&items)?;
            } else {
                let rows: Vec<Vec<String>> = fixture::ENTRIES
                    .iter()
                    .map(|e| {
                        vec![
                            e.name.to_string(),
                            format_size(e.content.len()),
                            if e.stored { "stored" } else { "deflated" }.to_string(),
                        ]
                    })
                    .collect();
                output.print_table(&["NAME", "SIZE", "COMPRESSION"], &rows);
            }
        }
        Command::Show { entry } => {
            let found = fixture::entry(&entry)
                .ok_or_else(|| anyhow::anyhow!("no such fixture entry: {entry}"))?;
            use std::io::Write;
            std::io::stdout().write_all(found.content)?;
        }
        Command::Verify { file } => {
            let issues = fixture::verify::verify(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            if output.json {
                let json = serde_json::json!({
                    "valid": issues.is_empty(),
                    "issues": issues,
                });
                output.print_json(&json)?;
            } else if issues.is_empty() {
                println!("{}: valid", file.display());
            } else {
                println!("{}: {} issue(s)", file.display(), issues.len());
                for issue in &issues {
                    println!("  - {issue}");
                }
            }
            output.detail(&format!(
                "  Checked: entry order, compression, {} entries",
                fixture::ENTRIES.len()
            ));
        }
    }

    Ok(())
}
