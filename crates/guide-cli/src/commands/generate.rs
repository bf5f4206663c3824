//! `guide generate` - run the pipeline and report per-editor status

use super::{environment_variables, parse_overrides};
use crate::error::{Error, Result};
use colored::Colorize;
use guide_gen::{EditorStatus, GenerateRequest, Generator};

pub fn run(
    path: &str,
    editors: &[String],
    dry_run: bool,
    output: &str,
    raw_vars: &[String],
) -> Result<()> {
    let mut request = GenerateRequest::new(path, output);
    request.editors = editors.to_vec();
    request.overrides = parse_overrides(raw_vars)?;
    request.environment = environment_variables();
    request.options.dry_run = dry_run;

    let generator = Generator::new();
    let report = generator.generate(&request)?;

    let mut failed = 0;
    for outcome in &report.editors {
        print_outcome(outcome);
        if !outcome.succeeded() {
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(Error::PartialFailure {
            failed,
            total: report.editors.len(),
        });
    }

    Ok(())
}

fn print_outcome(outcome: &guide_gen::EditorOutcome) {
    match &outcome.status {
        EditorStatus::Written {
            paths,
            write_errors,
        } => {
            if write_errors.is_empty() {
                println!(
                    "{} {} ({} file{})",
                    "✓".green(),
                    outcome.slug,
                    paths.len(),
                    if paths.len() == 1 { "" } else { "s" }
                );
            } else {
                println!("{} {}", "✗".red(), outcome.slug);
                for error in write_errors {
                    println!("    {}", error.red());
                }
            }
        }
        EditorStatus::Previewed { previews } => {
            let changed = previews.iter().filter(|p| p.diff.is_some()).count();
            println!(
                "{} {} ({} file{}, {} changed)",
                "~".cyan(),
                outcome.slug,
                previews.len(),
                if previews.len() == 1 { "" } else { "s" },
                changed
            );
            for preview in previews {
                if let Some(diff) = &preview.diff {
                    println!("{diff}");
                }
            }
        }
        EditorStatus::Failed { message } => {
            println!("{} {}: {}", "✗".red(), outcome.slug, message);
        }
    }

    for category in &outcome.skipped {
        println!(
            "    {} skipped {} (not supported by this editor)",
            "!".yellow(),
            category
        );
    }
}
