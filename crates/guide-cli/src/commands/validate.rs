//! `guide validate` - check a document without touching the filesystem

use super::{environment_variables, parse_overrides};
use crate::error::Result;
use colored::Colorize;
use guide_fs::NormalizedPath;
use guide_gen::Generator;

pub fn run(path: &str, raw_vars: &[String]) -> Result<()> {
    let overrides = parse_overrides(raw_vars)?;
    let environment = environment_variables();
    let source = NormalizedPath::new(path);

    let generator = Generator::new();
    let config = generator.validate(&source, &overrides, &environment)?;

    println!(
        "{} {} (schema v{}, {} document{})",
        "valid".green().bold(),
        path,
        config.schema_version,
        config.documents.len(),
        if config.documents.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
