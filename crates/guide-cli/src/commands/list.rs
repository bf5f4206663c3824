//! `guide list-editors` - show the registered editor catalog

use crate::error::Result;
use colored::Colorize;
use guide_emit::EditorRegistry;
use guide_fs::NormalizedPath;

pub fn run() -> Result<()> {
    let registry = EditorRegistry::with_builtins();
    let cwd = NormalizedPath::new(".");

    println!("{}", "Registered editors:".bold());
    for registration in registry.iter() {
        let caps = registration.capabilities();
        let mut categories = Vec::new();
        if caps.emits_rules {
            categories.push("rules");
        }
        if caps.emits_commands {
            categories.push("commands");
        }
        if caps.emits_external_tools {
            categories.push("external-tools");
        }

        let present = registration
            .file_patterns
            .iter()
            .any(|pattern| cwd.join(pattern).exists());
        let marker = if present { "●".green() } else { "○".normal() };

        println!(
            "  {} {:<10} {:<16} [{}]",
            marker,
            registration.slug,
            registration.name,
            categories.join(", ")
        );
    }

    println!();
    println!("{} artifacts detected in current directory", "●".green());

    Ok(())
}
