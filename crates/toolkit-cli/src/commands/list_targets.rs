//! List the destination catalogue

use colored::Colorize;
use toolkit_targets::{Category, FileNaming, TargetRegistry};

use crate::error::Result;

/// Run the list-targets command
pub fn run_list_targets(json: bool) -> Result<()> {
    let registry = TargetRegistry::with_builtins();

    if json {
        println!("{}", serde_json::to_string_pretty(&registry.all())?);
        return Ok(());
    }

    println!("{}", "Available Targets".bold());
    println!();

    for target in registry.all() {
        let mut notes = Vec::new();
        if let FileNaming::FixedFilenameSubdirectory { file_name } = &target.naming {
            notes.push(format!("one directory per document, {file_name}"));
        }
        if target.supports_frontmatter() {
            notes.push("skill frontmatter".to_string());
        }
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join("; "))
        };

        println!("  {:<12} {}{}", target.id.green(), target.name, notes.dimmed());
        for category in Category::ALL {
            if let Some(dir) = target.directory_for(category) {
                println!("      {:<10} {}", category.to_string(), dir.dimmed());
            }
        }
    }

    println!();
    println!("{} targets", registry.len());
    Ok(())
}
