//! Implementation of the `nexus list` command.

use nexus_adapters::builtin_registry;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: &OutputManager) -> CliResult<()> {
    let entries = builtin_registry().list();

    match args.format {
        ListFormat::Table => {
            output.header("Available architectures:")?;
            for entry in &entries {
                let d = &entry.descriptor;
                let aliases = if entry.aliases.is_empty() {
                    String::new()
                } else {
                    format!(" (alias: {})", entry.aliases.join(", "))
                };
                output.print(&format!("  {:<10} {}{}", d.name, d.display_name, aliases))?;
                output.print(&format!("  {:<10} {}", "", d.description))?;
                if !d.features.is_empty() {
                    output.print(&format!("  {:<10} {}", "", d.features.join(" · ")))?;
                }
            }
        }
        // Machine-readable forms bypass quiet mode.
        ListFormat::Json => output.json(&entries)?,
        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.descriptor.name);
            }
        }
    }

    Ok(())
}
