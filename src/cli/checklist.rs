//! Manual accessibility checklist command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliResult};
use crate::services::accessibility::CHECKLIST;

/// Print the WCAG manual review checklist
#[derive(Args, Debug)]
pub struct ChecklistArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct SectionOutput {
    title: &'static str,
    items: &'static [&'static str],
}

impl ChecklistArgs {
    /// Execute the checklist command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            let sections: Vec<SectionOutput> = CHECKLIST
                .iter()
                .map(|section| SectionOutput {
                    title: section.title,
                    items: section.items,
                })
                .collect();
            return print_json(&sections);
        }

        println!("WCAG 2.1 Accessibility Checklist");
        println!("================================");
        for section in CHECKLIST {
            println!();
            println!("{}", section.title);
            for item in section.items {
                println!("  [ ] {item}");
            }
        }

        Ok(())
    }
}
