//! Subsets command - list the subsets of a descriptor.

use std::path::PathBuf;

use colored::Colorize;
use hubforge::InferenceConfig;

pub fn run(file: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let model = super::load_model(&file, InferenceConfig::default())?;

    if json_output {
        let listing = serde_json::json!({
            "subsets": model.subsets(),
            "selected": model.selected_subset_name(),
            "multiple": model.has_more_than_one_subset(),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Subsets:".yellow().bold());
    for subset in model.iter() {
        let line = format!(
            "{:<24} {} fields, {} questions, {} metadata{}",
            subset.name(),
            subset.fields().len(),
            subset.questions().len(),
            subset.metadata().len(),
            subset.preset().map(|p| format!(" [{}]", p)).unwrap_or_default()
        );
        if subset.name() == model.selected_subset_name() {
            println!("* {}", line.green());
        } else {
            println!("  {}", line);
        }
    }

    Ok(())
}
