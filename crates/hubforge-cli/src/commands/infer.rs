//! Infer command - show the derived schema of one subset.

use std::path::PathBuf;

use colored::Colorize;
use hubforge::{DatasetCreationModel, InferenceConfig, QuestionKind};

pub fn run(
    file: PathBuf,
    subset: Option<String>,
    labels: Option<Vec<String>>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = InferenceConfig::default();
    if let Some(labels) = labels {
        config = config.with_preset_labels(labels);
    }
    let mut model = super::load_model(&file, config)?;

    if let Some(name) = subset {
        model.change_subset(&name)?;
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&to_json(&model))?);
    } else {
        print_human(&model);
    }

    Ok(())
}

/// JSON view of the selected subset.
fn to_json(model: &DatasetCreationModel) -> serde_json::Value {
    serde_json::json!({
        "subset": model.selected_subset_name(),
        "subsets": model.subsets(),
        "fields": model.fields(),
        "questions": model.questions(),
        "metadata": model.metadata(),
        "preset": model.preset(),
    })
}

fn print_human(model: &DatasetCreationModel) {
    println!(
        "{} {}",
        "Schema for subset".cyan().bold(),
        model.selected_subset_name().white()
    );
    if model.has_more_than_one_subset() {
        println!("  (available: {})", model.subsets().join(", "));
    }
    if let Some(preset) = model.preset() {
        println!("  {} {} ({})", "Task preset:".green(), preset, preset.guidelines());
    }
    println!();

    println!("{}", "Fields:".yellow().bold());
    for field in model.fields() {
        let marker = if field.required { " (required)".red().to_string() } else { String::new() };
        println!("  {:<24} {:?}{}", field.name, field.input_type, marker);
    }
    println!();

    println!("{}", "Questions:".yellow().bold());
    for question in model.questions() {
        let marker = if question.required { " (required)".red().to_string() } else { String::new() };
        match question.kind {
            QuestionKind::LabelSelection => println!(
                "  {:<24} label selection [{}]{}",
                question.name,
                question.options.as_deref().unwrap_or_default().join(", "),
                marker
            ),
            QuestionKind::Text => println!("  {:<24} text{}", question.name, marker),
        }
    }

    if !model.metadata().is_empty() {
        println!();
        println!("{}", "Metadata:".yellow().bold());
        for property in model.metadata() {
            println!("  {:<24} {:?}", property.name, property.metadata_type);
        }
    }
}
