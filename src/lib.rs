pub mod cli;
pub mod compiler;
pub mod model;
pub mod parser;
pub mod writer;

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::model::TemplateJob;

pub fn run() -> Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Collect ────────────────────────────────────────────────────
    let jobs = collect_jobs(&args)?;
    println!("Compiling {} template(s)", jobs.len());

    // 2. ── Compile ────────────────────────────────────────────────────
    let mut classes = Vec::with_capacity(jobs.len());
    for job in &jobs {
        let class = compiler::compile(job)
            .with_context(|| format!("Compiling template for `{}`", job.class_name))?;
        classes.push(class);
    }

    // 3. ── Write outputs ──────────────────────────────────────────────
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Creating {}", args.output.display()))?;

    writer::header::emit(&classes, &args.output).with_context(|| "Writing generated headers")?;

    Ok(())
}

/// Resolve the CLI input into concrete compilation jobs.
///
/// A `.json` input is a manifest naming several templates; anything else is
/// a single template whose class name comes from `--class` or the file stem.
fn collect_jobs(args: &cli::Cli) -> Result<Vec<TemplateJob>> {
    let manifest_mode = args.input.extension().is_some_and(|ext| ext == "json");

    if manifest_mode {
        let json = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Reading {}", args.input.display()))?;
        let entries = parser::load_from_json(&json).with_context(|| "Parsing manifest JSON")?;

        let base = args.input.parent().unwrap_or(Path::new(""));
        let mut jobs = Vec::with_capacity(entries.len());
        for entry in entries {
            let path = base.join(&entry.path);
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Reading {}", path.display()))?;
            jobs.push(TemplateJob {
                class_name: entry.class,
                source,
            });
        }
        Ok(jobs)
    } else {
        let source = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Reading {}", args.input.display()))?;
        let class_name = match &args.class {
            Some(name) => name.clone(),
            None => class_name_from_stem(&args.input)?,
        };
        Ok(vec![TemplateJob { class_name, source }])
    }
}

fn class_name_from_stem(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("cannot derive a class name from {}", path.display()))?;

    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => Ok(first.to_ascii_uppercase().to_string() + chars.as_str()),
        None => Err(anyhow!("cannot derive a class name from {}", path.display())),
    }
}
