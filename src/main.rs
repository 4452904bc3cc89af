mod input;
mod parser;
mod record;
mod site;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::input::JobInput;
use crate::parser::extract::skills::{self, Category};
use crate::parser::ParserConfig;
use crate::record::ParsedJobRecord;

#[derive(Parser)]
#[command(name = "joblens", about = "Field extraction from job-posting text dumps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Salary year-guard band, shared by the extracting commands.
#[derive(Args, Clone)]
struct GuardArgs {
    /// Smallest number treated as a calendar year (excluded from salary)
    #[arg(long, default_value_t = 1990)]
    year_min: u32,
    /// Largest number treated as a calendar year (excluded from salary)
    #[arg(long, default_value_t = 2030)]
    year_max: u32,
}

impl GuardArgs {
    fn config(&self) -> ParserConfig {
        ParserConfig {
            year_guard: self.year_min..=self.year_max,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from one capture file (.txt posting text or .json capture)
    Parse {
        file: PathBuf,
        /// Emit the record as JSON instead of a card
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        guard: GuardArgs,
    },
    /// Extract fields from every capture file in a directory
    Batch {
        dir: PathBuf,
        /// Max captures to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Emit one JSON object per capture instead of a table
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        guard: GuardArgs,
    },
    /// Print the skills vocabulary
    Vocab {
        /// Filter by category (e.g. "languages", "cloud", "data")
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { file, json, guard } => {
            let input = JobInput::from_path(&file)?;
            let record = parser::process(&input, &guard.config());
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_card(&input, &record);
            }
            Ok(())
        }
        Commands::Batch { dir, limit, json, guard } => run_batch(&dir, limit, json, &guard.config()),
        Commands::Vocab { category } => {
            print_vocab(category.as_deref());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

struct BatchCounts {
    captures: usize,
    errors: usize,
    titled: usize,
    salaried: usize,
    linked: usize,
    skill_tags: usize,
}

impl BatchCounts {
    fn print(&self) {
        println!(
            "Processed {} captures ({} errors): {} titled, {} with salary, {} with apply link, {} skill tags.",
            self.captures, self.errors, self.titled, self.salaried, self.linked, self.skill_tags,
        );
    }
}

fn run_batch(dir: &PathBuf, limit: Option<usize>, json: bool, cfg: &ParserConfig) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "txt" || ext == "json")
        })
        .collect();
    files.sort();
    if let Some(limit) = limit {
        files.truncate(limit);
    }
    if files.is_empty() {
        println!("No .txt or .json captures in {}", dir.display());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let results: Vec<(&PathBuf, Result<ParsedJobRecord>)> = files
        .par_iter()
        .map(|path| {
            let record = JobInput::from_path(path).map(|input| parser::process(&input, cfg));
            pb.inc(1);
            (path, record)
        })
        .collect();
    pb.finish_and_clear();

    let mut counts = BatchCounts {
        captures: files.len(),
        errors: 0,
        titled: 0,
        salaried: 0,
        linked: 0,
        skill_tags: 0,
    };

    if !json {
        println!(
            "{:<28} | {:<30} | {:<24} | {:<12}",
            "Capture", "Title", "Location", "Salary"
        );
        println!("{}", "-".repeat(102));
    }

    for (path, result) in &results {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match result {
            Ok(record) => {
                counts.titled += usize::from(record.title.is_some());
                counts.salaried += usize::from(record.salary.is_some());
                counts.linked += usize::from(record.apply_url.is_some());
                counts.skill_tags += record.skills.len();

                if json {
                    println!(
                        "{}",
                        serde_json::to_string(&serde_json::json!({
                            "file": name,
                            "record": record,
                        }))?
                    );
                } else {
                    println!(
                        "{:<28} | {:<30} | {:<24} | {:<12}",
                        truncate(&name, 28),
                        truncate(record.title.as_deref().unwrap_or("-"), 30),
                        truncate(record.location.as_deref().unwrap_or("-"), 24),
                        record.salary.as_deref().unwrap_or("-"),
                    );
                }
            }
            Err(e) => {
                counts.errors += 1;
                warn!("{}: {:#}", name, e);
            }
        }
    }

    if !json {
        println!();
        counts.print();
    }
    Ok(())
}

/// Render one record the way the popup lays it out: headline, fact rows,
/// then the detected technologies grouped by category.
fn print_card(input: &JobInput, record: &ParsedJobRecord) {
    let fact = |value: &Option<String>| -> String {
        value.clone().unwrap_or_else(|| "Not specified".to_string())
    };

    println!("{}", record.title.as_deref().unwrap_or("Job Posting"));
    if !input.company.trim().is_empty() {
        println!("  Company:    {}", input.company.trim());
    }
    println!("  Location:   {}", fact(&record.location));
    println!("  Duration:   {}", fact(&record.duration));
    println!("  Salary:     {}", fact(&record.salary));
    println!("  Apply:      {}", fact(&record.apply_url));

    if record.skills.is_empty() {
        println!("  Tech stack: No technologies detected");
        return;
    }
    for category in Category::ALL {
        let names: Vec<&str> = record
            .skills
            .iter()
            .filter(|s| skills::category_of(s) == Some(category))
            .map(String::as_str)
            .collect();
        if !names.is_empty() {
            println!("  {:<11} {}", format!("{}:", category.label()), names.join(", "));
        }
    }
}

fn print_vocab(filter: Option<&str>) {
    let filter = filter.map(str::to_lowercase);

    for category in Category::ALL {
        if let Some(f) = &filter {
            if !category.label().to_lowercase().contains(f) {
                continue;
            }
        }
        let names: Vec<&str> = skills::VOCABULARY
            .iter()
            .filter(|(_, c)| *c == category)
            .map(|(name, _)| *name)
            .collect();
        println!("{} ({})", category.label(), names.len());
        println!("  {}", names.join(", "));
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
