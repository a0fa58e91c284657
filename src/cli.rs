//! Command-line interface for intern-match.
//!
//! ```text
//! # Recommend internships for a stored student
//! intern-match recommend 2
//!
//! # Match an ad-hoc skill list, JSON output for scripting
//! intern-match --format json match --skills "Python,Data Analysis"
//!
//! # Rank students for an internship
//! intern-match shortlist 3 --limit 2
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use intern_match::models::ErrorResponse;
use intern_match::{Internship, MatchReport, MatchSkillsRequest, Recommender, Student};

#[derive(Parser)]
#[command(name = "intern-match")]
#[command(version)]
#[command(about = "Recommend government internships by skill similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to config/default.toml and config/local.toml)
    #[arg(short, long, global = true, env = "INTERN_MATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog JSON file, overrides the configured catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank internships for a student in the catalog
    Recommend {
        /// Student ID
        student_id: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rank internships for an ad-hoc list of skills
    Match {
        /// Skills, comma-separated or repeated
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rank students for an internship in the catalog
    Shortlist {
        /// Internship ID
        internship_id: u32,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List all internships
    Internships,

    /// List all students
    Students,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Execute a parsed command against the recommender
pub fn run(command: Commands, recommender: &Recommender, format: OutputFormat) -> anyhow::Result<()> {
    let result = match command {
        Commands::Recommend { student_id, limit } => recommender
            .recommend_for_student(&student_id, limit)
            .map(|report| print_internships(&report, format)),
        Commands::Match { skills, limit } => {
            let request = MatchSkillsRequest { skills, limit };
            recommender
                .match_skills(&request)
                .map(|report| print_internships(&report, format))
        }
        Commands::Shortlist { internship_id, limit } => recommender
            .shortlist_for_internship(internship_id, limit)
            .map(|report| print_students(&report, format)),
        Commands::Internships => Ok(list_internships(recommender.catalog().internships(), format)),
        Commands::Students => Ok(list_students(recommender.catalog().students(), format)),
    };

    match result {
        Ok(printed) => printed,
        Err(err) => {
            if format == OutputFormat::Json {
                print_json(&ErrorResponse {
                    error: err.kind().to_string(),
                    message: err.to_string(),
                })?;
            }
            Err(err.into())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_internships(report: &MatchReport<Internship>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            for m in &report.matches {
                println!("{}: {:.1}% match", m.candidate.title, m.match_score);
            }
            Ok(())
        }
    }
}

fn print_students(report: &MatchReport<Student>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Text => {
            for m in &report.matches {
                println!("{} ({}): {:.1}% match", m.candidate.name, m.candidate.id, m.match_score);
            }
            Ok(())
        }
    }
}

fn list_internships(internships: &[Internship], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&internships),
        OutputFormat::Text => {
            for i in internships {
                println!(
                    "{}\t{}\t{}\t{}",
                    i.id,
                    i.title,
                    i.location,
                    i.required_skills.labels().join(", ")
                );
            }
            Ok(())
        }
    }
}

fn list_students(students: &[Student], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&students),
        OutputFormat::Text => {
            for s in students {
                println!("{}\t{}\t{}", s.id, s.name, s.skills.labels().join(", "));
            }
            Ok(())
        }
    }
}
