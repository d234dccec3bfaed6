//! ilrcheck - Derived-fact validation engine for learner funding records
//!
//! CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ilrcheck::cli::{CheckUlnCommand, RulesCommand, ValidateCommand, ValidateOptions};
use ilrcheck::config::Config;
use ilrcheck::engine::{Services, Validator};
use ilrcheck::error::exit_codes;
use ilrcheck::lookups::{
    CapQuery, CodeFamQuery, InMemoryCapTable, InMemoryOrgDirectory, KeyMonitoringQuery, NoOrgData,
    OrgQuery,
};

/// ilrcheck - validate learner funding records against regulatory rules
#[derive(Parser)]
#[command(name = "ilrcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON file of learner records
    Validate {
        /// Path to a JSON array of learners
        #[arg(short, long)]
        input: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Only print the summary line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Compute the check digit verdict for a learner number
    CheckUln {
        /// The ten-digit learner number
        uln: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in rules and their enabled state
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    let code = match cli.command {
        Commands::Validate { input, json, quiet } => run_validate(&config, input, json, quiet),
        Commands::CheckUln { uln, json } => run_check_uln(uln, json),
        Commands::Rules { json } => run_rules(&config, json),
    };
    ExitCode::from(code as u8)
}

/// Build the collaborator services from config-referenced reference data.
fn build_services(config: &Config) -> Services {
    let caps: Arc<dyn CapQuery> = match &config.caps.file {
        Some(path) => match InMemoryCapTable::load(path) {
            Ok(table) => Arc::new(table),
            Err(err) => {
                tracing::warn!("cap table {} not loaded: {err}", path.display());
                Arc::new(InMemoryCapTable::empty())
            }
        },
        None => Arc::new(InMemoryCapTable::empty()),
    };

    let orgs: Arc<dyn OrgQuery> = match &config.provider.directory {
        Some(path) => match InMemoryOrgDirectory::load(path) {
            Ok(dir) => Arc::new(dir),
            Err(err) => {
                tracing::warn!("organisation directory {} not loaded: {err}", path.display());
                Arc::new(NoOrgData)
            }
        },
        None => Arc::new(NoOrgData),
    };

    Services {
        fams: Arc::new(CodeFamQuery),
        monitoring: Arc::new(KeyMonitoringQuery),
        caps,
        orgs,
        ukprn: config.provider.ukprn,
    }
}

fn run_validate(config: &Config, input: PathBuf, json: bool, quiet: bool) -> i32 {
    let validator = Validator::standard(build_services(config), &config.rules);
    let command = ValidateCommand::new(validator);
    let output = command.run(&ValidateOptions { input, json, quiet });

    if json {
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: cannot render report: {err}");
                return exit_codes::CRASH;
            }
        }
    } else {
        if let Some(err) = &output.error {
            eprintln!("error: {err}");
            return exit_codes::CRASH;
        }
        if !quiet {
            for v in &output.violations {
                let attribution = match v.aim_seq_number {
                    Some(seq) => format!("{} aim {}", v.learn_ref_number, seq),
                    None => v.learn_ref_number.clone(),
                };
                let params: Vec<String> = v
                    .parameters
                    .iter()
                    .map(|p| format!("{}={}", p.name, p.value))
                    .collect();
                println!("{}  {}  {}", v.rule_name, attribution, params.join(" "));
            }
        }
        println!(
            "{} learner(s) validated, {} violation(s)",
            output.learners,
            output.violations.len()
        );
    }

    if !output.success {
        exit_codes::CRASH
    } else if output.is_clean() {
        exit_codes::CLEAN
    } else {
        exit_codes::VIOLATIONS
    }
}

fn run_check_uln(uln: u64, json: bool) -> i32 {
    let output = CheckUlnCommand.run(uln);
    if json {
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: {err}");
                return exit_codes::CRASH;
            }
        }
    } else {
        match output.check_character {
            Some(c) => println!("{}: {} (check character {})", output.uln, output.verdict, c),
            None => println!("{}: {}", output.uln, output.verdict),
        }
    }
    if output.verdict == "valid" || output.verdict == "temporary" {
        exit_codes::CLEAN
    } else {
        exit_codes::VIOLATIONS
    }
}

fn run_rules(config: &Config, json: bool) -> i32 {
    let output = RulesCommand.run(&config.rules);
    if json {
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: {err}");
                return exit_codes::CRASH;
            }
        }
    } else {
        for rule in &output.rules {
            let state = if rule.enabled { "enabled" } else { "disabled" };
            println!("{:<22} {}", rule.name, state);
        }
    }
    exit_codes::CLEAN
}
