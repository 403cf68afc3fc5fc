//! Main CLI application for the N-Queens solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use queens_solver::{
    board::check_board_size,
    config::{CliOverrides, OutputFormat, Settings},
    search::{QueensProblem, Solution, SolutionValidator},
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "queens_solver")]
#[command(about = "N-Queens solver that discards solutions with three queens in a line")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate and filter solutions for an NxN board
    Solve {
        /// Board size (overrides config, default 8)
        #[arg(value_parser = parse_board_size)]
        size: Option<usize>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Stop after this many raw solutions
        #[arg(short, long)]
        max_solutions: Option<usize>,

        /// Stop after this many search steps
        #[arg(long)]
        max_steps: Option<u64>,

        /// Stop after this many seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Keep solutions with three collinear queens
        #[arg(long)]
        keep_collinear: bool,

        /// Save solutions to this directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format for saved solutions
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Save solutions to the configured output directory
        #[arg(long)]
        save: bool,

        /// Re-check every solution with the independent validator
        #[arg(long)]
        verify: bool,

        /// Print only the summary line
        #[arg(short, long)]
        quiet: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a saved solution file
    Verify {
        /// Solution JSON file
        solution: PathBuf,

        /// Accept solutions with three collinear queens
        #[arg(long)]
        allow_collinear: bool,
    },
}

fn parse_board_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", value))?;
    check_board_size(size).map_err(|e| e.to_string())?;
    Ok(size)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            size,
            config,
            max_solutions,
            max_steps,
            timeout,
            keep_collinear,
            output,
            format,
            save,
            verify,
            quiet,
            verbose,
        } => {
            init_logging(verbose);
            let overrides = CliOverrides {
                size,
                max_solutions,
                max_steps,
                timeout_seconds: timeout,
                keep_collinear,
                format,
                save,
                output_dir: output,
            };
            solve_command(&config, &overrides, verify, quiet, verbose)
        }
        Commands::Setup { directory, force } => {
            init_logging(false);
            setup_command(&directory, force)
        }
        Commands::Verify {
            solution,
            allow_collinear,
        } => {
            init_logging(false);
            verify_command(&solution, allow_collinear)
        }
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        log::debug!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn solve_command(
    config_path: &Path,
    overrides: &CliOverrides,
    verify: bool,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Board size: {}", settings.board.size);
        println!("  Strip collinear: {}", settings.filter.strip_collinear);
        println!("  Limits: {:?}", settings.search_limits());
        println!();
    }

    let problem = QueensProblem::new(settings.clone()).context("Failed to create problem")?;
    let report = problem.solve().context("Failed to solve")?;

    if !report.termination.is_complete() {
        println!(
            "{}",
            ColorOutput::warning(&format!("Search stopped early: {:?}", report.termination))
        );
    }

    if report.solutions.is_empty() {
        println!("{}", ColorOutput::warning(&SolutionFormatter::format_summary(&report.solutions)));
    } else {
        println!("{}", ColorOutput::success(&SolutionFormatter::format_summary(&report.solutions)));
    }

    if !quiet && !report.solutions.is_empty() {
        println!();
        println!("{}", SolutionFormatter::format_solutions(&report.solutions));
    }

    if verbose {
        println!("{}", report);
    }

    if verify {
        let validator = SolutionValidator::new(settings.filter.strip_collinear);
        let failures = validator.validate_all(&report.solutions);
        if failures.is_empty() {
            println!("{}", ColorOutput::success("All solutions verified"));
        } else {
            for (i, result) in &failures {
                let header = format!("Solution {} failed verification:", i + 1);
                println!("{}", ColorOutput::error(&header));
                println!("{}", result);
            }
            anyhow::bail!("{} solution(s) failed verification", failures.len());
        }
    }

    if settings.output.save {
        SolutionFormatter::save_solutions(
            &report.solutions,
            &settings.output.output_directory,
            settings.output.format,
        )
        .context("Failed to save solutions")?;
        println!(
            "Solutions saved to {}",
            settings.output.output_directory.display()
        );
    }

    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_path = directory.join("config").join("default.yaml");

    if config_path.exists() && !force {
        println!("Skipped: {} (already exists)", config_path.display());
        return Ok(());
    }

    Settings::default()
        .to_file(&config_path)
        .context("Failed to create default configuration")?;
    println!("{}", ColorOutput::success(&format!("Created: {}", config_path.display())));

    Ok(())
}

fn verify_command(solution_path: &Path, allow_collinear: bool) -> Result<()> {
    let solution = Solution::load_from_file(solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    println!("{}", solution.render());
    let result = SolutionValidator::new(!allow_collinear).validate(&solution);
    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("Solution is valid"));
        Ok(())
    } else {
        anyhow::bail!("Solution in {} is invalid", solution_path.display())
    }
}
