use std::path::Path;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, error};

use admitplot::chart::render_to_figure;
use admitplot::config::{FrameMode, PlotConfig};
use admitplot::input::load_observations;
use admitplot::output::{RenderSummary, SummaryCollector};
use admitplot::output::schema::{schema_json_pretty, validate_summary};

#[derive(Parser)]
#[command(name = "admitplot")]
#[command(
    about = "Plot TOEFL score against chance of admission",
    long_about = "Reads a JSON array of admission records, draws a scatter plot with a least-squares trendline and writes it as SVG."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the scatter plot and trendline to SVG
    Render {
        /// JSON array of records holding the score and chance fields
        #[arg(long, required = true)]
        data: String,
        /// Output SVG file
        #[arg(short, long, required = true)]
        output: String,
        /// Also write a JSON summary of ranges, fit and drawn points
        #[arg(long)]
        summary: Option<String>,
        /// JSON plot configuration (layout, styles, field names)
        #[arg(long)]
        config: Option<String>,
        /// Coordinate frame, overriding the configuration
        #[arg(long)]
        frame: Option<FrameMode>,
        /// Record key of the score field
        #[arg(long)]
        score_field: Option<String>,
        /// Record key of the chance field
        #[arg(long)]
        chance_field: Option<String>,
        /// Overwrite existing output files
        #[arg(long)]
        force: bool,
    },
    /// Check a written render summary against its schema and counts
    Check {
        /// Summary JSON written by `render --summary`
        #[arg(long, required = true)]
        summary: String,
    },
    /// Print the JSON Schema of the render summary
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

// Helper to check output paths and create directories
fn check_output_paths(paths: &[&str], force: bool) -> Result<(), Box<dyn std::error::Error>> {
    for p in paths {
        let path = Path::new(p);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty() && !parent.exists() {
                info!("Creating output directory: {:?}", parent);
                std::fs::create_dir_all(parent)?;
            }

        if !force && path.exists() {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("Output file {} already exists. Use --force to overwrite.", p),
            )));
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        };
        match file {
            Ok(file) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }
    log_builder.init();

    match &cli.command {
        Commands::Render {
            data,
            output,
            summary,
            config,
            frame,
            score_field,
            chance_field,
            force,
        } => {
            let mut outputs = vec![output.as_str()];
            if let Some(s) = summary {
                outputs.push(s.as_str());
            }
            if let Err(e) = check_output_paths(&outputs, *force) {
                error!("{}", e);
                std::process::exit(1);
            }

            let mut plot_config = match config {
                Some(path) => match PlotConfig::load(path) {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Error loading plot config {}: {}", path, e);
                        std::process::exit(1);
                    }
                },
                None => PlotConfig::default(),
            };
            if let Some(frame) = frame {
                plot_config.frame = *frame;
            }
            if let Some(field) = score_field {
                plot_config.fields.score = field.clone();
            }
            if let Some(field) = chance_field {
                plot_config.fields.chance = field.clone();
            }

            let observations = match load_observations(data, &plot_config.fields) {
                Ok(o) => o,
                Err(e) => {
                    error!("{:#}", e);
                    std::process::exit(1);
                }
            };

            let (figure, ctx, outcome) = match render_to_figure(&observations, &plot_config) {
                Ok(r) => r,
                Err(e) => {
                    error!("Error rendering {}: {}", data, e);
                    std::process::exit(1);
                }
            };

            if let Err(e) = figure.save(output) {
                error!("Error writing SVG {}: {}", output, e);
                std::process::exit(1);
            }
            info!("Wrote chart to {}", output);

            if let Some(path) = summary {
                let collector = SummaryCollector::new()
                    .with_source(data)
                    .with_context(&ctx)
                    .with_outcome(&outcome);
                if let Err(e) = collector.write_json(path) {
                    error!("Error writing summary {}: {}", path, e);
                    std::process::exit(1);
                }
                info!("Wrote summary to {}", path);
            }
        }
        Commands::Check { summary } => {
            let loaded = match RenderSummary::load_json(summary) {
                Ok(s) => s,
                Err(e) => {
                    error!("{:#}", e);
                    std::process::exit(1);
                }
            };
            if let Err(msg) = validate_summary(&loaded) {
                error!("{}: {}", summary, msg);
                std::process::exit(1);
            }
            info!(
                "{}: {} observations, {:?} frame, summary is valid",
                summary, loaded.observations, loaded.frame
            );
        }
        Commands::Schema { output } => {
            let schema = match schema_json_pretty() {
                Ok(s) => s,
                Err(e) => {
                    error!("Error serializing schema: {}", e);
                    std::process::exit(1);
                }
            };
            match output {
                Some(path) => {
                    if let Err(e) = std::fs::write(path, schema) {
                        error!("Error writing schema {}: {}", path, e);
                        std::process::exit(1);
                    }
                    info!("Wrote schema to {}", path);
                }
                None => println!("{}", schema),
            }
        }
    }
}
