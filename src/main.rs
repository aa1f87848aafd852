use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_COMPUTE: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the index for every assessment in the dataset
    List {
        /// Path to the dataset file (JSON or YAML)
        file: PathBuf,
    },
    /// Compute the index for a single assessment
    Compute {
        /// Path to the dataset file (JSON or YAML)
        file: PathBuf,

        /// Assessment sequence number (the ii in CRSR_ii_<Item> columns)
        #[arg(short, long)]
        assessment: u32,
    },
}

#[derive(Parser, Debug)]
#[command(name = "crsr-index")]
#[command(about = "CRS-R index calculator", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the dataset file (JSON or YAML); shorthand for `list <FILE>`
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

// A bare file argument runs `list` on it:
// `crsr-index data.json` == `crsr-index list data.json`.
fn resolve_command(command: Option<Commands>, file: Option<PathBuf>) -> Option<Commands> {
    match (command, file) {
        (Some(command), _) => Some(command),
        (None, Some(file)) => Some(Commands::List { file }),
        (None, None) => None,
    }
}

fn main() {
    let cli = Cli::parse();
    let use_colors = crsr_index::output::should_use_colors();

    let command = match resolve_command(cli.command, cli.file) {
        Some(command) => command,
        None => {
            eprintln!("No dataset given. Usage: crsr-index <FILE>, or a subcommand (see --help).");
            std::process::exit(EXIT_DATA);
        }
    };

    match command {
        Commands::List { file } => {
            let rows = match crsr_index::dataset::load_rows(&file) {
                Ok(rows) => rows,
                Err(e) => {
                    eprintln!("Dataset error: {}", e);
                    std::process::exit(EXIT_DATA);
                }
            };

            if cli.verbose {
                eprintln!("Loaded {} rows from {}", rows.len(), file.display());
            }

            let mut any_succeeded = false;
            for (row_number, row) in rows.iter().enumerate() {
                let indices = crsr_index::dataset::assessment_indices(row);
                if indices.is_empty() {
                    eprintln!(
                        "Row {}: no complete CRSR_<ii>_<Item> column set found",
                        row_number + 1
                    );
                    continue;
                }

                for ii in indices {
                    let record = match crsr_index::dataset::resolve_record(row, ii) {
                        Ok(record) => record,
                        Err(e) => {
                            eprintln!("Assessment {}: {}", ii, e);
                            // Continue with the remaining assessments
                            continue;
                        }
                    };

                    match crsr_index::index::compute_index(&record) {
                        Ok(result) => {
                            println!(
                                "{}",
                                crsr_index::output::format_result_line(
                                    ii, &record, &result, use_colors
                                )
                            );
                            if cli.verbose {
                                println!("{}", crsr_index::output::format_breakdown(&result));
                            }
                            any_succeeded = true;
                        }
                        Err(e) => {
                            eprintln!("Assessment {}: {}", ii, e);
                        }
                    }
                }
            }

            if !any_succeeded {
                eprintln!("No assessment could be computed.");
                std::process::exit(EXIT_COMPUTE);
            }
        }
        Commands::Compute { file, assessment } => {
            let rows = match crsr_index::dataset::load_rows(&file) {
                Ok(rows) => rows,
                Err(e) => {
                    eprintln!("Dataset error: {}", e);
                    std::process::exit(EXIT_DATA);
                }
            };

            // First row carrying the full column set for this assessment wins.
            let record = match rows
                .iter()
                .find(|row| crsr_index::dataset::assessment_indices(row).contains(&assessment))
                .map(|row| crsr_index::dataset::resolve_record(row, assessment))
            {
                Some(Ok(record)) => record,
                Some(Err(e)) => {
                    eprintln!("Assessment {}: {}", assessment, e);
                    std::process::exit(EXIT_DATA);
                }
                None => {
                    eprintln!(
                        "No row in {} has a complete assessment {}",
                        file.display(),
                        assessment
                    );
                    std::process::exit(EXIT_DATA);
                }
            };

            match crsr_index::index::compute_index(&record) {
                Ok(result) => {
                    if cli.verbose {
                        println!(
                            "{}",
                            crsr_index::output::format_result_line(
                                assessment, &record, &result, use_colors
                            )
                        );
                        println!("{}", crsr_index::output::format_breakdown(&result));
                    } else {
                        println!("{:.2}", result.index);
                    }
                }
                Err(e) => {
                    eprintln!("Assessment {}: {}", assessment, e);
                    std::process::exit(EXIT_COMPUTE);
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
