//! vitae CLI - resume reconstruction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use vitae::{
    detect_input_from_bytes, extract_text_with_options, parse_structure, to_json, to_text,
    ExtractOptions, InputKind, JsonFormat, ResumeData, RunPage,
};

#[derive(Parser)]
#[command(name = "vitae")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reconstruct and parse resumes from positioned text runs", long_about = None)]
struct Cli {
    /// Input file (run dump, resume text, or structure JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Process pages sequentially
    #[arg(long)]
    sequential: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert input to all formats (text, canonical text, JSON)
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Process pages sequentially
        #[arg(long)]
        sequential: bool,

        /// Paragraph break threshold as a multiple of line pitch
        #[arg(long, value_name = "RATIO")]
        break_ratio: Option<f32>,
    },

    /// Reconstruct reading-order plain text
    Text {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Process pages sequentially
        #[arg(long)]
        sequential: bool,

        /// Paragraph break threshold as a multiple of line pitch
        #[arg(long, value_name = "RATIO")]
        break_ratio: Option<f32>,
    },

    /// Parse input into resume-structure JSON
    Parse {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process pages sequentially
        #[arg(long)]
        sequential: bool,

        /// Paragraph break threshold as a multiple of line pitch
        #[arg(long, value_name = "RATIO")]
        break_ratio: Option<f32>,
    },

    /// Render a parsed resume back to canonical text
    Render {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show input information
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            sequential,
            break_ratio,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            extract_options(sequential, break_ratio),
        ),
        Some(Commands::Text {
            input,
            output,
            sequential,
            break_ratio,
        }) => cmd_text(
            &input,
            output.as_deref(),
            extract_options(sequential, break_ratio),
        ),
        Some(Commands::Parse {
            input,
            output,
            compact,
            sequential,
            break_ratio,
        }) => cmd_parse(
            &input,
            output.as_deref(),
            compact,
            extract_options(sequential, break_ratio),
        ),
        Some(Commands::Render { input, output }) => cmd_render(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    extract_options(cli.sequential, None),
                )
            } else {
                println!("{}", "Usage: vitae <FILE> [OUTPUT]".yellow());
                println!("       vitae --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn extract_options(sequential: bool, break_ratio: Option<f32>) -> ExtractOptions {
    let mut options = ExtractOptions::new();
    if sequential {
        options = options.sequential();
    }
    if let Some(ratio) = break_ratio {
        options = options.with_paragraph_break_ratio(ratio);
    }
    options
}

/// Read any supported input and produce both the reading-order text
/// and the structure parsed from it.
fn load_input(
    path: &Path,
    options: &ExtractOptions,
) -> Result<(InputKind, String, ResumeData), Box<dyn std::error::Error>> {
    let data = fs::read(path)?;
    let kind = detect_input_from_bytes(&data);
    log::debug!("detected {} input: {}", kind, path.display());

    let (text, resume) = match kind {
        InputKind::RunDump => {
            let pages: Vec<RunPage> = serde_json::from_slice(&data)?;
            let text = extract_text_with_options(&pages, options.clone());
            let resume = parse_structure(&text);
            (text, resume)
        }
        InputKind::Structure => {
            let resume: ResumeData = serde_json::from_slice(&data)?;
            (to_text(&resume), resume)
        }
        InputKind::PlainText => {
            let raw = String::from_utf8_lossy(&data);
            let text = raw.trim_start_matches('\u{feff}').to_string();
            let resume = parse_structure(&text);
            (text, resume)
        }
    };

    Ok((kind, text, resume))
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reconstructing text...");
    let (_, text, resume) = load_input(input, &options)?;
    pb.inc(1);

    pb.set_message("Writing text...");
    fs::write(output_dir.join("extract.txt"), &text)?;
    fs::write(output_dir.join("resume.txt"), to_text(&resume))?;
    pb.inc(1);

    pb.set_message("Writing structure...");
    let json = to_json(&resume, JsonFormat::Pretty)?;
    fs::write(output_dir.join("resume.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} extract.txt", "├─".dimmed());
    println!("  {} resume.txt", "├─".dimmed());
    println!("  {} resume.json", "└─".dimmed());

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, text, _) = load_input(input, &options)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: ExtractOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, _, resume) = load_input(input, &options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&resume, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_render(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (_, _, resume) = load_input(input, &ExtractOptions::default())?;
    let text = to_text(&resume);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let kind = detect_input_from_bytes(&data);

    println!("{}", "Input Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Kind".bold(), kind);

    let resume = match kind {
        InputKind::RunDump => {
            let pages: Vec<RunPage> = serde_json::from_slice(&data)?;
            let runs: usize = pages.iter().map(|p| p.items.len()).sum();
            println!("{}: {}", "Pages".bold(), pages.len());
            println!("{}: {}", "Runs".bold(), runs);
            let text = extract_text_with_options(&pages, ExtractOptions::default());
            parse_structure(&text)
        }
        InputKind::Structure => serde_json::from_slice(&data)?,
        InputKind::PlainText => {
            let raw = String::from_utf8_lossy(&data);
            parse_structure(raw.trim_start_matches('\u{feff}'))
        }
    };

    println!();
    println!("{}", "Resume Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if !resume.header.name.is_empty() {
        println!("{}: {}", "Name".bold(), resume.header.name);
    }
    if !resume.header.contact_items.is_empty() {
        println!(
            "{}: {}",
            "Contacts".bold(),
            resume.header.contact_items.len()
        );
    }
    println!("{}: {}", "Sections".bold(), resume.section_count());
    println!("{}: {}", "Entries".bold(), resume.entry_count());
    println!("{}: {}", "Bullets".bold(), resume.bullet_count());

    let text = to_text(&resume);
    let words: usize = text.split_whitespace().count();
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), text.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "vitae".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume reconstruction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/vitae".dimmed());
    println!("License: MIT");
}
