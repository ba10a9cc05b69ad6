use clap::{Parser, Subcommand};
use daltonize_cli::{expand_inputs, load_image, process_single_image};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Parser)]
#[command(name = "daltonize")]
#[command(version, about = "Color-vision deficiency simulator and corrector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a deficiency on an image and write corrected output
    Process {
        /// Input image (JPEG or PNG)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Deficiency type (see `types` for the full list)
        #[arg(short, long, value_name = "TYPE")]
        deficiency: String,

        /// Output directory (defaults to the input's directory)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Write only the simulated image, skip the correction pass
        #[arg(long)]
        simulated_only: bool,
    },

    /// Process multiple files or directories with shared settings
    Batch {
        /// Input files or directories
        #[arg(value_name = "INPUTS")]
        inputs: Vec<PathBuf>,

        /// Deficiency type applied to every input
        #[arg(short, long, value_name = "TYPE")]
        deficiency: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,
    },

    /// List supported deficiency types
    Types {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            input,
            deficiency,
            out,
            simulated_only,
        } => cmd_process(input, deficiency, out, simulated_only),

        Commands::Batch {
            inputs,
            deficiency,
            out,
            threads,
        } => cmd_batch(inputs, deficiency, out, threads),

        Commands::Types { json } => cmd_types(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_process(
    input: PathBuf,
    deficiency: String,
    out: Option<PathBuf>,
    simulated_only: bool,
) -> Result<(), String> {
    // Fail on a bad type name before doing any decode work
    daltonize_core::lookup(&deficiency).map_err(|e| e.to_string())?;

    ensure_output_dir(&out)?;

    println!("Processing {}...", input.display());
    let loaded = load_image(&input)?;
    println!(
        "  Image: {}x{}, {} channels",
        loaded.buffer.width, loaded.buffer.height, loaded.buffer.channels
    );
    if let Some(tag @ (3 | 6 | 8)) = loaded.orientation {
        println!("  EXIF orientation {}: rotating upright", tag);
    }

    let paths = process_single_image(&input, &deficiency, &out, simulated_only)?;

    println!("  Simulated: {}", paths.simulated.display());
    if let Some(corrected) = paths.corrected {
        println!("  Corrected: {}", corrected.display());
    }

    println!("Done!");
    Ok(())
}

fn cmd_batch(
    inputs: Vec<PathBuf>,
    deficiency: String,
    out: Option<PathBuf>,
    threads: Option<usize>,
) -> Result<(), String> {
    if inputs.is_empty() {
        return Err("No input files specified".to_string());
    }

    daltonize_core::lookup(&deficiency).map_err(|e| e.to_string())?;

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel processing", num_threads);
    }

    ensure_output_dir(&out)?;

    let files = expand_inputs(&inputs)?;
    if files.is_empty() {
        return Err("No supported image files found in the given inputs".to_string());
    }

    println!("\nProcessing {} files in parallel...\n", files.len());

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = files.len();

    let results: Vec<Result<(), String>> = files
        .par_iter()
        .map(|input| {
            let paths = process_single_image(input, &deficiency, &out, false)?;

            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            println!(
                "[{}/{}] Processed: {} -> {}",
                count,
                total_files,
                input.display(),
                paths.simulated.display()
            );

            Ok(())
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(&PathBuf, &String)> = Vec::new();

    for (input, result) in files.iter().zip(results.iter()) {
        match result {
            Ok(()) => success_count += 1,
            Err(e) => errors.push((input, e)),
        }
    }

    println!("\n========================================");
    println!("BATCH PROCESSING COMPLETE");
    println!("========================================");
    println!("  Successful: {}", success_count);
    println!("  Failed:     {}", errors.len());

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
        return Err(format!("{} files failed to process", errors.len()));
    }

    Ok(())
}

fn cmd_types(json: bool) -> Result<(), String> {
    let types = daltonize_core::list_types();

    if json {
        let out = serde_json::to_string_pretty(&types)
            .map_err(|e| format!("Failed to serialize type list: {}", e))?;
        println!("{}", out);
    } else {
        println!("Supported deficiency types:");
        for type_id in types {
            println!("  {}", type_id);
        }
    }

    Ok(())
}

/// Create the output directory up front so per-file writes cannot race on it.
fn ensure_output_dir(out: &Option<PathBuf>) -> Result<(), String> {
    if let Some(dir) = out {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }
    Ok(())
}
