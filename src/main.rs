//! # talkrank CLI
//!
//! Command-line front end for the talkrank library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use talkrank::TalkrankError;
use talkrank::cli::{Args, OutputFormat};
use talkrank::core::{Analysis, analyze_with, ingest::ensure_input_dir};
use talkrank::format::{ExportFormat, to_format_string, write_to_format};
use talkrank::report::{format_count, render_chart, render_table};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(i16::from(args.verbose) - i16::from(args.quiet));

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbosity: i16) {
    let level = match verbosity {
        i16::MIN..=-1 => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(args: &Args) -> Result<(), TalkrankError> {
    let total_start = Instant::now();

    // Machine-readable output straight to stdout: no decorations
    let to_stdout = args.output.is_none() && args.format != OutputFormat::Table;

    if !to_stdout {
        println!("📊 talkrank v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.dir.display());
        if !args.exclude.trim().is_empty() {
            println!("🚫 Exclude: {}", args.exclude.trim());
        }
        if let Some(ref output) = args.output {
            println!("💾 Output:  {}", output.display());
        }
        println!();
    }

    // Notices must not end up inside a CSV/JSON stream
    let notice = |text: String| {
        if to_stdout {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    };

    if ensure_input_dir(&args.dir)? {
        notice(format!(
            "📁 Created folder '{}'.\n   Put one talk history .txt file per person into it,\n   then run talkrank again.",
            args.dir.display()
        ));
        return Ok(());
    }

    let analysis = match analyze_with(&args.dir, &args.exclude, &args.analysis_config()) {
        Ok(analysis) => analysis,
        Err(e @ TalkrankError::NoInputFiles { .. }) => {
            notice(format!("⚠️  {}", e));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if to_stdout {
        if let Some(format) = args.format.export_format() {
            print!("{}", to_format_string(&analysis, format)?);
        }
        return Ok(());
    }

    print_results(args, &analysis);

    if let Some(ref output) = args.output {
        let format = match args.format.export_format() {
            Some(format) => format,
            None => ExportFormat::from_path(output)?,
        };
        println!("💾 Writing {}...", format);
        write_to_format(&analysis, output, format)?;
        println!("✅ Saved to {}", output.display());
        println!();
    }

    println!(
        "⚡ {} files, {} lines in {:.2}s",
        analysis.ranked.len(),
        format_count(analysis.ranked.total_count()),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_results(args: &Args, analysis: &Analysis) {
    println!("🏆 Ranking");
    print!("{}", render_table(&analysis.ranked));
    println!();

    if !args.no_chart {
        println!("📈 Lines per person");
        print!("{}", render_chart(&analysis.chart, args.width));
        println!();
    }

    if analysis.has_skipped() {
        println!("⚠️  Skipped {} file(s):", analysis.skipped.len());
        for skipped in &analysis.skipped {
            println!("   {}: {}", skipped.label, skipped.reason);
        }
        println!();
    }
}
