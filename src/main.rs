use std::fs;
use std::path::Path;

use clap::Parser;

use link_audit::checker::{LinkChecker, ScanReport};
use link_audit::cli::{Cli, ColorChoice};
use link_audit::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use link_audit::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use link_audit::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS, LinkAuditError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_scan(&cli));
}

fn run_scan(cli: &Cli) -> i32 {
    match run_scan_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_RUNTIME_ERROR
        }
    }
}

fn run_scan_impl(cli: &Cli) -> link_audit::Result<i32> {
    // 1. Canonicalize the repository root; containment checks compare
    //    against this form
    let root = dunce::canonicalize(&cli.root).map_err(|e| LinkAuditError::InvalidRoot {
        path: cli.root.clone(),
        source: e,
    })?;

    // 2. Build the file filter
    let filter = GlobFilter::new(cli.ext.clone(), &cli.exclude)?;

    // 3. Enumerate files, sorted for deterministic output order
    let scanner = DirectoryScanner::with_gitignore(filter, cli.gitignore);
    let mut files = scanner.scan(&root)?;
    files.sort();

    if cli.verbose >= 1 {
        eprintln!("Checking {} file(s) under {}", files.len(), root.display());
    }

    // 4. Run the per-file link pipeline
    let checker = LinkChecker::new(root);
    let report = checker.scan(&files)?;

    // 5. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(cli.format, &report, color_mode)?;

    // 6. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // Missing links are reported, never a failure exit: this is a reporting
    // tool, not a gate.
    Ok(EXIT_SUCCESS)
}

fn format_output(
    format: OutputFormat,
    report: &ScanReport,
    color_mode: ColorMode,
) -> link_audit::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> link_audit::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
