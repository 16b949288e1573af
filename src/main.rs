use a6_booklet::cli::Cli;
use a6_booklet::command::PdftkCommand;
use a6_booklet::config::{resolve_job, Configuration};
use a6_booklet::{BookletLayout, BookletOrderCalculator};
use anyhow::{Context, Result};
use console::style;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", style("Error").red());
        eprintln!("Run with --help for usage information.");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();
    init_logging(cli.debug);

    let file = Configuration::discover(cli.config.as_deref())
        .with_context(|| "Failed to load configuration")?;
    let job = resolve_job(&cli, file).with_context(|| "Invalid booklet parameters")?;

    let calculator =
        BookletOrderCalculator::new(job.pages).with_context(|| "Invalid booklet parameters")?;
    let layout = calculator
        .calculate()
        .with_context(|| "Failed to calculate print order")?;

    log::debug!("virtual horizontal A5 sheets after cutting horizontally:");
    for half in layout.half_sheets.iter() {
        log::debug!("{half}");
    }
    log::debug!("print order: {}", layout.print_order);

    let command = PdftkCommand {
        tool: &job.tool,
        input: &job.input,
        output: &job.output,
        print_order: &layout.print_order,
    };
    println!("{command}");

    if cli.instructions {
        print_instructions(&layout);
    }

    Ok(())
}

fn print_instructions(layout: &BookletLayout) {
    let sheets = layout.sheet_count();

    eprintln!();
    eprintln!("{}", style("Booklet info:").bold());
    eprintln!("  A6 pages:      {}", layout.print_order.len());
    eprintln!("  A4 sheets:     {} (8 A6 pages per sheet)", sheets);
    eprintln!("  Half sheets:   {} after cutting", layout.half_sheets.len());
    eprintln!();

    eprintln!("{}", style("To print the booklet:").bold());
    eprintln!("  1. Run the command above to reorder the PDF");
    eprintln!("  2. Print double-sided with 4 A6 pages per A4 side");
    eprintln!("  3. Cut the stack of {} sheets horizontally", sheets);
    eprintln!("  4. Put the top halves into the centre of the bottom halves");
    eprintln!("  5. Fold the new stack vertically");
}
