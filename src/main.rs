use clap::Parser;
use segtrack::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{heatmap, plot, score, segment},
    utils::{handle_error_and_exit, Result},
};

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn runner() -> Result<()> {
    let cli = parse_cli();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Segment(_) => "segment",
        Command::Score(_) => "score",
        Command::Plot(_) => "plot",
        Command::Heatmap(_) => "heatmap",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Segment(args) => segment::segment(args)?,
        Command::Score(args) => score::score(args)?,
        Command::Plot(args) => plot::plot(args)?,
        Command::Heatmap(args) => heatmap::heatmap(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
