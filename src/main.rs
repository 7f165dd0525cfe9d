use anyhow::Result;
use clap::Parser;
use lifepanel::cli::Cli;
use lifepanel::games::LivesDemo;
use lifepanel::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Held until the terminal is restored so queued lines still reach the file
    let _log_guard = logging::init(&cli.log_dir, &cli.log_file)?;

    // Build everything before touching the terminal so config errors print normally
    let players = cli.roster()?.into_players();
    let mut demo = LivesDemo::new(players, cli.formatter)?;
    tracing::info!(formatter = cli.formatter.label(), "starting");

    let mut terminal = ratatui::init();
    let result = demo.run(&mut terminal);
    ratatui::restore();
    result
}
