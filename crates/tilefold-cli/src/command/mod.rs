use clap::{Parser, Subcommand};

mod play;
mod sim;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play interactively in the terminal
    Play(#[clap(flatten)] play::PlayArg),
    /// Run headless games and print a JSON summary
    Sim(#[clap(flatten)] sim::SimArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(play::PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Sim(arg) => sim::run(&arg)?,
    }
    Ok(())
}
