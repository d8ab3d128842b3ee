use clap::Parser;
use colored::*;
use shredz::api::{self, CmdMessage, MessageLevel, ShredRequest};
use shredz::error::Result;
use shredz::pattern::PatternSource;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let request = ShredRequest {
        path: cli.file,
        passes: cli.passes,
        pattern: cli.pattern,
    };
    let mut source = PatternSource::new(request.pattern);
    api::shred(&request, &mut source, print_message)?;
    Ok(())
}

fn print_message(message: CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}
