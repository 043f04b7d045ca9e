#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "flatsleuth", about = "Schema-less inspection of FlatBuffers-style binary files")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a file heuristically into a report.
	Decode(cmd::decode::Args),
	/// Inspect the root table header.
	Header(cmd::header::Args),
	/// List printable strings.
	Strings(cmd::strings::Args),
	/// Show the most common byte windows.
	Patterns(cmd::patterns::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));
}

fn run(command: Commands) -> flatsleuth::flat::Result<()> {
	match command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Header(args) => cmd::header::run(args),
		Commands::Strings(args) => cmd::strings::run(args),
		Commands::Patterns(args) => cmd::patterns::run(args),
	}
}
