use clap::Parser;
use srcgen_cli::GenerateFromArgsCli;
use srcgen_cli::run_main;

fn main() {
	let cli = GenerateFromArgsCli::parse();
	run_main(&cli.common, || cli.run());
}
