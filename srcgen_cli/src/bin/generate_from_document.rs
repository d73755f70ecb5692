use clap::Parser;
use srcgen_cli::GenerateFromDocumentCli;
use srcgen_cli::run_main;

fn main() {
	let cli = GenerateFromDocumentCli::parse();
	run_main(&cli.common, || cli.run());
}
