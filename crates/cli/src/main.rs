use clap::Parser;

use covercheck::cli::Cli;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = covercheck::run(cli) {
        // The final error is a single line on stdout; diagnostics stay on
        // stderr. The alternate format prints the full context chain.
        println!("{:#}", anyhow::Error::new(err));
        std::process::exit(1);
    }
}
