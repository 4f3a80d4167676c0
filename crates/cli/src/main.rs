use clap::Parser;

use gildedrose_cli::Cli;
use gildedrose_observability::LogFormat;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> gildedrose_cli::Result<()> {
    let cli = Cli::parse();

    match LogFormat::from(cli.log_format) {
        LogFormat::Pretty => gildedrose_observability::init(),
        LogFormat::Json => gildedrose_observability::init_json(),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_cli::run(&cli, &mut out)
}
