use cidr_validate::cli::{usage, validate_all, CliArgs, CONFIG_ENV};
use cidr_validate::logging;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;

fn run() -> Result<bool, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{}", usage());
        return Ok(true);
    }

    let config = args.log_config(std::env::var(CONFIG_ENV).ok())?;
    logging::init(&config)?;
    log::info!("#Start main()");
    config.print();

    let rows = validate_all(&args.prefixes);
    for row in &rows {
        println!("{}", row.format());
    }

    let failed = rows.iter().filter(|r| !r.is_ok()).count();
    log::info!("# Validated {} prefixes, {} failed", rows.len(), failed);
    Ok(failed == 0)
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{}: {}", "Error".red(), err);
            eprint!("{}", usage());
            ExitCode::from(2)
        }
    }
}
