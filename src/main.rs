use anyhow::Result;
use clap::Parser;
use log::{debug, LevelFilter};

use jasminc::front::{cli_option::CliOption, console};

fn main() -> Result<()> {
    let opt = CliOption::parse();

    let level = if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let all = opt.prints_nothing();
    if all {
        debug!("no table selected, printing everything");
    }

    if all || opt.types {
        console::print_types();
    }
    if all || opt.operators {
        console::print_operators();
    }
    if all || opt.commands {
        console::print_commands();
    }
    if all || opt.limits {
        console::print_limits();
    }

    if let Some(text) = &opt.check {
        let result = console::check_application(text)?;
        console::print_check(text, &result);
    }

    Ok(())
}
