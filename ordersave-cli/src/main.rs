use anyhow::{Context, Result};
use clap::{Arg, Command};
use ordersave_lib::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    let matches = Command::new("ordersave")
        .version("0.1.0")
        .about("Capture order records interactively and save them as comma-separated lines")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file for the saved orders (truncated if it exists)")
                .default_value("orders.txt"),
        )
        .arg(
            Arg::new("max-orders")
                .long("max-orders")
                .value_name("N")
                .help("Maximum number of orders captured in one run; larger requests are clamped")
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Write the built-in sample orders instead of prompting on stdin")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let output_path = matches.get_one::<String>("output").unwrap();
    let limit = *matches.get_one::<usize>("max-orders").unwrap();

    // The output file is opened before any input is read, so an unwritable
    // target fails the run without capturing anything.
    let file = File::create(output_path)
        .with_context(|| format!("failed to open {} for writing", output_path))?;

    let orders = if matches.get_flag("sample") {
        sample_orders()
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut console = io::stdout();
        capture_orders(&mut input, &mut console, limit)?
    };

    let mut out = BufWriter::new(file);
    let written = write_orders(&mut out, &orders)?;
    out.flush()
        .with_context(|| format!("failed to flush {}", output_path))?;

    println!("\n{} orders saved to {}", written, output_path);
    Ok(())
}
