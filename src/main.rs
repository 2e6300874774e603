//! huffzip command-line interface
//!
//! Two modes, compress and decompress, each taking an input path and an
//! output path. Core failures print a diagnostic and exit non-zero.

use clap::{Arg, Command};
use huffzip::Result;
use std::process;

fn cli() -> Command {
    Command::new("huffzip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lossless Huffman file compression")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compress")
                .visible_alias("c")
                .about("Compress INPUT into a huffzip container at OUTPUT")
                .arg(Arg::new("INPUT").help("File to compress").required(true))
                .arg(Arg::new("OUTPUT").help("Container to write").required(true)),
        )
        .subcommand(
            Command::new("decompress")
                .visible_alias("d")
                .about("Restore the original file from a huffzip container")
                .arg(Arg::new("INPUT").help("Container to read").required(true))
                .arg(Arg::new("OUTPUT").help("File to restore").required(true)),
        )
}

fn run() -> Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("compress", sub)) => {
            let input = sub.get_one::<String>("INPUT").unwrap();
            let output = sub.get_one::<String>("OUTPUT").unwrap();
            println!("Compressing {input} to {output}...");
            let stats = huffzip::compress_file(input, output)?;
            println!(
                "Compressed {} -> {} bytes (ratio {:.3}, {:.1}% saved)",
                stats.input_size,
                stats.output_size,
                stats.compression_ratio,
                stats.space_savings() * 100.0
            );
        }
        Some(("decompress", sub)) => {
            let input = sub.get_one::<String>("INPUT").unwrap();
            let output = sub.get_one::<String>("OUTPUT").unwrap();
            println!("Decompressing {input} to {output}...");
            huffzip::decompress_file(input, output)?;
            println!("Decompression successful");
        }
        _ => unreachable!("subcommand_required guarantees a subcommand"),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error [{}]: {err}", err.category());
        process::exit(1);
    }
}
