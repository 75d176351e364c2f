use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Arg, Command};
use std::fs;

use extract_comment_blocks::extract_comment_blocks;
use render_markdown::render;

fn main() -> Result<()> {
    let matches = Command::new("extract_docs")
        .version("0.1.0")
        .about("Extracts /** ... */ comment blocks from a header file into a Markdown document")
        .arg(
            Arg::new("header")
                .value_name("HEADER")
                .required(true)
                .help("Header file to scan for comment blocks"),
        )
        .arg(
            Arg::new("intro")
                .value_name("INTRO")
                .required(true)
                .help("File whose text is inserted below the title"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .required(true)
                .help("Markdown file to write (overwritten if it exists)"),
        )
        .try_get_matches()
        .unwrap_or_else(|err| {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                std::process::exit(0);
            }
            // Usage problems exit with status 1, not clap's default 2.
            eprintln!("{}", err);
            std::process::exit(1);
        });

    let header_path = matches.get_one::<String>("header").unwrap();
    let intro_path = matches.get_one::<String>("intro").unwrap();
    let output_path = matches.get_one::<String>("output").unwrap();

    let header = fs::read_to_string(header_path)
        .with_context(|| format!("Error reading header file {}", header_path))?;
    let intro = fs::read_to_string(intro_path)
        .with_context(|| format!("Error reading intro file {}", intro_path))?;

    let blocks = extract_comment_blocks(&header);
    let document = render(&intro, &blocks);

    fs::write(output_path, document)
        .with_context(|| format!("Error writing output file {}", output_path))?;

    Ok(())
}
