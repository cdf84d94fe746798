use anyhow::Result;
use clap::{arg, value_parser, ArgMatches, Command};

use std::path::{Path, PathBuf};

use glyphpack::{convert_charmap, convert_font, convert_swatch, run_manifest, GlyphSize};

fn cli() -> Command {
    Command::new("glyphpack")
        .about("Convert font sheets and palette swatches to packed binary assets")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("font")
                .about("Binarize a glyph sheet into a packed 1bpp bitmap")
                .arg(arg!(<INPUT> "Input sheet image (png or bmp)").value_parser(value_parser!(PathBuf)))
                .arg(
                    arg!(-g --"glyph-size" <CELLS> "Cells per glyph as WIDTHxHEIGHT, e.g. 1x1, 1x2 or 2x2")
                        .value_parser(value_parser!(GlyphSize))
                        .required(true),
                )
                .arg(
                    arg!(-o --output <OUTPUT> "Set output file, defaults to replacing INPUT's extension with .bin")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("swatch")
                .about("Flatten a 256-pixel palette image into an RGB colour table")
                .arg(arg!(<INPUT> "Input palette image (png or bmp)").value_parser(value_parser!(PathBuf)))
                .arg(
                    arg!(-o --output <OUTPUT> "Set output file, defaults to replacing INPUT's extension with .bin")
                        .value_parser(value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("charmap")
                .about("Write the codepage 437 character table as UTF-8")
                .arg(arg!(<OUTPUT> "Output file").value_parser(value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("batch")
                .about("Run every conversion a TOML manifest describes")
                .arg(arg!(<MANIFEST> "Manifest file").value_parser(value_parser!(PathBuf))),
        )
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("font", matches)) => {
            let input = matches.get_one::<PathBuf>("INPUT").unwrap();
            let glyph_size = *matches.get_one::<GlyphSize>("glyph-size").unwrap();

            convert_font(input, &output_or_default(matches, input), glyph_size)?;
        }

        Some(("swatch", matches)) => {
            let input = matches.get_one::<PathBuf>("INPUT").unwrap();

            convert_swatch(input, &output_or_default(matches, input))?;
        }

        Some(("charmap", matches)) => {
            convert_charmap(matches.get_one::<PathBuf>("OUTPUT").unwrap())?;
        }

        Some(("batch", matches)) => {
            run_manifest(matches.get_one::<PathBuf>("MANIFEST").unwrap())?;
        }

        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }

    Ok(())
}

fn output_or_default(matches: &ArgMatches, input: &Path) -> PathBuf {
    match matches.get_one::<PathBuf>("output") {
        Some(output) => output.clone(),
        None => input.with_extension("bin"),
    }
}
