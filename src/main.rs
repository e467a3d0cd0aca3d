use clap::Parser;
use log::debug;
use std::io::Read;

mod dumper;
mod names;

/// Dumps the unicode codepoint of each character in the given text, all vertically.
#[derive(Debug, Parser)]
#[command(version, about)]
#[clap(group = clap::ArgGroup::new("verbosity").multiple(false))]
struct Cli {
    /// Output all messages including debug level.
    #[clap(short, long, group="verbosity")]
    verbose: bool,
    /// Limit message output to warnings and errors.
    #[clap(short, long, group="verbosity")]
    quiet: bool,
    /// The text to dump. If this is omitted, the text is read from stdin.
    text: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli_options = Cli::parse();

    let loglevel = if cli_options.verbose {
        log::LevelFilter::Debug
    } else if cli_options.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    let mut log_builder = colog::default_builder();
    log_builder.filter_level(loglevel);
    log_builder.init();

    let source_text = if cli_options.text.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cli_options.text.join(" ")
    };
    debug!("dumping {} characters", source_text.chars().count());

    let text_dumper = dumper::TextDumper::new();
    print_row("Hex Code", "Repr.", "Unicode name");
    print_row(&"-".repeat(8), &"-".repeat(8), &"-".repeat(48));
    for record in text_dumper.dump(&source_text) {
        print_row(&hex_codepoint(record.codepoint), &record.representation, &record.name);
    }
    Ok(())
}

fn print_row(hex_code: &str, representation: &str, unicode_name: &str) {
    println!("{:>8} | {:<8} | {}", hex_code, representation, unicode_name);
}

/// The lowercase hex column: padded to 8 digits outside the BMP, 4 inside.
fn hex_codepoint(codepoint: u32) -> String {
    if codepoint > 0xffff {
        return format!("{:08x}", codepoint);
    }
    return format!("{:04x}", codepoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_codepoint_padding_switches_at_the_bmp_boundary() {
        assert_eq!(hex_codepoint(0x41), "0041");
        assert_eq!(hex_codepoint(0xffff), "ffff");
        assert_eq!(hex_codepoint(0x10000), "00010000");
        assert_eq!(hex_codepoint(0x1f600), "0001f600");
    }
}
