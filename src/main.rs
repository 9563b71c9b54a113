use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::{Arg, Command};
use max_subarray_segment_tree::driver;

fn make_options_parser() -> Command {
    Command::new("max-subarray")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Answers maximum subarray sum queries over an array with point updates")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Read the session from FILE instead of stdin"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write query results to FILE instead of stdout"),
        )
}

fn main() -> anyhow::Result<()> {
    if std::env::var("MAX_SUBARRAY_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAX_SUBARRAY_LOG")
            .write_style("MAX_SUBARRAY_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let matches = make_options_parser().get_matches();

    let input: Box<dyn BufRead> = match matches.get_one::<String>("input") {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => {
            Box::new(File::create(path).with_context(|| format!("failed to create {path}"))?)
        }
        None => Box::new(io::stdout().lock()),
    };

    // dropping the writer flushes whatever earlier queries produced, even on error
    let stats = driver::run(input, BufWriter::new(output))?;
    log::info!(
        "answered {} queries after {} updates",
        stats.queries,
        stats.updates
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_parser() {
        make_options_parser().debug_assert();

        let matches = make_options_parser()
            .try_get_matches_from(["max-subarray", "-i", "in.txt", "--output", "out.txt"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("input").map(String::as_str),
            Some("in.txt")
        );
        assert_eq!(
            matches.get_one::<String>("output").map(String::as_str),
            Some("out.txt")
        );

        let matches = make_options_parser()
            .try_get_matches_from(["max-subarray"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("input"), None);
        assert_eq!(matches.get_one::<String>("output"), None);

        assert!(
            make_options_parser()
                .try_get_matches_from(["max-subarray", "--verbose"])
                .is_err()
        );
        assert!(
            make_options_parser()
                .try_get_matches_from(["max-subarray", "-i"])
                .is_err()
        );
    }
}
