use clap::{Parser as _, Subcommand};
use msconv::{NumberLocale, Options, ParseError, Parser, format};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(clap::Parser)]
#[command(
    name = "msconv",
    version,
    about = "Convert between milliseconds and human-readable durations"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the number of milliseconds in a duration such as "1.5h"
    Parse {
        text: String,

        /// BCP-47 tag deciding the decimal separator, e.g. "de-DE"
        #[arg(short, long)]
        locale: Option<String>,

        /// Accept several segments, e.g. "1 week, 3 days"
        #[arg(short, long)]
        multi: bool,

        /// Separator between segments with --multi
        #[arg(short, long, default_value = " ")]
        delimiter: String,
    },
    /// Render a millisecond value as text
    Format {
        #[arg(allow_negative_numbers = true)]
        ms: f64,

        /// Use "10 seconds" instead of "10s"
        #[arg(short, long)]
        long: bool,

        /// Decimal places kept when rounding
        #[arg(short, long, default_value_t = 0)]
        precision: u32,

        /// Show the unrounded number
        #[arg(long)]
        no_round: bool,

        /// Decompose into several units
        #[arg(short, long)]
        split: bool,

        /// Separator between segments with --split
        #[arg(short, long, default_value = " ")]
        delimiter: String,
    },
}

fn run_parse(text: &str, locale: Option<&str>, multi: bool, delimiter: &str) -> ExitCode {
    let locale = locale.map(NumberLocale::from_tag).unwrap_or_default();
    let parser = Parser::new().with_locale(locale).with_delimiter(delimiter);
    let result = if multi {
        parser.parse_multi(text)
    } else {
        parser.parse_one(text)
    };
    match result {
        Ok(ms) => {
            println!("{ms}");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn report(err: &ParseError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(1)
}

// A bare number is formatted; anything else is parsed as a duration.
fn convert_line(line: &str, parser: &Parser, options: &Options) -> Result<String, ParseError> {
    if let Ok(ms) = line.parse::<f64>() {
        return Ok(format(ms, options));
    }
    parser.parse_multi(line).map(|ms| ms.to_string())
}

fn run_repl() -> ExitCode {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let parser = Parser::new();
    let options = Options::new().split_output(true);

    println!("msconv v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a duration or a number of milliseconds. Press Ctrl-D to exit.");

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        let read_result = stdin.lock().read_line(&mut line);

        match read_result {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match convert_line(trimmed, &parser, &options) {
                    Ok(out) => println!("{out}"),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Err(e) => {
                eprintln!("Read error: {e}");
                return ExitCode::from(1);
            }
        }
    }

    println!();
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Parse {
            text,
            locale,
            multi,
            delimiter,
        }) => run_parse(&text, locale.as_deref(), multi, &delimiter),
        Some(Command::Format {
            ms,
            long,
            precision,
            no_round,
            split,
            delimiter,
        }) => {
            let options = Options::new()
                .long_form(long)
                .round_numbers(!no_round)
                .round_precision(precision)
                .split_output(split)
                .split_delimiter(delimiter);
            println!("{}", format(ms, &options));
            ExitCode::SUCCESS
        }
        None => run_repl(),
    }
}
