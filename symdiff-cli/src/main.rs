use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{process::ExitCode, str::FromStr};
use symdiff_core::{
    consts::E,
    derivative,
    simplify::{add, mul, pow},
    Expr,
};
use symdiff_error::Error;

const USAGE: &str = "usage: symdiff [--with <variable>] [--log-level <off|error|warn|info|debug|trace>]";

/// Command-line options.
struct Options {
    /// The variable to differentiate with respect to.
    with: String,

    /// The maximum level of log messages to print.
    log_level: LevelFilter,
}

impl Default for Options {
    fn default() -> Self {
        Self { with: "x".to_string(), log_level: LevelFilter::Warn }
    }
}

/// Why the command-line arguments couldn't be used.
enum ArgsError {
    /// `-h` or `--help` was given.
    Help,

    /// The arguments are malformed.
    Invalid(String),
}

/// Parses the command-line arguments, not including the program name.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, ArgsError> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgsError::Help),
            "--with" => {
                options.with = args.next()
                    .ok_or_else(|| ArgsError::Invalid("`--with` requires a variable name".to_string()))?;
            },
            "--log-level" => {
                let level = args.next()
                    .ok_or_else(|| ArgsError::Invalid("`--log-level` requires a level".to_string()))?;
                options.log_level = LevelFilter::from_str(&level)
                    .map_err(|_| ArgsError::Invalid(format!("unknown log level `{}`", level)))?;
            },
            other => return Err(ArgsError::Invalid(format!("unexpected argument `{}`", other))),
        }
    }

    Ok(options)
}

/// The expressions printed by the program.
fn samples() -> Vec<Expr> {
    let x = || Expr::variable("x");
    let c = Expr::constant;

    vec![
        // 5x^69 + 5x^420
        add(
            mul(c(5.0), pow(x(), c(69.0))),
            mul(c(5.0), pow(x(), c(420.0))),
        ),
        // 5^(69x)
        pow(c(5.0), mul(c(69.0), x())),
        // e^(69x)
        pow(c(E), mul(c(69.0), x())),
    ]
}

/// Prints each expression next to its derivative, stopping at the first error.
fn run(with: &str) -> Result<(), Error> {
    for expr in samples() {
        let result = derivative(&expr, with)?;
        println!("{}\t:\t{}", expr, result);
    }
    Ok(())
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(ArgsError::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        },
        Err(ArgsError::Invalid(msg)) => {
            eprintln!("error: {}", msg);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        },
    };

    if TermLogger::init(
        options.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ).is_err() {
        eprintln!("warning: a logger is already installed");
    }
    info!("differentiating with respect to `{}`", options.with);

    match run(&options.with) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.report_to_stderr().is_err() {
                eprintln!("error: {}", err);
            }
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args<'a>(args: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        args.iter().map(|arg| arg.to_string())
    }

    #[test]
    fn defaults() {
        let options = parse_args(args(&[])).ok().unwrap();
        assert_eq!(options.with, "x");
        assert_eq!(options.log_level, LevelFilter::Warn);
    }

    #[test]
    fn flags() {
        let options = parse_args(args(&["--with", "t", "--log-level", "trace"])).ok().unwrap();
        assert_eq!(options.with, "t");
        assert_eq!(options.log_level, LevelFilter::Trace);
    }

    #[test]
    fn bad_flags() {
        assert!(matches!(parse_args(args(&["--with"])), Err(ArgsError::Invalid(_))));
        assert!(matches!(parse_args(args(&["--log-level", "loud"])), Err(ArgsError::Invalid(_))));
        assert!(matches!(parse_args(args(&["extra"])), Err(ArgsError::Invalid(_))));
        assert!(matches!(parse_args(args(&["-h"])), Err(ArgsError::Help)));
    }

    #[test]
    fn sample_derivatives() {
        let results = samples()
            .iter()
            .map(|expr| derivative(expr, "x").unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(results, vec![
            "((5 * (69 * (x ^ 68))) + (5 * (420 * (x ^ 419))))",
            "(((5 ^ (69 * x)) *  ln(5)) * 69)",
            "((2.718281828459045 ^ (69 * x)) * 69)",
        ]);
    }
}
