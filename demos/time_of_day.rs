use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use workingday::Time;
use workingday::TimeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// H:M, H:M:S or "H AM"
    Loose,
    /// H:M only
    Strict,
    /// A total minute count
    Integer,
    /// The local wall clock; no input needed
    Now,
}

/// Normalize a time of day and print it with its minute count.
#[derive(Parser, Debug)]
#[command(version = workingday::version())]
struct Args {
    /// How to read the input
    #[arg(short, long, value_enum, default_value_t = Mode::Loose)]
    mode: Mode,

    /// Values to convert
    inputs: Vec<String>,
}

fn convert(mode: Mode, input: &str) -> Result<Time, TimeError> {
    match mode {
        Mode::Loose => Time::from_loose_str(input),
        Mode::Strict => Time::from_strict_str(input),
        Mode::Integer => input
            .trim()
            .parse::<i64>()
            .map_err(|e| TimeError::InvalidInput {
                value: format!("{input:?}: {e}"),
            })
            .and_then(Time::from_integer),
        Mode::Now => Ok(Time::now()),
    }
}

/// The values to convert, or `None` when a mode that needs input got none.
fn inputs_for(mode: Mode, inputs: Vec<String>) -> Option<Vec<String>> {
    match mode {
        Mode::Now => Some(vec![String::new()]),
        _ if inputs.is_empty() => None,
        _ => Some(inputs),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let Some(inputs) = inputs_for(args.mode, args.inputs) else {
        warn!(mode = ?args.mode, "no inputs given");
        std::process::exit(2);
    };

    let mut failures = 0;
    for input in &inputs {
        match convert(args.mode, input) {
            Ok(t) => {
                info!(input = %input, hours = t.hours(), minutes = t.minutes(), "parsed");
                println!("{}\t{}", t, t.to_integer());
            }
            Err(e) => {
                warn!(input = %input, error = %e, "rejected");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_required_unless_now() {
        for mode in [Mode::Loose, Mode::Strict, Mode::Integer] {
            assert!(inputs_for(mode, vec![]).is_none());
            assert_eq!(
                inputs_for(mode, vec!["9:30".to_string()]),
                Some(vec!["9:30".to_string()])
            );
        }
        assert_eq!(inputs_for(Mode::Now, vec![]), Some(vec![String::new()]));
    }

    #[test]
    fn test_convert_modes() {
        assert_eq!(convert(Mode::Loose, "9 AM").unwrap().to_string(), "09:00");
        assert_eq!(convert(Mode::Strict, "10:65").unwrap().to_string(), "11:05");
        assert_eq!(convert(Mode::Integer, "1440").unwrap().to_string(), "24:00");
        assert!(convert(Mode::Integer, "-1").is_err());
        assert!(convert(Mode::Strict, "9 AM").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["time_of_day", "--mode", "strict", "8:00"]).unwrap();
        assert_eq!(args.mode, Mode::Strict);
        assert_eq!(args.inputs, vec!["8:00".to_string()]);
    }
}
