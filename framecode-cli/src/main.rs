//! Framecode CLI - convert a frame number to drop-frame timecode.

mod error;

use clap::error::ErrorKind;
use clap::Parser;
use console::style;
use error::CliError;
use framecode::{is_standard_drop_rate, DropFrameParams, Timecode};
use serde::Serialize;
use tracing::{debug, warn};

/// Output mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// Timecode line plus warnings.
    Normal,
    /// JSON output for programmatic parsing.
    Json,
    /// Timecode line only.
    Quiet,
    /// Timecode line plus derived parameters.
    Verbose,
}

/// Command-line arguments for the framecode tool.
#[derive(Parser, Debug)]
#[command(name = "framecode")]
#[command(version)]
#[command(about = "Convert a frame number to HH:MM:SS:FF timecode")]
#[command(long_about = "Framecode converts a linear frame number and a frame rate into \n\
    broadcast timecode, applying drop-frame compensation derived from the rate.\n\n\
    Negative frame numbers count backward from the 24-hour rollover point.\n\n\
    EXAMPLES:\n    \
    framecode 1800 29.97\n    \
    framecode -1 59.94\n    \
    framecode 12345 29.97 --json")]
struct Args {
    /// Frame number (may be negative)
    #[arg(allow_negative_numbers = true)]
    frame_number: String,

    /// Frame rate in frames per second (e.g. 29.97)
    #[arg(allow_negative_numbers = true)]
    framerate: String,

    /// Verbose output (log the derived drop-frame parameters)
    #[arg(short, long, conflicts_with = "quiet", conflicts_with = "json")]
    verbose: bool,

    /// Quiet mode (no log output)
    #[arg(short, long, conflicts_with = "verbose", conflicts_with = "json")]
    quiet: bool,

    /// JSON output mode for programmatic parsing
    #[arg(long, conflicts_with = "verbose", conflicts_with = "quiet")]
    json: bool,
}

impl Args {
    /// Determine the output mode based on flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct Conversion {
    /// Frame number as given.
    frame_number: i64,
    /// Frame rate as given.
    framerate: f64,
    /// Formatted timecode.
    timecode: String,
    /// Timecode components.
    #[serde(flatten)]
    fields: Timecode,
}

/// Parse the positional arguments into a frame number and frame rate.
fn parse_inputs(args: &Args) -> Result<(i64, f64), CliError> {
    let frame_number = args
        .frame_number
        .trim()
        .parse::<i64>()
        .map_err(|e| CliError::parse("frame number", &args.frame_number, e))?;
    let framerate = args
        .framerate
        .trim()
        .parse::<f64>()
        .map_err(|e| CliError::parse("frame rate", &args.framerate, e))?;
    Ok((frame_number, framerate))
}

/// Run a conversion for the parsed arguments.
fn run(args: &Args) -> Result<Conversion, CliError> {
    let (frame_number, framerate) = parse_inputs(args)?;

    let params = DropFrameParams::for_framerate(framerate)?;
    debug!(
        drop_frames = params.drop_frames,
        frames_per_24_hours = params.frames_per_24_hours,
        frames_per_10_minutes = params.frames_per_10_minutes,
        frames_per_minute = params.frames_per_minute,
        nominal_fps = params.nominal_fps,
        "Drop-frame parameters for {} fps",
        framerate
    );
    if !is_standard_drop_rate(framerate) {
        warn!(
            "{} fps is not an NTSC drop-frame rate; dropping {} frame labels per minute anyway",
            framerate, params.drop_frames
        );
    }

    let fields = framecode::frame_to_timecode(frame_number, framerate)?;
    Ok(Conversion {
        frame_number,
        framerate,
        timecode: fields.to_string(),
        fields,
    })
}

/// Render a successful conversion for the output mode.
fn render(conversion: &Conversion, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string(conversion)?),
        _ => Ok(conversion.timecode.clone()),
    }
}

/// Report a failed conversion for the output mode.
fn report_error(err: &CliError, mode: OutputMode) {
    if mode == OutputMode::Json {
        let error = serde_json::json!({
            "type": "error",
            "error": err.kind(),
            "message": err.to_string()
        });
        println!("{}", error);
    } else {
        eprintln!("{} {}", style("Error:").red().bold(), err);
    }
}

/// Initialize logging (not in JSON or quiet mode).
fn init_logging(mode: OutputMode) {
    if mode == OutputMode::Json || mode == OutputMode::Quiet {
        return;
    }

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if mode == OutputMode::Verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            err.print()?;
            std::process::exit(CliError::from(err).exit_code());
        }
    };
    let output_mode = args.output_mode();
    init_logging(output_mode);

    match run(&args) {
        Ok(conversion) => {
            println!("{}", render(&conversion, output_mode)?);
            Ok(())
        }
        Err(err) => {
            report_error(&err, output_mode);
            std::process::exit(err.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("framecode").chain(argv.iter().copied()))
    }

    // ===== Argument parsing tests =====

    #[test]
    fn test_parse_positionals() {
        let args = parse(&["1800", "29.97"]).unwrap();
        assert_eq!(args.frame_number, "1800");
        assert_eq!(args.framerate, "29.97");
        assert_eq!(args.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn test_negative_frame_number_is_a_value() {
        let args = parse(&["-1", "29.97"]).unwrap();
        assert_eq!(args.frame_number, "-1");

        let args = parse(&["--", "-12345", "59.94"]).unwrap();
        assert_eq!(args.frame_number, "-12345");
    }

    #[test]
    fn test_negative_frame_rate_is_a_value() {
        let args = parse(&["100", "-29.97"]).unwrap();
        assert_eq!(args.framerate, "-29.97");
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["1800"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["1800", "29.97", "extra"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        assert_eq!(CliError::from(err).exit_code(), 1);
    }

    #[test]
    fn test_conflicting_modes() {
        let err = parse(&["1", "30", "--json", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = parse(&["1", "30", "-q", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    // ===== OutputMode tests =====

    #[test]
    fn test_output_modes() {
        assert_eq!(parse(&["1", "30", "--json"]).unwrap().output_mode(), OutputMode::Json);
        assert_eq!(parse(&["1", "30", "-q"]).unwrap().output_mode(), OutputMode::Quiet);
        assert_eq!(parse(&["1", "30", "-v"]).unwrap().output_mode(), OutputMode::Verbose);
    }

    // ===== run tests =====

    #[test]
    fn test_run_converts() {
        let conversion = run(&parse(&["1800", "29.97"]).unwrap()).unwrap();
        assert_eq!(conversion.timecode, "00:01:00:02");
        assert_eq!(conversion.frame_number, 1800);
        assert_eq!(conversion.fields, Timecode::new(0, 1, 0, 2));
    }

    #[test]
    fn test_run_negative_frame() {
        let conversion = run(&parse(&["-12345", "29.97"]).unwrap()).unwrap();
        assert_eq!(conversion.timecode, "23:53:08:03");
    }

    #[test]
    fn test_run_rejects_non_numeric_frame_number() {
        let err = run(&parse(&["abc", "29.97"]).unwrap()).unwrap_err();
        assert_eq!(err.kind(), "parse_error");
        assert_eq!(
            err.to_string(),
            "Invalid frame number 'abc': invalid digit found in string"
        );

        let err = run(&parse(&["12.5", "29.97"]).unwrap()).unwrap_err();
        assert_eq!(err.kind(), "parse_error");
    }

    #[test]
    fn test_run_rejects_non_numeric_frame_rate() {
        let err = run(&parse(&["100", "fast"]).unwrap()).unwrap_err();
        assert_eq!(err.kind(), "parse_error");
        assert_eq!(
            err.to_string(),
            "Invalid frame rate 'fast': invalid float literal"
        );
    }

    #[test]
    fn test_run_rejects_invalid_frame_rate() {
        for rate in ["0", "-29.97", "0.25", "NaN", "inf"] {
            let err = run(&parse(&["100", rate]).unwrap()).unwrap_err();
            assert_eq!(err.kind(), "invalid_frame_rate", "rate {rate}");
        }
    }

    #[test]
    fn test_run_is_deterministic() {
        let args = parse(&["987654", "59.94"]).unwrap();
        assert_eq!(run(&args).unwrap(), run(&args).unwrap());
    }

    // ===== render tests =====

    #[test]
    fn test_render_plain() {
        let conversion = run(&parse(&["0", "29.97"]).unwrap()).unwrap();
        assert_eq!(render(&conversion, OutputMode::Normal).unwrap(), "00:00:00:00");
        assert_eq!(render(&conversion, OutputMode::Quiet).unwrap(), "00:00:00:00");
        assert_eq!(render(&conversion, OutputMode::Verbose).unwrap(), "00:00:00:00");
    }

    #[test]
    fn test_render_json() {
        let conversion = run(&parse(&["12345", "29.97", "--json"]).unwrap()).unwrap();
        let json = render(&conversion, OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "frame_number": 12345,
                "framerate": 29.97,
                "timecode": "00:06:51:27",
                "hours": 0,
                "minutes": 6,
                "seconds": 51,
                "frames": 27
            })
        );
    }
}
