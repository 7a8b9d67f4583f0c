//! Command-line argument parsing for postboard.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::view_state::Theme;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI with optional overrides (default)
    RunTui(CliOverrides),
}

/// Settings given on the command line. These take precedence over the
/// environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub theme: Option<Theme>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

pub const USAGE: &str = "\
Usage: postboard [OPTIONS]

Options:
      --url <URL>            Endpoint serving the post list
      --theme <light|dark>   Initial color mode
      --log-level <FILTER>   Log filter (e.g. debug, postboard=trace)
      --log-file <PATH>      Log file location
  -h, --help                 Print help
  -V, --version              Print version";

/// Parse command-line arguments and return the command to execute.
///
/// The first item is the program name and is skipped. Options accept both
/// `--flag value` and `--flag=value`.
///
/// # Examples
///
/// ```
/// use postboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["postboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" => overrides.url = Some(take_value(&flag, inline, &mut args)?),
            "--theme" => {
                overrides.theme = Some(take_value(&flag, inline, &mut args)?.parse()?)
            }
            "--log-level" => overrides.log_level = Some(take_value(&flag, inline, &mut args)?),
            "--log-file" => {
                overrides.log_file = Some(PathBuf::from(take_value(&flag, inline, &mut args)?))
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::RunTui(overrides))
}

fn take_value<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| args.next())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingValue {
            flag: flag.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let mut all = vec!["postboard".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(CliOverrides::default())));
    }

    #[test]
    fn test_parse_options_with_separate_values() {
        let command = parse(&[
            "--url",
            "http://localhost:8080/posts",
            "--theme",
            "dark",
            "--log-level",
            "debug",
            "--log-file",
            "/tmp/pb.log",
        ])
        .unwrap();

        assert_eq!(
            command,
            CliCommand::RunTui(CliOverrides {
                url: Some("http://localhost:8080/posts".to_string()),
                theme: Some(Theme::Dark),
                log_level: Some("debug".to_string()),
                log_file: Some(PathBuf::from("/tmp/pb.log")),
            })
        );
    }

    #[test]
    fn test_parse_inline_values() {
        let command = parse(&["--theme=light", "--url=http://x/posts?a=b"]).unwrap();
        let CliCommand::RunTui(overrides) = command else {
            panic!("expected RunTui");
        };
        assert_eq!(overrides.theme, Some(Theme::Light));
        assert_eq!(overrides.url.as_deref(), Some("http://x/posts?a=b"));
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["--url"]),
            Err(ConfigError::MissingValue {
                flag: "--url".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ConfigError::UnknownArgument("--unknown".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_theme() {
        assert_eq!(
            parse(&["--theme", "blue"]),
            Err(ConfigError::InvalidTheme("blue".to_string()))
        );
    }
}
