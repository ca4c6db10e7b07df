//! Command-line argument parsing.

use thiserror::Error;

use crate::routes::Route;

/// Parsed command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Clear the stored session token.
    Logout,
    /// Run the TUI (default).
    RunTui(TuiOptions),
}

/// Overrides for a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TuiOptions {
    pub api_root: Option<String>,
    pub initial_route: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),
}

/// Parse command-line arguments (program name first).
///
/// `--version` and `--help` win over everything else; unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use conduit::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["conduit".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = TuiOptions::default();
    let mut logout = false;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--logout" => logout = true,
            "--api-root" => options.api_root = Some(value_for(&arg, args.next())?),
            "--route" => {
                options.initial_route = Some(Route::parse(&value_for(&arg, args.next())?))
            }
            other => {
                if let Some(value) = other.strip_prefix("--api-root=") {
                    options.api_root = Some(value_for("--api-root", Some(value.to_string()))?);
                } else if let Some(value) = other.strip_prefix("--route=") {
                    options.initial_route =
                        Some(Route::parse(&value_for("--route", Some(value.to_string()))?));
                }
            }
        }
    }

    if logout {
        Ok(CliCommand::Logout)
    } else {
        Ok(CliCommand::RunTui(options))
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ArgsError> {
    value
        .filter(|v| !v.is_empty() && !v.starts_with('-'))
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["conduit".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::RunTui(TuiOptions::default())));
    }

    #[test]
    fn test_parse_version_and_help() {
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["--logout", "--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_logout() {
        assert_eq!(parse(&["--logout"]), Ok(CliCommand::Logout));
    }

    #[test]
    fn test_parse_api_root_forms() {
        let expected = CliCommand::RunTui(TuiOptions {
            api_root: Some("http://localhost:3000/api".into()),
            initial_route: None,
        });
        assert_eq!(parse(&["--api-root", "http://localhost:3000/api"]), Ok(expected.clone()));
        assert_eq!(parse(&["--api-root=http://localhost:3000/api"]), Ok(expected));
    }

    #[test]
    fn test_parse_route() {
        let Ok(CliCommand::RunTui(options)) = parse(&["--route", "/@jake"]) else {
            panic!("expected a TUI run");
        };
        assert_eq!(options.initial_route, Some(Route::Profile("jake".into())));
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--api-root"]),
            Err(ArgsError::MissingValue("--api-root".into()))
        );
        assert_eq!(
            parse(&["--route", "--logout"]),
            Err(ArgsError::MissingValue("--route".into()))
        );
    }

    #[test]
    fn test_parse_unknown_flag_is_ignored() {
        assert_eq!(
            parse(&["--unknown"]),
            Ok(CliCommand::RunTui(TuiOptions::default()))
        );
    }
}
