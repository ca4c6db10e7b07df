//! `--version` and `--help` output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: conduit [OPTIONS]

A terminal client for Conduit blogs.

Options:
      --api-root <URL>  API root to talk to (env: CONDUIT_API_ROOT)
      --route <PATH>    Screen to open first, e.g. /@jake or /article/<slug>
      --logout          Forget the stored session token and exit
  -V, --version         Print version
  -h, --help            Print help";

/// Print the version string and exit successfully.
pub fn handle_version_command() -> ! {
    println!("conduit {}", VERSION);
    std::process::exit(0)
}

pub fn handle_help_command() -> ! {
    println!("{}", USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--api-root", "--route", "--logout", "--version", "--help"] {
            assert!(USAGE.contains(flag), "{} missing", flag);
        }
    }
}
