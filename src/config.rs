use crate::theme::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Manage a fixed-size stack of employee records from an arrow-key menu.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Cli {
    /// Maximum number of employees; asked for interactively when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub capacity: Option<i64>,

    /// Disable colored output (also set by NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Default log level; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Colors are on unless `--no-color` is passed or `no_color_env` (the
    /// value of `NO_COLOR`) is set and non-empty.
    pub fn theme(&self, no_color_env: Option<&str>) -> Theme {
        let env_disabled = no_color_env.is_some_and(|v| !v.is_empty());
        if self.no_color || env_disabled {
            Theme::plain()
        } else {
            Theme::colored()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["employee-stack"]);
        assert_eq!(cli.capacity, None);
        assert!(!cli.no_color);
        assert_eq!(cli.log_file, None);
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.theme(None), Theme::colored());
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from([
            "employee-stack",
            "--capacity",
            "-2",
            "--no-color",
            "--log-file",
            "stack.log",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.capacity, Some(-2));
        assert_eq!(cli.log_file, Some(PathBuf::from("stack.log")));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.theme(None), Theme::plain());
    }

    #[test]
    fn no_color_env() {
        let cli = Cli::parse_from(["employee-stack"]);
        assert_eq!(cli.theme(Some("1")), Theme::plain());
        assert_eq!(cli.theme(Some("")), Theme::colored());
    }
}
