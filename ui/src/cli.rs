use clap::{Parser, ValueEnum};
use engine::Theme;
use std::path::PathBuf;

/// Theme names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Neon,
    Minimal,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Neon => Theme::Neon,
            ThemeArg::Minimal => Theme::Minimal,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "orchestrator")]
#[command(about = "Campaign Orchestrator - terminal dashboard for campaigns, creatives and agents")]
#[command(version)]
pub struct Cli {
    /// Start with this theme (overrides config file)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Section shown at startup; unknown ids open the dashboard
    #[arg(long)]
    pub section: Option<String>,

    /// Extra configuration file, must exist when given
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn theme(&self) -> Option<Theme> {
        self.theme.map(Theme::from)
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok, assert_some_eq};

    #[test]
    fn test_no_arguments() {
        let cli = assert_ok!(Cli::try_parse_from(["orchestrator"]));
        assert_none!(cli.theme());
        assert_none!(cli.section());
        assert_none!(cli.config);
    }

    #[test]
    fn test_all_themes_parse() {
        for theme in Theme::ALL {
            let cli = assert_ok!(Cli::try_parse_from(["orchestrator", "--theme", theme.id()]));
            assert_some_eq!(cli.theme(), theme);
        }
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert_err!(Cli::try_parse_from(["orchestrator", "--theme", "sepia"]));
    }

    #[test]
    fn test_section_and_config() {
        let cli = assert_ok!(Cli::try_parse_from([
            "orchestrator",
            "--section",
            "billing",
            "--config",
            "/tmp/orchestrator.toml",
        ]));
        assert_some_eq!(cli.section(), "billing");
        assert_some_eq!(cli.config, PathBuf::from("/tmp/orchestrator.toml"));
    }
}
