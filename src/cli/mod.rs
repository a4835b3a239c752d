use std::path::PathBuf;

#[derive(clap::Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Config file to read, overriding `EMOJIQUIZ_TOML`
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(clap::Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Connect to discord and run the game
    #[default]
    Start,

    /// Print the loaded configuration as TOML
    Config,
}

impl Command {
    pub fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn starts_by_default() {
        let cli = Cli::try_parse_from(["emojiquiz"]).expect("no arguments are fine");

        assert!(cli.command().is_start());
        assert_eq!(cli.config, None);
    }

    #[test]
    fn config_subcommand() {
        let cli = Cli::try_parse_from(["emojiquiz", "--config", "quiz.toml", "config"])
            .expect("arguments are valid");

        assert_eq!(cli.command(), Command::Config);
        assert_eq!(cli.config, Some(PathBuf::from("quiz.toml")));
    }

    #[test]
    fn unknown_subcommand() {
        assert!(Cli::try_parse_from(["emojiquiz", "stop"]).is_err());
    }
}
