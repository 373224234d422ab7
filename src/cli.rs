//! CLI argument parsing for emoji-catalog

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "emoji-catalog")]
#[command(version)]
#[command(
    about = "Build the emoji picker catalog plist from Unicode's emoji-test.txt",
    long_about = None
)]
pub struct Cli {
    /// Path to emoji-test.txt (Unicode 15.1, 16.0, ...)
    #[arg(long = "emoji-test", value_name = "EMOJI_TEST")]
    pub emoji_test: PathBuf,

    /// Output plist path
    #[arg(long, value_name = "OUT")]
    pub out: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn takes_named_input_and_output() {
        let cli = Cli::try_parse_from([
            "emoji-catalog",
            "--emoji-test",
            "emoji-test.txt",
            "--out",
            "Emoji.plist",
        ])
        .unwrap();
        assert_eq!(cli.emoji_test, PathBuf::from("emoji-test.txt"));
        assert_eq!(cli.out, PathBuf::from("Emoji.plist"));
    }

    #[test]
    fn both_paths_are_required() {
        assert!(Cli::try_parse_from(["emoji-catalog"]).is_err());
        assert!(
            Cli::try_parse_from(["emoji-catalog", "--emoji-test", "emoji-test.txt"]).is_err()
        );
        assert!(Cli::try_parse_from(["emoji-catalog", "--out", "Emoji.plist"]).is_err());
    }

    #[test]
    fn option_order_does_not_matter() {
        let cli =
            Cli::try_parse_from(["emoji-catalog", "--out", "b.plist", "--emoji-test", "a.txt"])
                .unwrap();
        assert_eq!(cli.emoji_test, PathBuf::from("a.txt"));
        assert_eq!(cli.out, PathBuf::from("b.plist"));
    }

    #[test]
    fn rejects_positional_paths() {
        assert!(Cli::try_parse_from(["emoji-catalog", "emoji-test.txt", "Emoji.plist"]).is_err());
    }
}
