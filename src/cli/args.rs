// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the language/name positionals and the scaffolding options for init

use clap::Parser;
use std::path::PathBuf;

/// Language argument that lists the catalog instead of creating a project
pub const LIST_LANGUAGES: &str = "list";

#[derive(Parser, Debug)]
#[command(name = "init")]
#[command(about = "Initialise any project with one simple command")]
#[command(version)]
pub struct Args {
    #[arg(
        help = "Language to initialise the project for. Use `init list` to list supported languages"
    )]
    pub language: String,

    #[arg(help = "Name of the project. If unspecified, it is implied from the directory name")]
    pub name: Option<String>,

    #[arg(short, long, value_name = "AUTHOR", help = "Name of the project author")]
    pub author: Option<String>,

    #[arg(
        short,
        long = "desc",
        value_name = "DESCRIPTION",
        help = "A short description for the project"
    )]
    pub description: Option<String>,

    #[arg(
        short,
        long,
        value_name = "EXTRA",
        num_args = 1..,
        value_delimiter = ',',
        help = "Names of optional extras to add. These can be found by running `init <language> --list-extras`"
    )]
    pub extras: Vec<String>,

    #[arg(short, long, help = "List extras for the specified language")]
    pub list_extras: bool,

    #[arg(long, help = "Prevent init from initialising a Git repo")]
    pub no_git: bool,

    #[arg(short, long, help = "Overwrite files that already exist")]
    pub force: bool,

    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Read templates from DIR instead of the built-in catalog"
    )]
    pub templates: Option<PathBuf>,

    #[arg(long, help = "Print a JSON report of the generated project")]
    pub json: bool,

    #[arg(
        short,
        long,
        help = "Print extra information as the project is initialised"
    )]
    pub verbose: bool,

    #[arg(short, long, value_name = "FILE", help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn lists_languages(&self) -> bool {
        self.language == LIST_LANGUAGES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("init").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_minimal_arguments() {
        let args = parse(&["python"]);

        assert_eq!(args.language, "python");
        assert!(args.name.is_none());
        assert!(args.extras.is_empty());
        assert!(!args.no_git);
        assert!(!args.lists_languages());
    }

    #[test]
    fn test_full_arguments() {
        let args = parse(&[
            "python",
            "My Project",
            "-a",
            "Ada",
            "--desc",
            "Does things",
            "--no-git",
            "--force",
            "-e",
            "pytest",
            "cli",
        ]);

        assert_eq!(args.name.as_deref(), Some("My Project"));
        assert_eq!(args.author.as_deref(), Some("Ada"));
        assert_eq!(args.description.as_deref(), Some("Does things"));
        assert_eq!(args.extras, vec!["pytest", "cli"]);
        assert!(args.no_git);
        assert!(args.force);
    }

    #[test]
    fn test_comma_separated_extras() {
        let args = parse(&["python", "--extras", "pytest,cli"]);
        assert_eq!(args.extras, vec!["pytest", "cli"]);
    }

    #[test]
    fn test_list_commands() {
        assert!(parse(&["list"]).lists_languages());
        assert!(parse(&["rust", "-l"]).list_extras);
    }

    #[test]
    fn test_language_is_required() {
        assert!(Args::try_parse_from(["init"]).is_err());
    }
}
