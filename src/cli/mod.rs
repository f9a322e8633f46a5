//! CLI command definitions and handlers

mod analyze;
mod init;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub use analyze::{effective_format, load_config};

/// gender-decoder - check job adverts for gendered wording
#[derive(Parser, Debug)]
#[command(name = "gender-decoder")]
#[command(
    version,
    about = "Check job-advert text for masculine- and feminine-coded words",
    long_about = "gender-decoder splits an advert into words, matches them against lists of \
masculine- and feminine-coded word stems, and reports which words it found and whether \
the advert leans masculine, feminine or neutral.\n\n\
Run with a file to analyse it:\n  \
gender-decoder advert.txt",
    after_help = "\
Examples:
  gender-decoder advert.txt                    Analyse an advert
  gender-decoder advert.txt --format json      JSON output for scripting
  cat advert.txt | gender-decoder -            Read the advert from stdin
  gender-decoder init                          Write gender-decoder.toml with the built-in word lists"
)]
pub struct Cli {
    /// Advert text file ('-' reads stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by the default command and `analyze`
#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Output format: text, json (default: text, or [defaults] format from config)
    #[arg(long, short = 'f', value_parser = ["text", "txt", "json"])]
    pub format: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Config file (default: gender-decoder.toml next to the advert, then in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Which hyphenated words to split: leading (only words starting with '-') or anywhere (every other hyphenated word)
    #[arg(long, value_parser = ["leading", "anywhere"])]
    pub hyphens: Option<String>,
}

impl AnalyzeArgs {
    /// Fill options not given here from `outer`, the flags placed before the
    /// subcommand name
    pub fn or(self, outer: &AnalyzeArgs) -> AnalyzeArgs {
        AnalyzeArgs {
            format: self.format.or_else(|| outer.format.clone()),
            output: self.output.or_else(|| outer.output.clone()),
            config: self.config.or_else(|| outer.config.clone()),
            hyphens: self.hyphens.or_else(|| outer.hyphens.clone()),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyse an advert for gender-coded words
    #[command(after_help = "\
Examples:
  gender-decoder analyze advert.txt
  gender-decoder analyze advert.txt --format json -o report.json
  gender-decoder analyze advert.txt --hyphens anywhere
  gender-decoder analyze advert.txt --config lists.toml")]
    Analyze {
        /// Advert text file ('-' reads stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        args: AnalyzeArgs,
    },

    /// Write a gender-decoder.toml config with the built-in word lists
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path, force }) => init::run(&path, force),

        Some(Commands::Analyze { file, args }) => analyze::run(&file, &args.or(&cli.analyze)),

        None => match cli.file {
            Some(file) => analyze::run(&file, &cli.analyze),
            None => {
                Cli::command().write_help(&mut std::io::stderr())?;
                anyhow::bail!("No advert file given")
            }
        },
    }
}
