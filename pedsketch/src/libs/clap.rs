// PEDSKETCH - Pedigree sketches from pairwise relatedness
// Copyright (C) 2024  The PEDSKETCH authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::{eyre::eyre, Result};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::time::OffsetTime;

use crate::args::PedigreeArgs;
use crate::subcommands::{ml_relate, relatedness};

#[derive(Parser, Debug)]
#[command(author, version, about, styles=get_styles())]
pub struct Arguments {
    #[command(subcommand)]
    cmd: SubCommand,
}

#[derive(Args, Debug, Clone)]
pub struct LogAndVerbosity {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, default_value_t = 3)]
    pub verbosity: u8,

    /// A file path to save logs to
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Silence all warning and info messages
    #[arg(long)]
    pub silent: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Sketch a pedigree from a table of pairwise relatedness coefficients (indv1,indv2,relatedness)
    Relatedness {
        #[command(flatten)]
        args: PedigreeArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,

        /// Number of threads
        #[arg(short = 't', long, default_value_t = 8)]
        threads: usize,
    },

    /// Sketch a pedigree from an ML-Relate export using its relationship categories
    MlRelate {
        #[command(flatten)]
        args: PedigreeArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,

        /// Number of threads
        #[arg(short = 't', long, default_value_t = 8)]
        threads: usize,
    },
}

impl SubCommand {
    pub fn threads(&self) -> usize {
        match self {
            SubCommand::Relatedness { threads, .. } | SubCommand::MlRelate { threads, .. } => {
                *threads
            }
        }
    }

    #[rustfmt::skip]
    pub fn log_and_verbosity(&self) -> (u8, &Option<PathBuf>, bool) {
        match self {
            SubCommand::Relatedness { log_and_verbosity, .. }
            | SubCommand::MlRelate { log_and_verbosity, .. }
            => (log_and_verbosity.verbosity, &log_and_verbosity.log_file, log_and_verbosity.silent),
        }
    }

    /// Directory the output is written into, if the output goes to a file
    #[rustfmt::skip]
    pub fn output(&self) -> Option<PathBuf> {
        let output = match self {
            SubCommand::Relatedness { args: PedigreeArgs { output, .. }, .. }
            | SubCommand::MlRelate { args: PedigreeArgs { output, .. }, .. } => output,
        };

        match output.to_str() {
            Some("-") => None,
            _ => output
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(PathBuf::from),
        }
    }
}

pub fn run_args(args: Arguments) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.cmd.threads())
        .build_global()?;

    let (verbosity, log_file, is_silent) = args.cmd.log_and_verbosity();

    let (level, wrtr, _guard) = init_tracing(verbosity, log_file, is_silent)?;

    let timer = time::format_description::parse("[hour]:[minute]:[second].[subsecond digits:3]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(time_offset, timer);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(wrtr)
        .with_timer(timer)
        .init();

    if let Some(output) = args.cmd.output() {
        std::fs::create_dir_all(&output)
            .map_err(|_| eyre!("Error creating directory {output:?}"))?;
    }

    run_cmd(args.cmd)?;

    Ok(())
}

pub fn run_cmd(cmd: SubCommand) -> Result<()> {
    match cmd {
        SubCommand::Relatedness { args, .. } => relatedness::run(args)?,
        SubCommand::MlRelate { args, .. } => ml_relate::run(args)?,
    };
    Ok(())
}

pub fn init_tracing(
    verbosity: u8,
    log_file: &Option<PathBuf>,
    is_silent: bool,
) -> Result<(Level, NonBlocking, WorkerGuard)> {
    let level = match (is_silent, verbosity) {
        (true, _) | (false, 0..=1) => Level::ERROR,
        (false, 2) => Level::WARN,
        (false, 3) => Level::INFO,
        (false, 4) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    // stdout is reserved for the pedigree when no output file is given
    let (wrtr, guard) = match log_file {
        Some(path) => tracing_appender::non_blocking(std::fs::File::create(path)?),
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    Ok((level, wrtr, guard))
}

pub fn get_styles() -> clap::builder::Styles {
    let yellow = Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow));
    let green = Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green));
    let red = Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red));

    clap::builder::Styles::styled()
        .usage(anstyle::Style::new().bold().underline().fg_color(yellow))
        .header(anstyle::Style::new().bold().underline().fg_color(yellow))
        .literal(anstyle::Style::new().fg_color(green))
        .invalid(anstyle::Style::new().bold().fg_color(red))
        .error(anstyle::Style::new().bold().fg_color(red))
        .valid(anstyle::Style::new().bold().underline().fg_color(green))
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> LogAndVerbosity {
        LogAndVerbosity {
            verbosity: 0,
            log_file: None,
            silent: true,
        }
    }

    #[test]
    fn test_init_tracing() {
        let (level, _, _) = init_tracing(1, &None, false).unwrap();
        assert_eq!(Level::ERROR, level);
        let (level, _, _) = init_tracing(2, &None, false).unwrap();
        assert_eq!(Level::WARN, level);
        let (level, _, _) = init_tracing(3, &None, false).unwrap();
        assert_eq!(Level::INFO, level);
        let (level, _, _) = init_tracing(4, &None, false).unwrap();
        assert_eq!(Level::DEBUG, level);
        let (level, _, _) = init_tracing(5, &None, false).unwrap();
        assert_eq!(Level::TRACE, level);
        let (level, _, _) = init_tracing(5, &None, true).unwrap();
        assert_eq!(Level::ERROR, level);
    }

    #[test]
    fn test_init_tracing_log_file() {
        let path = std::env::temp_dir().join("pedsketch_tracing.log");
        let (level, _, _guard) = init_tracing(4, &Some(path.clone()), false).unwrap();
        assert_eq!(Level::DEBUG, level);
        assert!(path.exists());
    }

    #[test]
    fn test_threads() {
        let subcommand = SubCommand::MlRelate {
            args: PedigreeArgs::default(),
            log_and_verbosity: quiet(),
            threads: 2,
        };

        assert_eq!(2, subcommand.threads());
    }

    #[test]
    fn test_output_dir() {
        let subcommand = SubCommand::Relatedness {
            args: PedigreeArgs::default(),
            log_and_verbosity: quiet(),
            threads: 1,
        };
        assert_eq!(None, subcommand.output());

        let args = PedigreeArgs { output: PathBuf::from("results/pedigree.dot"), ..Default::default() };
        let subcommand = SubCommand::Relatedness { args, log_and_verbosity: quiet(), threads: 1 };
        assert_eq!(Some(PathBuf::from("results")), subcommand.output());

        let args = PedigreeArgs { output: PathBuf::from("pedigree.dot"), ..Default::default() };
        let subcommand = SubCommand::Relatedness { args, log_and_verbosity: quiet(), threads: 1 };
        assert_eq!(None, subcommand.output());
    }

    #[test]
    fn test_parse_subcommand() {
        let args = Arguments::try_parse_from([
            "pedsketch", "ml-relate", "input.csv", "-f", "csv", "-m", "2", "--isolate-pairs",
        ])
        .unwrap();

        match args.cmd {
            SubCommand::MlRelate { args, threads, .. } => {
                assert_eq!(PathBuf::from("input.csv"), args.file);
                assert_eq!(crate::args::OutputFormat::Csv, args.format);
                assert_eq!(Some(2), args.max_distance);
                assert!(args.isolate_pairs);
                assert_eq!(10, args.k_paths);
                assert_eq!(8, threads);
            }
            _ => panic!("expected ml-relate"),
        }
    }
}
