#![allow(dead_code)]
use std::path::PathBuf;

use pedsketch::args::{OutputFormat, PedigreeArgs};
#[cfg(feature = "clap")]
use pedsketch::clap::LogAndVerbosity;

pub const TEST_RELATEDNESS: &str = "tests/data/relatedness.csv";
pub const TEST_ML_RELATE: &str = "tests/data/ml_relate.csv";
pub const BAD_RELATEDNESS: &str = "tests/data/bad_relatedness.csv";
pub const BAD_ML_RELATE: &str = "tests/data/bad_ml_relate.csv";
pub const WRONG_COLUMNS: &str = "tests/data/wrong_columns.csv";
pub const OUTDIR: &str = "tests/results";

pub fn pedigree_args(file: &str, output: &str, format: OutputFormat) -> PedigreeArgs {
    std::fs::create_dir_all(OUTDIR).unwrap();

    PedigreeArgs {
        file: PathBuf::from(file),
        output: PathBuf::from(OUTDIR).join(output),
        format,
        ..Default::default()
    }
}

pub fn read_result(output: &str) -> String {
    std::fs::read_to_string(PathBuf::from(OUTDIR).join(output)).unwrap()
}

#[cfg(feature = "clap")]
pub fn silent_verbosity() -> LogAndVerbosity {
    LogAndVerbosity {
        verbosity: 1,
        log_file: None,
        silent: true,
    }
}
