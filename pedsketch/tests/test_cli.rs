mod common;

#[cfg(test)]
#[cfg(feature = "clap")]
mod test_cli {
    use super::*;

    use pedsketch::args::OutputFormat;
    use pedsketch::clap::{run_cmd, SubCommand};

    fn run_relatedness(output: &str, format: OutputFormat) {
        let args = common::pedigree_args(common::TEST_RELATEDNESS, output, format);
        let cmd = SubCommand::Relatedness {
            args,
            log_and_verbosity: common::silent_verbosity(),
            threads: 1,
        };
        run_cmd(cmd).unwrap();
    }

    #[test]
    fn test_runs_log_errors_only() {
        let log = common::silent_verbosity();
        assert!(log.silent);

        let (level, _, _) = pedsketch::clap::init_tracing(log.verbosity, &log.log_file, log.silent).unwrap();
        assert_eq!(tracing::Level::ERROR, level);
    }

    #[test]
    fn relatedness_to_csv() {
        run_relatedness("relatedness.csv", OutputFormat::Csv);

        let res = common::read_result("relatedness.csv");
        insta::assert_snapshot!(res, @r###"
indv1,indv2
A,B
A,Unknown1
Unknown1,C
C,Unknown2
Unknown2,B
F,Unknown3
Unknown3,Unknown4
Unknown4,G
"###);
    }

    #[test]
    fn relatedness_to_dot() {
        run_relatedness("relatedness.dot", OutputFormat::Dot);

        let res = common::read_result("relatedness.dot");
        assert!(res.starts_with("graph pedigree {\n\trankdir=TB;\n"));
        assert!(res.contains("\t\"Unknown4\" -- \"G\";\n"));
        assert!(res.ends_with("}\n"));
        assert_eq!(9, res.matches("shape=record").count());
    }

    #[test]
    fn relatedness_to_json() {
        run_relatedness("relatedness.json", OutputFormat::Json);

        let res = common::read_result("relatedness.json");
        let value: serde_json::Value = serde_json::from_str(&res).unwrap();
        assert_eq!(9, value["nodes"].as_array().unwrap().len());
        assert_eq!(serde_json::json!(["F", "Unknown3"]), value["edges"][5]);
    }

    #[test]
    fn ml_relate_to_csv() {
        let args = common::pedigree_args(common::TEST_ML_RELATE, "ml_relate.csv", OutputFormat::Csv);
        let cmd = SubCommand::MlRelate {
            args,
            log_and_verbosity: common::silent_verbosity(),
            threads: 1,
        };
        run_cmd(cmd).unwrap();

        let res = common::read_result("ml_relate.csv");
        insta::assert_snapshot!(res, @r###"
indv1,indv2
A,B
A,Unknown1
Unknown1,Unknown2
Unknown2,C
D,Unknown3
Unknown3,E
"###);
    }

    #[test]
    fn ml_relate_rejects_large_max_distance() {
        let mut args = common::pedigree_args(common::TEST_ML_RELATE, "ml_relate_error.csv", OutputFormat::Csv);
        args.max_distance = Some(4);
        let cmd = SubCommand::MlRelate {
            args,
            log_and_verbosity: common::silent_verbosity(),
            threads: 1,
        };

        let err = run_cmd(cmd).unwrap_err();
        assert!(err.to_string().contains("--max-distance <= 3"));
    }

    #[test]
    fn zero_paths_is_an_error() {
        let mut args = common::pedigree_args(common::TEST_RELATEDNESS, "zero_paths.csv", OutputFormat::Csv);
        args.k_paths = 0;
        let cmd = SubCommand::Relatedness {
            args,
            log_and_verbosity: common::silent_verbosity(),
            threads: 1,
        };

        assert!(run_cmd(cmd).is_err());
    }
}
