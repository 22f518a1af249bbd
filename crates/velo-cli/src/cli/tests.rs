#[cfg(test)]
mod tests {
    use crate::cli::validation::parse_preset;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_preset() {
        assert_eq!(parse_preset("react-three"), Ok("react-three".to_string()));
        assert!(parse_preset("vue").unwrap_err().contains("react-three"));
        assert!(parse_preset("").is_err());
    }

    #[test]
    fn test_cli_verbose_quiet_conflict() {
        let result = Cli::try_parse_from(["velo", "--verbose", "--quiet", "resolve"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_defaults() {
        let args = Cli::try_parse_from(["velo", "resolve"]).unwrap();
        assert_eq!(args.root, PathBuf::from("."));
        assert!(args.profile.is_none());
        assert!(args.preset.is_none());
        assert!(matches!(args.command, Command::Resolve));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Cli::try_parse_from([
            "velo",
            "chunk",
            "react",
            "--preset",
            "react-three",
            "--profile",
            "production",
        ])
        .unwrap();
        assert_eq!(args.preset.as_deref(), Some("react-three"));
        assert_eq!(args.profile.as_deref(), Some("production"));
    }

    #[test]
    fn test_alias_requires_specifier() {
        assert!(Cli::try_parse_from(["velo", "alias"]).is_err());

        let args = Cli::try_parse_from(["velo", "alias", "@/a", "react"]).unwrap();
        if let Command::Alias(alias) = args.command {
            assert_eq!(alias.specifiers, vec!["@/a", "react"]);
        } else {
            panic!("Expected Alias command");
        }
    }

    #[test]
    fn test_report_dir_is_optional() {
        let args = Cli::try_parse_from(["velo", "report"]).unwrap();
        if let Command::Report(report) = args.command {
            assert!(report.dir.is_none());
        } else {
            panic!("Expected Report command");
        }
    }

    #[test]
    fn test_port_and_check_flags() {
        let args = Cli::try_parse_from(["velo", "port", "--preview"]).unwrap();
        assert!(matches!(args.command, Command::Port(ref port) if port.preview));

        let args = Cli::try_parse_from(["velo", "check", "--fs"]).unwrap();
        assert!(matches!(args.command, Command::Check(ref check) if check.fs));
    }
}
