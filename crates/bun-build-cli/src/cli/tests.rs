#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use crate::config::*;
    use clap::{CommandFactory, Parser, ValueEnum};
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bun-build").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_means_no_overrides() {
        let cli = parse(&[]);
        assert_eq!(cli.to_partial_options(), PartialOptions::default());
    }

    #[test]
    fn test_lib_and_bundle_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["bun-build", "--lib", "--bundle"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_flags() {
        let options = parse(&["--lib"]).to_partial_options();
        assert_eq!(options.lib, Some(true));
        assert_eq!(options.bundle, None);

        let options = parse(&["--bundle"]).to_partial_options();
        assert_eq!(options.bundle, Some(true));
        assert_eq!(options.lib, None);
    }

    #[test]
    fn test_tsc_flags() {
        assert_eq!(parse(&[]).to_partial_options().tsc, None);
        assert_eq!(parse(&["--tsc"]).to_partial_options().tsc, Some(true));
        assert_eq!(parse(&["--no-tsc"]).to_partial_options().tsc, Some(false));
        // Last one wins
        assert_eq!(
            parse(&["--no-tsc", "--tsc"]).to_partial_options().tsc,
            Some(true)
        );
        assert_eq!(
            parse(&["--tsc", "--no-tsc"]).to_partial_options().tsc,
            Some(false)
        );
    }

    #[test]
    fn test_optional_bool_flags() {
        let options = parse(&["--minify"]).to_partial_options();
        assert_eq!(options.minify, Some(true));

        let options = parse(&["--minify", "false", "--splitting", "false"]).to_partial_options();
        assert_eq!(options.minify, Some(false));
        assert_eq!(options.splitting, Some(false));

        let options = parse(&["--splitting", "--minify"]).to_partial_options();
        assert_eq!(options.splitting, Some(true));
        assert_eq!(options.minify, Some(true));
    }

    #[test]
    fn test_value_flags() {
        let options = parse(&[
            "--target",
            "browser",
            "--src",
            "lib",
            "--out",
            "dist",
            "--naming",
            "[dir]/[name].js",
            "--format",
            "cjs",
            "--sourcemap",
            "linked",
            "--bun-bin",
            "/opt/bun",
        ])
        .to_partial_options();

        assert_eq!(options.target, Some(Target::Browser));
        assert_eq!(options.src, Some(PathBuf::from("lib")));
        assert_eq!(options.out, Some(PathBuf::from("dist")));
        assert_eq!(options.naming.as_deref(), Some("[dir]/[name].js"));
        assert_eq!(options.format, Some(Format::Cjs));
        assert_eq!(options.sourcemap, Some(SourceMapMode::Linked));
        assert_eq!(options.bun_bin, Some(PathBuf::from("/opt/bun")));
    }

    #[test]
    fn test_repeatable_patterns() {
        let options = parse(&[
            "--ignore",
            "**/fixtures/**",
            "--ignore",
            "scratch.ts",
            "--external",
            "react,react-dom",
            "--external",
            "zod",
        ])
        .to_partial_options();

        assert_eq!(
            options.ignore.unwrap().into_list(),
            vec!["**/fixtures/**", "scratch.ts"]
        );
        assert_eq!(
            options.external.unwrap().into_list(),
            vec!["react", "react-dom", "zod"]
        );
    }

    #[test]
    fn test_invalid_enum_value_rejected() {
        assert!(Cli::try_parse_from(["bun-build", "--format", "umd"]).is_err());
        assert!(Cli::try_parse_from(["bun-build", "--target", "deno"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["bun-build", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_enum_value_names() {
        let names = |variants: Vec<clap::builder::PossibleValue>| -> Vec<String> {
            variants.iter().map(|v| v.get_name().to_string()).collect()
        };

        assert_eq!(
            names(Target::value_variants().iter().filter_map(|v| v.to_possible_value()).collect()),
            vec!["bun", "node", "browser"]
        );
        assert_eq!(
            names(Format::value_variants().iter().filter_map(|v| v.to_possible_value()).collect()),
            vec!["esm", "cjs", "iife"]
        );
        assert_eq!(
            names(
                SourceMapMode::value_variants()
                    .iter()
                    .filter_map(|v| v.to_possible_value())
                    .collect()
            ),
            vec!["none", "linked", "inline", "external"]
        );
    }
}
