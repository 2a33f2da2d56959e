use std::fs;

use tracing::{info, warn};

use romancalc::ReportOptions;

use super::args::CliArgs;
use super::errors::AppError;

fn load_options(args: &CliArgs) -> Result<ReportOptions, AppError> {
    if let Some(path) = &args.options {
        let raw = fs::read_to_string(path)?;
        let options: ReportOptions =
            serde_json::from_str(&raw).map_err(|source| AppError::InvalidOptions {
                path: path.clone(),
                source,
            })?;
        return Ok(options);
    }

    Ok(ReportOptions {
        on_malformed: args.on_malformed,
        sidecar: args.sidecar,
        ..ReportOptions::default()
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.input == args.output {
        return Err(AppError::SamePath {
            path: args.input.clone(),
        }
        .into());
    }

    let options = load_options(&args)?;

    info!("Processing expressions from {:?}", args.input);
    info!("Report file: {:?}", args.output);

    let summary = romancalc::process_file_to_path(&args.input, &args.output, &options)
        .map_err(AppError::Report)?;

    info!("Entries: {}", summary.entries);
    info!("Skipped: {}", summary.skipped);
    if summary.malformed > 0 {
        warn!("Malformed: {}", summary.malformed);
    }

    println!(
        "Processing complete. Check '{}' for results.",
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_default_paths_match_the_original_tool() {
        let args = parse(&["romancalc"]);
        assert_eq!(args.input, std::path::PathBuf::from("input.txt"));
        assert_eq!(args.output, std::path::PathBuf::from("output.txt"));
    }

    #[test]
    fn test_options_from_flags() {
        let args = parse(&["romancalc", "--on-malformed", "silent", "--sidecar"]);
        let options = load_options(&args).unwrap();
        assert_eq!(options.on_malformed, romancalc::MalformedPolicy::Silent);
        assert!(options.sidecar);
    }

    #[test]
    fn test_options_from_json_preset() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("options.json");
        let mut file = std::fs::File::create(&preset).unwrap();
        file.write_all(
            br#"{"on_malformed":"Silent","max_line_len":512,"sidecar":true}"#,
        )
        .unwrap();

        let args = parse(&["romancalc", "--options", preset.to_str().unwrap()]);
        let options = load_options(&args).unwrap();
        assert_eq!(options.on_malformed, romancalc::MalformedPolicy::Silent);
        assert_eq!(options.max_line_len, 512);
        assert!(options.sidecar);
    }

    #[test]
    fn test_bad_preset_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("options.json");
        std::fs::write(&preset, "not json").unwrap();

        let args = parse(&["romancalc", "--options", preset.to_str().unwrap()]);
        assert!(matches!(
            load_options(&args),
            Err(AppError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn test_same_path_is_rejected() {
        let args = parse(&["romancalc", "-i", "same.txt", "-o", "same.txt"]);
        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("different files"));
    }
}
