//! Command-line surface shared by both binaries.

use std::path::PathBuf;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use crate::core::{
    ConvertSettings, OptimizeSettings, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, DEFAULT_WORKERS,
};
use crate::utils::TargetFormat;

/// Environment variable naming the images directory.
pub const IMAGES_DIR_ENV: &str = "SITE_IMAGES_DIR";
/// Images directory used when neither `--dir` nor the env var is set.
pub const DEFAULT_IMAGES_DIR: &str = "public/images";

/// Options common to both jobs.
#[derive(Debug, Clone)]
pub struct JobOptions {
    pub images_dir: PathBuf,
    /// Print the batch report as JSON on stdout
    pub json: bool,
    /// Exit non-zero if any file failed
    pub strict: bool,
}

fn common_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("dir")
            .long("dir")
            .env(IMAGES_DIR_ENV)
            .default_value(DEFAULT_IMAGES_DIR)
            .value_parser(value_parser!(PathBuf))
            .help("Directory holding the site's images"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print the batch report as JSON"),
    )
    .arg(
        Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help("Exit with an error if any file failed"),
    )
}

fn quality_arg() -> Arg {
    Arg::new("quality")
        .long("quality")
        .value_parser(value_parser!(u32).range(1..=100))
}

pub fn convert_command() -> Command {
    common_args(
        Command::new("convert-images")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Write a WebP/AVIF sibling for every PNG and JPEG in the images directory"),
    )
    .arg(
        Arg::new("format")
            .long("format")
            .default_value("webp")
            .value_parser(["webp", "avif"])
            .help("Target format"),
    )
    .arg(quality_arg().help(format!("Encoder quality for the target format [default: {DEFAULT_QUALITY}]")))
    .arg(
        Arg::new("workers")
            .long("workers")
            .value_parser(value_parser!(usize))
            .help(format!("Maximum number of concurrent conversions [default: {DEFAULT_WORKERS}]")),
    )
    .arg(
        Arg::new("skip-existing")
            .long("skip-existing")
            .action(ArgAction::SetTrue)
            .help("Leave targets that already exist untouched"),
    )
}

pub fn optimize_command() -> Command {
    common_args(
        Command::new("optimize-images")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Downsize and recompress every PNG and JPEG in the images directory, in place"),
    )
    .arg(
        Arg::new("max-width")
            .long("max-width")
            .value_parser(value_parser!(u32).range(1..))
            .help(format!("Widest image left at its original size [default: {DEFAULT_MAX_WIDTH}]")),
    )
    .arg(quality_arg().help(format!("JPEG quality [default: {DEFAULT_QUALITY}]")))
}

pub fn job_options(matches: &ArgMatches) -> JobOptions {
    JobOptions {
        images_dir: matches
            .get_one::<PathBuf>("dir")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
        json: matches.get_flag("json"),
        strict: matches.get_flag("strict"),
    }
}

pub fn convert_settings(matches: &ArgMatches) -> ConvertSettings {
    let defaults = ConvertSettings::default();
    ConvertSettings {
        target: matches
            .get_one::<String>("format")
            .and_then(|f| f.parse::<TargetFormat>().ok())
            .unwrap_or(defaults.target),
        quality: matches.get_one::<u32>("quality").copied().unwrap_or(defaults.quality),
        workers: matches.get_one::<usize>("workers").copied().unwrap_or(defaults.workers),
        skip_existing: matches.get_flag("skip-existing"),
    }
}

pub fn optimize_settings(matches: &ArgMatches) -> OptimizeSettings {
    let defaults = OptimizeSettings::default();
    OptimizeSettings {
        max_width: matches.get_one::<u32>("max-width").copied().unwrap_or(defaults.max_width),
        jpeg_quality: matches.get_one::<u32>("quality").copied().unwrap_or(defaults.jpeg_quality),
        ..defaults
    }
}
