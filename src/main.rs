use std::path::PathBuf;

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{command, value_parser, Arg, ArgMatches};
use context::Context;

mod context;
mod converter;
mod metadata;

fn cli() -> clap::Command {
    command!().args([
        Arg::new("raw_dir")
            .help("Directory of raw markdown posts")
            .value_parser(value_parser!(PathBuf))
            .default_value("raw_blogs"),
        Arg::new("out_dir")
            .help("Directory of converted posts. Created if it does not exist.")
            .value_parser(value_parser!(PathBuf))
            .default_value("content"),
        Arg::new("date")
            .long("date")
            .help("Date written to every front matter (YYYY-MM-DD). Defaults to today.")
            .value_parser(parse_date),
    ])
}

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").context("Invalid date format")
}

fn build_context(matches: &ArgMatches) -> anyhow::Result<Context> {
    let raw_dir: &PathBuf = matches.get_one("raw_dir").context("raw_dir")?;
    let out_dir: &PathBuf = matches.get_one("out_dir").context("out_dir")?;
    if out_dir.exists() && !out_dir.is_dir() {
        anyhow::bail!("if out_dir exists, it must be directory.");
    }
    let date = matches.get_one::<NaiveDate>("date").copied();

    Ok(Context::new(raw_dir.to_owned(), out_dir.to_owned(), date))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ctx = build_context(&cli().get_matches())?;
    converter::convert_all(&ctx)?;

    Ok(())
}
