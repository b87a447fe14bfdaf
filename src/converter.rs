use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::Context as _;
use log::{error, info, warn};

use crate::{context::Context, metadata::build_header};

pub(crate) mod extract;
mod keywords;

const FRONT_MATTER_DELIMITER: &str = "+++";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Converted,
    SkippedEmpty,
    SkippedDraft,
    Missing,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    pub converted: usize,
    pub skipped_empty: usize,
    pub skipped_draft: usize,
    pub missing: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Converted => self.converted += 1,
            Outcome::SkippedEmpty => self.skipped_empty += 1,
            Outcome::SkippedDraft => self.skipped_draft += 1,
            Outcome::Missing => self.missing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped_empty + self.skipped_draft + self.missing
    }
}

/// Names of the `*.md` files directly inside `dir`, sorted.
fn list_posts(dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut posts = vec![];
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.metadata()?.is_file() || path.extension().map_or(true, |ext| ext != "md") {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => posts.push(name),
            Err(name) => warn!("Skipping non UTF-8 file name: {name:?}"),
        }
    }
    posts.sort();
    Ok(posts)
}

pub(crate) fn convert_one(ctx: &Context, filename: &str) -> anyhow::Result<Outcome> {
    let input_path = ctx.raw_dir.join(filename);
    let output_path = ctx.out_dir.join(filename);

    if !input_path.exists() {
        warn!("{input_path:?} not found");
        return Ok(Outcome::Missing);
    }

    let content = std::fs::read_to_string(&input_path)
        .with_context(|| format!("while reading {input_path:?}"))?;

    if content.trim().is_empty() {
        info!("Skipping empty file: {filename}");
        return Ok(Outcome::SkippedEmpty);
    }
    if extract::is_draft(&content) {
        info!("Skipping draft file: {filename}");
        return Ok(Outcome::SkippedDraft);
    }

    let header = build_header(filename, &content, ctx.date)?;

    let mut fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&output_path)
        .with_context(|| format!("while opening {output_path:?}"))?;
    write!(
        fd,
        "{FRONT_MATTER_DELIMITER}\n{header}\n{FRONT_MATTER_DELIMITER}\n\n{}\n",
        content.trim()
    )
    .with_context(|| format!("while writing {output_path:?}"))?;

    info!("Converted: {filename}");
    Ok(Outcome::Converted)
}

pub(crate) fn convert_all(ctx: &Context) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    if !ctx.raw_dir.is_dir() {
        error!("{:?} directory not found", ctx.raw_dir);
        return Ok(summary);
    }

    let posts = list_posts(&ctx.raw_dir)
        .with_context(|| format!("while listing {:?}", ctx.raw_dir))?;
    if posts.is_empty() {
        info!("No .md files found in {:?}", ctx.raw_dir);
        return Ok(summary);
    }

    fs_extra::dir::create_all(&ctx.out_dir, false)
        .with_context(|| format!("while creating {:?}", ctx.out_dir))?;

    info!("Found {} files to convert...", posts.len());
    for post in posts.iter() {
        summary.record(convert_one(ctx, post)?);
    }

    info!(
        "Conversion complete! {} of {} files written to {}/ ({} empty, {} drafts, {} missing)",
        summary.converted,
        summary.total(),
        ctx.out_dir.display(),
        summary.skipped_empty,
        summary.skipped_draft,
        summary.missing,
    );
    Ok(summary)
}
