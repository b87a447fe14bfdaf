use anyhow::Context;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::converter::extract::{derive_description, derive_slug, derive_tags, derive_title};

pub(crate) const CATEGORIES: &[&str] = &["technical"];

/// Front matter of a converted post. Field order is the order written to the header.
#[derive(Serialize, Debug, Clone)]
pub(crate) struct Metadata {
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub tags: Vec<String>,
    pub categories: &'static [&'static str],

    // not emitted: Zola derives the slug from the file name on its own
    #[serde(skip_serializing)]
    pub slug: String,
}

impl Metadata {
    pub fn derive(filename: &str, content: &str, date: NaiveDate) -> Self {
        Metadata {
            title: derive_title(filename),
            date,
            description: derive_description(content),
            tags: derive_tags(content),
            categories: CATEGORIES,
            slug: derive_slug(filename),
        }
    }

    /// TOML body of the header, without the `+++` delimiters.
    pub fn to_front_matter(&self) -> anyhow::Result<String> {
        let toml = toml::to_string(self)
            .with_context(|| format!("while serializing front matter of {:?}", self.title))?;
        Ok(toml.trim_end().to_string())
    }
}

pub(crate) fn build_header(filename: &str, content: &str, date: NaiveDate) -> anyhow::Result<String> {
    let metadata = Metadata::derive(filename, content, date);
    debug!("{filename}: slug {:?}, tags {:?}", metadata.slug, metadata.tags);
    metadata.to_front_matter()
}
