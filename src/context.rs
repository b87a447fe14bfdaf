use std::path::PathBuf;

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub raw_dir: PathBuf,
    pub out_dir: PathBuf,

    /// Date written into every generated header.
    pub date: NaiveDate,
}

impl Context {
    pub fn new(raw_dir: PathBuf, out_dir: PathBuf, date: Option<NaiveDate>) -> Self {
        Self {
            raw_dir,
            out_dir,
            date: date.unwrap_or_else(|| chrono::Local::now().date_naive()),
        }
    }
}
