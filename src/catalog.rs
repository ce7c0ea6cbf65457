use std::fs::OpenOptions;
use std::io::{BufRead as _, BufReader};
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(rename = "Title")]
    pub title: String,
    pub authors: String,
    pub description: String,
    pub image: String,
}

impl BookRecord {
    /// Author names, with list literals like `['A', 'B']` unpacked.
    pub fn author_list(&self) -> Vec<String> {
        let raw = self.authors.trim();
        let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
            return if raw.is_empty() {
                Vec::new()
            } else {
                vec![raw.to_owned()]
            };
        };

        inner
            .split(',')
            .map(|name| name.trim().trim_matches(|c: char| c == '\'' || c == '"').trim())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Which column a predicted label is matched against.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LookupField {
    #[default]
    Title,
    Author,
}

/// Reference rows for one recommender, read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<BookRecord>,
}

impl Catalog {
    pub fn new(records: Vec<BookRecord>) -> Self {
        Self { records }
    }

    /// Loads `.jsonl` as JSON Lines and anything else as CSV with a header row.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let records = if path.extension().and_then(|e| e.to_str()) == Some("jsonl") {
            read_jsonl(path)?
        } else {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read catalog: {}", path.display()))?;
            parse_csv(&contents).with_context(|| format!("parse catalog: {}", path.display()))?
        };
        tracing::debug!(path = %path.display(), rows = records.len(), "loaded catalog");
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First row whose field equals `label` exactly.
    pub fn find(&self, field: LookupField, label: &str) -> Option<&BookRecord> {
        self.records.iter().find(|record| match field {
            LookupField::Title => record.title == label,
            LookupField::Author => record.authors == label,
        })
    }
}

fn read_jsonl(path: &Path) -> anyhow::Result<Vec<BookRecord>> {
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .with_context(|| format!("open catalog: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line.context("read catalog jsonl line")?;
        if line.trim().is_empty() {
            continue;
        }
        let record: BookRecord = serde_json::from_str(&line)
            .with_context(|| format!("parse catalog record on line {}", n + 1))?;
        records.push(record);
    }
    Ok(records)
}

const REQUIRED_COLUMNS: [&str; 4] = ["Title", "authors", "description", "image"];

pub fn parse_csv(contents: &str) -> anyhow::Result<Vec<BookRecord>> {
    let mut rows = csv_rows(contents)?.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| anyhow::anyhow!("catalog is empty"))?;

    let mut columns = [0usize; 4];
    for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| anyhow::anyhow!("catalog is missing column {name:?}"))?;
    }
    let [title, authors, description, image] = columns;

    let cell = |row: &[String], i: usize| row.get(i).cloned().unwrap_or_default();
    Ok(rows
        .filter(|row| !(row.len() == 1 && row[0].is_empty()))
        .map(|row| BookRecord {
            title: cell(row.as_slice(), title),
            authors: cell(row.as_slice(), authors),
            description: cell(row.as_slice(), description),
            image: cell(row.as_slice(), image),
        })
        .collect())
}

/// Splits RFC 4180 text into rows of fields: quoted fields may contain commas,
/// doubled quotes and line breaks.
fn csv_rows(contents: &str) -> anyhow::Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = contents.trim_start_matches('\u{feff}').chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        anyhow::bail!("unterminated quoted field in row {}", rows.len() + 1);
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}
