//! OLL case data as stored in the site's JSON file.

use anyhow::Context;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_DATA_PATH: &str = "assets/data/oll.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaseData {
    #[serde(default)]
    pub groups: Vec<CaseGroup>,
}

/// A named group of cases. Each case is read on its own, so one bad entry ends up in
/// `malformed` instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawGroup")]
pub struct CaseGroup {
    pub name: String,
    pub cases: Vec<Case>,
    pub malformed: Vec<MalformedCase>,
}

/// A case entry that could not be read. `position` counts from 1 within its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedCase {
    pub position: usize,
    pub error: String,
}

#[derive(Deserialize)]
struct RawGroup {
    #[serde(default, deserialize_with = "lenient_text")]
    name: Option<String>,
    #[serde(default)]
    cases: Vec<Value>,
}

impl From<RawGroup> for CaseGroup {
    fn from(raw: RawGroup) -> Self {
        let mut group = CaseGroup {
            name: raw.name.unwrap_or_default(),
            ..CaseGroup::default()
        };
        for (i, value) in raw.cases.into_iter().enumerate() {
            match serde_json::from_value::<Case>(value) {
                Ok(case) => group.cases.push(case),
                Err(e) => group.malformed.push(MalformedCase {
                    position: i + 1,
                    error: e.to_string(),
                }),
            }
        }
        group
    }
}

/// Case numbers appear both as JSON numbers and as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CaseNumber {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Case {
    #[serde(default, deserialize_with = "lenient_number")]
    pub number: Option<CaseNumber>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub setup: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rotations: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub algorithm: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub auf: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub probability: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
}

/// Any JSON scalar as text. Arrays and objects are rejected.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(d)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!("expected text, found {}", other))),
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<CaseNumber>, D::Error> {
    match Value::deserialize(d)? {
        Value::Number(n) => Ok(Some(
            n.as_u64()
                .map_or_else(|| CaseNumber::Text(n.to_string()), CaseNumber::Number),
        )),
        other => lenient_text(other)
            .map(|text| text.map(CaseNumber::Text))
            .map_err(D::Error::custom),
    }
}

impl CaseData {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<CaseData> {
        let path = path.as_ref();
        log::info!("Loading OLL data from {}", path.display());

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read OLL data from {}", path.display()))?;
        let data = CaseData::from_json(&raw)
            .with_context(|| format!("Unable to parse OLL data in {}", path.display()))?;

        log::info!(
            "Loaded {} groups, {} cases",
            data.groups.len(),
            data.cases().count()
        );
        Ok(data)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<CaseData> {
        serde_json::from_str(raw)
    }

    /// Every case paired with the group it is listed under.
    pub fn cases(&self) -> impl Iterator<Item = (&CaseGroup, &Case)> {
        self.groups
            .iter()
            .flat_map(|group| group.cases.iter().map(move |case| (group, case)))
    }
}

impl std::fmt::Display for CaseNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CaseNumber::Number(n) => write!(f, "{}", n),
            CaseNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Trimmed, non-blank fields joined with single spaces.
fn join_fields<'a>(fields: impl IntoIterator<Item = Option<&'a str>>) -> String {
    fields
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Case {
    /// What the preview diagram simulates: the standard algorithm, or the setup when there is
    /// none, followed by the AUF.
    pub fn preview_algorithm(&self) -> String {
        let base = non_blank(&self.algorithm).or_else(|| non_blank(&self.setup));
        join_fields([base, self.auf.as_deref()])
    }

    /// Everything applied to reach the solved state, used by validation.
    pub fn validation_algorithm(&self) -> String {
        join_fields([
            self.rotations.as_deref(),
            self.setup.as_deref(),
            self.algorithm.as_deref(),
            self.auf.as_deref(),
        ])
    }

    pub fn setup_sequence(&self) -> String {
        join_fields([self.rotations.as_deref(), self.setup.as_deref()])
    }

    pub fn solution_sequence(&self) -> String {
        join_fields([self.algorithm.as_deref(), self.auf.as_deref()])
    }

    pub fn title(&self) -> String {
        match &self.number {
            Some(number) => format!("OLL {}", number),
            None => "OLL ?".to_string(),
        }
    }

    pub fn notation_label(&self) -> String {
        non_blank(&self.code).map_or_else(|| self.title(), str::to_string)
    }

    pub fn probability_label(&self) -> &str {
        non_blank(&self.probability).unwrap_or("1/54")
    }
}
