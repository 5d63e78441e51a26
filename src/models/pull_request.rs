//! Normalized pull-request creation records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::RawMessage;

/// A pull request projected out of a raw `pull-request.new` message.
///
/// Serializes with the keys `project`, `branch`, `author`, `date_created`, `_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// Full project name, e.g. `rpms/python-foo`
    pub project: String,

    /// Target branch
    pub branch: String,

    /// Pagure user who opened the request
    pub author: String,

    /// Creation timestamp exactly as provided by the source
    #[serde(rename = "date_created")]
    pub created_at: String,

    #[serde(rename = "_id")]
    pub id: String,
}

/// Location of every required field inside a raw message.
const PULLREQUEST: [&str; 2] = ["msg", "pullrequest"];
const PROJECT: &[&str] = &["project", "fullname"];
const BRANCH: &[&str] = &["branch"];
const AUTHOR: &[&str] = &["user", "name"];
const CREATED_AT: &[&str] = &["date_created"];
const ID: &[&str] = &["id"];

impl PullRequestRecord {
    /// Project a raw message into a record.
    ///
    /// Fails with [`AppError::MissingField`] naming the first absent path.
    pub fn from_message(message: &RawMessage) -> Result<Self> {
        let pr = lookup(message, &PULLREQUEST, &[])?;

        Ok(Self {
            project: scalar(pr, PROJECT)?,
            branch: scalar(pr, BRANCH)?,
            author: scalar(pr, AUTHOR)?,
            created_at: scalar(pr, CREATED_AT)?,
            id: scalar(pr, ID)?,
        })
    }
}

/// Normalize a whole batch, stopping at the first bad message.
pub fn normalize_all(messages: &[RawMessage]) -> Result<Vec<PullRequestRecord>> {
    messages.iter().map(PullRequestRecord::from_message).collect()
}

fn dotted(prefix: &[&str], path: &[&str]) -> String {
    prefix
        .iter()
        .chain(path.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
}

fn lookup<'a>(value: &'a Value, path: &[&str], prefix: &[&str]) -> Result<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.get(key))
        .filter(|found| !found.is_null())
        .ok_or_else(|| AppError::missing_field(dotted(prefix, path)))
}

/// Read a string field, accepting numbers as their decimal text.
fn scalar(pr: &Value, path: &[&str]) -> Result<String> {
    match lookup(pr, path, &PULLREQUEST)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(AppError::InvalidField {
            field: dotted(&PULLREQUEST, path),
            found: kind(other).to_string(),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
