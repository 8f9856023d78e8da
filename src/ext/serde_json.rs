// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Dotted-path access into raw tracker payloads with typed, context-carrying extraction
// role: extension/serde_json
// outputs: JsonFetch trait and JsonFetched wrapper (optional, defaulted, or required extraction)
// invariants: No panics; missing paths and JSON nulls yield None; required() names the missing path
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::de::DeserializeOwned;

use crate::error::IngestError;

/// A location inside a JSON document, remembered together with the path used to reach it.
pub struct JsonFetched<'a> {
  path: String,
  inner: Option<&'a serde_json::Value>,
}

impl<'a> JsonFetched<'a> {
  /// The fetched value, treating JSON `null` as absent.
  pub fn value(&self) -> Option<&'a serde_json::Value> {
    self.inner.filter(|v| !v.is_null())
  }

  pub fn to<T>(&self) -> Option<T>
  where
    T: DeserializeOwned,
  {
    self.value().and_then(|v| serde_json::from_value::<T>(v.clone()).ok())
  }

  pub fn to_or_default<T>(&self) -> T
  where
    T: DeserializeOwned + Default,
  {
    self.to::<T>().unwrap_or_default()
  }

  /// Deserialize as `T`, or report the missing path against `context`.
  pub fn required<T>(&self, context: &str) -> Result<T, IngestError>
  where
    T: DeserializeOwned,
  {
    self.to::<T>().ok_or_else(|| IngestError::MissingField {
      field: self.path.clone(),
      context: context.to_string(),
    })
  }

  /// Elements of an array value; empty when absent or not an array.
  pub fn items(&self) -> &'a [serde_json::Value] {
    self.value().and_then(|v| v.as_array()).map(Vec::as_slice).unwrap_or(&[])
  }

  /// A string value, or a number rendered as a string (trackers use both for ids).
  pub fn text(&self) -> Option<String> {
    match self.value()? {
      serde_json::Value::String(s) => Some(s.clone()),
      serde_json::Value::Number(n) => Some(n.to_string()),
      _ => None,
    }
  }
}

/// Fetch nested values via dotted paths like "fields.status.id".
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;
}

impl JsonFetch for serde_json::Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { path: String::new(), inner: Some(self) };
    }

    let mut cur = self;

    for key in path.split('.') {
      match cur.get(key) {
        Some(next) => cur = next,
        None => return JsonFetched { path: path.to_string(), inner: None },
      }
    }

    JsonFetched { path: path.to_string(), inner: Some(cur) }
  }
}
