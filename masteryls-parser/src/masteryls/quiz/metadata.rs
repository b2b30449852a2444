//! Leading JSON metadata of a quiz block

use super::ast::DeclaredType;
use super::error::MetadataParseError;
use serde_json::{Map, Value};

/// Recognized metadata fields plus whatever else the author wrote.
#[derive(Debug, Default)]
pub(crate) struct Metadata {
    pub id: Option<String>,
    pub title: Option<String>,
    pub declared_type: Option<DeclaredType>,
    pub body: Option<String>,
    pub extra: Map<String, Value>,
}

impl Metadata {
    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let id = map.remove("id").as_ref().and_then(scalar_string);
        let title = map.remove("title").as_ref().and_then(scalar_string);
        let declared_type = map
            .remove("type")
            .as_ref()
            .and_then(scalar_string)
            .map(|value| DeclaredType::from_authored(&value));
        let body = map.remove("body").as_ref().and_then(scalar_string);

        Self {
            id,
            title,
            declared_type,
            body,
            extra: map,
        }
    }
}

/// Split a payload into its metadata object and the text after it.
///
/// Returns `Ok((None, payload))` when the payload does not open with `{`.
pub(crate) fn split_metadata(
    payload: &str,
) -> Result<(Option<Map<String, Value>>, &str), MetadataParseError> {
    let trimmed = payload.trim_start();
    if !trimmed.starts_with('{') {
        return Ok((None, payload));
    }

    let end = find_object_end(trimmed).ok_or(MetadataParseError::Unterminated)?;
    let map: Map<String, Value> = serde_json::from_str(&trimmed[..end])?;
    Ok((Some(map), &trimmed[end..]))
}

/// Byte offset just past the brace closing the object that opens `text`.
///
/// Braces inside JSON strings do not count.
fn find_object_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(offset + ch.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Metadata values are meant to be strings; numbers and booleans are accepted as their
/// JSON spelling. Blank strings count as absent.
fn scalar_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_metadata_returns_payload() {
        let payload = "- [ ] a\n- [x] b\n";
        let (map, rest) = split_metadata(payload).unwrap();
        assert!(map.is_none());
        assert_eq!(rest, payload);
    }

    #[test]
    fn metadata_on_own_line() {
        let (map, rest) = split_metadata("{\"id\":\"q\"}\n- [x] a\n").unwrap();
        assert_eq!(map.unwrap()["id"], "q");
        assert_eq!(rest, "\n- [x] a\n");
    }

    #[test]
    fn metadata_leading_content_on_same_line() {
        let (map, rest) = split_metadata("  {\"title\":\"T\"} - [x] a").unwrap();
        assert_eq!(map.unwrap()["title"], "T");
        assert_eq!(rest, " - [x] a");
    }

    #[test]
    fn metadata_spanning_lines() {
        let payload = "{\n  \"id\": \"q\",\n  \"title\": \"Multi\"\n}\n- [x] a\n";
        let (map, rest) = split_metadata(payload).unwrap();
        let map = map.unwrap();
        assert_eq!(map["title"], "Multi");
        assert_eq!(rest, "\n- [x] a\n");
    }

    #[test]
    fn braces_inside_strings_are_ignored() {
        let payload = r#"{"title":"use } and { and \" freely"}"#;
        let end = find_object_end(payload).unwrap();
        assert_eq!(end, payload.len());
    }

    #[test]
    fn unterminated_object_is_an_error() {
        let result = split_metadata("{\"id\": \"q\"\n- [x] a\n");
        assert!(matches!(result, Err(MetadataParseError::Unterminated)));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result = split_metadata("{id: q}\n- [x] a\n");
        assert!(matches!(result, Err(MetadataParseError::Json(_))));
    }

    #[test]
    fn recognized_fields_are_lifted_out() {
        let map: Map<String, Value> = serde_json::from_str(
            r#"{"id": 7, "title": "T", "type": "essay", "body": "B", "points": 3}"#,
        )
        .unwrap();
        let metadata = Metadata::from_map(map);
        assert_eq!(metadata.id.as_deref(), Some("7"));
        assert_eq!(metadata.title.as_deref(), Some("T"));
        assert_eq!(metadata.declared_type, Some(DeclaredType::Essay));
        assert_eq!(metadata.body.as_deref(), Some("B"));
        assert_eq!(metadata.extra.len(), 1);
        assert_eq!(metadata.extra["points"], 3);
    }

    #[test]
    fn blank_and_structured_values_count_as_absent() {
        let map: Map<String, Value> =
            serde_json::from_str(r#"{"id": null, "title": "  ", "type": ["a"]}"#).unwrap();
        let metadata = Metadata::from_map(map);
        assert!(metadata.id.is_none());
        assert!(metadata.title.is_none());
        assert!(metadata.declared_type.is_none());
    }
}
