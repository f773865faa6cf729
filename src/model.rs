//! Portfolio records.
//!
//! `Project` and `Certificate` mirror the documents of the remote collections.
//! Field names on the wire (and in the local store) keep the document casing
//! (`Img`, `Title`, ...). Fields the view does not use are carried through
//! untouched in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A project document, identified by its document id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(rename = "Img", default, deserialize_with = "lenient_string")]
    pub img: String,
    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename = "Link", default, deserialize_with = "lenient_string")]
    pub link: String,
    /// Always present once normalized; a missing or falsy field becomes empty.
    #[serde(rename = "TechStack", default, deserialize_with = "lenient_tech_stack")]
    pub tech_stack: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A certificate document. Certificates have no identity beyond list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(rename = "Img", default, deserialize_with = "lenient_string")]
    pub img: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the hard-coded tech stack panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechStackEntry {
    pub icon_file: &'static str,
    pub label: &'static str,
}

impl TechStackEntry {
    const fn new(icon_file: &'static str, label: &'static str) -> Self {
        Self { icon_file, label }
    }
}

pub const TECH_STACK: [TechStackEntry; 12] = [
    TechStackEntry::new("html.svg", "HTML"),
    TechStackEntry::new("css.svg", "CSS"),
    TechStackEntry::new("javascript.svg", "JavaScript"),
    TechStackEntry::new("tailwind.svg", "Tailwind CSS"),
    TechStackEntry::new("reactjs.svg", "ReactJS"),
    TechStackEntry::new("vite.svg", "Vite"),
    TechStackEntry::new("nodejs.svg", "Node JS"),
    TechStackEntry::new("bootstrap.svg", "Bootstrap"),
    TechStackEntry::new("firebase.svg", "Firebase"),
    TechStackEntry::new("MUI.svg", "Material UI"),
    TechStackEntry::new("vercel.svg", "Vercel"),
    TechStackEntry::new("SweetAlert.svg", "SweetAlert2"),
];

/// Scalars as display text. Missing and null are empty; nested values keep their JSON text.
fn value_to_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

/// A falsy value is an empty stack and a lone scalar is a stack of one.
/// Maps carry no labels and read as empty.
fn lenient_tech_stack<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        v if is_falsy(&v) => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(value_to_text)
            .collect(),
        Value::Object(_) => Vec::new(),
        scalar => vec![value_to_text(scalar)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_tech_stack_becomes_empty() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "Img": "https://img/p1.png",
            "Title": "Portfolio",
            "Description": "Personal site",
            "Link": "https://example.com",
        }))
        .unwrap();
        assert!(project.tech_stack.is_empty());

        let stored = serde_json::to_value(&project).unwrap();
        assert_eq!(stored["TechStack"], json!([]));
    }

    #[test]
    fn test_null_tech_stack_becomes_empty() {
        let project: Project =
            serde_json::from_value(json!({ "id": "p1", "TechStack": null })).unwrap();
        assert_eq!(project.tech_stack, Vec::<String>::new());
        assert_eq!(project.title, "");
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "Title": "Portfolio",
            "TechStack": ["Rust"],
            "Github": "https://github.com/someone/portfolio",
        }))
        .unwrap();
        assert_eq!(project.tech_stack, vec!["Rust".to_string()]);
        assert_eq!(
            project.extra.get("Github"),
            Some(&json!("https://github.com/someone/portfolio"))
        );

        let stored = serde_json::to_value(&project).unwrap();
        assert_eq!(stored["Github"], "https://github.com/someone/portfolio");
        assert_eq!(stored["Title"], "Portfolio");
        assert_eq!(stored["id"], "p1");
    }

    #[test]
    fn test_certificate_keeps_image_field_name() {
        let certificate: Certificate =
            serde_json::from_value(json!({ "Img": "https://img/c1.png" })).unwrap();
        assert_eq!(certificate.img, "https://img/c1.png");
        assert_eq!(
            serde_json::to_value(&certificate).unwrap(),
            json!({ "Img": "https://img/c1.png" })
        );
    }

    #[test]
    fn test_tech_stack_order() {
        assert_eq!(TECH_STACK.len(), 12);
        assert_eq!(TECH_STACK[0].label, "HTML");
        assert_eq!(TECH_STACK[9].icon_file, "MUI.svg");
        assert_eq!(TECH_STACK[11].label, "SweetAlert2");
    }

    #[test]
    fn test_falsy_tech_stack_becomes_empty() {
        for falsy in [json!(""), json!(false), json!(0)] {
            let project: Project =
                serde_json::from_value(json!({ "id": "p1", "TechStack": falsy })).unwrap();
            assert!(project.tech_stack.is_empty());
        }
    }

    #[test]
    fn test_tech_stack_entries_are_text() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "TechStack": ["Rust", 2024, null, true],
        }))
        .unwrap();
        assert_eq!(project.tech_stack, ["Rust", "2024", "true"]);

        let single: Project =
            serde_json::from_value(json!({ "id": "p2", "TechStack": "Rust" })).unwrap();
        assert_eq!(single.tech_stack, ["Rust"]);
    }

    #[test]
    fn test_non_string_fields_render_as_text() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "Title": 2024,
            "Description": false,
            "Link": 1.5,
        }))
        .unwrap();
        assert_eq!(project.title, "2024");
        assert_eq!(project.description, "false");
        assert_eq!(project.link, "1.5");

        let certificate: Certificate = serde_json::from_value(json!({ "Img": 7 })).unwrap();
        assert_eq!(certificate.img, "7");
    }
}
