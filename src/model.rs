use crate::types::TypeExpression;
use chrono::NaiveDate;
use semver::Version;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Structured description of one documentation page revision. Built in one
/// pass and read-only afterwards; serialized to one JSON file per version.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentationModel {
    pub version: Version,
    pub release_date: NaiveDate,
    pub groups: Vec<Group>,
}

impl DocumentationModel {
    /// Version the way the page states it: "9.2", without the padded patch.
    pub fn short_version(&self) -> String {
        if self.version.patch == 0 {
            format!("{}.{}", self.version.major, self.version.minor)
        } else {
            self.version.to_string()
        }
    }

    pub fn version_string(&self) -> String {
        format!(
            "Bot API {} (Release: {})",
            self.short_version(),
            self.release_date
        )
    }
}

/// One top-level documentation section, e.g. "Available methods".
/// Group and entity order mirrors page order; generators rely on it for
/// stable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub description: String,
    #[serde(rename = "sections")]
    pub entities: Vec<Entity>,
}

/// One Telegram type or method. A present `response` is the sole marker of
/// a method; there is no explicit kind tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub description: String,
    #[serde(
        rename = "params",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameters: Vec<Parameter>,
    #[serde(
        rename = "response",
        default,
        with = "response_strings",
        skip_serializing_if = "Option::is_none"
    )]
    pub response: Option<TypeExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TypeExpression,
    pub required: bool,
    pub description: String,
}

/// The JSON contract stores a response as a list of type strings, one per
/// union alternative.
mod response_strings {
    use super::*;
    use crate::types;

    pub fn serialize<S: Serializer>(
        value: &Option<TypeExpression>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let alternatives = match value {
            Some(TypeExpression::Union(alternatives)) => {
                alternatives.iter().map(ToString::to_string).collect()
            }
            Some(ty) => vec![ty.to_string()],
            None => return serializer.serialize_none(),
        };
        alternatives.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TypeExpression>, D::Error> {
        let texts = Option::<Vec<String>>::deserialize(deserializer)?;
        Ok(texts.and_then(|texts| types::resolve_many(texts.iter().map(String::as_str))))
    }
}

#[derive(Serialize)]
struct RawModelRef<'a> {
    version: String,
    date: NaiveDate,
    version_string: String,
    documentation: &'a [Group],
}

#[derive(Deserialize)]
struct RawModel {
    version: String,
    date: NaiveDate,
    documentation: Vec<Group>,
}

impl Serialize for DocumentationModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawModelRef {
            version: self.short_version(),
            date: self.release_date,
            version_string: self.version_string(),
            documentation: &self.groups,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DocumentationModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawModel::deserialize(deserializer)?;
        let version = parse_short_version(&raw.version).map_err(de::Error::custom)?;
        Ok(Self {
            version,
            release_date: raw.date,
            groups: raw.documentation,
        })
    }
}

/// Parses "9.2" (or "9") by padding to a full semver triple.
pub fn parse_short_version(text: &str) -> Result<Version, semver::Error> {
    let padded = match text.matches('.').count() {
        0 => format!("{}.0.0", text),
        1 => format!("{}.0", text),
        _ => text.to_string(),
    };
    Version::parse(&padded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Scalar, TypeExpression};

    fn sample_model() -> DocumentationModel {
        DocumentationModel {
            version: Version::new(9, 2, 0),
            release_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            groups: vec![Group {
                name: "Available methods".to_string(),
                description: "Methods of the API.".to_string(),
                entities: vec![
                    Entity {
                        name: "sendMessage".to_string(),
                        description: "Use this method to send text messages.".to_string(),
                        parameters: vec![Parameter {
                            name: "chat_id".to_string(),
                            kind: TypeExpression::Union(vec![
                                TypeExpression::Scalar(Scalar::Int),
                                TypeExpression::Scalar(Scalar::String),
                            ]),
                            required: true,
                            description: "Unique identifier".to_string(),
                        }],
                        response: Some(TypeExpression::Reference("Message".to_string())),
                    },
                    Entity {
                        name: "ChatPhoto".to_string(),
                        description: "This object represents a chat photo.".to_string(),
                        parameters: vec![],
                        response: None,
                    },
                ],
            }],
        }
    }

    #[test]
    fn version_string_format() {
        let model = sample_model();
        assert_eq!(model.short_version(), "9.2");
        assert_eq!(model.version_string(), "Bot API 9.2 (Release: 2025-08-15)");
    }

    #[test]
    fn round_trip_preserves_model() {
        let model = sample_model();
        let json = serde_json::to_string_pretty(&model).unwrap();
        let parsed: DocumentationModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn absence_discriminates_types_from_methods() {
        let json = serde_json::to_value(&sample_model()).unwrap();
        let sections = &json["documentation"][0]["sections"];
        assert_eq!(sections[0]["response"], serde_json::json!(["Message"]));
        assert!(sections[1].get("response").is_none());
        assert!(sections[1].get("params").is_none());
    }

    #[test]
    fn union_response_serialized_per_alternative() {
        let mut model = sample_model();
        model.groups[0].entities[0].response = Some(TypeExpression::Union(vec![
            TypeExpression::Reference("Message".to_string()),
            TypeExpression::Scalar(Scalar::True),
        ]));
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json["documentation"][0]["sections"][0]["response"],
            serde_json::json!(["Message", "true"])
        );
        let parsed: DocumentationModel = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn short_version_parsing_pads() {
        assert_eq!(parse_short_version("9.2").unwrap(), Version::new(9, 2, 0));
        assert_eq!(parse_short_version("9").unwrap(), Version::new(9, 0, 0));
    }
}
