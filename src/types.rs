use itertools::Itertools;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Marker the documentation uses for array types, e.g. `Array of PhotoSize`.
/// Case-sensitive by convention; evaluated before union splitting so that
/// the array wrapper always binds outermost (`Array of InputMedia or String`).
const ARRAY_OF: &str = "Array of ";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Scalar {
    Int,
    Float,
    String,
    Bool,
    True,
    False,
    Array,
    Object,
}

impl Scalar {
    fn from_keyword(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "int" | "integer" => Some(Self::Int),
            "float" | "double" | "float number" => Some(Self::Float),
            "string" => Some(Self::String),
            "bool" | "boolean" => Some(Self::Bool),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "array" => Some(Self::Array),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bool => "bool",
            Self::True => "true",
            Self::False => "false",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// Canonical form of a documentation type string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TypeExpression {
    Scalar(Scalar),
    /// Named entity defined elsewhere in the model. Capitalization is
    /// documentation-authoritative and never re-cased.
    Reference(String),
    ArrayOf(Box<TypeExpression>),
    /// At least two alternatives, documentation order, duplicates collapsed.
    Union(Vec<TypeExpression>),
}

impl TypeExpression {
    pub fn array_of(element: TypeExpression) -> Self {
        Self::ArrayOf(Box::new(element))
    }
}

/// Resolves free-text like `Array of MessageEntity` or `Integer or String`.
///
/// Returns `None` for text that is neither a scalar keyword, an array or
/// union expression, nor a single word: multi-word prose fragments must not
/// be mistaken for entity names. Callers decide whether to drop the value
/// or log a warning.
pub fn resolve(text: &str) -> Option<TypeExpression> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(scalar) = Scalar::from_keyword(text) {
        return Some(TypeExpression::Scalar(scalar));
    }

    if let Some(pos) = text.find(ARRAY_OF) {
        let element = &text[pos + ARRAY_OF.len()..];
        return resolve(element).map(TypeExpression::array_of);
    }

    if text.contains(" or ") {
        return union_of(text.split(" or "));
    }

    if text.contains(" and ") {
        // Only seen inside array element lists ("Array of PhotoSize and
        // Sticker"); surfaced for manual review.
        log::warn!("intersection-style type text treated as a union: {:?}", text);
        return union_of(text.split(" and "));
    }

    if text.contains(char::is_whitespace) {
        log::warn!("unrecognized type text: {:?}", text);
        return None;
    }

    Some(TypeExpression::Reference(text.to_string()))
}

/// Resolves a pre-split list of type texts into a single expression:
/// one survivor is returned as-is, several become a `Union`.
pub fn resolve_many<'a, I>(texts: I) -> Option<TypeExpression>
where
    I: IntoIterator<Item = &'a str>,
{
    union_of(texts.into_iter())
}

fn union_of<'a, I>(texts: I) -> Option<TypeExpression>
where
    I: Iterator<Item = &'a str>,
{
    let mut alternatives: Vec<TypeExpression> = Vec::new();
    for ty in texts.filter_map(resolve) {
        if !alternatives.contains(&ty) {
            alternatives.push(ty);
        }
    }

    match alternatives.len() {
        0 => None,
        1 => alternatives.pop(),
        _ => Some(TypeExpression::Union(alternatives)),
    }
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.write_str(scalar.as_str()),
            Self::Reference(name) => f.write_str(name),
            Self::ArrayOf(element) => write!(f, "{}{}", ARRAY_OF, element),
            Self::Union(alternatives) => f.write_str(&alternatives.iter().join(" or ")),
        }
    }
}

impl Serialize for TypeExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        resolve(&text)
            .ok_or_else(|| de::Error::custom(format_args!("unrecognized type text: {:?}", text)))
    }
}
