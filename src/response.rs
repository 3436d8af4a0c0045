use crate::{
    sentence::{Part, PartKind, Sentence},
    types::{self, Scalar, TypeExpression},
};

/// Sentences of `description` that talk about a return value. Public so the
/// intermediate step of the inference can be inspected when it misfires.
pub fn candidates(description: &str) -> Vec<&str> {
    description
        .split(". ")
        .filter(|sentence| sentence.to_lowercase().contains("return"))
        .collect()
}

/// Best-effort return-type inference over a normalized description.
///
/// `None` means the entity describes no return value and is a data type,
/// not a method; that absence is the model's only method/type discriminator.
/// Mis-inference on unusual prose is accepted noise, resolved by omission.
pub fn infer(description: &str) -> Option<TypeExpression> {
    let mut alternatives: Vec<TypeExpression> = Vec::new();

    for candidate in candidates(description) {
        let sentence = Sentence::parse(candidate);
        for ty in sentence_types(&sentence) {
            if !alternatives.contains(&ty) {
                alternatives.push(ty);
            }
        }
    }

    let mut alternatives = collapse_bool_pair(alternatives);
    match alternatives.len() {
        0 => None,
        1 => alternatives.pop(),
        _ => Some(TypeExpression::Union(alternatives)),
    }
}

/// Type mentions of one candidate sentence, in document order: the last
/// emphasis span (the documentation narrows to the concrete type at sentence
/// end) plus the first same-page anchor, which names a concrete entity and
/// is more reliable than emphasis.
fn sentence_types(sentence: &Sentence) -> Vec<TypeExpression> {
    let last_italic = sentence
        .parts
        .iter()
        .enumerate()
        .rev()
        .find(|(_, part)| part.kind == PartKind::Italic);
    let first_anchor = sentence.parts.iter().enumerate().find(|(_, part)| {
        matches!(&part.kind, PartKind::Anchor(href) if href.starts_with('#'))
    });

    let mut mentions: Vec<(usize, &Part)> = last_italic.into_iter().chain(first_anchor).collect();
    mentions.sort_by_key(|(pos, _)| *pos);

    mentions
        .into_iter()
        .filter_map(|(pos, part)| {
            let ty = resolve_mention(&part.inner)?;
            if wrapped_in_array(sentence, pos) && !matches!(ty, TypeExpression::ArrayOf(_)) {
                Some(TypeExpression::array_of(ty))
            } else {
                Some(ty)
            }
        })
        .collect()
}

/// "array of" immediately preceding the mention, e.g.
/// "an array of <a href="#update">Update</a> objects".
fn wrapped_in_array(sentence: &Sentence, pos: usize) -> bool {
    pos >= 2 && sentence.parts[pos - 2].is_word("array") && sentence.parts[pos - 1].is_word("of")
}

fn resolve_mention(text: &str) -> Option<TypeExpression> {
    // the documentation's "Messages" always means the Message entity here;
    // no general depluralization beyond this one fix
    let text = if text == "Messages" { "Message" } else { text };
    types::resolve(text).filter(looks_like_type_name)
}

/// Filters prose fragments accidentally caught by the emphasis heuristic:
/// a mention must be a scalar keyword or start with an uppercase letter.
fn looks_like_type_name(ty: &TypeExpression) -> bool {
    match ty {
        TypeExpression::Scalar(_) => true,
        TypeExpression::Reference(name) => {
            name.chars().next().map_or(false, char::is_uppercase)
        }
        TypeExpression::ArrayOf(element) => looks_like_type_name(element),
        TypeExpression::Union(alternatives) => alternatives.iter().all(looks_like_type_name),
    }
}

/// A True/False pair among response alternatives is a plain bool; the
/// literal-value distinction is dropped at the union level only. A mention
/// can carry the pair as one expression ("<em>True or False</em>" resolves
/// to a nested union), so every alternative is normalized first.
fn collapse_bool_pair(alternatives: Vec<TypeExpression>) -> Vec<TypeExpression> {
    let mut normalized: Vec<TypeExpression> = Vec::with_capacity(alternatives.len());
    for ty in alternatives.into_iter().map(collapse_within) {
        if !normalized.contains(&ty) {
            normalized.push(ty);
        }
    }

    let (true_ty, false_ty) = (
        TypeExpression::Scalar(Scalar::True),
        TypeExpression::Scalar(Scalar::False),
    );
    if !normalized.contains(&true_ty) || !normalized.contains(&false_ty) {
        return normalized;
    }

    let mut collapsed = Vec::with_capacity(normalized.len());
    for ty in normalized {
        let ty = if ty == true_ty {
            TypeExpression::Scalar(Scalar::Bool)
        } else if ty == false_ty {
            continue;
        } else {
            ty
        };
        if !collapsed.contains(&ty) {
            collapsed.push(ty);
        }
    }
    collapsed
}

fn collapse_within(ty: TypeExpression) -> TypeExpression {
    match ty {
        TypeExpression::Union(alternatives) => {
            let mut collapsed = collapse_bool_pair(alternatives);
            if collapsed.len() == 1 {
                collapsed.remove(0)
            } else {
                TypeExpression::Union(collapsed)
            }
        }
        TypeExpression::ArrayOf(element) => TypeExpression::array_of(collapse_within(*element)),
        ty => ty,
    }
}
