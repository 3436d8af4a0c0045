use crate::{
    description,
    model::{self, DocumentationModel, Entity, Group, Parameter},
    partition::{partition, Section},
    response, table, types,
    util::ElementRefExt,
};
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use semver::Version;

/// Meta-documentation sections that carry no API surface.
const EXCLUDED_GROUPS: &[&str] = &[
    "Recent changes",
    "Authorizing your bot",
    "Making requests",
    "Using a Local Bot API Server",
];

/// Fatal structural failures. Extraction ambiguity never lands here: an
/// unresolvable type or failed inference degrades to a missing field.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("No `#dev_page_content` container in document")]
    MissingContent,
    #[error("No release date heading in document")]
    MissingReleaseDate,
    #[error("No version paragraph in document")]
    MissingVersion,
    #[error("chrono: {0}")]
    ChronoParse(
        #[from]
        #[source]
        chrono::ParseError,
    ),
    #[error("SemVer: {0}")]
    SemVer(
        #[from]
        #[source]
        semver::Error,
    ),
}

pub struct ModelBuilder {
    doc: Html,
}

impl ModelBuilder {
    pub fn from_str(s: &str) -> Self {
        Self {
            doc: Html::parse_document(s),
        }
    }

    pub fn build(&self) -> Result<DocumentationModel, BuildError> {
        let content = Selector::parse("#dev_page_content").unwrap();
        let content = self
            .doc
            .select(&content)
            .next()
            .ok_or(BuildError::MissingContent)?;

        let children: Vec<ElementRef> = content.children().filter_map(ElementRef::wrap).collect();

        let date_pos = children
            .iter()
            .position(|elem| elem.value().name() == "h4")
            .ok_or(BuildError::MissingReleaseDate)?;
        let release_date = parse_release_date(children[date_pos])?;
        let version = children[date_pos + 1..]
            .iter()
            .find(|elem| elem.value().name() == "p")
            .map(|elem| parse_version(*elem))
            .ok_or(BuildError::MissingVersion)??;

        let groups = partition(children, |elem| elem.value().name() == "h3")
            .into_iter()
            .filter_map(build_group)
            .collect();

        Ok(DocumentationModel {
            version,
            release_date,
            groups,
        })
    }
}

fn parse_release_date(heading: ElementRef) -> Result<NaiveDate, BuildError> {
    Ok(NaiveDate::parse_from_str(
        heading.plain_text().trim(),
        "%B %e, %Y",
    )?)
}

fn parse_version(elem: ElementRef) -> Result<Version, BuildError> {
    let digits: String = elem
        .plain_text()
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let digits = digits.trim_end_matches('.');
    if digits.is_empty() {
        return Err(BuildError::MissingVersion);
    }
    Ok(model::parse_short_version(digits)?)
}

fn build_group(section: Section<ElementRef>) -> Option<Group> {
    let name = section.heading.plain_text().trim().to_string();
    if EXCLUDED_GROUPS.contains(&name.as_str()) {
        return None;
    }

    let is_sub_heading = |elem: &ElementRef| elem.value().name() == "h4";
    let description = description::extract(&section.body, is_sub_heading);
    let entities = partition(section.body, is_sub_heading)
        .into_iter()
        .filter_map(build_entity)
        .collect();

    Some(Group {
        name,
        description,
        entities,
    })
}

fn build_entity(section: Section<ElementRef>) -> Option<Entity> {
    let name = section.heading.plain_text().trim().to_string();
    // sub-headings with spaces ("Sending files", "Inline mode objects") are
    // prose subsections, not API members
    if name.contains(char::is_whitespace) {
        return None;
    }

    let is_table = |elem: &ElementRef| elem.value().name() == "table";
    let description = description::extract(&section.body, is_table);
    let parameters = section
        .body
        .iter()
        .copied()
        .find(is_table)
        .map(build_parameters)
        .unwrap_or_default();
    let response = response::infer(&description);

    Some(Entity {
        name,
        description,
        parameters,
        response,
    })
}

fn build_parameters(table: ElementRef) -> Vec<Parameter> {
    let rows = table::rows(table);
    // 3 columns: type table, optionality embedded in the description;
    // 4 columns: method table with an explicit required marker
    let columns = match rows.first() {
        Some(first) => first.len(),
        None => return vec![],
    };

    rows.into_iter()
        .filter_map(|row| build_parameter(row, columns))
        .collect()
}

fn build_parameter(row: Vec<String>, columns: usize) -> Option<Parameter> {
    if row.len() != columns {
        log::warn!("skipping table row with {} of {} cells", row.len(), columns);
        return None;
    }

    let mut cells = row.into_iter();
    match columns {
        3 => {
            let name = cells.next()?;
            let kind = resolve_cell(&name, &cells.next()?)?;
            let description = cells.next()?;
            let required = !description.contains("Optional.");
            let description = match description.strip_prefix("Optional.") {
                Some(rest) => rest.trim().to_string(),
                None => description,
            };
            Some(Parameter {
                name,
                kind,
                required,
                description,
            })
        }
        4 => {
            let name = cells.next()?;
            let kind = resolve_cell(&name, &cells.next()?)?;
            let required = cells.next()? != "Optional";
            let description = cells.next()?;
            Some(Parameter {
                name,
                kind,
                required,
                description,
            })
        }
        _ => {
            log::warn!("table with unsupported column count: {}", columns);
            None
        }
    }
}

fn resolve_cell(name: &str, kind: &str) -> Option<types::TypeExpression> {
    let ty = types::resolve(kind);
    if ty.is_none() {
        log::warn!("dropping parameter {:?}: unresolvable type {:?}", name, kind);
    }
    ty
}
