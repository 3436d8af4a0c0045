mod builder;
mod description;
mod model;
mod partition;
pub mod response;
mod sentence;
mod table;
mod types;
mod util;

pub use builder::{BuildError, ModelBuilder};
pub use model::{DocumentationModel, Entity, Group, Parameter};
pub use partition::{partition, Section};
pub use types::{resolve, resolve_many, Scalar, TypeExpression};

pub const CORE_TELEGRAM_URL: &str = "https://core.telegram.org";
pub const BOT_API_DOCS_URL: &str = "https://core.telegram.org/bots/api/";

/// Builds the document model from the fetched documentation page.
pub fn get(html_doc: &str) -> Result<DocumentationModel, BuildError> {
    ModelBuilder::from_str(html_doc).build()
}
