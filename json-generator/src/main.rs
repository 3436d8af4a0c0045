use std::{fs, path::PathBuf};
use structopt::StructOpt;
use tg_docs_model::BOT_API_DOCS_URL;

/// Fetches the Bot API documentation page, builds the document model and
/// stores it as one JSON file per API version.
#[derive(StructOpt)]
struct Config {
    /// Directory the versioned JSON files are written to
    #[structopt(long, default_value = "versions")]
    output_dir: PathBuf,
    /// Documentation page URL
    #[structopt(long)]
    url: Option<String>,
    /// Write minimized JSON instead of pretty-printed
    #[structopt(long)]
    minimized: bool,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let config = Config::from_args();
    let url = config.url.as_deref().unwrap_or(BOT_API_DOCS_URL);

    let page = reqwest::blocking::get(url)?.text()?;
    let model = tg_docs_model::get(&page)?;

    let content = if config.minimized {
        serde_json::to_string(&model)?
    } else {
        serde_json::to_string_pretty(&model)?
    };

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)?;
    }
    let path = config
        .output_dir
        .join(format!("{}.json", model.short_version()));
    fs::write(&path, content)?;

    log::info!("written {}", path.display());
    println!("{}", model.version_string());

    Ok(())
}
