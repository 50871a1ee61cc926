use anyhow::{Context, Result};
use tabjson::{parse_table_with_options, to_string_with_options, write_to_path, TableOptions};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const OUTPUT_PATH: &str = "table.json";

const SAMPLE_TEXT: &str = "Имя\tВозраст\tГород
Иван\t25\tМосква
Анна\t30\tСанкт-Петербург
Петр\t35\tКазань";

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the JSON document.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let options = TableOptions::default();
    let table = parse_table_with_options(SAMPLE_TEXT, &options)?;
    info!(
        rows = table.len(),
        columns = table.headers().len(),
        "parsed sample table"
    );

    let json = to_string_with_options(&table, &options)?;
    println!("{json}");

    write_to_path(OUTPUT_PATH, &table, &options)
        .with_context(|| format!("failed to write {OUTPUT_PATH}"))?;
    info!(path = OUTPUT_PATH, bytes = json.len(), "wrote table json");

    Ok(())
}
