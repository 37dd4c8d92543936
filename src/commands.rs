// src/commands.rs
//! Command handlers for the cookbook CLI

use anyhow::{Context, Result};
use cookbook::catalog::Cookbook;
use cookbook::name::normalize_name;
use std::path::Path;
use tracing::info;

/// Start the HTTP server
///
/// Values given on the command line win over the config file.
#[cfg(feature = "server")]
pub async fn cmd_serve(
    config_path: Option<&Path>,
    bind: Option<&str>,
    seed: Option<&Path>,
) -> Result<()> {
    use cookbook::server::{self, CookbookConfig};

    let file_config = match config_path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            CookbookConfig::load(path)?
        }
        None => CookbookConfig::new(),
    };

    let mut config = file_config.to_server_config()?;
    if let Some(bind) = bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }
    if let Some(seed) = seed {
        config.seed_path = Some(seed.to_path_buf());
    }

    server::run_server(config).await
}

/// Render the summary of `name` as pretty JSON
pub fn render_summary(seed: &Path, name: &str) -> Result<String> {
    let cookbook = Cookbook::from_seed_file(seed)
        .with_context(|| format!("Failed to load cookbook from {}", seed.display()))?;
    let summary = cookbook
        .summary(name)
        .with_context(|| format!("Cannot summarize '{}'", name))?;
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Print the summary of a recipe
pub fn cmd_summary(seed: &Path, name: &str) -> Result<()> {
    println!("{}", render_summary(seed, name)?);
    Ok(())
}

/// Print the normalized form of a handwritten name
pub fn cmd_parse(input: &str) -> Result<()> {
    let name = normalize_name(input).context("Invalid recipe name")?;
    println!("{}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seed_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_render_summary() {
        let seed = seed_file(
            r#"[
                {"type": "ingredient", "name": "Egg", "cookTime": 6},
                {"type": "recipe", "name": "Omelette", "requiredItems": [{"name": "Egg", "quantity": 2}]}
            ]"#,
        );
        let json = render_summary(seed.path(), "Omelette").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cookTime"], 12);
        assert_eq!(value["ingredients"][0]["quantity"], 2);
    }

    #[test]
    fn test_render_summary_of_ingredient() {
        let seed = seed_file(r#"[{"type": "ingredient", "name": "Egg", "cookTime": 6}]"#);
        let err = render_summary(seed.path(), "Egg").unwrap_err();
        assert!(format!("{:#}", err).contains("Name refers to an Ingredient"));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert!(cmd_parse("1234").is_err());
        assert!(cmd_parse("meat-ball").is_ok());
    }
}
