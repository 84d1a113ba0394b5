use std::io::{self, Write};

use url::Url;

use crate::config::{Config, DEFAULT_ENDPOINT};
use crate::error::{Result, UserDeskError};

fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = ask(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("userdesk Configuration");
    println!("======================\n");

    let endpoint = ask(&format!("Directory endpoint [{DEFAULT_ENDPOINT}]: "))?;
    if !endpoint.is_empty() {
        Url::parse(&endpoint).map_err(|source| UserDeskError::InvalidEndpoint {
            url: endpoint.clone(),
            source,
        })?;
    }

    let api_key = ask("API key sent as x-api-key [optional]: ")?;

    // Create config directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UserDeskError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let config_content = render_config(&endpoint, &api_key);

    std::fs::write(&config_path, config_content).map_err(|e| UserDeskError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("Run 'userdesk' to start a session.");

    Ok(())
}

fn render_config(endpoint: &str, api_key: &str) -> String {
    let mut content = String::new();
    if !endpoint.is_empty() {
        content.push_str(&format!("endpoint = {}\n", toml::Value::from(endpoint)));
    }
    if !api_key.is_empty() {
        content.push_str(&format!("api_key = {}\n", toml::Value::from(api_key)));
    }
    content
}
