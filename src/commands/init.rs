use crate::config::CONFIG_FILE;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = r#"# swift2activity configuration

[diagram]
# Mermaid flow direction: TD, LR, BT or RL
direction = "TD"
# Hard limit for node label length
max_label_length = 60

[output]
# mermaid, dot or json
default_format = "mermaid"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if io::file_exists(&config_path) && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Swift2ActivityConfig;

    #[test]
    fn template_parses_and_validates() {
        let config: Swift2ActivityConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.validate().unwrap();
        assert_eq!(config.diagram.max_label_length, 60);
    }
}
