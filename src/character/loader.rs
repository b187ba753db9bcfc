//! Loading characters from YAML files

use eyre::{Context, Result};
use std::fs;
use std::path::Path;

use super::Character;

/// Load a character from a YAML file
pub fn load_character(path: &Path) -> Result<Character> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read character file: {}", path.display()))?;

    let character: Character = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse character file: {}", path.display()))?;

    if character.name.trim().is_empty() {
        eyre::bail!("Character file {} has an empty name", path.display());
    }

    log::info!("Loaded character '{}' from {}", character.name, path.display());
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_character_minimal() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
name: Test Mate
bio:
  - A test persona
plugins:
  - "@elizaos/plugin-sql"
message_examples:
  - - name: "{{{{user}}}}"
      text: hi
    - name: Test Mate
      text: hello
      action: SEI_BALANCE
"#
        )
        .unwrap();

        let character = load_character(file.path()).unwrap();

        assert_eq!(character.name, "Test Mate");
        assert_eq!(character.username, None);
        assert_eq!(character.plugins, vec!["@elizaos/plugin-sql"]);
        assert_eq!(character.message_examples[0][0].name, "{{user}}");
        assert_eq!(character.message_examples[0][1].action.as_deref(), Some("SEI_BALANCE"));
        assert!(character.style.all.is_empty());
    }

    #[test]
    fn test_load_character_empty_name_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name: \"\"").unwrap();

        assert!(load_character(file.path()).is_err());
    }

    #[test]
    fn test_load_character_missing_file() {
        let result = load_character(Path::new("/nonexistent/character.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_character_survives_yaml() {
        let character = super::super::build_character(&Default::default());
        let yaml = serde_yaml::to_string(&character).unwrap();
        let parsed: Character = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, character);
    }
}
