use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use vcc_model::{Mood, ResourceError, ResponseTable};
use vibe_engine::{Pattern, SentimentLexicon, Synonyms};

use super::config::Config;
use crate::utils::join;

fn config_file_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("config.yaml"))
}

pub fn data_dir() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("com", "vibecheck", "vibecheck")
        .context("Cannot retrieve project dirs")?;
    Ok(project_dirs.data_dir().to_owned())
}

pub fn load_config() -> Result<Config> {
    let path = config_file_path()?;
    info!("Config file: {}", path.to_string_lossy());
    if !path.exists() {
        info!("Config file does not exist, creating.");
        store_default_config(&path)?;
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let config_file =
        File::open(path).with_context(|| format!("Cannot open {}", path.to_string_lossy()))?;
    Ok(serde_yaml::from_reader(config_file)?)
}

pub fn store_default_config(path: &Path) -> Result<()> {
    ensure_dir_created(path)?;
    let config_file = File::create(path)?;
    Ok(serde_yaml::to_writer(config_file, &Config::default())?)
}

/// Loads the mood -> responses table. Also returns moods rejected for having no responses.
pub fn load_responses(path: &Path) -> Result<(ResponseTable, Vec<Mood>), ResourceError> {
    info!("Responses file: {}", path.to_string_lossy());
    let content = read_resource(path)?;
    let (table, rejected) =
        ResponseTable::from_json_slice(&content).map_err(|source| ResourceError::Malformed {
            path: path.to_owned(),
            source,
        })?;
    if table.is_empty() {
        warn!("Loaded 0 moods");
    } else {
        info!("Loaded {} moods: {}", table.len(), join(table.moods(), ", "));
    }
    if !rejected.is_empty() {
        warn!("Moods without responses: {}", join(&rejected, ", "));
    }
    Ok((table, rejected))
}

pub fn load_patterns(path: &Path) -> Result<Vec<Pattern>, ResourceError> {
    let patterns: Vec<Pattern> = load_optional_json(path)?;
    debug!("Loaded {} vibe patterns", patterns.len());
    Ok(patterns)
}

pub fn load_synonyms(path: &Path) -> Result<Synonyms, ResourceError> {
    load_optional_json(path)
}

pub fn load_sentiment_lexicon(path: &Path) -> Result<SentimentLexicon, ResourceError> {
    load_optional_json(path)
}

/// Like [`load_json`], but a missing file yields the default value.
fn load_optional_json<T>(path: &Path) -> Result<T, ResourceError>
where
    T: DeserializeOwned + Default,
{
    match load_json(path) {
        Err(e) if e.is_missing() => {
            info!("{} not present, using defaults", path.to_string_lossy());
            Ok(T::default())
        }
        result => result,
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ResourceError> {
    let content = read_resource(path)?;
    serde_json::from_slice(&content).map_err(|source| ResourceError::Malformed {
        path: path.to_owned(),
        source,
    })
}

fn read_resource(path: &Path) -> Result<Vec<u8>, ResourceError> {
    fs::read(path).map_err(|source| ResourceError::Missing {
        path: path.to_owned(),
        source,
    })
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    let dir = path.parent().context("Parent directory")?;
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", &dir.to_string_lossy()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write as _;
    use tempdir::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
        let path = dir.path().join(name);
        File::create(&path)?.write_all(content.as_bytes())?;
        Ok(path)
    }

    #[test]
    fn load_valid_responses() -> Result<()> {
        let dir = TempDir::new("vcc")?;
        let path = write_file(
            &dir,
            "responses.json",
            r#"{"chill": ["it's all good", "no stress"], "hype": []}"#,
        )?;
        let (table, rejected) = load_responses(&path)?;
        assert_eq!(table.len(), 1);
        assert!(table.contains("chill"));
        assert_eq!(rejected, vec![Mood::from("hype")]);
        Ok(())
    }

    #[test]
    fn missing_responses() -> Result<()> {
        let dir = TempDir::new("vcc")?;
        let err = load_responses(&dir.path().join("responses.json")).unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.path(), dir.path().join("responses.json"));
        Ok(())
    }

    #[test]
    fn malformed_responses() -> Result<()> {
        let dir = TempDir::new("vcc")?;
        let path = write_file(&dir, "responses.json", r#"{"happy": "Yas queen!"}"#)?;
        let err = load_responses(&path).unwrap_err();
        assert!(matches!(err, ResourceError::Malformed { .. }));
        Ok(())
    }

    #[test]
    fn optional_resources_default_when_missing() -> Result<()> {
        let dir = TempDir::new("vcc")?;
        assert!(load_patterns(&dir.path().join("patterns.json"))?.is_empty());
        assert!(load_synonyms(&dir.path().join("synonyms.json"))?.is_empty());
        assert_eq!(
            load_sentiment_lexicon(&dir.path().join("sentiment-lex.json"))?,
            SentimentLexicon::default()
        );
        Ok(())
    }

    #[test]
    fn malformed_optional_resource_is_an_error() -> Result<()> {
        let dir = TempDir::new("vcc")?;
        let path = write_file(&dir, "patterns.json", r#"{"category": "sad"}"#)?;
        assert!(matches!(
            load_patterns(&path),
            Err(ResourceError::Malformed { .. })
        ));
        Ok(())
    }

    #[test]
    fn load_patterns_and_synonyms() -> Result<()> {
        let dir = TempDir::new("vcc")?;
        let patterns = write_file(
            &dir,
            "patterns.json",
            r#"[{"category": "sad", "triggers": ["sad"], "response": "hugs", "priority": 1.2}]"#,
        )?;
        let synonyms = write_file(&dir, "synonyms.json", r#"{"upset": "sad"}"#)?;
        let patterns = load_patterns(&patterns)?;
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].priority, 1.2);
        assert_eq!(
            load_synonyms(&synonyms)?.get("upset").map(String::as_str),
            Some("sad")
        );
        Ok(())
    }

    #[test]
    fn store_and_load_default_config() -> Result<()> {
        let dir = TempDir::new("vcc")?;
        let path = dir.path().join("nested").join("config.yaml");
        store_default_config(&path)?;
        assert_eq!(load_config_from(&path)?, Config::default());
        Ok(())
    }

    #[test]
    fn bundled_resources_are_valid() -> Result<()> {
        let resources = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
        let (table, rejected) = load_responses(&resources.join("responses.json"))?;
        assert!(!table.is_empty());
        assert!(rejected.is_empty());
        assert!(!load_patterns(&resources.join("patterns.json"))?.is_empty());
        assert!(!load_synonyms(&resources.join("synonyms.json"))?.is_empty());
        load_sentiment_lexicon(&resources.join("sentiment-lex.json"))?;
        Ok(())
    }
}
