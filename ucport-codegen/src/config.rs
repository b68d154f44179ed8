// Configuration types for ucport, deserialized from ucport.config.toml.

use std::path::Path;

use serde::Deserialize;

use crate::error::PipelineError;

/// Top-level config file.
#[derive(Debug, Deserialize)]
pub struct UcportConfig {
    pub convert: ConvertConfig,
}

#[derive(Debug, Deserialize)]
pub struct ConvertConfig {
    /// SDK headers to convert, relative to the config file.
    pub input: Vec<String>,
    /// Output root, relative to the config file. Class files land in
    /// `<output>/<Package>/Classes/<ClassFile>.uc`.
    pub output: String,
    #[serde(default)]
    pub skip: SkipList,
}

#[derive(Debug, Default, Deserialize)]
pub struct SkipList {
    /// Class files that are not written at all.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Variable skip list in "ClassFile.Variable" format.
    #[serde(default)]
    pub variables: Vec<String>,
}

impl SkipList {
    /// Parse variable skip entries into (class file, variable) tuples.
    pub fn variable_tuples(&self) -> Vec<(String, String)> {
        self.variables
            .iter()
            .filter_map(|entry| {
                let (class, var) = entry.split_once('.')?;
                Some((class.to_string(), var.to_string()))
            })
            .collect()
    }
}

/// Read and parse a config file.
pub fn load(path: &Path) -> Result<UcportConfig, PipelineError> {
    let text = std::fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| PipelineError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() {
        let config: UcportConfig = toml::from_str(
            r#"
            [convert]
            input = ["sdk/Core_classes.h", "sdk/Engine_classes.h"]
            output = "out"

            [convert.skip]
            classes = ["Object"]
            variables = ["Actor.Owner", "malformed"]
            "#,
        )
        .unwrap();
        assert_eq!(config.convert.input.len(), 2);
        assert_eq!(config.convert.output, "out");
        assert_eq!(config.convert.skip.classes, ["Object"]);
        assert_eq!(
            config.convert.skip.variable_tuples(),
            [("Actor".to_string(), "Owner".to_string())]
        );
    }

    #[test]
    fn skip_section_is_optional() {
        let config: UcportConfig =
            toml::from_str("[convert]\ninput = []\noutput = \"out\"\n").unwrap();
        assert!(config.convert.skip.classes.is_empty());
        assert!(config.convert.skip.variables.is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, PipelineError::Read { .. }));
    }
}
