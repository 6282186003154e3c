use serde::Deserialize;

/// Target-language knobs for the emitted Go source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name used in the `package` clause
    pub package_name: String,
    /// Generic result slot of `Accept` and every visitor method
    pub result_type: String,
    /// Error slot used by tagged families
    pub tagged_error_type: String,
    /// Error slot used by untagged families
    pub untagged_error_type: String,
    /// Extension of each output file, without the leading dot
    pub file_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_name: "main".to_string(),
            result_type: "interface{}".to_string(),
            tagged_error_type: "*RuntimeError".to_string(),
            untagged_error_type: "error".to_string(),
            file_extension: "go".to_string(),
        }
    }
}
