/// What to do with an included resource whose type is registered but fails to decode
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IncludedPolicy {
    /// Fail the whole document
    Strict,
    /// Log a warning and leave the resource out
    Lenient,
}

impl Default for IncludedPolicy {
    fn default() -> Self { IncludedPolicy::Strict }
}

/// Decoding options, deserializable from any serde source (a config file section, env, ...)
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DecodeSettings {
    pub included: IncludedPolicy,
    /// Also run the primary resources through the included table
    pub fold_primary: bool,
}
