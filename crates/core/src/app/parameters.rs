use std::collections::HashMap;

/// Launch parameters forwarded to the application's `start` hook
///
/// Arguments of the form `--key=value` are split into the named map; every
/// other argument is kept in order as unnamed. The raw argument list is
/// preserved unchanged.
#[derive(Debug, Clone, Default)]
pub struct LaunchParameters {
    raw: Vec<String>,
    named: HashMap<String, String>,
    unnamed: Vec<String>,
}

impl LaunchParameters {
    /// Empty parameter set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse launch parameters from a raw argument list
    pub fn from_args(args: Vec<String>) -> Self {
        let mut named = HashMap::new();
        let mut unnamed = Vec::new();

        for arg in &args {
            match arg.strip_prefix("--").and_then(|rest| rest.split_once('=')) {
                Some((key, value)) if !key.is_empty() => {
                    named.insert(key.to_string(), value.to_string());
                }
                _ => unnamed.push(arg.clone()),
            }
        }

        Self {
            raw: args,
            named,
            unnamed,
        }
    }

    /// Raw arguments, in original order
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// Named `--key=value` arguments
    pub fn named(&self) -> &HashMap<String, String> {
        &self.named
    }

    /// Arguments that are not named
    pub fn unnamed(&self) -> &[String] {
        &self.unnamed
    }

    /// Look up a named argument
    pub fn get_named(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }
}
