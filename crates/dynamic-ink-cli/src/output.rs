//! Output formatting for command results.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Serialization format for printed results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Serializes `value` in the given format, always ending with a newline.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Renders a list of keys, one per line.
pub fn render_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([("ink", "#242424"), ("ink-bold", "#000000")])
    }

    #[test]
    fn test_render_json_is_parseable() {
        let out = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["ink-bold"], "#000000");
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_yaml_is_parseable() {
        let out = render(&sample(), OutputFormat::Yaml).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed["ink"], serde_yaml::Value::from("#242424"));
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(render_lines(["a", "b"]), "a\nb\n");
        assert_eq!(render_lines(Vec::<&str>::new()), "");
    }
}
