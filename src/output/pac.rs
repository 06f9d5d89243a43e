//! Proxy auto-config rendering.

use std::path::Path;

use log::warn;
use serde::Serialize;

use crate::error_handling::OutputError;

/// Template used when no template file is found next to the input.
pub const DEFAULT_PAC_TEMPLATE: &str = include_str!("../../templates/proxy.pac.mustache");

/// Variables available to the PAC template.
#[derive(Debug, Serialize)]
struct PacContext<'a> {
    /// Normalized domains, iterate with `{{#domains}}{{.}}{{/domains}}`.
    domains: &'a [String],
    /// Proxy directive, e.g. `PROXY 127.0.0.1:3128`.
    proxy: &'a str,
}

/// Reads the PAC template, falling back to the built-in one if `path` does
/// not exist.
///
/// # Errors
///
/// Returns `OutputError::TemplateRead` if the file exists but cannot be read.
pub async fn load_template(path: &Path) -> Result<String, OutputError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        warn!(
            "PAC template {} not found, using the built-in template",
            path.display()
        );
        return Ok(DEFAULT_PAC_TEMPLATE.to_string());
    }
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| OutputError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Renders a Mustache PAC template with the normalized domain list.
///
/// # Errors
///
/// Returns `OutputError::Template` if the template does not compile or render.
pub fn render_pac(template: &str, domains: &[String], proxy: &str) -> Result<String, OutputError> {
    let compiled = mustache::compile_str(template)?;
    let rendered = compiled.render_to_string(&PacContext { domains, proxy })?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_pac_custom_template() {
        let rendered = render_pac(
            "{{#domains}}{{.}};{{/domains}}",
            &domains(&["a.com", "b.edu.cn"]),
            "PROXY p:1",
        )
        .unwrap();
        assert_eq!(rendered, "a.com;b.edu.cn;");
    }

    #[test]
    fn test_render_pac_proxy_variable() {
        let rendered = render_pac("return \"{{{proxy}}}\";", &[], "PROXY 10.0.0.1:8080").unwrap();
        assert_eq!(rendered, "return \"PROXY 10.0.0.1:8080\";");
    }

    #[test]
    fn test_render_default_template() {
        let rendered = render_pac(
            DEFAULT_PAC_TEMPLATE,
            &domains(&["example.com", "ynu.edu.cn"]),
            "PROXY 127.0.0.1:3128",
        )
        .unwrap();
        assert!(rendered.contains("\"example.com\","));
        assert!(rendered.contains("\"ynu.edu.cn\","));
        assert!(rendered.contains("var proxy = \"PROXY 127.0.0.1:3128\";"));
        assert!(rendered.contains("function FindProxyForURL(url, host)"));
    }

    #[test]
    fn test_render_default_template_empty_list() {
        let rendered = render_pac(DEFAULT_PAC_TEMPLATE, &[], "PROXY 127.0.0.1:3128").unwrap();
        assert!(rendered.contains("var domains = ["));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_render_pac_unclosed_section_fails() {
        assert!(render_pac("{{#domains}}{{.}}", &domains(&["a.com"]), "DIRECT").is_err());
    }

    #[tokio::test]
    async fn test_load_template_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let template = load_template(&dir.path().join("missing.mustache"))
            .await
            .unwrap();
        assert_eq!(template, DEFAULT_PAC_TEMPLATE);
    }

    #[tokio::test]
    async fn test_load_template_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proxy.pac.mustache");
        std::fs::write(&path, "{{#domains}}{{.}}{{/domains}}").unwrap();
        assert_eq!(
            load_template(&path).await.unwrap(),
            "{{#domains}}{{.}}{{/domains}}"
        );
    }
}
