//! Output file generation.
//!
//! Each crawl produces four text files named after the input file stem:
//! - `output-<name>-all.txt` - every unique hostname observed
//! - `output-<name>-shorten.txt` - the normalized domain list
//! - `output-<name>-shorten-squid.txt` - normalized domains with a leading `.`
//! - `output-<name>-proxy-pac.txt` - the rendered proxy auto-config script
//!
//! A failed write is logged and reported but does not stop the other writes.

mod pac;

use std::path::{Path, PathBuf};

use log::{error, info};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::error_handling::OutputError;

pub use pac::{load_template, render_pac, DEFAULT_PAC_TEMPLATE};

/// The files written at the end of a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum OutputKind {
    /// Every unique hostname, before shortening.
    All,
    /// Normalized domains.
    Shorten,
    /// Normalized domains in squid `dstdomain` form.
    ShortenSquid,
    /// Proxy auto-config script.
    ProxyPac,
}

impl OutputKind {
    /// File name suffix after `output-<name>-`.
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputKind::All => "all",
            OutputKind::Shorten => "shorten",
            OutputKind::ShortenSquid => "shorten-squid",
            OutputKind::ProxyPac => "proxy-pac",
        }
    }

    /// Output file name for the given input file stem.
    pub fn file_name(&self, stem: &str) -> String {
        format!("output-{}-{}.txt", stem, self.suffix())
    }
}

/// Everything needed to produce the output files.
#[derive(Debug, Clone)]
pub struct OutputPlan<'a> {
    /// Directory to write into (created if missing).
    pub dir: &'a Path,
    /// Input file stem used in the file names.
    pub stem: &'a str,
    /// Unique, sorted hostnames.
    pub hostnames: &'a [String],
    /// Normalized domains.
    pub domains: &'a [String],
    /// PAC template file (the built-in template is used if it does not exist).
    pub pac_template: &'a Path,
    /// Proxy directive for the PAC template.
    pub proxy: &'a str,
}

/// Result of writing the output files.
#[derive(Debug, Default)]
pub struct OutputSummary {
    /// Files written successfully.
    pub written: Vec<PathBuf>,
    /// Files that could not be produced.
    pub failed: Vec<(OutputKind, OutputError)>,
}

impl OutputSummary {
    /// Whether every output file was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Renders the content of one output file.
///
/// Values are joined with `\n` without a trailing newline. The PAC template is
/// only read when the PAC output is rendered.
pub async fn render_output(
    kind: OutputKind,
    plan: &OutputPlan<'_>,
) -> Result<String, OutputError> {
    match kind {
        OutputKind::All => Ok(plan.hostnames.join("\n")),
        OutputKind::Shorten => Ok(plan.domains.join("\n")),
        OutputKind::ShortenSquid => Ok(plan
            .domains
            .iter()
            .map(|domain| format!(".{domain}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputKind::ProxyPac => {
            let template = load_template(plan.pac_template).await?;
            render_pac(&template, plan.domains, plan.proxy)
        }
    }
}

async fn write_output(path: &Path, content: &str) -> Result<(), OutputError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes every output file, continuing past individual failures.
pub async fn write_outputs(plan: &OutputPlan<'_>) -> OutputSummary {
    let mut summary = OutputSummary::default();

    if let Err(source) = tokio::fs::create_dir_all(plan.dir).await {
        error!(
            "Failed to create output directory {}: {}",
            plan.dir.display(),
            source
        );
    }

    for kind in OutputKind::iter() {
        let path = plan.dir.join(kind.file_name(plan.stem));
        let result = match render_output(kind, plan).await {
            Ok(content) => write_output(&path, &content).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                info!("write {} finished", path.display());
                summary.written.push(path);
            }
            Err(e) => {
                error!("write {} failed: {}", path.display(), e);
                summary.failed.push((kind, e));
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_file_names() {
        assert_eq!(OutputKind::All.file_name("data"), "output-data-all.txt");
        assert_eq!(
            OutputKind::Shorten.file_name("data"),
            "output-data-shorten.txt"
        );
        assert_eq!(
            OutputKind::ShortenSquid.file_name("data"),
            "output-data-shorten-squid.txt"
        );
        assert_eq!(
            OutputKind::ProxyPac.file_name("data"),
            "output-data-proxy-pac.txt"
        );
    }

    #[tokio::test]
    async fn test_render_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("proxy.pac.mustache");
        std::fs::write(&template, "{{#domains}}{{.}} {{/domains}}").unwrap();
        let hostnames = strings(&["a.example.com", "b.example.com", "localhost"]);
        let domains = strings(&["example.com", "ynu.edu.cn"]);
        let plan = OutputPlan {
            dir: Path::new("."),
            stem: "data",
            hostnames: &hostnames,
            domains: &domains,
            pac_template: &template,
            proxy: "DIRECT",
        };

        assert_eq!(
            render_output(OutputKind::All, &plan).await.unwrap(),
            "a.example.com\nb.example.com\nlocalhost"
        );
        assert_eq!(
            render_output(OutputKind::Shorten, &plan).await.unwrap(),
            "example.com\nynu.edu.cn"
        );
        assert_eq!(
            render_output(OutputKind::ShortenSquid, &plan).await.unwrap(),
            ".example.com\n.ynu.edu.cn"
        );
        assert_eq!(
            render_output(OutputKind::ProxyPac, &plan).await.unwrap(),
            "example.com ynu.edu.cn "
        );
    }

    #[tokio::test]
    async fn test_render_empty_lists() {
        let plan = OutputPlan {
            dir: Path::new("."),
            stem: "data",
            hostnames: &[],
            domains: &[],
            pac_template: Path::new("proxy.pac.mustache"),
            proxy: "DIRECT",
        };
        assert_eq!(render_output(OutputKind::All, &plan).await.unwrap(), "");
        assert_eq!(render_output(OutputKind::ShortenSquid, &plan).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_outputs_creates_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested");
        let missing_template = dir.path().join("missing.mustache");
        let hostnames = strings(&["www.example.com"]);
        let domains = strings(&["example.com"]);
        let plan = OutputPlan {
            dir: &out_dir,
            stem: "sites",
            hostnames: &hostnames,
            domains: &domains,
            pac_template: &missing_template,
            proxy: "PROXY 127.0.0.1:3128",
        };

        let summary = write_outputs(&plan).await;
        assert!(summary.is_complete());
        assert_eq!(summary.written.len(), 4);
        assert_eq!(
            std::fs::read_to_string(out_dir.join("output-sites-shorten-squid.txt")).unwrap(),
            ".example.com"
        );
        let pac = std::fs::read_to_string(out_dir.join("output-sites-proxy-pac.txt")).unwrap();
        assert!(pac.contains("\"example.com\","));
    }

    #[tokio::test]
    async fn test_write_outputs_bad_template_only_fails_pac() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("broken.mustache");
        std::fs::write(&template, "{{#domains}}").unwrap();
        let hostnames = strings(&["www.example.com"]);
        let domains = strings(&["example.com"]);
        let plan = OutputPlan {
            dir: dir.path(),
            stem: "data",
            hostnames: &hostnames,
            domains: &domains,
            pac_template: &template,
            proxy: "DIRECT",
        };

        let summary = write_outputs(&plan).await;
        assert_eq!(summary.written.len(), 3);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, OutputKind::ProxyPac);
        assert!(!dir.path().join("output-data-proxy-pac.txt").exists());
    }
}
