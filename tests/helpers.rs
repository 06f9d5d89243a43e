// Shared test helpers: a scripted page visitor and scratch input files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain_crawler::error_handling::ErrorType;
use domain_crawler::{Config, PageVisitor, VisitReport};

/// Page visitor that replays canned reports instead of driving a browser.
#[derive(Default)]
pub struct ScriptedVisitor {
    pages: HashMap<String, VisitReport>,
    pub visited: Vec<String>,
    pub closed: bool,
}

impl ScriptedVisitor {
    /// Registers a page that loads and requests `hostnames`.
    pub fn page(mut self, url: &str, hostnames: &[&str]) -> Self {
        self.pages.insert(
            url.to_string(),
            VisitReport {
                hostnames: hostnames.iter().map(|h| h.to_string()).collect(),
                failure: None,
            },
        );
        self
    }

    /// Registers a page whose navigation fails with `kind`.
    #[allow(dead_code)] // Used by some test files
    pub fn failing_page(mut self, url: &str, kind: ErrorType) -> Self {
        self.pages
            .insert(url.to_string(), VisitReport::failed(kind, "net::ERR_FAILED"));
        self
    }
}

#[async_trait]
impl PageVisitor for ScriptedVisitor {
    async fn visit(&mut self, url: &str) -> VisitReport {
        self.visited.push(url.to_string());
        self.pages.get(url).cloned().unwrap_or_default()
    }

    async fn close(&mut self) -> anyhow::Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// Writes `contents` as `<dir>/<name>` and returns a config that reads it and
/// writes outputs to `<dir>/out` with the built-in PAC template.
pub fn config_with_input(dir: &Path, name: &str, contents: &str) -> Config {
    let input = dir.join(name);
    std::fs::write(&input, contents).expect("Failed to write input file");
    Config {
        input,
        output_dir: dir.join("out"),
        template: dir.join("no-such-template.mustache"),
        ..Default::default()
    }
}

/// Reads an output file written by a crawl.
#[allow(dead_code)] // Used by some test files
pub fn read_output(config: &Config, suffix: &str) -> String {
    let path: PathBuf = config
        .output_dir
        .join(format!("output-{}-{}.txt", config.input_stem(), suffix));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
