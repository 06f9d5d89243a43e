//! Domain shortening and normalization.
//!
//! Turns the raw hostnames captured while browsing into the short "registrable"
//! forms used by the allow-list and proxy-config outputs.
//!
//! Key functions:
//! - `shorten_domain()` - Applies the shortening rules to one hostname
//! - `normalize()` - Shortens, deduplicates and sorts a list of hostnames
//! - `unique_sorted()` - Deduplicates and sorts hostnames without shortening

use std::collections::BTreeSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

// Character classes are spelled out as ASCII so that hostnames match the same
// way a browser-side JavaScript `\d` / `\w` would.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+\.[0-9]+\.[0-9]+\.[0-9]+)$").expect("IPv4 pattern is valid")
});
static CN_SECOND_LEVEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.*\.)?([0-9A-Za-z_]+(?:\.com|\.edu)\.cn)$").expect("CN pattern is valid")
});
static TWO_LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:.*\.)?([0-9A-Za-z_]+\.[0-9A-Za-z_]+)$").expect("two-label pattern is valid")
});

/// A shortening rule. Rules are tried in [`ShortenRule::ORDERED`] order and the
/// first one that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortenRule {
    /// Dotted IPv4 literal, kept unchanged.
    Ipv4,
    /// `word.com.cn` / `word.edu.cn`, deeper subdomains dropped.
    ChineseSecondLevel,
    /// Last two labels of a DNS name.
    TwoLabel,
}

impl ShortenRule {
    /// Rules in precedence order.
    pub const ORDERED: [ShortenRule; 3] = [
        ShortenRule::Ipv4,
        ShortenRule::ChineseSecondLevel,
        ShortenRule::TwoLabel,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            ShortenRule::Ipv4 => &IPV4_PATTERN,
            ShortenRule::ChineseSecondLevel => &CN_SECOND_LEVEL_PATTERN,
            ShortenRule::TwoLabel => &TWO_LABEL_PATTERN,
        }
    }

    /// Returns the captured short form if this rule matches `hostname`.
    fn extract(self, hostname: &str) -> Option<String> {
        self.pattern()
            .captures(hostname)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Outcome of shortening a single hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortened {
    /// The hostname matched `rule` and shortens to `domain`.
    Matched {
        /// Rule that produced the match.
        rule: ShortenRule,
        /// Shortened domain.
        domain: String,
    },
    /// No rule matched (single-label hosts, hyphenated labels, IPv6, ...).
    NoMatch,
}

impl Shortened {
    /// Consumes the outcome, returning the shortened domain if there was one.
    pub fn into_domain(self) -> Option<String> {
        match self {
            Shortened::Matched { domain, .. } => Some(domain),
            Shortened::NoMatch => None,
        }
    }
}

/// Applies the shortening rules to one hostname.
///
/// # Examples
///
/// ```
/// use domain_crawler::domain::{shorten_domain, Shortened, ShortenRule};
///
/// assert_eq!(
///     shorten_domain("www.example.com"),
///     Shortened::Matched { rule: ShortenRule::TwoLabel, domain: "example.com".to_string() }
/// );
/// assert_eq!(shorten_domain("localhost"), Shortened::NoMatch);
/// ```
pub fn shorten_domain(hostname: &str) -> Shortened {
    ShortenRule::ORDERED
        .iter()
        .find_map(|&rule| {
            rule.extract(hostname)
                .map(|domain| Shortened::Matched { rule, domain })
        })
        .unwrap_or(Shortened::NoMatch)
}

/// Shortens every hostname, drops the ones no rule matches, then deduplicates
/// and sorts the result.
///
/// Unmatched hostnames are dropped without error.
pub fn normalize<I, S>(hostnames: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let shortened = hostnames.into_iter().filter_map(|hostname| {
        let hostname = hostname.as_ref();
        match shorten_domain(hostname) {
            Shortened::Matched { domain, .. } => Some(domain),
            Shortened::NoMatch => {
                debug!("Dropping hostname with no short form: {hostname}");
                None
            }
        }
    });
    shortened
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Deduplicates and sorts hostnames as-is.
pub fn unique_sorted<I, S>(hostnames: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    hostnames
        .into_iter()
        .map(Into::into)
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
