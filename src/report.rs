//! Route report rendering.
//!
//! Turns introspected [`RouteEntry`] sequences into the printable report:
//! fixed-width method column, optional ANSI colour per verb, optional title
//! line, and structured (method, path) deduplication in first-occurrence
//! order. Options are threaded in explicitly; there is no process-wide
//! configuration.

use crate::introspect::RouteEntry;
use http::Method;
use std::collections::HashSet;

/// Method column width that keeps the common verbs aligned.
pub const METHOD_COL_WIDTH: usize = 7;

/// Line substituted for a mount with no verb bindings at all, e.g. one that
/// only serves static files through the host.
pub const STATIC_ONLY_PLACEHOLDER: &str = "*      /   [static-only]";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const GREY: &str = "\x1b[90m";
const MAGENTA: &str = "\x1b[35m";
const RESET: &str = "\x1b[0m";

/// Rendering options, passed to [`RouteReporter::new`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Style verbs (and the title) with ANSI colour codes.
    pub colorize: bool,
    /// Optional title line prepended to the report.
    pub title: Option<String>,
    /// Visible width reserved for the method column.
    pub method_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            colorize: false,
            title: None,
            method_width: METHOD_COL_WIDTH,
        }
    }
}

/// Renders route entries into the final report string.
pub struct RouteReporter {
    options: ReportOptions,
}

impl RouteReporter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    fn color_code(method: &str) -> Option<&'static str> {
        match method {
            "POST" => Some(YELLOW),
            "GET" => Some(GREEN),
            "PUT" => Some(BLUE),
            "DELETE" => Some(RED),
            "PATCH" => Some(GREY),
            // Other concrete verbs and the wildcard marker pass through
            // unstyled.
            _ => None,
        }
    }

    fn styled_method(&self, method: &str) -> String {
        match Self::color_code(method) {
            Some(code) if self.options.colorize => format!("{code}{method}{RESET}"),
            _ => method.to_string(),
        }
    }

    /// Render one entry as `method + padding + path`.
    ///
    /// Padding is computed from the verb's visible length, so colour codes
    /// never shift the path column.
    pub fn render_line(&self, entry: &RouteEntry) -> String {
        let method = entry.method_str();
        let pad = self
            .options
            .method_width
            .saturating_sub(method.len())
            .max(1);
        format!(
            "{}{}{}",
            self.styled_method(method),
            " ".repeat(pad),
            entry.path
        )
    }

    /// Render a flat entry sequence: dedup, then join, then prepend the
    /// title if configured. An empty sequence yields an empty body; callers
    /// aggregating whole mounts use [`RouteReporter::render_groups`], which
    /// substitutes the static-only placeholder instead.
    pub fn render(&self, entries: &[RouteEntry]) -> String {
        let mut seen = HashSet::new();
        let lines: Vec<String> = entries
            .iter()
            .filter(|e| seen.insert(dedup_key(e)))
            .map(|e| self.render_line(e))
            .collect();
        self.finish(lines)
    }

    /// Render per-mount entry groups in discovery order.
    ///
    /// Deduplication is global across groups; a group with no entries at all
    /// contributes the [`STATIC_ONLY_PLACEHOLDER`] line instead of vanishing.
    pub fn render_groups(&self, groups: &[Vec<RouteEntry>]) -> String {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for group in groups {
            if group.is_empty() {
                lines.push(STATIC_ONLY_PLACEHOLDER.to_string());
                continue;
            }
            for entry in group {
                if seen.insert(dedup_key(entry)) {
                    lines.push(self.render_line(entry));
                }
            }
        }
        self.finish(lines)
    }

    fn finish(&self, lines: Vec<String>) -> String {
        let body = lines.join("\n");
        match &self.options.title {
            Some(title) => {
                let styled = if self.options.colorize {
                    format!("{MAGENTA}{title}{RESET}")
                } else {
                    title.clone()
                };
                format!("{styled}\n{body}")
            }
            None => body,
        }
    }
}

impl Default for RouteReporter {
    fn default() -> Self {
        Self::new(ReportOptions::default())
    }
}

fn dedup_key(entry: &RouteEntry) -> (Option<Method>, String) {
    (entry.method.clone(), entry.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(method: Option<Method>, path: &str) -> RouteEntry {
        RouteEntry {
            method,
            path: path.to_string(),
        }
    }

    #[test]
    fn test_method_columns_align() {
        let reporter = RouteReporter::default();
        let get = reporter.render_line(&entry(Some(Method::GET), "/a"));
        let delete = reporter.render_line(&entry(Some(Method::DELETE), "/b"));
        assert_eq!(get.find("/a"), delete.find("/b"));
        assert_eq!(get, "GET    /a");
        assert_eq!(delete, "DELETE /b");
    }

    #[test]
    fn test_long_verb_still_gets_one_space() {
        let reporter = RouteReporter::default();
        let line = reporter.render_line(&entry(Some(Method::CONNECT), "/c"));
        assert_eq!(line, "CONNECT /c");
    }

    #[test]
    fn test_colorize_does_not_shift_path_column() {
        let plain = RouteReporter::default();
        let colored = RouteReporter::new(ReportOptions {
            colorize: true,
            ..ReportOptions::default()
        });
        let e = entry(Some(Method::GET), "/a");
        let plain_line = plain.render_line(&e);
        let colored_line = colored.render_line(&e);
        assert!(colored_line.starts_with(GREEN));
        assert!(colored_line.contains("GET"));
        // Strip the styling and the columns must match exactly.
        let stripped = colored_line.replace(GREEN, "").replace(RESET, "");
        assert_eq!(stripped, plain_line);
    }

    #[test]
    fn test_unmapped_verbs_render_unstyled() {
        let reporter = RouteReporter::new(ReportOptions {
            colorize: true,
            ..ReportOptions::default()
        });
        assert_eq!(reporter.render_line(&entry(None, "/")), "*      /");
        assert_eq!(
            reporter.render_line(&entry(Some(Method::OPTIONS), "/")),
            "OPTIONS /"
        );
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let reporter = RouteReporter::default();
        let report = reporter.render(&[
            entry(Some(Method::GET), "/"),
            entry(Some(Method::POST), "/"),
            entry(Some(Method::GET), "/"),
        ]);
        assert_eq!(report, "GET    /\nPOST   /");
    }

    #[test]
    fn test_distinct_methods_same_path_both_survive() {
        let reporter = RouteReporter::default();
        let report = reporter.render(&[
            entry(Some(Method::GET), "/x"),
            entry(Some(Method::DELETE), "/x"),
        ]);
        assert_eq!(report.lines().count(), 2);
    }

    #[test]
    fn test_title_prepended() {
        let reporter = RouteReporter::new(ReportOptions {
            title: Some("routes".into()),
            ..ReportOptions::default()
        });
        let report = reporter.render(&[entry(Some(Method::GET), "/")]);
        assert_eq!(report, "routes\nGET    /");
    }

    #[test]
    fn test_title_styled_when_colorized() {
        let reporter = RouteReporter::new(ReportOptions {
            colorize: true,
            title: Some("routes".into()),
            ..ReportOptions::default()
        });
        let report = reporter.render(&[]);
        assert_eq!(report, format!("{MAGENTA}routes{RESET}\n"));
    }

    #[test]
    fn test_render_empty_is_empty() {
        let reporter = RouteReporter::default();
        assert_eq!(reporter.render(&[]), "");
    }

    #[test]
    fn test_groups_substitute_placeholder() {
        let reporter = RouteReporter::default();
        let groups = vec![
            vec![entry(Some(Method::GET), "/api/auth")],
            vec![],
            vec![entry(Some(Method::GET), "/charts")],
        ];
        let report = reporter.render_groups(&groups);
        assert_eq!(
            report,
            format!("GET    /api/auth\n{STATIC_ONLY_PLACEHOLDER}\nGET    /charts")
        );
    }

    #[test]
    fn test_groups_dedup_across_mounts() {
        let reporter = RouteReporter::default();
        let groups = vec![
            vec![entry(Some(Method::GET), "/api/auth")],
            vec![entry(Some(Method::GET), "/api/auth")],
        ];
        assert_eq!(reporter.render_groups(&groups), "GET    /api/auth");
    }

    #[test]
    fn test_placeholder_aligns_with_body() {
        // The placeholder's path column starts where rendered paths start.
        let reporter = RouteReporter::default();
        let line = reporter.render_line(&entry(Some(Method::GET), "/"));
        assert_eq!(
            STATIC_ONLY_PLACEHOLDER.find('/'),
            line.find('/')
        );
    }
}
