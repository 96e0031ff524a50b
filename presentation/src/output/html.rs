//! HTML report renderer
//!
//! Produces a self-contained dark-theme page: the prompt, one card per
//! enabled primary provider and an optional comparison panel. Response
//! bodies are rendered as markdown; raw HTML inside them is escaped.

use chrono::Local;
use pulldown_cmark::{Event, Options, Parser, html};
use std::fmt::Write;
use suite_application::ReportRenderer;
use suite_domain::{ComparisonResult, PrimaryProvider, ProviderResult, RoundRecord};

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: system-ui, -apple-system, sans-serif; background: #0f0f0f; color: #e0e0e0; padding: 24px; }
.prompt { background: #1a1a2e; border: 1px solid #333; border-radius: 8px; padding: 16px; margin-bottom: 24px; white-space: pre-wrap; font-size: 14px; }
.prompt-label { color: #888; font-size: 12px; margin-bottom: 6px; text-transform: uppercase; letter-spacing: 1px; }
.ts { color: #666; font-size: 12px; margin-bottom: 16px; }
.grid { display: grid; gap: 16px; margin-bottom: 24px; }
.col { background: #1a1a1a; border: 1px solid #2a2a2a; border-radius: 8px; padding: 16px; overflow: auto; }
.col h2 { font-size: 16px; margin-bottom: 8px; color: #c9a0ff; }
.meta { font-size: 11px; color: #777; margin-bottom: 12px; line-height: 1.6; }
.md-body { font-size: 13px; line-height: 1.6; }
.md-body h1, .md-body h2, .md-body h3, .md-body h4 { color: #c9a0ff; margin: 12px 0 6px 0; }
.md-body h1 { font-size: 18px; } .md-body h2 { font-size: 16px; } .md-body h3 { font-size: 14px; }
.md-body p { margin: 8px 0; }
.md-body ul, .md-body ol { margin: 8px 0 8px 20px; }
.md-body li { margin: 4px 0; }
.md-body strong { color: #f0f0f0; }
.md-body em { color: #ccc; }
.md-body a { color: #7ab8ff; text-decoration: none; }
.md-body a:hover { text-decoration: underline; }
.md-body table { border-collapse: collapse; width: 100%; margin: 12px 0; font-size: 12px; }
.md-body th { background: #2a2a3e; color: #c9a0ff; padding: 8px; text-align: left; border: 1px solid #444; }
.md-body td { padding: 6px 8px; border: 1px solid #333; vertical-align: top; }
.md-body tr:nth-child(even) { background: #1e1e2e; }
.md-body pre { background: #161622; border: 1px solid #333; border-radius: 4px; padding: 10px; overflow-x: auto; margin: 8px 0; }
.md-body code { background: #1e1e2e; padding: 2px 5px; border-radius: 3px; font-size: 12px; }
.md-body pre code { background: none; padding: 0; }
.md-body blockquote { border-left: 3px solid #555; padding-left: 12px; color: #999; margin: 8px 0; }
.md-body hr { border: none; border-top: 1px solid #333; margin: 16px 0; }
.error { color: #ff6b6b; }
.sources { margin-top: 12px; font-size: 12px; border-top: 1px solid #333; padding-top: 8px; }
.sources ul { margin: 4px 0 0 16px; }
.sources li { margin-bottom: 4px; }
.sources a { color: #7ab8ff; text-decoration: none; }
.sources a:hover { text-decoration: underline; }
.comparison { background: #1a1a2e; border: 1px solid #3a3a5e; border-radius: 8px; padding: 20px; }
.comparison h2 { font-size: 16px; margin-bottom: 8px; color: #ffa657; }
"#;

/// Escape text for element content
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape(text).replace('"', "&quot;")
}

/// Render a model answer as HTML
///
/// Tables and fenced code are enabled and single newlines become `<br />`.
/// Embedded HTML is shown as text.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Renders rounds as standalone HTML pages
#[derive(Debug, Clone, Default)]
pub struct HtmlReportRenderer;

impl HtmlReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn card(provider: PrimaryProvider, result: &ProviderResult) -> String {
        let mut card = format!("<div class=\"col\"><h2>{}</h2>", provider.label());

        match result {
            ProviderResult::Success(s) => {
                let _ = write!(
                    card,
                    "<div class=\"meta\">Model: {} | In: {} tok | Out: {} tok | Stop: {} | Latency: {}s</div>",
                    escape(&s.model),
                    s.input_tokens,
                    s.output_tokens,
                    escape(s.stop_reason.as_deref().unwrap_or("n/a")),
                    s.latency_seconds
                );
                let _ = write!(
                    card,
                    "<div class=\"md-body\">{}</div>",
                    render_markdown(&s.response_text)
                );

                let links: String = s
                    .search_results
                    .iter()
                    .filter_map(|activity| activity.as_source())
                    .map(|(title, url)| {
                        format!(
                            "<li><a href=\"{}\">{}</a></li>",
                            escape_attr(url),
                            escape(title)
                        )
                    })
                    .collect();
                if !links.is_empty() {
                    let _ = write!(
                        card,
                        "<div class=\"sources\"><strong>Sources:</strong><ul>{}</ul></div>",
                        links
                    );
                }
            }
            ProviderResult::Failure(f) => {
                let _ = write!(card, "<p class=\"error\">{}</p>", escape(&f.error));
            }
        }

        card.push_str("</div>");
        card
    }

    fn comparison_panel(comparison: &ComparisonResult) -> String {
        match comparison {
            ComparisonResult::Success(c) => {
                let eval = c
                    .eval_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "n/a".to_string());
                format!(
                    "<div class=\"comparison\"><h2>Comparison — {model}</h2>\
<div class=\"meta\">Model: {model} | Eval tokens: {eval} | Latency: {latency}s</div>\
<div class=\"md-body\">{body}</div></div>",
                    model = escape(&c.model),
                    eval = eval,
                    latency = c.latency_seconds,
                    body = render_markdown(&c.response_text)
                )
            }
            ComparisonResult::Failure(f) => format!(
                "<div class=\"comparison\"><h2>Comparison (Ollama)</h2><p class=\"error\">{}</p></div>",
                escape(&f.error)
            ),
        }
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(&self, record: &RoundRecord) -> String {
        let timestamp = record
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();

        let cards: String = record
            .results
            .iter()
            .map(|(provider, result)| Self::card(*provider, result))
            .collect();
        let columns = record.results.len().max(1);

        let comparison = record
            .comparison
            .as_ref()
            .map(Self::comparison_panel)
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Model Suite — {timestamp}</title>
<style>{style}.grid {{ grid-template-columns: repeat({columns}, 1fr); }}
</style>
</head>
<body>
<div class="ts">{timestamp}</div>
<div class="prompt-label">Prompt</div>
<div class="prompt">{prompt}</div>
<div class="grid">
{cards}
</div>
{comparison}
</body>
</html>
"#,
            timestamp = timestamp,
            style = STYLE,
            columns = columns,
            prompt = escape(record.prompt.content()),
            cards = cards,
            comparison = comparison,
        )
    }
}
