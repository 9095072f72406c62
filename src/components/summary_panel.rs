//! Summary panel rendering the backend's Markdown as HTML.

#[cfg(test)]
#[path = "summary_panel_test.rs"]
mod summary_panel_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::session::SessionPhase;

/// Render Markdown from the backend into HTML for `inner_html`.
pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Summary panel; renders nothing until the session is in `Ready`.
#[component]
pub fn SummaryPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionPhase>>();

    view! {
        {move || {
            session
                .get()
                .summary()
                .map(|text| {
                    let rendered = render_markdown_html(text);
                    view! {
                        <div class="summary-container">
                            <h2>"Your Email Summary"</h2>
                            <div class="summary-content" inner_html=rendered></div>
                        </div>
                    }
                })
        }}
    }
}
