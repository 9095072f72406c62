//! The single summary screen: header, trigger button, error and summary panels.

use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::summary_button::SummaryButton;
use crate::components::summary_panel::SummaryPanel;
use crate::state::session::SessionPhase;
use crate::util::popup::WatchHandle;
use crate::util::session_actions;

#[component]
pub fn SummaryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionPhase>>();
    let watch = expect_context::<StoredValue<WatchHandle>>();

    // Stop any pending fetch/poll task when the page goes away.
    on_cleanup(move || watch.get_value().cancel());

    let on_generate = Callback::new(move |()| {
        session_actions::request_summary(session, watch);
    });

    view! {
        <div class="app">
            <header class="app__header">
                <h1>"Email Summarizer"</h1>
                <p>"Click the button below to get summaries of the past 24 hours of emails"</p>
            </header>

            <main class="app__main">
                <SummaryButton on_generate=on_generate/>
                <ErrorPanel/>
                <SummaryPanel/>
            </main>
        </div>
    }
}
