//! Trigger button for generating a summary.

#[cfg(test)]
#[path = "summary_button_test.rs"]
mod summary_button_test;

use leptos::prelude::*;

use crate::state::session::SessionPhase;

/// Button label by phase: loading text > authenticating text > default.
pub(crate) fn button_label(phase: &SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Loading => "Generating Summary...",
        SessionPhase::Authenticating => "Authenticating with Google...",
        _ => "Get Email Summary",
    }
}

/// The single trigger control. Disabled while a request or auth round is in
/// flight; the click callback is owned by the page.
#[component]
pub fn SummaryButton(on_generate: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionPhase>>();

    view! {
        <button
            class="summary-button"
            disabled=move || session.get().is_busy()
            on:click=move |_| on_generate.run(())
        >
            {move || button_label(&session.get())}
        </button>
    }
}
