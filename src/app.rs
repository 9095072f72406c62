//! Root application component with shared context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::summary::SummaryPage;
use crate::state::session::SessionPhase;
use crate::util::popup::WatchHandle;

/// Root application component.
///
/// Provides the session phase signal and the popup watch handle as contexts
/// for the page and component tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionPhase::default());
    provide_context(session);

    // One watch handle per in-flight request; replaced on each new request
    // and cancelled on teardown so stale tasks stop touching state.
    let watch = StoredValue::new(WatchHandle::default());
    provide_context(watch);

    view! {
        <Title text="Email Summarizer"/>
        <SummaryPage/>
    }
}
