//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::{controls::Controls, grid_host::GridHost};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the shared UI state, then lays out the controls above the grid.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <main class="editor">
            <h1>"Path Finder"</h1>
            <Controls/>
            <GridHost/>
        </main>
    }
}
