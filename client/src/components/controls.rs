//! Control bar: brush selection, clear, and path search.
//!
//! DESIGN
//! ======
//! Buttons only post commands into `UiState`. The `selected` class follows
//! `active_brush`, which the grid host sets from the editor's reply, so the
//! indicator always matches the brush the editor actually applies.

use leptos::prelude::*;

use grid::input::Brush;

use crate::state::ui::UiState;

#[derive(Clone, Copy)]
struct BrushDef {
    brush: Brush,
    id: &'static str,
}

const BRUSHES: &[BrushDef] = &[
    BrushDef { brush: Brush::Start, id: "startButton" },
    BrushDef { brush: Brush::End, id: "endButton" },
    BrushDef { brush: Brush::Barrier, id: "barrierButton" },
];

/// Row of brush buttons followed by Clear and Find Path.
#[component]
pub fn Controls() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let brush_buttons = BRUSHES
        .iter()
        .map(|def| {
            let def = *def;
            let is_active = move || ui.with(|u| u.active_brush == def.brush);
            let on_click = move |_ev: leptos::ev::MouseEvent| ui.update(|u| u.request_brush(def.brush));
            view! {
                <button id=def.id class:selected=is_active on:click=on_click>
                    {def.brush.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let on_clear = move |_ev: leptos::ev::MouseEvent| ui.update(UiState::request_clear);
    let on_find = move |_ev: leptos::ev::MouseEvent| ui.update(UiState::request_find_path);
    let searching = move || ui.with(|u| u.search == crate::state::ui::SearchStatus::Searching);
    let status = move || ui.with(UiState::status_text);

    view! {
        <div id="controls" class="controls">
            {brush_buttons}
            <button id="clearGridButton" on:click=on_clear>"Clear Grid"</button>
            <button id="findPathButton" class:busy=searching on:click=on_find>"Find Path"</button>
            <span class="controls__status">{status}</span>
        </div>
    }
}
