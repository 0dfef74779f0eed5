//! Bridge component between Leptos state and the imperative `grid::Editor`.
//!
//! ARCHITECTURE
//! ============
//! The grid crate owns cell state and repaint decisions. This host mounts the
//! SVG renderer, maps pointer events to cells, turns `UiState` commands into
//! editor calls, and runs the search round trip and its animation timers.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use grid::animation::AnimationTicket;
#[cfg(feature = "csr")]
use grid::engine::{Action, Editor, SearchOutcome};
#[cfg(feature = "csr")]
use grid::error::EditorError;
#[cfg(feature = "csr")]
use grid::input::Button;
#[cfg(feature = "csr")]
use grid::svg::SvgRenderer;
#[cfg(feature = "csr")]
use grid::wire::PathResponse;

#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::state::ui::SearchStatus;
use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::util::animation::PathAnimator;
#[cfg(feature = "csr")]
use crate::util::{config, notify, pointer};

#[cfg(feature = "csr")]
type SharedEditor = Rc<RefCell<Option<Editor<SvgRenderer>>>>;
#[cfg(feature = "csr")]
type SharedAnimator = Rc<RefCell<PathAnimator<Timeout>>>;

/// Carry out the actions only the host can perform.
#[cfg(feature = "csr")]
fn process_actions(actions: Vec<Action>, ui: RwSignal<UiState>, animator: &SharedAnimator) {
    for action in actions {
        match action {
            Action::BrushChanged(brush) => ui.update(|u| u.active_brush = brush),
            Action::CancelAnimation => animator.borrow_mut().cancel(),
            Action::Paint { .. } | Action::ResetAll => {}
        }
    }
}

/// Run `f` against the mounted editor and forward its host actions.
#[cfg(feature = "csr")]
fn with_editor<F>(editor: &SharedEditor, ui: RwSignal<UiState>, animator: &SharedAnimator, f: F)
where
    F: FnOnce(&mut Editor<SvgRenderer>) -> Vec<Action>,
{
    let actions = editor.borrow_mut().as_mut().map(f).unwrap_or_default();
    process_actions(actions, ui, animator);
}

/// Act on the service's reply to the search identified by `ticket`.
#[cfg(feature = "csr")]
fn finish_search(
    result: Result<PathResponse, EditorError>,
    ticket: AnimationTicket,
    editor: &SharedEditor,
    animator: &SharedAnimator,
    ui: RwSignal<UiState>,
) {
    let outcome = editor
        .borrow()
        .as_ref()
        .map_or(Ok(SearchOutcome::Superseded), |ed| ed.settle_search(ticket, result));

    match outcome {
        Ok(SearchOutcome::Animate(plan)) => {
            log::info!("path found: {} steps to animate", plan.steps.len());
            ui.update(|u| u.search = SearchStatus::Found { cells: plan.steps.len() + 1 });
            let editor = Rc::clone(editor);
            animator.borrow_mut().schedule(&plan, |step| {
                let editor = Rc::clone(&editor);
                Timeout::new(step.delay_ms, move || {
                    if let Some(ed) = editor.borrow_mut().as_mut() {
                        ed.path_step(ticket, step.cell);
                    }
                })
            });
        }
        Ok(SearchOutcome::Unreachable(message)) => {
            log::info!("no path: {message}");
            ui.update(|u| u.search = SearchStatus::Unreachable);
            notify::alert(&message);
        }
        Ok(SearchOutcome::Superseded) => {
            log::debug!("search {ticket:?} superseded before its reply arrived");
        }
        Err(err) => {
            log::warn!("search failed: {err}");
            ui.update(|u| u.search = SearchStatus::Failed);
            notify::alert(&err.user_message());
        }
    }
}

/// SVG surface hosting the editable grid.
#[component]
pub fn GridHost() -> impl IntoView {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let ui = expect_context::<RwSignal<UiState>>();
    let svg_ref = NodeRef::<leptos::svg::Svg>::new();

    #[cfg(feature = "csr")]
    let editor: SharedEditor = Rc::new(RefCell::new(None));
    #[cfg(feature = "csr")]
    let animator: SharedAnimator = Rc::new(RefCell::new(PathAnimator::new()));
    #[cfg(feature = "csr")]
    let last_brush_seq = RwSignal::new(0_u64);
    #[cfg(feature = "csr")]
    let last_clear_seq = RwSignal::new(0_u64);
    #[cfg(feature = "csr")]
    let last_find_path_seq = RwSignal::new(0_u64);

    #[cfg(feature = "csr")]
    {
        let editor = Rc::clone(&editor);
        Effect::new(move || {
            let Some(svg) = svg_ref.get() else {
                return;
            };
            if editor.borrow().is_some() {
                return;
            }
            match SvgRenderer::mount(svg.as_ref()) {
                Ok(renderer) => {
                    log::info!("grid mounted; pathfinding service at {:?}", config::api_base_url());
                    *editor.borrow_mut() = Some(Editor::new(renderer));
                }
                Err(err) => log::error!("failed to mount grid: {err:?}"),
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let editor = Rc::clone(&editor);
        let animator = Rc::clone(&animator);
        Effect::new(move || {
            let (seq, brush) = ui.with(|u| (u.brush_seq, u.requested_brush));
            if seq == last_brush_seq.get_untracked() {
                return;
            }
            last_brush_seq.set(seq);
            with_editor(&editor, ui, &animator, |ed| ed.set_brush(brush));
        });
    }

    #[cfg(feature = "csr")]
    {
        let editor = Rc::clone(&editor);
        let animator = Rc::clone(&animator);
        Effect::new(move || {
            let seq = ui.with(|u| u.clear_seq);
            if seq == last_clear_seq.get_untracked() {
                return;
            }
            last_clear_seq.set(seq);
            with_editor(&editor, ui, &animator, Editor::clear_grid);
            ui.update(|u| u.search = SearchStatus::Idle);
        });
    }

    #[cfg(feature = "csr")]
    {
        let editor = Rc::clone(&editor);
        let animator = Rc::clone(&animator);
        Effect::new(move || {
            let seq = ui.with(|u| u.find_path_seq);
            if seq == last_find_path_seq.get_untracked() {
                return;
            }
            last_find_path_seq.set(seq);

            let Some(started) = editor.borrow_mut().as_mut().map(Editor::begin_search) else {
                return;
            };
            let pending = match started {
                Ok(pending) => pending,
                Err(err) => {
                    notify::alert(&err.user_message());
                    return;
                }
            };
            process_actions(pending.actions, ui, &animator);
            ui.update(|u| u.search = SearchStatus::Searching);

            let editor = Rc::clone(&editor);
            let animator = Rc::clone(&animator);
            let request = pending.request;
            let ticket = pending.ticket;
            leptos::task::spawn_local(async move {
                let result = api::find_path(&config::api_base_url(), &request).await;
                finish_search(result, ticket, &editor, &animator, ui);
            });
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let editor = Rc::clone(&editor);
            let animator = Rc::clone(&animator);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let Some(svg) = svg_ref.get_untracked() else {
                    return;
                };
                let surface: &web_sys::Element = svg.as_ref();
                if let Err(err) = surface.set_pointer_capture(ev.pointer_id()) {
                    log::debug!("pointer capture unavailable: {err:?}");
                }
                let Some(cell) = pointer::event_cell(&ev, surface) else {
                    return;
                };
                let button = Button::from_dom(ev.button());
                with_editor(&editor, ui, &animator, |ed| ed.on_pointer_down(cell, button));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let editor = Rc::clone(&editor);
            let animator = Rc::clone(&animator);
            move |ev: leptos::ev::PointerEvent| {
                let Some(svg) = svg_ref.get_untracked() else {
                    return;
                };
                let Some(cell) = pointer::event_cell(&ev, svg.as_ref()) else {
                    return;
                };
                with_editor(&editor, ui, &animator, |ed| ed.on_pointer_move(cell));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let editor = Rc::clone(&editor);
            let animator = Rc::clone(&animator);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(svg) = svg_ref.get_untracked() {
                    let surface: &web_sys::Element = svg.as_ref();
                    if surface.has_pointer_capture(ev.pointer_id()) {
                        if let Err(err) = surface.release_pointer_capture(ev.pointer_id()) {
                            log::debug!("pointer release failed: {err:?}");
                        }
                    }
                }
                with_editor(&editor, ui, &animator, Editor::on_pointer_up);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <svg
            id="grid"
            node_ref=svg_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up.clone()
            on:pointercancel=on_pointer_up
            on:contextmenu=|ev: leptos::ev::MouseEvent| ev.prevent_default()
        ></svg>
    }
}
