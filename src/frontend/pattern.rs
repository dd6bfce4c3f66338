use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use super::browser::measure;
use crate::angle::Point;
use crate::pattern::{glyph_style, PatternState};
use crate::site::{GLYPH, GLYPH_LINE_HEIGHT_PX, PATTERN_GRID};

/// Window `mousemove` listener that hands the latest pointer position to
/// `on_frame` at most once per animation frame. Dropping it removes the
/// listener and cancels a pending frame.
struct PointerTracker {
    _listener: EventListener,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl PointerTracker {
    fn install(on_frame: impl Fn(Point) + 'static) -> Option<Self> {
        let Some(window) = window() else {
            log::warn!("no window, pattern will stay still");
            return None;
        };

        let latest = Rc::new(Cell::new(None::<Point>));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
        let on_frame = Rc::new(on_frame);

        let listener = {
            let frame = frame.clone();
            EventListener::new(&window, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                latest.set(Some(Point::new(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                )));
                if frame.borrow().is_some() {
                    return;
                }

                let latest = latest.clone();
                let pending = frame.clone();
                let on_frame = on_frame.clone();
                let handle = request_animation_frame(move |_| {
                    pending.borrow_mut().take();
                    if let Some(point) = latest.take() {
                        on_frame(point);
                    }
                });
                *frame.borrow_mut() = Some(handle);
            })
        };

        Some(Self {
            _listener: listener,
            frame,
        })
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        self.frame.borrow_mut().take();
    }
}

#[function_component(AnimatedPattern)]
pub fn animated_pattern() -> Html {
    let container = use_node_ref();
    let pointer = use_state(|| None::<Point>);
    let state = use_mut_ref(|| PatternState::new(PATTERN_GRID));

    {
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let tracker = PointerTracker::install(move |point| pointer.set(Some(point)));
            move || drop(tracker)
        });
    }

    let rect = container.cast::<Element>().map(|element| measure(&element));
    let angles = state.borrow_mut().frame(rect, *pointer);
    let cols = state.borrow().grid().cols.max(1);

    let strip_style = format!(
        "font-size: {GLYPH_LINE_HEIGHT_PX}px; line-height: {GLYPH_LINE_HEIGHT_PX}px;"
    );
    let row_style = format!("height: {GLYPH_LINE_HEIGHT_PX}px;");

    html! {
        <div ref={container} class="pattern" style={strip_style} aria-hidden="true">
            { for angles.chunks(cols).enumerate().map(|(row, angles)| html! {
                <div key={row} class="pattern-row" style={row_style.clone()}>
                    { for angles.iter().enumerate().map(|(col, angle)| html! {
                        <span key={col} class="pattern-glyph" style={glyph_style(*angle)}>
                            {GLYPH}
                        </span>
                    }) }
                </div>
            }) }
        </div>
    }
}
