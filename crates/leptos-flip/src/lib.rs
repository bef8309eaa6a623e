//! Leptos FLIP Utilities
//!
//! Animates list reordering for Leptos using the FLIP technique:
//! remember where each row was, let the new render land, then spring
//! every moved row from its old offset back to rest.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::html::Ul;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Spring parameters for the move animation (unit mass)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
}

/// Row positions keyed by the value of a data attribute
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlipSnapshot {
    positions: HashMap<String, (f64, f64)>,
}

impl FlipSnapshot {
    pub fn insert(&mut self, key: impl Into<String>, x: f64, y: f64) {
        self.positions.insert(key.into(), (x, y));
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Longest frame delta fed to the integrator; a tab coming back from
/// the background must not teleport the spring
const MAX_FRAME_DT: f64 = 1.0 / 30.0;

/// Displacement below which a spring is considered at rest, in px
const REST_DELTA: f64 = 0.5;

/// Speed below which a spring is considered at rest, in px/s
const REST_SPEED: f64 = 10.0;

/// Track `watch` and FLIP-animate the rows of `container` (elements
/// carrying `attr`) whenever the watched value changes. Call once
/// during component setup.
pub fn animate_moves(
    container: NodeRef<Ul>,
    watch: impl Fn() + 'static,
    attr: &'static str,
    spring: SpringConfig,
) {
    let last_positions = StoredValue::new(FlipSnapshot::default());
    Effect::new(move |_| {
        watch();
        let Some(list) = container.get() else {
            return;
        };
        let current = snapshot_positions(&list, attr);
        let previous = last_positions.get_value();
        play_moves(&list, attr, &previous, &current, spring);
        last_positions.set_value(current);
    });
}

/// Record the layout position of every element under `container` that
/// carries `attr`. Offset coordinates ignore CSS transforms, so rows
/// mid-animation still report where they actually belong.
pub fn snapshot_positions(container: &web_sys::Element, attr: &str) -> FlipSnapshot {
    let mut snapshot = FlipSnapshot::default();
    let Ok(rows) = container.query_selector_all(&format!("[{attr}]")) else {
        return snapshot;
    };
    for index in 0..rows.length() {
        let Some(node) = rows.item(index) else {
            continue;
        };
        let Ok(el) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let Some(key) = el.get_attribute(attr) else {
            continue;
        };
        snapshot.insert(key, el.offset_left() as f64, el.offset_top() as f64);
    }
    snapshot
}

/// Compute `(key, dx, dy)` for every row present in both snapshots
/// whose position changed. The delta points from the new position back
/// to the old one, ready to be used as the inverted starting transform.
pub fn compute_moves(previous: &FlipSnapshot, current: &FlipSnapshot) -> Vec<(String, f64, f64)> {
    let mut moves = Vec::new();
    for (key, (x, y)) in &current.positions {
        let Some((prev_x, prev_y)) = previous.positions.get(key) else {
            continue;
        };
        let dx = prev_x - x;
        let dy = prev_y - y;
        if dx != 0.0 || dy != 0.0 {
            moves.push((key.clone(), dx, dy));
        }
    }
    moves
}

/// Spring every moved row from its previous position to its new one
pub fn play_moves(
    container: &web_sys::Element,
    attr: &str,
    previous: &FlipSnapshot,
    current: &FlipSnapshot,
    spring: SpringConfig,
) {
    for (key, dx, dy) in compute_moves(previous, current) {
        let selector = format!("[{attr}=\"{key}\"]");
        let Ok(Some(el)) = container.query_selector(&selector) else {
            continue;
        };
        let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        animate_spring(el, dx, dy, spring);
    }
}

struct SpringState {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    last_timestamp: Option<f64>,
}

impl SpringState {
    fn new(dx: f64, dy: f64) -> Self {
        Self {
            x: dx,
            y: dy,
            vx: 0.0,
            vy: 0.0,
            last_timestamp: None,
        }
    }

    fn offset(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Advance to `timestamp` (ms, from requestAnimationFrame).
    /// Returns true once the spring is at rest.
    fn advance(&mut self, timestamp: f64, spring: SpringConfig) -> bool {
        let dt = match self.last_timestamp {
            Some(last) => ((timestamp - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
            None => 1.0 / 60.0,
        };
        self.last_timestamp = Some(timestamp);
        step(&mut self.x, &mut self.vx, dt, spring);
        step(&mut self.y, &mut self.vy, dt, spring);
        self.at_rest()
    }

    fn at_rest(&self) -> bool {
        self.x.abs() < REST_DELTA
            && self.y.abs() < REST_DELTA
            && self.vx.abs() < REST_SPEED
            && self.vy.abs() < REST_SPEED
    }
}

/// One semi-implicit Euler step toward rest at zero
fn step(pos: &mut f64, vel: &mut f64, dt: f64, spring: SpringConfig) {
    let accel = -spring.stiffness * *pos - spring.damping * *vel;
    *vel += accel * dt;
    *pos += *vel * dt;
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({x}px, {y}px)")
}

fn animate_spring(el: web_sys::HtmlElement, dx: f64, dy: f64, spring: SpringConfig) {
    let Some(win) = web_sys::window() else {
        return;
    };
    // Invert: start the row where it used to be
    let _ = el.style().set_property("transform", &translate(dx, dy));

    let state = Rc::new(RefCell::new(SpringState::new(dx, dy)));
    // The rAF closure keeps itself alive until the spring settles
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let inner = Rc::clone(&holder);
    *holder.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let done = state.borrow_mut().advance(timestamp, spring);
        if done {
            let _ = el.style().remove_property("transform");
            let _ = inner.borrow_mut().take();
            return;
        }
        let (x, y) = state.borrow().offset();
        let _ = el.style().set_property("transform", &translate(x, y));
        if let Some(win) = web_sys::window() {
            if let Some(cb) = inner.borrow().as_ref() {
                let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }));
    {
        let borrowed = holder.borrow();
        if let Some(cb) = borrowed.as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRING: SpringConfig = SpringConfig {
        stiffness: 120.0,
        damping: 25.0,
    };

    #[test]
    fn test_compute_moves_reports_only_changed_rows() {
        let mut previous = FlipSnapshot::default();
        previous.insert("a", 0.0, 0.0);
        previous.insert("b", 0.0, 40.0);
        previous.insert("gone", 0.0, 80.0);

        let mut current = FlipSnapshot::default();
        current.insert("a", 0.0, 40.0);
        current.insert("b", 0.0, 40.0);
        current.insert("new", 0.0, 0.0);

        let moves = compute_moves(&previous, &current);

        // Only "a" moved; "b" stayed put, "gone"/"new" have no pair
        assert_eq!(moves, vec![("a".to_string(), 0.0, -40.0)]);
    }

    #[test]
    fn test_compute_moves_on_empty_snapshots() {
        let empty = FlipSnapshot::default();
        assert!(compute_moves(&empty, &empty).is_empty());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_spring_settles_to_rest() {
        let mut spring = SpringState::new(120.0, -60.0);

        let mut frames = 0;
        let mut timestamp = 0.0;
        while !spring.advance(timestamp, SPRING) {
            timestamp += 16.0;
            frames += 1;
            assert!(frames < 1000, "spring never settled");
        }

        let (x, y) = spring.offset();
        assert!(x.abs() < REST_DELTA);
        assert!(y.abs() < REST_DELTA);
    }

    #[test]
    fn test_spring_never_exceeds_start_offset() {
        // Damping 25 on stiffness 120 is past critical, so the motion
        // decays without a visible overshoot
        let mut spring = SpringState::new(100.0, 0.0);

        let mut timestamp = 0.0;
        for _ in 0..1000 {
            if spring.advance(timestamp, SPRING) {
                break;
            }
            timestamp += 16.0;
            assert!(spring.offset().0.abs() <= 100.0);
        }
    }

    #[test]
    fn test_first_frame_uses_default_delta() {
        let mut spring = SpringState::new(100.0, 0.0);

        // A huge first timestamp must not be treated as elapsed time
        spring.advance(5_000.0, SPRING);

        assert!(spring.offset().0 > 50.0);
    }
}
