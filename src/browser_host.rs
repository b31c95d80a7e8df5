// Host backed by the browser window: requestAnimationFrame for per-frame
// tasks, gloo interval timers for fixed periods, and window listeners for pointer and
// resize events. Everything registered is released on cancel/unlisten, and
// whatever is still registered when the host is dropped.

use crate::lifecycle::{Cadence, EventKind, Handler, Host, HostEvent, ListenerId, Task, TaskId};
use gloo_timers::callback::Interval;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

enum Scheduled {
    Frame {
        pending: Rc<Cell<Option<i32>>>,
        callback: FrameCallback,
    },
    // Cleared when dropped
    Interval(Interval),
}

struct Listener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

pub struct BrowserHost {
    window: Window,
    next_id: u32,
    tasks: HashMap<u32, Scheduled>,
    listeners: HashMap<u32, Listener>,
}

impl BrowserHost {
    pub fn new() -> Result<BrowserHost, JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        Ok(BrowserHost {
            window,
            next_id: 0,
            tasks: HashMap::new(),
            listeners: HashMap::new(),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn start_frames(&self, mut task: Task) -> Result<Scheduled, JsValue> {
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let window = self.window.clone();
        let next_pending = pending.clone();
        let next_callback: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::downgrade(&callback);
        let frame = Closure::wrap(Box::new(move |_timestamp: f64| {
            next_pending.set(None);
            {
                #[cfg(feature = "frame-timing")]
                let _timer = crate::Timer::new("frame");
                task(js_sys::Date::now());
            }
            // Cancelled while drawing: the closure is gone and nothing is re-queued
            let callback = match next_callback.upgrade() {
                Some(callback) => callback,
                None => return,
            };
            let callback = callback.borrow();
            if let Some(closure) = callback.as_ref() {
                match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    Ok(id) => next_pending.set(Some(id)),
                    Err(err) => console::error_2(&"requestAnimationFrame failed".into(), &err),
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let id = self
            .window
            .request_animation_frame(frame.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(frame);

        Ok(Scheduled::Frame { pending, callback })
    }

    fn start_interval(&self, period_ms: u32, mut task: Task) -> Scheduled {
        Scheduled::Interval(Interval::new(period_ms, move || {
            #[cfg(feature = "frame-timing")]
            let _timer = crate::Timer::new("tick");
            task(js_sys::Date::now());
        }))
    }

    fn stop(&self, scheduled: Scheduled) {
        match scheduled {
            Scheduled::Frame { pending, callback } => {
                if let Some(id) = pending.take() {
                    if let Err(err) = self.window.cancel_animation_frame(id) {
                        console::warn_2(&"cancelAnimationFrame failed".into(), &err);
                    }
                }
                callback.borrow_mut().take();
            }
            Scheduled::Interval(interval) => drop(interval),
        }
    }

    fn detach(&self, listener: Listener) {
        let result = self.window.remove_event_listener_with_callback(
            listener.event,
            listener.callback.as_ref().unchecked_ref(),
        );
        if let Err(err) = result {
            console::warn_2(&format!("failed to remove {} listener", listener.event).into(), &err);
        }
    }
}

impl Host for BrowserHost {
    fn viewport(&self) -> (f64, f64) {
        let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn schedule(&mut self, cadence: Cadence, task: Task) -> TaskId {
        let id = self.next();
        let started = match cadence {
            Cadence::EveryFrame => self.start_frames(task),
            Cadence::Every { period_ms } => Ok(self.start_interval(period_ms, task)),
        };
        match started {
            Ok(scheduled) => {
                self.tasks.insert(id, scheduled);
            }
            Err(err) => console::error_2(&"failed to schedule effect".into(), &err),
        }
        TaskId(id)
    }

    fn cancel(&mut self, id: TaskId) {
        if let Some(scheduled) = self.tasks.remove(&id.0) {
            self.stop(scheduled);
        }
    }

    fn listen(&mut self, kind: EventKind, mut handler: Handler) -> ListenerId {
        let id = self.next();
        let (event, callback) = match kind {
            EventKind::PointerMove => (
                "mousemove",
                Closure::wrap(Box::new(move |event: Event| {
                    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                        handler(HostEvent::PointerMove {
                            x: mouse.client_x() as f64,
                            y: mouse.client_y() as f64,
                        });
                    }
                }) as Box<dyn FnMut(Event)>),
            ),
            EventKind::Resize => {
                let window = self.window.clone();
                (
                    "resize",
                    Closure::wrap(Box::new(move |_event: Event| {
                        let dimension =
                            |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        handler(HostEvent::Resize {
                            width: dimension(window.inner_width()),
                            height: dimension(window.inner_height()),
                        });
                    }) as Box<dyn FnMut(Event)>),
                )
            }
        };

        match self
            .window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            Ok(()) => {
                self.listeners.insert(id, Listener { event, callback });
            }
            Err(err) => console::error_2(&format!("failed to add {} listener", event).into(), &err),
        }
        ListenerId(id)
    }

    fn unlisten(&mut self, id: ListenerId) {
        if let Some(listener) = self.listeners.remove(&id.0) {
            self.detach(listener);
        }
    }
}

impl Drop for BrowserHost {
    fn drop(&mut self) {
        let tasks: Vec<Scheduled> = self.tasks.drain().map(|(_, scheduled)| scheduled).collect();
        for scheduled in tasks {
            self.stop(scheduled);
        }
        let listeners: Vec<Listener> = self.listeners.drain().map(|(_, listener)| listener).collect();
        for listener in listeners {
            self.detach(listener);
        }
    }
}
