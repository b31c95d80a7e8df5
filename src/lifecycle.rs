// Mounting and teardown of canvas effects.
//
// A Host schedules repeating tasks and delivers viewport events; the browser
// implementation lives in `browser_host`. `mount` wires an effect to a surface
// through a host and hands back a `Mounted` that knows everything it
// registered, so `unmount` can take it all down again.

use crate::surface::Surface;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Cadence {
    EveryFrame,
    Every { period_ms: u32 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Resize,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostEvent {
    PointerMove { x: f64, y: f64 },
    Resize { width: f64, height: f64 },
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerMove { .. } => EventKind::PointerMove,
            HostEvent::Resize { .. } => EventKind::Resize,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

// Repeating task; receives the host's timestamp in milliseconds
pub type Task = Box<dyn FnMut(f64)>;
pub type Handler = Box<dyn FnMut(HostEvent)>;

pub trait Host {
    fn viewport(&self) -> (f64, f64);
    fn schedule(&mut self, cadence: Cadence, task: Task) -> TaskId;
    fn cancel(&mut self, id: TaskId);
    fn listen(&mut self, kind: EventKind, handler: Handler) -> ListenerId;
    fn unlisten(&mut self, id: ListenerId);
}

pub trait Effect {
    const CADENCE: Cadence;
    const TRACKS_POINTER: bool;

    fn resize(&mut self, width: f64, height: f64, rng: &mut StdRng);
    fn frame(
        &mut self,
        now_ms: f64,
        cursor: Option<[f64; 2]>,
        rng: &mut StdRng,
        surface: &mut dyn Surface,
    );
}

// Everything one mount registered with its host
#[derive(Debug, Default)]
pub struct Mounted {
    task: Option<TaskId>,
    listeners: Vec<ListenerId>,
}

impl Mounted {
    pub fn is_active(&self) -> bool {
        self.task.is_some() || !self.listeners.is_empty()
    }

    pub fn unmount<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Some(task) = self.task.take() {
            host.cancel(task);
        }
        for listener in self.listeners.drain(..) {
            host.unlisten(listener);
        }
    }
}

struct Mount<E, S> {
    effect: E,
    surface: S,
    rng: StdRng,
}

// A missing surface mounts nothing and yields an inactive handle.
pub fn mount<E, S, H, B>(host: &mut H, surface: Option<S>, build: B, mut rng: StdRng) -> Mounted
where
    E: Effect + 'static,
    S: Surface + 'static,
    H: Host + ?Sized,
    B: FnOnce(f64, f64, &mut StdRng) -> E,
{
    let mut surface = match surface {
        Some(surface) => surface,
        None => return Mounted::default(),
    };

    let (width, height) = host.viewport();
    surface.resize(width, height);
    let effect = build(width, height, &mut rng);
    let state = Rc::new(RefCell::new(Mount {
        effect,
        surface,
        rng,
    }));
    let cursor: Rc<Cell<Option<[f64; 2]>>> = Rc::new(Cell::new(None));

    let mut listeners = Vec::new();

    let resize_state = state.clone();
    listeners.push(host.listen(
        EventKind::Resize,
        Box::new(move |event: HostEvent| {
            if let HostEvent::Resize { width, height } = event {
                let mut guard = resize_state.borrow_mut();
                let Mount {
                    effect,
                    surface,
                    rng,
                } = &mut *guard;
                surface.resize(width, height);
                effect.resize(width, height, rng);
            }
        }),
    ));

    if E::TRACKS_POINTER {
        let pointer = cursor.clone();
        listeners.push(host.listen(
            EventKind::PointerMove,
            Box::new(move |event: HostEvent| {
                if let HostEvent::PointerMove { x, y } = event {
                    pointer.set(Some([x, y]));
                }
            }),
        ));
    }

    let frame_state = state;
    let task = host.schedule(
        E::CADENCE,
        Box::new(move |now_ms: f64| {
            let mut guard = frame_state.borrow_mut();
            let Mount {
                effect,
                surface,
                rng,
            } = &mut *guard;
            effect.frame(now_ms, cursor.get(), rng, surface);
        }),
    );

    Mounted {
        task: Some(task),
        listeners,
    }
}

#[cfg(test)]
pub mod manual {
    use super::*;
    use std::collections::BTreeMap;

    // Host driven by hand from tests: frames, interval ticks, and events are
    // fired explicitly, and every registration is visible.
    #[derive(Default)]
    pub struct ManualHost {
        pub width: f64,
        pub height: f64,
        next_id: u32,
        tasks: BTreeMap<u32, (Cadence, Task)>,
        listeners: BTreeMap<u32, (EventKind, Handler)>,
    }

    impl ManualHost {
        pub fn new(width: f64, height: f64) -> ManualHost {
            ManualHost {
                width,
                height,
                ..ManualHost::default()
            }
        }

        pub fn task_count(&self) -> usize {
            self.tasks.len()
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.len()
        }

        pub fn cadences(&self) -> Vec<Cadence> {
            self.tasks.values().map(|(cadence, _)| *cadence).collect()
        }

        // Runs every scheduled task once, as if its frame or period came due
        pub fn run_tasks(&mut self, now_ms: f64) {
            for (_, task) in self.tasks.values_mut() {
                task(now_ms);
            }
        }

        pub fn fire(&mut self, event: HostEvent) {
            if let HostEvent::Resize { width, height } = event {
                self.width = width;
                self.height = height;
            }
            for (kind, handler) in self.listeners.values_mut() {
                if *kind == event.kind() {
                    handler(event);
                }
            }
        }

        fn next(&mut self) -> u32 {
            self.next_id += 1;
            self.next_id
        }
    }

    impl Host for ManualHost {
        fn viewport(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn schedule(&mut self, cadence: Cadence, task: Task) -> TaskId {
            let id = self.next();
            self.tasks.insert(id, (cadence, task));
            TaskId(id)
        }

        fn cancel(&mut self, id: TaskId) {
            self.tasks.remove(&id.0);
        }

        fn listen(&mut self, kind: EventKind, handler: Handler) -> ListenerId {
            let id = self.next();
            self.listeners.insert(id, (kind, handler));
            ListenerId(id)
        }

        fn unlisten(&mut self, id: ListenerId) {
            self.listeners.remove(&id.0);
        }
    }
}
