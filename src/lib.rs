mod utils;

pub mod browser_host;
pub mod color;
pub mod lifecycle;
pub mod page;
pub mod particle;
pub mod particle_field;
pub mod rain_field;
pub mod surface;

use browser_host::BrowserHost;
use lifecycle::{Effect, Host, Mounted};
use page::content::Section;
use page::view::{ContactButton, SectionBounds};
use page::PortfolioView;
use particle_field::ParticleField;
use rain_field::RainField;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// A canvas effect mounted on the page. Dropping the handle (or calling
// `unmount`) cancels its loop and removes its listeners.
#[wasm_bindgen]
pub struct EffectHandle {
    name: String,
    host: BrowserHost,
    mounted: Mounted,
}

#[wasm_bindgen]
impl EffectHandle {
    pub fn unmount(&mut self) {
        if self.mounted.is_active() {
            self.mounted.unmount(&mut self.host);
            console::log_1(&format!("{} unmounted", self.name).into());
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_active()
    }
}

#[wasm_bindgen]
pub fn mount_particle_field(canvas_id: &str) -> Result<EffectHandle, JsValue> {
    mount_effect("particle field", canvas_id, |width, height, rng| {
        ParticleField::new(width, height, rng)
    })
}

#[wasm_bindgen]
pub fn mount_rain_field(canvas_id: &str) -> Result<EffectHandle, JsValue> {
    mount_effect("rain field", canvas_id, |width, height, _rng| {
        RainField::new(width, height)
    })
}

fn mount_effect<E, B>(name: &str, canvas_id: &str, build: B) -> Result<EffectHandle, JsValue>
where
    E: Effect + 'static,
    B: FnOnce(f64, f64, &mut StdRng) -> E,
{
    let _timer = Timer::new("mount_effect");
    let mut host = BrowserHost::new()?;
    let surface = match find_canvas(&host, canvas_id)? {
        Some(canvas) => Some(CanvasSurface::from_canvas(canvas)?),
        None => {
            console::warn_1(&format!("no canvas #{}, {} not mounted", canvas_id, name).into());
            None
        }
    };

    let mounted = lifecycle::mount(&mut host, surface, build, StdRng::from_entropy());
    if mounted.is_active() {
        let (width, height) = host.viewport();
        console::log_1(&format!("{} mounted at {}x{}", name, width, height).into());
    }

    Ok(EffectHandle {
        name: name.to_owned(),
        host,
        mounted,
    })
}

fn find_canvas(host: &BrowserHost, canvas_id: &str) -> Result<Option<HtmlCanvasElement>, JsValue> {
    let document = host.window().document().ok_or("window has no document")?;
    match document.get_element_by_id(canvas_id) {
        Some(element) => Ok(Some(element.dyn_into::<HtmlCanvasElement>()?)),
        None => Ok(None),
    }
}

// Page view-state driven from the page script. Every handler updates the
// state; the script re-renders with `render` when it needs fresh markup.
#[wasm_bindgen]
pub struct Portfolio {
    view: PortfolioView,
}

#[wasm_bindgen]
impl Portfolio {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Portfolio {
        Portfolio {
            view: PortfolioView::default(),
        }
    }

    // `section_bounds` holds top/bottom pairs in page order, NaN for a
    // section that isn't in the document
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        section_bounds: &[f64],
        document_height: f64,
        viewport_height: f64,
    ) {
        let bounds: Vec<(Section, SectionBounds)> = Section::ALL
            .iter()
            .zip(section_bounds.chunks_exact(2))
            .filter(|(_, pair)| !pair[0].is_nan() && !pair[1].is_nan())
            .map(|(section, pair)| {
                (
                    *section,
                    SectionBounds {
                        top: pair[0],
                        bottom: pair[1],
                    },
                )
            })
            .collect();
        self.view
            .on_scroll(scroll_y, &bounds, document_height, viewport_height);
    }

    pub fn active_section(&self) -> String {
        self.view.navigation.active().id().to_owned()
    }

    pub fn scroll_progress(&self) -> f64 {
        self.view.progress.fraction()
    }

    pub fn toggle_project(&mut self, id: u32) {
        self.view.projects.toggle(id);
    }

    pub fn hover_project(&mut self, id: Option<u32>) {
        self.view.projects.hover(id);
    }

    pub fn toggle_skill(&mut self, name: &str) {
        self.view.skills.toggle(name);
    }

    pub fn hover_contact(&mut self, button: Option<String>) {
        self.view
            .contact
            .hover(button.as_deref().and_then(ContactButton::from_name));
    }

    pub fn render(&self) -> String {
        page::render(&self.view)
    }
}

impl Default for Portfolio {
    fn default() -> Portfolio {
        Portfolio::new()
    }
}
