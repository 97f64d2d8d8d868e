//! Page-level wiring: configuration loading, bulk initialization and JS exports.

use std::rc::Rc;

use gloo::events::EventListener;
use veneer_telemetry::{LogFormat, LoggingConfig, init_logging};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement};

use crate::core::bind::{self, InitReport, SliderPage};
use crate::core::config::{CONFIG_ELEMENT_ID, SyncConfig};
use crate::core::error::ConfigError;
use crate::dom::error::DomError;
use crate::dom::slider::sync_control;

/// Read configuration overrides from the page, if present.
///
/// # Errors
/// Returns [`ConfigError`] when the override block is malformed.
pub fn load_config(document: &Document) -> Result<SyncConfig, ConfigError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    {
        Some(text) if !text.trim().is_empty() => SyncConfig::from_json(&text),
        _ => Ok(SyncConfig::default()),
    }
}

/// Sliders of one document, bound through `gloo` event listeners.
pub struct DomPage<'a> {
    document: &'a Document,
    config: &'a Rc<SyncConfig>,
}

impl<'a> DomPage<'a> {
    /// Wrap a document with the configuration its sliders use.
    #[must_use]
    pub const fn new(document: &'a Document, config: &'a Rc<SyncConfig>) -> Self {
        Self { document, config }
    }
}

impl SliderPage for DomPage<'_> {
    type Container = Element;
    type Control = HtmlInputElement;
    type Error = DomError;

    fn containers(&self) -> Result<Vec<Element>, DomError> {
        let nodes = self
            .document
            .query_selector_all(&self.config.slider_selector)
            .map_err(|err| DomError::js("querySelectorAll", &err))?;
        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn find_control(&self, container: &Element) -> Option<HtmlInputElement> {
        container
            .query_selector(&self.config.control_selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
    }

    fn is_bound(&self, control: &HtmlInputElement) -> bool {
        control.has_attribute(&self.config.bound_attribute)
    }

    fn mark_bound(&mut self, control: &HtmlInputElement) {
        if let Err(err) = control.set_attribute(&self.config.bound_attribute, "") {
            tracing::debug!(error = ?err, "failed to mark slider as bound");
        }
    }

    fn register_listeners(&mut self, control: &HtmlInputElement) {
        for event in &self.config.sync_events {
            let config = Rc::clone(self.config);
            EventListener::new(control, event.clone(), move |event| {
                if let Some(control) = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                {
                    sync_control(&control, &config);
                }
            })
            .forget();
        }
    }

    fn synchronize(&mut self, control: &HtmlInputElement) {
        sync_control(control, self.config);
    }
}

/// Bind and synchronize every slider in the document, in document order.
///
/// # Errors
/// Returns [`DomError`] if the container query itself throws (for example an
/// invalid selector). Individual sliders never fail the pass.
pub fn initialize_all(document: &Document, config: &Rc<SyncConfig>) -> Result<InitReport, DomError> {
    bind::initialize_all(&mut DomPage::new(document, config))
}

fn current_document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn settle_config(loaded: Result<SyncConfig, ConfigError>) -> SyncConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid slider configuration");
        SyncConfig::default()
    })
}

fn install_logging(config: Option<&SyncConfig>) {
    let defaults = SyncConfig::default();
    let config = config.unwrap_or(&defaults);
    let logging = LoggingConfig {
        level: &config.log_level,
        format: config
            .log_format
            .as_deref()
            .and_then(LogFormat::from_name)
            .unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        gloo::console::warn!(err.to_string());
    }
}

fn run_initialization(document: &Document, config: &Rc<SyncConfig>) {
    if let Err(err) = initialize_all(document, config) {
        tracing::warn!(error = %err, "slider initialization failed");
    }
}

/// Install logging and initialize every slider once the page has loaded.
///
/// Runs when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    let Ok(document) = current_document() else {
        gloo::console::warn!("veneer: no document available, sliders left untouched");
        return;
    };

    // Logging goes in first so a rejected override is still reported.
    let loaded = load_config(&document);
    install_logging(loaded.as_ref().ok());
    let config = Rc::new(settle_config(loaded));

    if document.ready_state() == "complete" {
        run_initialization(&document, &config);
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    EventListener::once(&window, "load", move |_| {
        run_initialization(&document, &config);
    })
    .forget();
}

/// Initialize sliders on demand; returns how many controls were newly bound.
///
/// # Errors
/// Rejects with a message when the document is unavailable or the slider
/// selector is invalid.
#[wasm_bindgen(js_name = initSliders)]
pub fn init_sliders() -> Result<u32, JsValue> {
    let document = current_document()?;
    let config = Rc::new(settle_config(load_config(&document)));
    Ok(initialize_all(&document, &config)?.bound)
}

/// Synchronize one control immediately, e.g. after changing its value from script.
#[wasm_bindgen(js_name = syncSlider)]
pub fn sync_slider(control: &HtmlInputElement) {
    let config = control
        .owner_document()
        .map_or_else(SyncConfig::default, |document| {
            settle_config(load_config(&document))
        });
    sync_control(control, &config);
}
