//! `web-sys` view of a single slider control.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::core::config::SyncConfig;
use crate::core::progress::Progress;
use crate::core::source::MarkerProbe;
use crate::core::state::RawSlider;
use crate::core::sync::{SliderView, sync_instance};
use crate::dom::markers::{self, DomMarker};

/// A range input together with its enclosing slider container.
pub struct DomSlider<'a> {
    control: &'a HtmlInputElement,
    container: Option<Element>,
    config: &'a SyncConfig,
}

impl<'a> DomSlider<'a> {
    /// Locate the control's container using the configured slider selector.
    #[must_use]
    pub fn new(control: &'a HtmlInputElement, config: &'a SyncConfig) -> Self {
        let container = control.closest(&config.slider_selector).ok().flatten();
        Self {
            control,
            container,
            config,
        }
    }

    fn progress_sink(&self) -> &HtmlElement {
        self.container
            .as_ref()
            .and_then(|element| element.dyn_ref::<HtmlElement>())
            .unwrap_or(self.control)
    }
}

impl MarkerProbe for DomSlider<'_> {
    type Markers = Vec<DomMarker>;

    fn control_list(&self) -> Option<Self::Markers> {
        markers::control_list(self.control)
    }

    fn container_list(&self) -> Option<Self::Markers> {
        markers::container_list(self.container.as_ref()?)
    }

    fn custom_collection(&self) -> Option<Self::Markers> {
        markers::custom_collection(
            self.container.as_ref()?,
            &self.config.custom_marker_selector,
            &self.config.custom_marker_attribute,
        )
    }
}

impl SliderView for DomSlider<'_> {
    fn read_raw(&self) -> RawSlider {
        RawSlider::new(self.control.value(), self.control.min(), self.control.max())
    }

    fn marker_positions(&self, markers: &Self::Markers) -> Vec<Option<String>> {
        markers.iter().map(|marker| marker.position.clone()).collect()
    }

    fn write_progress(&mut self, progress: Progress) {
        if let Err(err) = self
            .progress_sink()
            .style()
            .set_property(&self.config.progress_property, &progress.to_string())
        {
            tracing::debug!(error = ?err, "failed to write slider progress");
        }
    }

    fn set_below(&mut self, markers: &Self::Markers, index: usize, below: bool) {
        let Some(marker) = markers.get(index) else {
            return;
        };
        if let Err(err) = marker
            .element
            .class_list()
            .toggle_with_force(&self.config.below_class, below)
        {
            tracing::debug!(error = ?err, "failed to update marker class");
        }
    }
}

/// Synchronize one control: write the progress property and refresh marker flags.
pub fn sync_control(control: &HtmlInputElement, config: &SyncConfig) {
    sync_instance(&mut DomSlider::new(control, config));
}
