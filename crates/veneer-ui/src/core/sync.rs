//! Slider synchronization: the pure computation plus the host-driven pass that
//! reads one instance, resolves its markers and writes the results back.

use crate::core::marker::{MarkerFlag, parse_positions};
use crate::core::progress::Progress;
use crate::core::source::{MarkerProbe, MarkerSource, resolve};
use crate::core::state::{RawSlider, SliderState};

/// Everything a host needs to write back after one synchronization.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncOutcome {
    /// Value for the progress sink.
    pub progress: Progress,
    /// One flag per marker, in the order the positions were supplied.
    pub markers: Vec<MarkerFlag>,
}

impl SyncOutcome {
    /// Number of markers flagged below the current value.
    #[must_use]
    pub fn below_count(&self) -> usize {
        self.markers.iter().filter(|marker| marker.below).count()
    }
}

/// Compute the progress and marker flags for one slider.
///
/// Deterministic in its inputs, so repeated calls with unchanged state give
/// identical outcomes.
#[must_use]
pub fn synchronize(state: &SliderState, positions: &[f64]) -> SyncOutcome {
    let progress = Progress::from_bounds(state.current, state.min, state.max);
    let markers = positions
        .iter()
        .map(|&position| MarkerFlag::derive(position, state.current))
        .collect();
    SyncOutcome { progress, markers }
}

/// One slider instance as seen by its host environment.
///
/// Marker lookups come from [`MarkerProbe`]; the remaining methods read the
/// control and publish results.
pub trait SliderView: MarkerProbe {
    /// Read `current`, `min` and `max` as raw text.
    fn read_raw(&self) -> RawSlider;

    /// Raw position text of every marker in `markers`, in order.
    fn marker_positions(&self, markers: &Self::Markers) -> Vec<Option<String>>;

    /// Publish the progress to the slider's progress sink.
    fn write_progress(&mut self, progress: Progress);

    /// Set or clear the "below" flag of the marker at `index`.
    fn set_below(&mut self, markers: &Self::Markers, index: usize, below: bool);
}

/// Synchronize one slider instance through its host view.
///
/// Malformed fields are reported at `debug` and coerced to `0`. The progress is
/// always written; markers are only touched when a collection resolves.
pub fn sync_instance<V: SliderView>(view: &mut V) -> (MarkerSource<V::Markers>, SyncOutcome) {
    let raw = view.read_raw();
    let state = SliderState::try_from_raw(&raw).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "coercing malformed slider field");
        SliderState::from_raw(&raw)
    });

    let source = resolve(&*view);
    let positions = source.markers().map_or_else(Vec::new, |markers| {
        let raw_positions = view.marker_positions(markers);
        parse_positions(raw_positions.iter().map(Option::as_deref))
    });
    let outcome = synchronize(&state, &positions);

    view.write_progress(outcome.progress);
    if let Some(markers) = source.markers() {
        for (index, flag) in outcome.markers.iter().enumerate() {
            view.set_below(markers, index, flag.below);
        }
    }
    tracing::trace!(
        source = source.kind(),
        progress = %outcome.progress,
        below = outcome.below_count(),
        "slider synchronized"
    );
    (source, outcome)
}
