//! End-to-end synchronization scenarios driving the core passes through an
//! in-memory page model.

use veneer_ui::core::bind::{InitReport, SliderPage, initialize_all};
use veneer_ui::core::progress::Progress;
use veneer_ui::core::source::{MarkerProbe, MarkerSource, NativeScope};
use veneer_ui::core::state::RawSlider;
use veneer_ui::core::sync::{SliderView, sync_instance};

#[derive(Clone, Debug, Default)]
struct FakeMarker {
    position: Option<String>,
    below: bool,
}

fn markers(positions: &[&str]) -> Vec<FakeMarker> {
    positions
        .iter()
        .map(|position| FakeMarker {
            position: Some((*position).to_string()),
            below: false,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Collection {
    Attached,
    Scoped,
    Custom,
}

/// One slider container with its control and optional marker collections.
#[derive(Debug, Default)]
struct FakeSlider {
    raw: RawSlider,
    has_container: bool,
    attached: Option<Vec<FakeMarker>>,
    scoped: Option<Vec<FakeMarker>>,
    custom: Option<Vec<FakeMarker>>,
    progress: Option<String>,
    bound: bool,
    listeners: u32,
}

impl MarkerProbe for FakeSlider {
    type Markers = Collection;

    fn control_list(&self) -> Option<Self::Markers> {
        self.attached.as_ref().map(|_| Collection::Attached)
    }

    fn container_list(&self) -> Option<Self::Markers> {
        self.scoped
            .as_ref()
            .filter(|_| self.has_container)
            .map(|_| Collection::Scoped)
    }

    fn custom_collection(&self) -> Option<Self::Markers> {
        self.custom
            .as_ref()
            .filter(|_| self.has_container)
            .map(|_| Collection::Custom)
    }
}

impl FakeSlider {
    fn with_values(current: &str, min: &str, max: &str) -> Self {
        Self {
            raw: RawSlider::new(current, min, max),
            has_container: true,
            ..Self::default()
        }
    }

    fn collection_mut(&mut self, which: Collection) -> Option<&mut Vec<FakeMarker>> {
        match which {
            Collection::Attached => self.attached.as_mut(),
            Collection::Scoped => self.scoped.as_mut(),
            Collection::Custom => self.custom.as_mut(),
        }
    }

    const fn collection(&self, which: Collection) -> &Option<Vec<FakeMarker>> {
        match which {
            Collection::Attached => &self.attached,
            Collection::Scoped => &self.scoped,
            Collection::Custom => &self.custom,
        }
    }

    fn flags(&self, which: Collection) -> Vec<bool> {
        self.collection(which)
            .iter()
            .flatten()
            .map(|marker| marker.below)
            .collect()
    }
}

impl SliderView for FakeSlider {
    fn read_raw(&self) -> RawSlider {
        self.raw.clone()
    }

    fn marker_positions(&self, markers: &Self::Markers) -> Vec<Option<String>> {
        self.collection(*markers)
            .iter()
            .flatten()
            .map(|marker| marker.position.clone())
            .collect()
    }

    fn write_progress(&mut self, progress: Progress) {
        self.progress = Some(progress.to_string());
    }

    fn set_below(&mut self, markers: &Self::Markers, index: usize, below: bool) {
        if let Some(marker) = self
            .collection_mut(*markers)
            .and_then(|collection| collection.get_mut(index))
        {
            marker.below = below;
        }
    }
}

fn sync(slider: &mut FakeSlider) -> MarkerSource<Collection> {
    sync_instance(slider).0
}

/// Page of slider containers; `None` entries have no numeric control.
struct FakePage {
    sliders: Vec<Option<FakeSlider>>,
    broken_selector: bool,
}

impl FakePage {
    fn new(sliders: Vec<Option<FakeSlider>>) -> Self {
        Self {
            sliders,
            broken_selector: false,
        }
    }

    fn slider(&self, index: usize) -> Option<&FakeSlider> {
        self.sliders.get(index).and_then(Option::as_ref)
    }

    fn slider_mut(&mut self, index: usize) -> Option<&mut FakeSlider> {
        self.sliders.get_mut(index).and_then(Option::as_mut)
    }
}

impl SliderPage for FakePage {
    type Container = usize;
    type Control = usize;
    type Error = &'static str;

    fn containers(&self) -> Result<Vec<usize>, Self::Error> {
        if self.broken_selector {
            return Err("invalid selector");
        }
        Ok((0..self.sliders.len()).collect())
    }

    fn find_control(&self, container: &usize) -> Option<usize> {
        self.slider(*container).map(|_| *container)
    }

    fn is_bound(&self, control: &usize) -> bool {
        self.slider(*control).is_some_and(|slider| slider.bound)
    }

    fn mark_bound(&mut self, control: &usize) {
        if let Some(slider) = self.slider_mut(*control) {
            slider.bound = true;
        }
    }

    fn register_listeners(&mut self, control: &usize) {
        if let Some(slider) = self.slider_mut(*control) {
            slider.listeners += 1;
        }
    }

    fn synchronize(&mut self, control: &usize) {
        if let Some(slider) = self.slider_mut(*control) {
            sync_instance(slider);
        }
    }
}

#[test]
fn quarter_value_flags_markers_below() {
    let mut slider = FakeSlider::with_values("25", "0", "100");
    slider.attached = Some(markers(&["0", "25", "50", "75", "100"]));

    let source = sync(&mut slider);

    assert_eq!(source.kind(), "native-control");
    assert_eq!(slider.progress.as_deref(), Some("25%"));
    assert_eq!(
        slider.flags(Collection::Attached),
        vec![true, false, false, false, false]
    );
}

#[test]
fn degenerate_range_reports_zero_progress() {
    let mut slider = FakeSlider::with_values("50", "0", "0");
    slider.custom = Some(markers(&["0", "100"]));

    sync(&mut slider);

    assert_eq!(slider.progress.as_deref(), Some("0%"));
}

#[test]
fn native_list_is_preferred_over_custom_collection() {
    let mut slider = FakeSlider::with_values("60", "0", "100");
    slider.scoped = Some(markers(&["20", "80"]));
    slider.custom = Some(markers(&["20", "80"]));

    let source = sync(&mut slider);

    assert_eq!(
        source,
        MarkerSource::NativeList {
            scope: NativeScope::Container,
            markers: Collection::Scoped
        }
    );
    assert_eq!(slider.flags(Collection::Scoped), vec![true, false]);
    assert_eq!(slider.flags(Collection::Custom), vec![false, false]);
}

#[test]
fn custom_fallback_only_touches_its_own_container() {
    let mut first = FakeSlider::with_values("30", "0", "100");
    first.custom = Some(markers(&["10", "50"]));
    let mut second = FakeSlider::with_values("90", "0", "100");
    second.custom = Some(markers(&["10", "50"]));

    let source = sync(&mut first);

    assert_eq!(source, MarkerSource::CustomCollection(Collection::Custom));
    assert_eq!(first.flags(Collection::Custom), vec![true, false]);
    assert_eq!(second.flags(Collection::Custom), vec![false, false]);
}

#[test]
fn stale_flags_are_cleared_when_value_drops() {
    let mut slider = FakeSlider::with_values("100", "0", "100");
    slider.custom = Some(markers(&["0", "50", "100"]));
    sync(&mut slider);
    assert_eq!(slider.flags(Collection::Custom), vec![true, true, false]);

    slider.raw.current = Some("50".into());
    sync(&mut slider);
    assert_eq!(slider.flags(Collection::Custom), vec![true, false, false]);
    assert_eq!(slider.progress.as_deref(), Some("50%"));
}

#[test]
fn repeated_sync_is_idempotent() {
    let mut slider = FakeSlider::with_values("42", "0", "84");
    slider.attached = Some(markers(&["0", "42", "84"]));

    sync(&mut slider);
    let progress = slider.progress.clone();
    let flags = slider.flags(Collection::Attached);
    sync(&mut slider);

    assert_eq!(slider.progress, progress);
    assert_eq!(slider.flags(Collection::Attached), flags);
}

#[test]
fn missing_everything_degrades_quietly() {
    let mut slider = FakeSlider {
        raw: RawSlider::default(),
        custom: Some(markers(&["1"])),
        ..FakeSlider::default()
    };

    let source = sync(&mut slider);

    assert_eq!(source, MarkerSource::None);
    assert_eq!(slider.progress.as_deref(), Some("0%"));
    assert_eq!(slider.flags(Collection::Custom), vec![false]);
}

#[test]
fn malformed_fields_and_positions_coerce_to_zero() {
    let mut slider = FakeSlider::with_values("abc", "0", "10");
    slider.custom = Some(vec![
        FakeMarker::default(),
        FakeMarker {
            position: Some("-1".into()),
            below: false,
        },
    ]);

    sync(&mut slider);

    assert_eq!(slider.progress.as_deref(), Some("0%"));
    assert_eq!(slider.flags(Collection::Custom), vec![false, true]);
}

#[test]
fn repeated_initialization_binds_each_control_once() {
    let mut page = FakePage::new(vec![
        Some(FakeSlider::with_values("10", "0", "20")),
        None,
        Some(FakeSlider::with_values("5", "0", "5")),
    ]);

    let first = initialize_all(&mut page);
    let second = initialize_all(&mut page);

    assert_eq!(
        first,
        Ok(InitReport {
            bound: 2,
            resynced: 0,
            missing_control: 1
        })
    );
    assert_eq!(
        second,
        Ok(InitReport {
            bound: 0,
            resynced: 2,
            missing_control: 1
        })
    );
    for slider in page.sliders.iter().flatten() {
        assert!(slider.bound);
        assert_eq!(slider.listeners, 1);
    }
    let progress: Vec<_> = page
        .sliders
        .iter()
        .flatten()
        .map(|slider| slider.progress.clone())
        .collect();
    assert_eq!(progress, vec![Some("50%".to_string()), Some("100%".to_string())]);
}

#[test]
fn initialization_syncs_new_values_on_second_pass() {
    let mut page = FakePage::new(vec![Some(FakeSlider::with_values("1", "0", "4"))]);
    if let Some(slider) = page.slider_mut(0) {
        slider.custom = Some(markers(&["0", "2"]));
    }
    assert!(initialize_all(&mut page).is_ok());

    if let Some(slider) = page.slider_mut(0) {
        slider.raw.current = Some("3".into());
    }
    assert!(initialize_all(&mut page).is_ok());

    let slider = page.slider(0).map(|slider| {
        (
            slider.progress.clone(),
            slider.flags(Collection::Custom),
            slider.listeners,
        )
    });
    assert_eq!(slider, Some((Some("75%".to_string()), vec![true, true], 1)));
}

#[test]
fn failed_container_query_aborts_without_touching_sliders() {
    let mut page = FakePage::new(vec![Some(FakeSlider::with_values("1", "0", "2"))]);
    page.broken_selector = true;

    assert_eq!(initialize_all(&mut page), Err("invalid selector"));
    assert!(
        page.slider(0)
            .is_some_and(|slider| !slider.bound && slider.progress.is_none())
    );
}
