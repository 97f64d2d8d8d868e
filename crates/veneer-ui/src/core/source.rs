//! Marker collection resolution.
//!
//! # Design
//! - A native list attached to the control wins, then a native list inside the
//!   slider container, then a custom collection inside the same container.
//! - Lookups run lazily in that order so later lookups are skipped after a hit.
//! - The resolved variant is closed, keeping the fallback policy testable without a DOM.

/// Where a native marker list was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeScope {
    /// The list is referenced by the control itself.
    Control,
    /// The list sits inside the control's slider container.
    Container,
}

/// Resolved marker collection for one slider instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkerSource<M> {
    /// Native marker list.
    NativeList {
        /// Lookup that found the list.
        scope: NativeScope,
        /// Marker handles in document order.
        markers: M,
    },
    /// Custom marker collection used when no native list exists.
    CustomCollection(M),
    /// No markers are associated with the slider.
    None,
}

impl<M> MarkerSource<M> {
    /// Borrow the resolved markers, if any.
    #[must_use]
    pub const fn markers(&self) -> Option<&M> {
        match self {
            Self::NativeList { markers, .. } | Self::CustomCollection(markers) => Some(markers),
            Self::None => None,
        }
    }

    /// Short label for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NativeList {
                scope: NativeScope::Control,
                ..
            } => "native-control",
            Self::NativeList {
                scope: NativeScope::Container,
                ..
            } => "native-container",
            Self::CustomCollection(_) => "custom",
            Self::None => "none",
        }
    }
}

/// Lookups a host environment offers for locating markers.
pub trait MarkerProbe {
    /// Handle type for a located marker collection.
    type Markers;

    /// Native list referenced directly by the control.
    fn control_list(&self) -> Option<Self::Markers>;

    /// Native list scoped to the control's slider container.
    fn container_list(&self) -> Option<Self::Markers>;

    /// Custom marker collection within the same container.
    fn custom_collection(&self) -> Option<Self::Markers>;
}

/// Resolve the marker collection for a slider, first match wins.
#[must_use]
pub fn resolve<H: MarkerProbe>(host: &H) -> MarkerSource<H::Markers> {
    if let Some(markers) = host.control_list() {
        return MarkerSource::NativeList {
            scope: NativeScope::Control,
            markers,
        };
    }
    if let Some(markers) = host.container_list() {
        return MarkerSource::NativeList {
            scope: NativeScope::Container,
            markers,
        };
    }
    host
        .custom_collection()
        .map_or(MarkerSource::None, MarkerSource::CustomCollection)
}
