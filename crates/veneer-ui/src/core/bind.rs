//! Bulk slider initialization.
//!
//! A control that is already marked as bound has its listeners, so a repeat
//! initialization only re-synchronizes it.

/// What initialization does with one slider container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindDecision {
    /// Register listeners, mark the control, then synchronize.
    Bind,
    /// Listeners exist already; synchronize only.
    Resync,
    /// No numeric control was found in the container.
    Skip,
}

impl BindDecision {
    /// Decide for a container given what the adapter observed.
    #[must_use]
    pub const fn decide(control_present: bool, already_bound: bool) -> Self {
        match (control_present, already_bound) {
            (false, _) => Self::Skip,
            (true, true) => Self::Resync,
            (true, false) => Self::Bind,
        }
    }
}

/// Totals from one `initialize_all` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Controls that received listeners during this pass.
    pub bound: u32,
    /// Controls that were already bound and only re-synchronized.
    pub resynced: u32,
    /// Containers without a numeric control.
    pub missing_control: u32,
}

impl InitReport {
    /// Count one decision.
    pub const fn record(&mut self, decision: BindDecision) {
        match decision {
            BindDecision::Bind => self.bound += 1,
            BindDecision::Resync => self.resynced += 1,
            BindDecision::Skip => self.missing_control += 1,
        }
    }

    /// Containers visited in this pass.
    #[must_use]
    pub const fn visited(&self) -> u32 {
        self.bound + self.resynced + self.missing_control
    }
}

/// A document holding slider containers, as seen by [`initialize_all`].
pub trait SliderPage {
    /// Handle for a slider container.
    type Container;
    /// Handle for the numeric control inside a container.
    type Control;
    /// Failure enumerating containers.
    type Error;

    /// Every slider container, in document order.
    ///
    /// # Errors
    /// Returns the host error when the containers cannot be enumerated.
    fn containers(&self) -> Result<Vec<Self::Container>, Self::Error>;

    /// The numeric control embedded in `container`, if any.
    fn find_control(&self, container: &Self::Container) -> Option<Self::Control>;

    /// Whether listeners were already registered for `control`.
    fn is_bound(&self, control: &Self::Control) -> bool;

    /// Record that listeners are registered for `control`.
    fn mark_bound(&mut self, control: &Self::Control);

    /// Register synchronization on every value-change event of `control`.
    fn register_listeners(&mut self, control: &Self::Control);

    /// Synchronize `control` against its current state.
    fn synchronize(&mut self, control: &Self::Control);
}

/// Bind and synchronize every slider on `page`, in document order.
///
/// Controls that are already bound are only re-synchronized, so repeated calls
/// never stack listeners.
///
/// # Errors
/// Returns the host error when the containers cannot be enumerated. Individual
/// sliders never fail the pass.
pub fn initialize_all<P: SliderPage>(page: &mut P) -> Result<InitReport, P::Error> {
    let mut report = InitReport::default();
    for (index, container) in page.containers()?.iter().enumerate() {
        let control = page.find_control(container);
        let already_bound = control
            .as_ref()
            .is_some_and(|control| page.is_bound(control));
        let decision = BindDecision::decide(control.is_some(), already_bound);
        report.record(decision);

        let Some(control) = control else {
            tracing::debug!(index, "slider container has no numeric control");
            continue;
        };
        if decision == BindDecision::Bind {
            page.mark_bound(&control);
            page.register_listeners(&control);
        }
        page.synchronize(&control);
    }

    tracing::info!(
        visited = report.visited(),
        bound = report.bound,
        resynced = report.resynced,
        missing_control = report.missing_control,
        "sliders initialized"
    );
    Ok(report)
}
