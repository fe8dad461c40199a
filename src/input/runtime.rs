use std::path::Path;

use thiserror::Error;

/// Status codes surfaced by the VR runtime. The raw code is carried verbatim
/// so call sites can log exactly what the service reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("runtime init failed (EVRInitError {0})")]
    Init(i32),
    #[error("input interface unavailable (EVRInitError {0})")]
    Interface(i32),
    #[error("input call failed (EVRInputError {0})")]
    Input(i32),
}

/// Opaque handle for one named action, owned for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionHandle(pub u64);

impl ActionHandle {
    pub const INVALID: Self = Self(0);
}

/// Opaque handle for a named group of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSetHandle(pub u64);

impl ActionSetHandle {
    pub const INVALID: Self = Self(0);
}

/// Opaque handle for an input source (a device). The invalid handle doubles
/// as "any device" when used as a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputValueHandle(pub u64);

impl InputValueHandle {
    pub const INVALID: Self = Self(0);
}

/// An action set plus device restriction and priority, submitted verbatim to
/// the per-frame update call. Built once after handle resolution and reused
/// unchanged every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveActionSet {
    pub set: ActionSetHandle,
    pub restricted_to_device: InputValueHandle,
    pub priority: i32,
}

/// The most recent sample for a digital action. Overwritten every poll cycle,
/// no history kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitalActionState {
    /// Whether the action is currently bound and driven by hardware.
    pub active: bool,
    /// Whether the button is currently pressed.
    pub state: bool,
}

/// How the process announces itself to the runtime at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationType {
    /// A full application drawing its own scene.
    Scene,
    /// A utility drawn on top of other applications.
    Overlay,
    /// A process that consumes input without presenting.
    Background,
}

/// The slice of the VR runtime this program depends on.
///
/// Callers invoke the operations in the documented order, check each status,
/// log on non-success, and keep going as if the call had succeeded. Swapping
/// in a scripted fake is what makes the session testable without a headset.
pub trait InputRuntime {
    /// Starts the runtime. Only called when this process owns the runtime
    /// lifecycle; a host application may have initialized it already.
    fn init(&mut self, app_type: ApplicationType) -> Result<(), RuntimeError>;

    /// Registers the action manifest file. The runtime loads and validates
    /// the file itself; the path must be absolute.
    fn set_action_manifest_path(&mut self, path: &Path) -> Result<(), RuntimeError>;

    /// Resolves a handle for a named action declared in the manifest.
    fn action_handle(&mut self, name: &str) -> Result<ActionHandle, RuntimeError>;

    /// Resolves a handle for a named action set declared in the manifest.
    fn action_set_handle(&mut self, name: &str) -> Result<ActionSetHandle, RuntimeError>;

    /// Submits the active action sets so action state reflects current
    /// hardware input. Must run once per polling cycle before any query.
    fn update_action_state(&mut self, sets: &[ActiveActionSet]) -> Result<(), RuntimeError>;

    /// Fetches the current sample for a digital action, optionally
    /// restricted to one device.
    fn digital_action_data(
        &mut self,
        action: ActionHandle,
        restrict_to_device: InputValueHandle,
    ) -> Result<DigitalActionState, RuntimeError>;

    /// Tears the runtime connection down. Handles are released globally by
    /// the runtime, not individually.
    fn shutdown(&mut self);
}
