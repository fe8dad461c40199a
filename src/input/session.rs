use std::path::Path;

use log::error;

use super::runtime::{
    ActionHandle, ActionSetHandle, ActiveActionSet, ApplicationType, DigitalActionState,
    InputRuntime, InputValueHandle,
};

/// Action paths resolved against the manifest. These must match the manifest
/// exactly or the runtime hands back invalid handles, sometimes without any
/// error code.
pub const ACTION_SET_MAIN: &str = "/actions/main";
pub const ACTION_PLAY_NEXT_TRACK: &str = "/actions/main/in/PlayNextTrack";

/// Wraps one connection to the VR input runtime and exposes a poll-and-query
/// cycle for the next-track action.
///
/// Error policy throughout: log the status code at the call site and keep
/// going with whatever handle or sample resulted. There is no retry and no
/// fatal path; this mirrors how the runtime degrades in practice, where a
/// missing binding just reports inactive forever.
pub struct InputSession<R: InputRuntime> {
    runtime: R,
    next_track: ActionHandle,
    active_set: ActiveActionSet,
    last_sample: DigitalActionState,
}

impl<R: InputRuntime> InputSession<R> {
    /// Brings the runtime up and resolves the handles the demo needs.
    ///
    /// When `owns_runtime` is false the runtime init is skipped entirely,
    /// for hosts that already initialized it in this process. The manifest
    /// registration and both handle resolutions always run, in that order,
    /// each continuing past its own failure.
    pub fn initialize(mut runtime: R, manifest_path: &Path, owns_runtime: bool) -> Self {
        if owns_runtime {
            if let Err(err) = runtime.init(ApplicationType::Scene) {
                error!("SteamVR init error: {err}");
            }
        }

        if let Err(err) = runtime.set_action_manifest_path(manifest_path) {
            error!("Action manifest error: {err}");
        }

        let next_track = runtime
            .action_handle(ACTION_PLAY_NEXT_TRACK)
            .unwrap_or_else(|err| {
                error!("Handle error: {err}");
                ActionHandle::INVALID
            });

        let main_set = runtime
            .action_set_handle(ACTION_SET_MAIN)
            .unwrap_or_else(|err| {
                error!("Handle error: {err}");
                ActionSetHandle::INVALID
            });

        // Unrestricted device scope and priority 0. Built once here and
        // submitted unchanged every frame.
        let active_set = ActiveActionSet {
            set: main_set,
            restricted_to_device: InputValueHandle::INVALID,
            priority: 0,
        };

        Self {
            runtime,
            next_track,
            active_set,
            last_sample: DigitalActionState::default(),
        }
    }

    /// Submits the active action set so the runtime refreshes action state
    /// from current hardware input. Call once per polling cycle, before
    /// querying.
    pub fn advance_frame(&mut self) {
        if let Err(err) = self
            .runtime
            .update_action_state(std::slice::from_ref(&self.active_set))
        {
            error!("UpdateActionState error: {err}");
        }
    }

    /// Fetches the current sample for the next-track action and returns its
    /// pressed flag. On a failed query the previous sample is kept.
    ///
    /// Prints `Action Set Active!` on every call while the action is bound.
    /// Level-triggered, not edge-triggered, so a bound controller spams the
    /// console and is visible from a distance.
    pub fn poll_next_track(&mut self) -> bool {
        match self
            .runtime
            .digital_action_data(self.next_track, InputValueHandle::INVALID)
        {
            Ok(sample) => self.last_sample = sample,
            Err(err) => error!("GetDigitalActionData error: {err}"),
        }

        if self.last_sample.active {
            println!("Action Set Active!");
        }

        self.last_sample.state
    }

    /// Spins until the next-track action reports pressed, one update and one
    /// query per frame, then prints `Next song set!` once. Returns the number
    /// of frames polled. There is no sleep; pacing comes from whatever
    /// blocking the runtime does internally.
    pub fn run_until_pressed(&mut self) -> u64 {
        let mut frames = 0;
        loop {
            self.advance_frame();
            frames += 1;
            if self.poll_next_track() {
                println!("Next song set!");
                return frames;
            }
        }
    }

    /// Ends this process's connection to the runtime. The runtime itself
    /// keeps running.
    pub fn shutdown(mut self) {
        self.runtime.shutdown();
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }
}
