pub mod input;

pub use input::session::{ACTION_PLAY_NEXT_TRACK, ACTION_SET_MAIN};
pub use input::{
    ActionHandle, ActionSetHandle, ActiveActionSet, ApplicationType, DigitalActionState,
    InputRuntime, InputSession, InputValueHandle, RuntimeError,
};
