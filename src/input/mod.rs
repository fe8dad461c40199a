pub mod runtime;
pub mod session;

#[cfg(feature = "openvr")]
pub mod openvr;


pub use runtime::{
    ActionHandle, ActionSetHandle, ActiveActionSet, ApplicationType, DigitalActionState,
    InputRuntime, InputValueHandle, RuntimeError,
};
pub use session::InputSession;
