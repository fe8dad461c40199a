use std::ffi::{CStr, CString};
use std::path::Path;

use log::debug;
use openvr_sys as sys;

use super::runtime::{
    ActionHandle, ActionSetHandle, ActiveActionSet, ApplicationType, DigitalActionState,
    InputRuntime, InputValueHandle, RuntimeError,
};

/// Interface revision this module was written against. SteamVR keeps older
/// revisions callable, so a newer runtime still answers this request.
const INPUT_INTERFACE: &CStr = c"FnTable:IVRInput_004";

/// Live backend talking to a running SteamVR instance through the OpenVR
/// C API. The IVRInput function table is fetched lazily so that attaching to
/// a runtime initialized elsewhere in the process also works.
pub struct OpenVrRuntime {
    input: *mut sys::VR_IVRInput_FnTable,
}

impl OpenVrRuntime {
    pub fn new() -> Self {
        Self {
            input: std::ptr::null_mut(),
        }
    }

    fn input_table(&mut self) -> Result<*mut sys::VR_IVRInput_FnTable, RuntimeError> {
        if !self.input.is_null() {
            return Ok(self.input);
        }

        let mut err = sys::EVRInitError_VRInitError_None;
        let raw = unsafe { sys::VR_GetGenericInterface(INPUT_INTERFACE.as_ptr(), &mut err) };
        if raw == 0 || err != sys::EVRInitError_VRInitError_None {
            return Err(RuntimeError::Interface(err as i32));
        }

        debug!("acquired {:?} function table", INPUT_INTERFACE);
        self.input = raw as *mut sys::VR_IVRInput_FnTable;
        Ok(self.input)
    }
}

impl Default for OpenVrRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwraps one function-table entry. Entries are only null when the runtime
/// served an incompatible table revision.
fn entry<T>(f: Option<T>) -> Result<T, RuntimeError> {
    f.ok_or(RuntimeError::Interface(0))
}

fn c_string(s: &str) -> Result<CString, RuntimeError> {
    CString::new(s).map_err(|_| RuntimeError::Input(0))
}

impl InputRuntime for OpenVrRuntime {
    fn init(&mut self, app_type: ApplicationType) -> Result<(), RuntimeError> {
        let ty = match app_type {
            ApplicationType::Scene => sys::EVRApplicationType_VRApplication_Scene,
            ApplicationType::Overlay => sys::EVRApplicationType_VRApplication_Overlay,
            ApplicationType::Background => sys::EVRApplicationType_VRApplication_Background,
        };

        let mut err = sys::EVRInitError_VRInitError_None;
        unsafe { sys::VR_InitInternal(&mut err, ty) };
        if err != sys::EVRInitError_VRInitError_None {
            return Err(RuntimeError::Init(err as i32));
        }

        debug!("OpenVR runtime initialized ({app_type:?})");
        Ok(())
    }

    fn set_action_manifest_path(&mut self, path: &Path) -> Result<(), RuntimeError> {
        let table = self.input_table()?;
        let raw_path = c_string(&path.to_string_lossy())?;

        let f = entry(unsafe { (*table).SetActionManifestPath })?;
        let err = unsafe { f(raw_path.as_ptr() as *mut _) };
        if err != sys::EVRInputError_VRInputError_None {
            return Err(RuntimeError::Input(err as i32));
        }
        Ok(())
    }

    fn action_handle(&mut self, name: &str) -> Result<ActionHandle, RuntimeError> {
        let table = self.input_table()?;
        let raw_name = c_string(name)?;
        let mut handle: sys::VRActionHandle_t = 0;

        let f = entry(unsafe { (*table).GetActionHandle })?;
        let err = unsafe { f(raw_name.as_ptr() as *mut _, &mut handle) };
        if err != sys::EVRInputError_VRInputError_None {
            return Err(RuntimeError::Input(err as i32));
        }
        Ok(ActionHandle(handle))
    }

    fn action_set_handle(&mut self, name: &str) -> Result<ActionSetHandle, RuntimeError> {
        let table = self.input_table()?;
        let raw_name = c_string(name)?;
        let mut handle: sys::VRActionSetHandle_t = 0;

        let f = entry(unsafe { (*table).GetActionSetHandle })?;
        let err = unsafe { f(raw_name.as_ptr() as *mut _, &mut handle) };
        if err != sys::EVRInputError_VRInputError_None {
            return Err(RuntimeError::Input(err as i32));
        }
        Ok(ActionSetHandle(handle))
    }

    fn update_action_state(&mut self, sets: &[ActiveActionSet]) -> Result<(), RuntimeError> {
        let table = self.input_table()?;

        let mut raw_sets: Vec<sys::VRActiveActionSet_t> = sets
            .iter()
            .map(|set| {
                let mut raw: sys::VRActiveActionSet_t = unsafe { std::mem::zeroed() };
                raw.ulActionSet = set.set.0;
                raw.ulRestrictedToDevice = set.restricted_to_device.0;
                raw.nPriority = set.priority;
                raw
            })
            .collect();

        // The struct size must match the digital/analog variant of the call
        // or the runtime rejects it.
        let f = entry(unsafe { (*table).UpdateActionState })?;
        let err = unsafe {
            f(
                raw_sets.as_mut_ptr(),
                std::mem::size_of::<sys::VRActiveActionSet_t>() as u32,
                raw_sets.len() as u32,
            )
        };
        if err != sys::EVRInputError_VRInputError_None {
            return Err(RuntimeError::Input(err as i32));
        }
        Ok(())
    }

    fn digital_action_data(
        &mut self,
        action: ActionHandle,
        restrict_to_device: InputValueHandle,
    ) -> Result<DigitalActionState, RuntimeError> {
        let table = self.input_table()?;
        let mut data: sys::InputDigitalActionData_t = unsafe { std::mem::zeroed() };

        let f = entry(unsafe { (*table).GetDigitalActionData })?;
        let err = unsafe {
            f(
                action.0,
                &mut data,
                std::mem::size_of::<sys::InputDigitalActionData_t>() as u32,
                restrict_to_device.0,
            )
        };
        if err != sys::EVRInputError_VRInputError_None {
            return Err(RuntimeError::Input(err as i32));
        }

        Ok(DigitalActionState {
            active: data.bActive,
            state: data.bState,
        })
    }

    fn shutdown(&mut self) {
        unsafe { sys::VR_ShutdownInternal() };
        self.input = std::ptr::null_mut();
    }
}
