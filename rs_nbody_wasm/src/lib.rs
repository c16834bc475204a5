// rs_nbody_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the n-body kernel.

use wasm_bindgen::prelude::*;
use js_sys::Float64Array;
use rs_nbody::simulation::NBodySystem;
use rs_nbody::utils::{InvRCheck, SimulationConfig};

#[wasm_bindgen]
pub struct WasmNBody {
    system: NBodySystem,
}

#[wasm_bindgen]
impl WasmNBody {
    /// Builds the jovian system with its momentum cancelled.
    #[wasm_bindgen(constructor)]
    pub fn new(check_inv_r: bool) -> Result<WasmNBody, JsValue> {
        let mode = if check_inv_r { InvRCheck::Enabled } else { InvRCheck::Disabled };
        let mut system = NBodySystem::jovian(SimulationConfig::default().with_inv_r_check(mode))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        system.offset_momentum();
        Ok(Self { system })
    }

    #[wasm_bindgen]
    pub fn simulate(&mut self, steps: usize) -> Result<(), JsValue> {
        self.system.simulate(steps).map_err(|e| {
            let message = e.to_string();
            web_sys::console::warn_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })
    }

    #[wasm_bindgen]
    pub fn energy(&self) -> f64 {
        self.system.energy()
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.system.bodies().len()
    }

    #[wasm_bindgen(getter)]
    pub fn steps_taken(&self) -> usize {
        self.system.steps_taken()
    }

    /// Position of body `index` as `[x, y, z]`, or `undefined` when out of range.
    #[wasm_bindgen]
    pub fn position(&self, index: usize) -> Option<Float64Array> {
        self.system
            .bodies()
            .get(index)
            .map(|body| Float64Array::from(&body.position[..]))
    }
}
