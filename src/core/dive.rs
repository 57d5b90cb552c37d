//! Seawater depth to absolute pressure conversion.
//!
//! Every 10 m of seawater adds one atmosphere on top of the surface
//! pressure. Inputs are clamped to the supported dive range rather than
//! rejected, matching the calculator's interactive controls.

pub const SURFACE_PRESSURE_ATM: f64 = 1.0;
pub const METERS_PER_ATM: f64 = 10.0;
pub const MAX_DEPTH_M: f64 = 190.0;
pub const MAX_PRESSURE_ATM: f64 = 20.0;

pub fn pressure_at_depth(depth_m: f64) -> f64 {
    let depth_m = depth_m.clamp(0.0, MAX_DEPTH_M);
    SURFACE_PRESSURE_ATM + depth_m / METERS_PER_ATM
}

pub fn depth_at_pressure(pressure_atm: f64) -> f64 {
    let pressure_atm = pressure_atm.clamp(SURFACE_PRESSURE_ATM, MAX_PRESSURE_ATM);
    (pressure_atm - SURFACE_PRESSURE_ATM) * METERS_PER_ATM
}
