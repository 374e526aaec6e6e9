// spt-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure value in Pa.
#[inline]
pub fn pa_value(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

/// Temperature value in K.
#[inline]
pub fn kelvin_value(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub mod constants {
    use super::*;

    /// Standard atmosphere [Pa]
    pub const ONE_ATM_PA: f64 = 101_325.0;
    /// IUPAC standard-state pressure [Pa]
    pub const ONE_BAR_PA: f64 = 100_000.0;
    /// Reference temperature for tabulated formation data [K]
    pub const T_REF_K: f64 = 298.15;

    #[inline]
    pub fn one_atm() -> Pressure {
        pa(ONE_ATM_PA)
    }

    #[inline]
    pub fn one_bar() -> Pressure {
        pa(ONE_BAR_PA)
    }
}
