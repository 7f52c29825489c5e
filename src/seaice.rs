//! Absolute Salinity and Conservative Temperature after melting sea ice
//! (or fresh ice) into seawater.
//!
//! Only the mixing arithmetic lives here. The thermodynamic primitives it
//! needs (freezing points and enthalpies) come from an implementation of
//! [`SeawaterThermo`] supplied by the caller.
//!
//! Units follow the toolbox convention:
//! * Absolute Salinity in g/kg
//! * Conservative and in-situ temperature in deg C (ITS-90)
//! * Sea pressure in dbar (absolute pressure minus 10.1325 dbar)
//! * Specific enthalpy in J/kg
//!
//! ```rust
//! use gsw_util::seaice::{melting_seaice_into_seawater, SeaIce, Seawater, SeawaterThermo};
//!
//! /// Toy linear thermodynamics, just enough to exercise the mixing step
//! struct Linear;
//!
//! impl SeawaterThermo for Linear {
//!     fn ct_freezing(&self, sa: f64, _p: f64, _sat: f64) -> f64 { -0.054 * sa }
//!     fn t_freezing(&self, sa: f64, _p: f64, _sat: f64) -> f64 { -0.054 * sa }
//!     fn sa_freezing_from_t(&self, t: f64, _p: f64, _sat: f64) -> f64 { -t / 0.054 }
//!     fn enthalpy_t_exact(&self, _sa: f64, t: f64, _p: f64) -> f64 { 4000.0 * t }
//!     fn enthalpy_ct_exact(&self, _sa: f64, ct: f64, _p: f64) -> f64 { 4000.0 * ct }
//!     fn enthalpy_ice(&self, t: f64, _p: f64) -> f64 { 2100.0 * t - 333_500.0 }
//!     fn ct_from_enthalpy_exact(&self, _sa: f64, h: f64, _p: f64) -> f64 { h / 4000.0 }
//! }
//!
//! let water = Seawater { sa: 35.0, ct: 2.0, p: 0.0 };
//! let ice = SeaIce { w: 0.01, sa: 5.0, t: -5.0 };
//! let mix = melting_seaice_into_seawater(&Linear, water, ice).unwrap();
//! assert!(mix.sa < 35.0 && mix.ct < 2.0);
//! ```
use thiserror::Error;
use tracing::debug;

/// Value the toolbox writes into outputs that could not be computed.
pub const INVALID_VALUE: f64 = 9e15;

/// Primitive results above this magnitude are error codes, not physical values.
pub const ERROR_LIMIT: f64 = 1e10;

/// Margin below the freezing temperature of the ice's bulk salinity that the ice
/// must reach, so that it holds at least some ice Ih rather than being all brine.
const ICE_MARGIN: f64 = 1e-6;

/// Thermodynamic primitives of seawater and ice.
///
/// Implementations may signal failure by returning a value at or above [`ERROR_LIMIT`],
/// as the toolbox functions do.
pub trait SeawaterThermo {
    /// Conservative Temperature at which seawater freezes.
    fn ct_freezing(&self, sa: f64, p: f64, saturation_fraction: f64) -> f64;

    /// In-situ temperature at which seawater freezes.
    fn t_freezing(&self, sa: f64, p: f64, saturation_fraction: f64) -> f64;

    /// Absolute Salinity of seawater at its freezing in-situ temperature `t`.
    fn sa_freezing_from_t(&self, t: f64, p: f64, saturation_fraction: f64) -> f64;

    /// Specific enthalpy of seawater from in-situ temperature.
    fn enthalpy_t_exact(&self, sa: f64, t: f64, p: f64) -> f64;

    /// Specific enthalpy of seawater from Conservative Temperature.
    fn enthalpy_ct_exact(&self, sa: f64, ct: f64, p: f64) -> f64;

    /// Specific enthalpy of ice Ih.
    fn enthalpy_ice(&self, t: f64, p: f64) -> f64;

    /// Conservative Temperature of seawater with specific enthalpy `h`.
    fn ct_from_enthalpy_exact(&self, sa: f64, h: f64, p: f64) -> f64;
}

/// Seawater before the ice melts into it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seawater {
    /// Absolute Salinity
    pub sa: f64,
    /// Conservative Temperature
    pub ct: f64,
    /// Sea pressure at which the melting occurs
    pub p: f64,
}

/// The melting ice.
///
/// Glacial ice carries no salt and has `sa == 0`. Sea ice typically holds
/// 2 to 12 g/kg of salt in brine pockets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeaIce {
    /// Mass fraction of ice in the final mixture, between 0 and 1
    pub w: f64,
    /// Absolute Salinity of the sea ice (mass of salt over mass of ice plus brine)
    pub sa: f64,
    /// In-situ temperature of the ice
    pub t: f64,
}

/// Properties of the mixed fluid after melting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mixture {
    pub sa: f64,
    pub ct: f64,
}

impl Mixture {
    /// Flatten a result into the toolbox convention, where both outputs carry
    /// the same error value on failure (see [`MeltError::sentinel`]).
    pub fn or_invalid(result: Result<Mixture, MeltError>) -> (f64, f64) {
        match result {
            Ok(Mixture { sa, ct }) => (sa, ct),
            Err(e) => (e.sentinel(), e.sentinel()),
        }
    }
}

/// Reasons the mixture is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MeltError {
    /// The seawater is colder than its own freezing point.
    #[error("seawater is below its freezing temperature")]
    SeawaterBelowFreezing,

    /// The ice is too warm to contain any ice Ih at its salinity.
    #[error("sea ice is not below the freezing temperature of its salinity")]
    IceTooWarm,

    /// The brine salinity at the ice temperature came back as an error value.
    #[error("sa_freezing_from_t failed with error value {code}")]
    BrineSalinity { code: f64 },

    /// The final Conservative Temperature came back as an error value.
    #[error("ct_from_enthalpy_exact failed with error value {code}")]
    FinalTemperature { code: f64 },
}

impl MeltError {
    /// Value the toolbox reports in both outputs for this failure.
    ///
    /// A failed final temperature passes its own error value through;
    /// every other failure reports [`INVALID_VALUE`].
    pub fn sentinel(&self) -> f64 {
        match self {
            MeltError::FinalTemperature { code } => *code,
            _ => INVALID_VALUE,
        }
    }
}

/// Melt a mass fraction of sea ice into seawater, conserving salt and enthalpy.
///
/// The brine trapped in the ice is taken to be in equilibrium with the ice at
/// `ice.t`, so its salinity is the freezing salinity at that temperature.
/// No limit is placed on the pressure or on the ice salinity; choosing
/// physically sensible values (usually `p == 0` for sea ice) is up to the caller.
pub fn melting_seaice_into_seawater<H: SeawaterThermo + ?Sized>(
    thermo: &H,
    water: Seawater,
    ice: SeaIce,
) -> Result<Mixture, MeltError> {
    let Seawater { sa, ct, p } = water;
    let saturation_fraction = 0.0;

    let ctf = thermo.ct_freezing(sa, p, saturation_fraction);
    if ct < ctf {
        debug!(ct, ctf, "seawater below freezing");
        return Err(MeltError::SeawaterBelowFreezing);
    }

    let tf_seaice = thermo.t_freezing(ice.sa, p, saturation_fraction) - ICE_MARGIN;
    if ice.t > tf_seaice {
        debug!(t_seaice = ice.t, tf_seaice, "sea ice is all brine");
        return Err(MeltError::IceTooWarm);
    }

    let sa_brine = thermo.sa_freezing_from_t(ice.t, p, saturation_fraction);
    if sa_brine >= ERROR_LIMIT {
        return Err(MeltError::BrineSalinity { code: sa_brine });
    }
    let h_brine = thermo.enthalpy_t_exact(sa_brine, ice.t, p);

    let h = thermo.enthalpy_ct_exact(sa, ct, p);
    let h_ih = thermo.enthalpy_ice(ice.t, p);

    // Enthalpy and salt are both conserved by the mixing
    let h_final = h - ice.w * (h - h_ih - (h_brine - h_ih) * ice.sa / sa_brine);
    let sa_final = sa - ice.w * (sa - ice.sa);

    let ct_final = thermo.ct_from_enthalpy_exact(sa_final, h_final, p);
    if ct_final > ERROR_LIMIT {
        return Err(MeltError::FinalTemperature { code: ct_final });
    }

    Ok(Mixture {
        sa: sa_final,
        ct: ct_final,
    })
}
