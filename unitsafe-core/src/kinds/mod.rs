//! Built-in kinds.
//!
//! Every kind lives in its own module together with its unit constants and `<Kind>Vector` / `<Kind>Matrix`
//! aliases. All of them are registered in [`Registry::global`](crate::Registry::global).
//!
//! | Relative kind   | Absolute counterpart  |
//! |-----------------|-----------------------|
//! | [`Length`]      | [`Position`]          |
//! | [`Duration`]    | [`Time`]              |
//! | [`Temperature`] | [`AbsoluteTemperature`] |
//! | [`Angle`]       | [`Direction`]         |
//! | [`Mass`], [`Speed`], [`Frequency`], [`Area`], [`Force`], [`Energy`], [`Dimensionless`] | none |
//!
//! [`Length`]: length::Length
//! [`Position`]: position::Position
//! [`Duration`]: duration::Duration
//! [`Time`]: time::Time
//! [`Temperature`]: temperature::Temperature
//! [`AbsoluteTemperature`]: absolute_temperature::AbsoluteTemperature
//! [`Angle`]: angle::Angle
//! [`Direction`]: direction::Direction
//! [`Mass`]: mass::Mass
//! [`Speed`]: speed::Speed
//! [`Frequency`]: frequency::Frequency
//! [`Area`]: area::Area
//! [`Force`]: force::Force
//! [`Energy`]: energy::Energy
//! [`Dimensionless`]: dimensionless::Dimensionless

pub mod absolute_temperature;
pub mod angle;
pub mod area;
pub mod dimensionless;
pub mod direction;
pub mod duration;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod position;
pub mod speed;
pub mod temperature;
pub mod time;

use crate::{Kind, Registry};

fn register<K: Kind>(registry: &Registry) {
    if let Err(err) = registry.register::<K>() {
        log::warn!("built-in kind {} was not registered: {}", K::NAME, err);
    }
}

/// Register every built-in kind in `registry`.
pub(crate) fn register_builtin(registry: &Registry) {
    register::<length::Length>(registry);
    register::<position::Position>(registry);
    register::<duration::Duration>(registry);
    register::<time::Time>(registry);
    register::<temperature::Temperature>(registry);
    register::<absolute_temperature::AbsoluteTemperature>(registry);
    register::<angle::Angle>(registry);
    register::<direction::Direction>(registry);
    register::<mass::Mass>(registry);
    register::<speed::Speed>(registry);
    register::<frequency::Frequency>(registry);
    register::<area::Area>(registry);
    register::<force::Force>(registry);
    register::<energy::Energy>(registry);
    register::<dimensionless::Dimensionless>(registry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_kind_registers_cleanly() {
        let registry = Registry::new();
        register_builtin(&registry);
        assert_eq!(registry.len(), 15);
    }
}
