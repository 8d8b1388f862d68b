//! Physical-dimension bookkeeping.

use std::ops::{Div, Mul};

/// The physical dimensions of a field, as mass/length/time exponents.
///
/// The engine branches on dimensions in exactly one place: a pressure field carrying
/// [`Dimensions::PRESSURE`] is dynamic, anything else is treated as kinematic and
/// must be scaled by a uniform reference density. The remaining constants keep the
/// derived fields honest: multiplying a kinematic quantity by a density yields the
/// dynamic counterpart by construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// The mass exponent.
    pub mass: i8,
    /// The length exponent.
    pub length: i8,
    /// The time exponent.
    pub time: i8,
}

impl Dimensions {
    /// A dimensionless quantity.
    pub const NONE: Self = Self::new(0, 0, 0);
    /// Mass per volume.
    pub const DENSITY: Self = Self::new(1, -3, 0);
    /// Dynamic pressure (and dynamic stress).
    pub const PRESSURE: Self = Self::new(1, -1, -2);
    /// Pressure divided by density, as carried by incompressible solvers.
    pub const KINEMATIC_PRESSURE: Self = Self::new(0, 2, -2);
    /// Velocity.
    pub const VELOCITY: Self = Self::new(0, 1, -1);
    /// The gradient of a velocity field.
    pub const VELOCITY_GRADIENT: Self = Self::new(0, 0, -1);
    /// Force.
    pub const FORCE: Self = Self::new(1, 1, -2);
    /// Force per volume.
    pub const FORCE_DENSITY: Self = Self::new(1, -2, -2);
    /// Dynamic viscosity.
    pub const DYNAMIC_VISCOSITY: Self = Self::new(1, -1, -1);
    /// Kinematic viscosity.
    pub const KINEMATIC_VISCOSITY: Self = Self::new(0, 2, -1);

    /// Initializes a dimension set from its mass/length/time exponents.
    pub const fn new(mass: i8, length: i8, time: i8) -> Self {
        Self { mass, length, time }
    }
}

impl Mul for Dimensions {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            mass: self.mass + rhs.mass,
            length: self.length + rhs.length,
            time: self.time + rhs.time,
        }
    }
}

impl Div for Dimensions {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self {
            mass: self.mass - rhs.mass,
            length: self.length - rhs.length,
            time: self.time - rhs.time,
        }
    }
}
