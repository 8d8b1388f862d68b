//! The typed registry of currently available physical models.

use crate::model::{
    CompressibleTurbulenceModel, FluidThermo, IncompressibleTurbulenceModel, PorosityModel,
    TransportModel, TransportProperties,
};

use generational_arena::{Arena, Index};

/// The unique identifier of a porosity model registered in a [`ModelRegistry`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct PorosityHandle(Index);

/// The set of physical models the host solver currently exposes.
///
/// Each slot holds at most one model of its kind; the resolvers probe the slots in a
/// fixed priority order every computation cycle, so swapping a model between cycles
/// (or dropping one by setting its slot to `None`) takes effect on the next cycle
/// without any cached resolution state going stale.
pub struct ModelRegistry {
    /// The compressible turbulence closure, if one is active.
    pub compressible_turbulence: Option<Box<dyn CompressibleTurbulenceModel>>,
    /// The incompressible turbulence closure, if one is active.
    pub incompressible_turbulence: Option<Box<dyn IncompressibleTurbulenceModel>>,
    /// The thermophysical model, if one is active.
    pub thermo: Option<Box<dyn FluidThermo>>,
    /// The laminar transport model, if one is active.
    pub transport: Option<Box<dyn TransportModel>>,
    /// Constant transport properties, the last-resort viscosity source.
    pub transport_properties: Option<TransportProperties>,
    porosity: Arena<Box<dyn PorosityModel>>,
}

impl ModelRegistry {
    /// Initializes a registry with no model available.
    pub fn new() -> Self {
        Self {
            compressible_turbulence: None,
            incompressible_turbulence: None,
            thermo: None,
            transport: None,
            transport_properties: None,
            porosity: Arena::new(),
        }
    }

    /// Registers a porosity model.
    pub fn add_porosity_model(&mut self, model: impl PorosityModel + 'static) -> PorosityHandle {
        PorosityHandle(self.porosity.insert(Box::new(model)))
    }

    /// Removes a previously registered porosity model.
    pub fn remove_porosity_model(
        &mut self,
        handle: PorosityHandle,
    ) -> Option<Box<dyn PorosityModel>> {
        self.porosity.remove(handle.0)
    }

    /// Iterates over all registered porosity models.
    pub fn porosity_models(
        &self,
    ) -> impl Iterator<Item = (PorosityHandle, &dyn PorosityModel)> {
        self.porosity
            .iter()
            .map(|(index, model)| (PorosityHandle(index), &**model))
    }

    /// The number of registered porosity models.
    pub fn num_porosity_models(&self) -> usize {
        self.porosity.len()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
