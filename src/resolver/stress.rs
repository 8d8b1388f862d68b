//! Stress and viscosity resolution: an ordered fallback over the available models.

use crate::config::ForcesConfig;
use crate::error::ForcesError;
use crate::field::{Dimensions, FieldRegistry, ScalarField, TensorField};
use crate::helper::{dev, two_symm};
use crate::math::Real;
use crate::mesh::Mesh;
use crate::model::{
    CompressibleTurbulenceModel, FluidThermo, IncompressibleTurbulenceModel, ModelRegistry,
    TransportModel,
};
use crate::resolver::density;

/// The provider the deviatoric stress tensor is drawn from this cycle.
///
/// Each variant is a strictly less specific physical model than the one before it.
pub enum StressSource<'a> {
    /// A compressible turbulence closure: its stress is used verbatim.
    CompressibleClosure(&'a dyn CompressibleTurbulenceModel),
    /// An incompressible turbulence closure: its kinematic stress is scaled by the
    /// resolved density.
    IncompressibleClosure(&'a dyn IncompressibleTurbulenceModel),
    /// A thermophysical model: the stress is rebuilt from its dynamic viscosity and
    /// the velocity gradient.
    ThermoTransport(&'a dyn FluidThermo),
    /// A laminar transport model: as above, with `μ = ρ·ν`.
    LaminarTransport(&'a dyn TransportModel),
    /// A constant kinematic viscosity from the transport properties.
    ConstantDictionary(Real),
}

/// The provider the dynamic viscosity is drawn from this cycle.
pub enum ViscositySource<'a> {
    /// A thermophysical model exposing `μ` directly.
    Thermo(&'a dyn FluidThermo),
    /// A laminar transport model: `μ = ρ·ν`.
    Transport(&'a dyn TransportModel),
    /// A constant kinematic viscosity from the transport properties.
    ConstantDictionary(Real),
}

/// Probes the registry for the most physically complete stress provider available.
///
/// The priority order is fixed: compressible closure, incompressible closure, thermo,
/// laminar transport, constant dictionary. This must be re-run every cycle since the
/// active model set can change between cycles.
pub fn stress_source(models: &ModelRegistry) -> Option<StressSource<'_>> {
    if let Some(model) = &models.compressible_turbulence {
        Some(StressSource::CompressibleClosure(&**model))
    } else if let Some(model) = &models.incompressible_turbulence {
        Some(StressSource::IncompressibleClosure(&**model))
    } else if let Some(model) = &models.thermo {
        Some(StressSource::ThermoTransport(&**model))
    } else if let Some(model) = &models.transport {
        Some(StressSource::LaminarTransport(&**model))
    } else if let Some(props) = &models.transport_properties {
        Some(StressSource::ConstantDictionary(props.nu))
    } else {
        None
    }
}

/// Probes the registry for the most physically complete viscosity provider available.
pub fn viscosity_source(models: &ModelRegistry) -> Option<ViscositySource<'_>> {
    if let Some(model) = &models.thermo {
        Some(ViscositySource::Thermo(&**model))
    } else if let Some(model) = &models.transport {
        Some(ViscositySource::Transport(&**model))
    } else if let Some(props) = &models.transport_properties {
        Some(ViscositySource::ConstantDictionary(props.nu))
    } else {
        None
    }
}

/// The conventional registry name of the gradient of the named velocity field.
///
/// Mesh differential operators are the host solver's business; it registers the
/// velocity gradient it already computes under this name for the transport-based
/// stress branches to consume.
pub fn velocity_gradient_name(velocity_name: &str) -> String {
    format!("grad({})", velocity_name)
}

/// Resolves the deviatoric stress tensor in dynamic units for the current cycle.
///
/// Fatal if no stress provider at all is available, or if a branch's required fields
/// (density, velocity gradient) cannot be resolved.
pub fn dev_rho_reff(
    config: &ForcesConfig,
    mesh: &Mesh,
    fields: &FieldRegistry,
    models: &ModelRegistry,
) -> Result<TensorField, ForcesError> {
    match stress_source(models).ok_or(ForcesError::NoStressModel)? {
        StressSource::CompressibleClosure(model) => Ok(model.dev_rho_reff(mesh, fields)),
        StressSource::IncompressibleClosure(model) => {
            let rho = density(config, mesh, fields)?;
            let stress = model.dev_reff(mesh, fields);
            Ok(rho.zip_map(&stress, rho.dimensions * stress.dimensions, |r, t| t * *r))
        }
        StressSource::ThermoTransport(model) => {
            let mu = model.mu(mesh, fields);
            let grad_u = fields.require_tensor(&velocity_gradient_name(&config.velocity_name))?;
            Ok(mu.zip_map(grad_u, mu.dimensions * grad_u.dimensions, |mu, g| {
                dev(&two_symm(g)) * -*mu
            }))
        }
        StressSource::LaminarTransport(model) => {
            let rho = density(config, mesh, fields)?;
            let nu = model.nu(mesh, fields);
            let mu = rho.zip_map(&nu, rho.dimensions * nu.dimensions, |r, n| r * n);
            let grad_u = fields.require_tensor(&velocity_gradient_name(&config.velocity_name))?;
            Ok(mu.zip_map(grad_u, mu.dimensions * grad_u.dimensions, |mu, g| {
                dev(&two_symm(g)) * -*mu
            }))
        }
        StressSource::ConstantDictionary(nu) => {
            let rho = density(config, mesh, fields)?;
            let grad_u = fields.require_tensor(&velocity_gradient_name(&config.velocity_name))?;
            Ok(rho.zip_map(
                grad_u,
                rho.dimensions * Dimensions::KINEMATIC_VISCOSITY * grad_u.dimensions,
                |r, g| dev(&two_symm(g)) * (-r * nu),
            ))
        }
    }
}

/// Resolves the dynamic viscosity field for the current cycle.
///
/// Fatal if no viscosity provider at all is available.
pub fn dynamic_viscosity(
    config: &ForcesConfig,
    mesh: &Mesh,
    fields: &FieldRegistry,
    models: &ModelRegistry,
) -> Result<ScalarField, ForcesError> {
    match viscosity_source(models).ok_or(ForcesError::NoViscosityModel)? {
        ViscositySource::Thermo(model) => Ok(model.mu(mesh, fields)),
        ViscositySource::Transport(model) => {
            let rho = density(config, mesh, fields)?;
            let nu = model.nu(mesh, fields);
            Ok(rho.zip_map(&nu, rho.dimensions * nu.dimensions, |r, n| r * n))
        }
        ViscositySource::ConstantDictionary(nu) => {
            let rho = density(config, mesh, fields)?;
            Ok(rho.map(rho.dimensions * Dimensions::KINEMATIC_VISCOSITY, |r| r * nu))
        }
    }
}
