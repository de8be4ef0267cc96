use crate::loader::ResourceError;
use crate::mass_properties::GeometryError;
use crate::math::Real;

/// Error raised when the parameters given to a builder are invalid.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// The name of the rigid body is empty.
    #[error("the rigid body name must not be empty.")]
    EmptyName,
    /// The mass is zero, negative, or not finite.
    #[error("the mass must be strictly positive and finite, got {0}.")]
    NonPositiveMass(Real),
    /// A shape dimension is zero, negative, or not finite.
    #[error("the {dimension} must be strictly positive and finite, got {value}.")]
    NonPositiveDimension {
        /// The name of the dimension (`radius`, `length`, `x`…).
        dimension: &'static str,
        /// The invalid value.
        value: Real,
    },
    /// The mesh scale does not have exactly three components.
    #[error("the mesh scale must have exactly 3 components, got {0}.")]
    InvalidScaleLength(usize),
    /// A component of the mesh scale is zero, negative, or not finite.
    #[error("the mesh scale along axis {axis} must be strictly positive and finite, got {value}.")]
    NonPositiveScale {
        /// The index of the axis (0, 1, or 2).
        axis: usize,
        /// The invalid value.
        value: Real,
    },
}

/// Any error raised by a rigid body builder.
///
/// Each kind of failure is kept in its own variant so that callers can tell
/// invalid parameters, unreadable resources, and degenerate geometry apart.
#[derive(thiserror::Error, Debug)]
pub enum BuilderError {
    /// Invalid builder parameters.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The mesh resource could not be loaded.
    #[error(transparent)]
    Resource(#[from] ResourceError),
    /// The mass properties of the geometry are undefined.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub(crate) fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

pub(crate) fn validate_mass(mass: Real) -> Result<(), ValidationError> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveMass(mass))
    }
}

pub(crate) fn validate_dimension(
    dimension: &'static str,
    value: Real,
) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveDimension { dimension, value })
    }
}

pub(crate) fn validate_scale(scale: &[Real]) -> Result<[Real; 3], ValidationError> {
    let scale: [Real; 3] = scale
        .try_into()
        .map_err(|_| ValidationError::InvalidScaleLength(scale.len()))?;

    for (axis, value) in scale.iter().copied().enumerate() {
        if !(value.is_finite() && value > 0.0) {
            return Err(ValidationError::NonPositiveScale { axis, value });
        }
    }

    Ok(scale)
}
