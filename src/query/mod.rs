//! Hydroelastic contact queries between pairs of tetrahedra.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersect()`] to compute the contact polygon between two tetrahedra.
//! * [`query::pressure()`] to compute the pressure integrated over this polygon.
//! * [`query::contact_patch()`] to compute both at once, along with the patch area
//!   and triangulation.
//!
//! They use the default [`HydroelasticContext`]. Build a context explicitly to
//! change the linear solver or the [`ContactOptions`].
//!
//! # Specific cases
//! The individual pipeline stages are exported as well:
//! [`tetrahedron_plane_intersection`] for the cross-section of a tetrahedron by a
//! plane, the [`clip`] module for projecting and clipping cross-sections, and
//! [`integrate_pressure`] for sampling a potential over a triangulated polygon.
//!
//! [`query::intersect()`]: crate::query::intersect
//! [`query::pressure()`]: crate::query::pressure
//! [`query::contact_patch()`]: crate::query::contact_patch

pub use self::contact_error::ContactError;
pub use self::contact_options::{ContactOptions, PressureIntegration, VertexOnPlane};
pub use self::contact_patch::ContactPatch;
pub use self::hydroelastic_context::{contact_patch, intersect, pressure, HydroelasticContext};
pub use self::plane_intersection::{tetrahedron_plane_intersection, CrossSection};
pub use self::pressure::integrate_pressure;

pub mod clip;
mod contact_error;
mod contact_options;
mod contact_patch;
mod hydroelastic_context;
mod plane_intersection;
mod pressure;
