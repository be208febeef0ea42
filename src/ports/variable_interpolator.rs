//! Variable interpolation port.
//!
//! Templates configured on a payment block may reference session variables.
//! The host engine owns the interpolation semantics; the runtime only needs
//! "template in, string out". A missing template interpolates to the empty
//! string, matching the engine's behavior for unset options.

use crate::domain::session::{SessionStore, Variable};

/// Port for substituting session variables into a template string.
pub trait VariableInterpolator: Send + Sync {
    /// Interpolates the template against the given scope. `None` templates
    /// resolve to an empty string.
    fn interpolate(&self, template: Option<&str>, scope: &InterpolationScope<'_>) -> String;
}

/// Everything an interpolator may consult while resolving a template.
pub struct InterpolationScope<'a> {
    /// Current variable bindings of the executing flow.
    pub variables: &'a [Variable],

    /// Session-scoped scratch store for interpolation-time caching.
    pub session_store: &'a SessionStore,
}
