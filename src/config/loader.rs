//! Leave policy loading.
//!
//! This module provides the [`PolicyLoader`] type for loading a
//! [`LeavePolicy`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::LeavePolicy;

/// Loads a leave policy from a YAML file.
///
/// Every policy field is optional in the file; missing fields resolve to
/// the documented defaults (daily accrual, weekends included, unpaid leave
/// excluded, 21/30 days of annual entitlement), so an empty mapping yields
/// [`LeavePolicy::default`]. The loaded policy is a plain value: callers
/// pass it into each accrual calculation explicitly.
///
/// # File format
///
/// ```text
/// accrual_basis: daily            # or: monthly
/// include_weekends_in_accrual: true
/// exclude_unpaid_leave_from_accrual: true
/// annual_entitlement_before_5y: 21
/// annual_entitlement_after_5y: 30
/// ```
///
/// # Example
///
/// ```no_run
/// use comp_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/leave_policy.yaml")?;
/// let policy = loader.policy();
/// # Ok::<(), comp_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: LeavePolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Errors
    ///
    /// * [`EngineError::PolicyNotFound`] when the file cannot be read.
    /// * [`EngineError::PolicyParseError`] when the file is not valid YAML
    ///   or a field has the wrong type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::PolicyNotFound {
            path: path_str.clone(),
        })?;

        let policy = serde_yaml::from_str(&content).map_err(|e| EngineError::PolicyParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy by value.
    pub fn into_policy(self) -> LeavePolicy {
        self.policy
    }
}
