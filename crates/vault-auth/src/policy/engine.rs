//! Ownership policy engine.
//!
//! One [`OwnershipChecker`] per resource kind, registered at startup and
//! composed here. This replaces per-resource authorization components
//! with a single capability interface; an endpoint needing ownership of
//! several resources at once expresses that as a conjunction of targets.

use std::collections::HashMap;
use std::sync::Arc;

use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::traits::OwnershipChecker;
use vault_core::types::resource::ResourceKind;

use crate::identity::Identity;

/// Evaluates ownership-based authorization decisions.
pub struct PolicyEngine {
    /// One checker per participating resource kind.
    checkers: HashMap<ResourceKind, Arc<dyn OwnershipChecker>>,
}

/// Builder collecting ownership checkers at startup.
#[derive(Default)]
pub struct PolicyEngineBuilder {
    checkers: HashMap<ResourceKind, Arc<dyn OwnershipChecker>>,
}

impl PolicyEngineBuilder {
    /// Registers the checker for a resource kind.
    pub fn register(mut self, kind: ResourceKind, checker: Arc<dyn OwnershipChecker>) -> Self {
        self.checkers.insert(kind, checker);
        self
    }

    /// Finalizes the engine.
    pub fn build(self) -> PolicyEngine {
        PolicyEngine {
            checkers: self.checkers,
        }
    }
}

impl PolicyEngine {
    /// Starts building an engine.
    pub fn builder() -> PolicyEngineBuilder {
        PolicyEngineBuilder::default()
    }

    /// Returns whether the identity owns the given resource.
    ///
    /// The owner is re-fetched on every call; no decision is ever made
    /// from stale ownership data. A resource that does not exist passes
    /// the check: the not-found outcome belongs to the operation itself,
    /// not to authorization, so a missing resource must surface as 404
    /// downstream rather than being masked as a 403 here. The check's
    /// only job is to prevent cross-user tampering on resources that do
    /// exist.
    pub async fn is_owner(
        &self,
        identity: &Identity,
        kind: ResourceKind,
        resource_id: i64,
    ) -> AppResult<bool> {
        let checker = self.checkers.get(&kind).ok_or_else(|| {
            AppError::configuration(format!(
                "No ownership checker registered for resource kind '{kind}'"
            ))
        })?;

        match checker.owner_of(resource_id).await? {
            Some(owner_id) => Ok(owner_id == identity.user_id),
            None => Ok(true),
        }
    }

    /// Requires ownership of a single resource.
    ///
    /// Returns `ErrorKind::Forbidden` on denial; the response never
    /// reveals who the actual owner is.
    pub async fn require_owner(
        &self,
        identity: &Identity,
        kind: ResourceKind,
        resource_id: i64,
    ) -> AppResult<()> {
        if self.is_owner(identity, kind, resource_id).await? {
            Ok(())
        } else {
            Err(AppError::forbidden("Forbidden"))
        }
    }

    /// Requires ownership of every listed resource.
    ///
    /// Each target is resolved independently and all must pass; used for
    /// operations spanning heterogeneous kinds, such as attaching a tag
    /// to a snippet.
    pub async fn require_owner_all(
        &self,
        identity: &Identity,
        targets: &[(ResourceKind, i64)],
    ) -> AppResult<()> {
        for (kind, resource_id) in targets {
            self.require_owner(identity, *kind, *resource_id).await?;
        }
        Ok(())
    }
}
