use std::collections::{HashMap, HashSet};

use planora_domain::{
    Action, Actor, AssignableRecord, AssignmentError, MemberRecord, ProjectRecord, Resource, Role,
    duplicate_project_id,
};
use tracing::debug;

use crate::{PermissionEvaluator, ScopeFilter};

/// Authorizes assigning a set of projects to a member.
///
/// The guard only decides. Persisting the assignment belongs to the caller.
#[derive(Debug, Clone)]
pub struct AssignmentGuard {
    evaluator: PermissionEvaluator,
    scope: ScopeFilter,
}

impl AssignmentGuard {
    /// Creates a guard from the shared evaluator and scope filter.
    #[must_use]
    pub fn new(evaluator: PermissionEvaluator, scope: ScopeFilter) -> Self {
        Self { evaluator, scope }
    }

    /// Returns whether the assignment control should be offered at all.
    ///
    /// True exactly when some non-empty selection of the actor's assignable
    /// projects would pass [`Self::validate_assignment`].
    #[must_use]
    pub fn can_assign_projects_to_member(
        &self,
        actor: Option<&Actor>,
        target: &MemberRecord,
        projects: &[ProjectRecord],
    ) -> bool {
        let Some(actor) = actor else {
            return false;
        };

        self.check_role_pairing(actor, target).is_ok()
            && !self
                .scope
                .assignable_projects(Some(actor), projects)
                .is_empty()
    }

    /// Validates a concrete assignment request as a whole.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. the actor may pair with the target's role;
    /// 2. the project snapshot lists every id once;
    /// 3. for ownership-scoped actors, every requested project that exists is
    ///    one the actor is responsable for;
    /// 4. every requested id resolves to a project.
    ///
    /// A request that fails any check is denied entirely; no subset is ever
    /// authorized. Repeated ids count once.
    pub fn validate_assignment(
        &self,
        actor: &Actor,
        target: &MemberRecord,
        requested_project_ids: &[String],
        projects: &[ProjectRecord],
    ) -> Result<(), AssignmentError> {
        let result = self.run_checks(actor, target, requested_project_ids, projects);

        if let Err(error) = &result {
            debug!(
                actor_id = %actor.id(),
                target_id = %target.id(),
                reason = error.reason(),
                "project assignment denied"
            );
        }

        result
    }

    fn run_checks(
        &self,
        actor: &Actor,
        target: &MemberRecord,
        requested_project_ids: &[String],
        projects: &[ProjectRecord],
    ) -> Result<(), AssignmentError> {
        self.check_role_pairing(actor, target)?;

        if let Some(project_id) = duplicate_project_id(projects) {
            return Err(AssignmentError::DuplicateProject {
                project_id: project_id.to_string(),
            });
        }

        let mut seen = HashSet::new();
        let requested = requested_project_ids
            .iter()
            .map(String::as_str)
            .filter(|project_id| seen.insert(*project_id))
            .collect::<Vec<_>>();

        let index = projects
            .iter()
            .map(|project| (project.id().as_str(), project))
            .collect::<HashMap<_, _>>();

        if !actor.role().has_workspace_scope() {
            let not_managed = requested
                .iter()
                .filter_map(|project_id| index.get(project_id))
                .filter(|project| !project.is_owned_by(actor.id()))
                .map(|project| project.id().to_string())
                .collect::<Vec<_>>();

            if !not_managed.is_empty() {
                return Err(AssignmentError::ProjectsNotManaged {
                    project_ids: not_managed,
                });
            }
        }

        if let Some(unknown) = requested
            .iter()
            .find(|project_id| !index.contains_key(*project_id))
        {
            return Err(AssignmentError::UnknownProject {
                project_id: (*unknown).to_owned(),
            });
        }

        if requested.is_empty() {
            return Err(AssignmentError::NothingRequested);
        }

        Ok(())
    }

    fn check_role_pairing(
        &self,
        actor: &Actor,
        target: &MemberRecord,
    ) -> Result<(), AssignmentError> {
        let holds_permission =
            self.evaluator
                .has_permission(Some(actor), Resource::Members, Action::AssignProjects);
        let pairing_allowed = match actor.role() {
            Role::SuperAdmin => true,
            Role::Admin | Role::Manager | Role::User => target.role() == Role::User,
        };

        if holds_permission && pairing_allowed {
            return Ok(());
        }

        Err(AssignmentError::RoleNotAssignable {
            actor_role: actor.role(),
            target_role: target.role(),
        })
    }
}
