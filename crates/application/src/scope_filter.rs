use planora_domain::{
    Action, Actor, AssignableRecord, MemberRecord, ProjectRecord, Resource, Role,
    duplicate_project_id,
};
use tracing::debug;

use crate::PermissionEvaluator;

/// Record-level narrowing of project and member lists.
///
/// Filters run in memory over snapshots the caller already loaded.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    evaluator: PermissionEvaluator,
}

impl ScopeFilter {
    /// Creates a scope filter that gates through the given evaluator.
    #[must_use]
    pub fn new(evaluator: PermissionEvaluator) -> Self {
        Self { evaluator }
    }

    /// Returns the projects the actor may see.
    ///
    /// SUPER_ADMIN and ADMIN see every project. Other roles see the projects
    /// they are assigned to, resolved in this order:
    /// 1. the explicit assigned-projects list on the actor profile, when it
    ///    is non-empty;
    /// 2. otherwise, projects where the actor is assigned to at least one task.
    #[must_use]
    pub fn accessible_projects(
        &self,
        actor: Option<&Actor>,
        projects: &[ProjectRecord],
    ) -> Vec<ProjectRecord> {
        let Some(actor) = actor else {
            return Vec::new();
        };
        if !self
            .evaluator
            .has_permission(Some(actor), Resource::Projects, Action::View)
        {
            return Vec::new();
        }

        match actor.role() {
            Role::SuperAdmin | Role::Admin => projects.to_vec(),
            Role::Manager | Role::User => {
                let explicit = actor.assigned_projects();
                if explicit.is_empty() {
                    projects
                        .iter()
                        .filter(|project| project.has_task_assignee(actor.id()))
                        .cloned()
                        .collect()
                } else {
                    projects
                        .iter()
                        .filter(|project| explicit.contains(project.id()))
                        .cloned()
                        .collect()
                }
            }
        }
    }

    /// Returns the projects the actor may assign to other members.
    ///
    /// Non-admin actors are limited to projects they are responsable for;
    /// ownerless projects are never assignable by them. A snapshot that
    /// repeats a project id yields nothing.
    #[must_use]
    pub fn assignable_projects(
        &self,
        actor: Option<&Actor>,
        projects: &[ProjectRecord],
    ) -> Vec<ProjectRecord> {
        let Some(actor) = actor else {
            return Vec::new();
        };
        if let Some(project_id) = duplicate_project_id(projects) {
            debug!(%project_id, "project snapshot repeats an id");
            return Vec::new();
        }
        if !self
            .evaluator
            .has_permission(Some(actor), Resource::Members, Action::AssignProjects)
        {
            return Vec::new();
        }

        match actor.role() {
            Role::SuperAdmin | Role::Admin => projects.to_vec(),
            Role::Manager | Role::User => projects
                .iter()
                .filter(|project| project.is_owned_by(actor.id()))
                .cloned()
                .collect(),
        }
    }

    /// Returns whether the actor may administer the target member.
    ///
    /// Nobody manages themself. SUPER_ADMIN manages everyone else, ADMIN only
    /// plain USER members, and other roles nobody.
    #[must_use]
    pub fn can_manage_user(&self, actor: Option<&Actor>, target: &MemberRecord) -> bool {
        let Some(actor) = actor else {
            return false;
        };
        if actor.id() == target.id() {
            debug!(actor_id = %actor.id(), "self-management is not allowed");
            return false;
        }
        if !self
            .evaluator
            .has_permission(Some(actor), Resource::Members, Action::Edit)
        {
            return false;
        }

        match actor.role() {
            Role::SuperAdmin => true,
            Role::Admin => target.role() == Role::User,
            Role::Manager | Role::User => false,
        }
    }

    /// Returns the members the actor may administer.
    #[must_use]
    pub fn manageable_members(
        &self,
        actor: Option<&Actor>,
        members: &[MemberRecord],
    ) -> Vec<MemberRecord> {
        members
            .iter()
            .filter(|member| self.can_manage_user(actor, member))
            .cloned()
            .collect()
    }
}
