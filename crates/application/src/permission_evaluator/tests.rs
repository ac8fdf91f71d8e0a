use std::sync::Arc;

use planora_core::AppError;
use planora_domain::{
    Action, Actor, Page, PermissionEntry, PermissionTable, Resource, Role, RolePermissionSet,
};

use super::PermissionEvaluator;

fn canonical_evaluator() -> PermissionEvaluator {
    PermissionEvaluator::new(Arc::new(PermissionTable::canonical()))
}

fn actor(id: &str, role: Role) -> Actor {
    match Actor::new(id, role, format!("{id}@example.com")) {
        Ok(actor) => actor,
        Err(error) => panic!("actor fixture should build: {error}"),
    }
}

#[test]
fn missing_actor_is_denied_everything() {
    let evaluator = canonical_evaluator();

    for (resource, action) in PermissionTable::catalog() {
        assert!(!evaluator.has_permission(None, resource, action));
        assert!(!evaluator.has_permission_named(None, resource.as_str(), action.as_str()));
    }
}

#[test]
fn only_super_admin_manages_roles() {
    let evaluator = canonical_evaluator();
    let admin = actor("a1", Role::Admin);
    let super_admin = actor("s1", Role::SuperAdmin);

    assert!(!evaluator.has_permission_named(Some(&admin), "members", "manage_roles"));
    assert!(evaluator.has_permission_named(Some(&super_admin), "members", "manage_roles"));
}

#[test]
fn unknown_vocabulary_fails_closed() {
    let evaluator = canonical_evaluator();
    let super_admin = actor("s1", Role::SuperAdmin);

    assert!(!evaluator.has_permission_named(Some(&super_admin), "expenses", "view"));
    assert!(!evaluator.has_permission_named(Some(&super_admin), "projects", "archive"));
    assert!(!evaluator.has_permission_named(Some(&super_admin), "", ""));
}

#[test]
fn role_without_permission_set_fails_closed() {
    let set = RolePermissionSet::new(
        Role::Admin,
        [PermissionEntry::allow(Resource::Projects, Action::View)],
    );
    let table = set.and_then(|set| PermissionTable::from_sets([set]));
    let Ok(table) = table else {
        panic!("partial table should build");
    };
    let evaluator = PermissionEvaluator::new(Arc::new(table));

    let user = actor("u1", Role::User);
    let admin = actor("a1", Role::Admin);
    assert!(!evaluator.has_permission(Some(&user), Resource::Projects, Action::View));
    assert!(evaluator.has_permission(Some(&admin), Resource::Projects, Action::View));
    assert!(!evaluator.has_permission(Some(&admin), Resource::Projects, Action::Edit));
}

#[test]
fn explicit_deny_entry_is_honored() {
    let set = RolePermissionSet::new(
        Role::User,
        [PermissionEntry::deny(Resource::Tasks, Action::Create)],
    );
    let table = set.and_then(|set| PermissionTable::from_sets([set]));
    let Ok(table) = table else {
        panic!("table should build");
    };
    let evaluator = PermissionEvaluator::new(Arc::new(table));

    assert!(!evaluator.has_permission(Some(&actor("u1", Role::User)), Resource::Tasks, Action::Create));
}

#[test]
fn require_permission_distinguishes_missing_actor_from_denial() {
    let evaluator = canonical_evaluator();
    let user = actor("u1", Role::User);

    assert!(matches!(
        evaluator.require_permission(None, Resource::Projects, Action::View),
        Err(AppError::Unauthorized(_))
    ));
    assert!(matches!(
        evaluator.require_permission(Some(&user), Resource::Projects, Action::Delete),
        Err(AppError::Forbidden(_))
    ));
    assert!(
        evaluator
            .require_permission(Some(&user), Resource::Projects, Action::View)
            .is_ok()
    );
}

#[test]
fn page_access_follows_view_permission() {
    let evaluator = canonical_evaluator();
    let user = actor("u1", Role::User);
    let manager = actor("m1", Role::Manager);

    assert!(evaluator.can_access_page(Some(&user), "dashboard"));
    assert!(evaluator.can_access_page(Some(&user), "project-details"));
    assert!(!evaluator.can_access_page(Some(&user), "performance"));
    assert!(!evaluator.can_access_page(Some(&user), "settings"));
    assert!(evaluator.can_access_page(Some(&manager), "performance"));
    assert!(!evaluator.can_access_page(None, "dashboard"));
}

#[test]
fn unmapped_page_is_denied_even_for_super_admin() {
    let evaluator = canonical_evaluator();
    let super_admin = actor("s1", Role::SuperAdmin);

    assert!(!evaluator.can_access_page(Some(&super_admin), "expenses"));
    assert!(!evaluator.can_access_page(Some(&super_admin), "Dashboard"));
}

#[test]
fn visible_pages_keep_menu_order() {
    let evaluator = canonical_evaluator();
    let super_admin = actor("s1", Role::SuperAdmin);
    let user = actor("u1", Role::User);

    assert_eq!(evaluator.visible_pages(Some(&super_admin)), Page::all().to_vec());
    assert!(!evaluator.visible_pages(Some(&user)).contains(&Page::Settings));
    assert!(evaluator.visible_pages(None).is_empty());
}

#[test]
fn permissions_for_covers_the_catalog() {
    let evaluator = canonical_evaluator();
    let manager = actor("m1", Role::Manager);

    let entries = evaluator.permissions_for(Some(&manager));
    assert_eq!(entries.len(), PermissionTable::catalog().count());
    assert!(entries.contains(&PermissionEntry::allow(
        Resource::MeetingMinutes,
        Action::Delete
    )));
    assert!(entries.contains(&PermissionEntry::deny(Resource::AdminSettings, Action::View)));
    assert!(
        evaluator
            .permissions_for(None)
            .iter()
            .all(|entry| !entry.allowed)
    );
}
