use planora_domain::{
    Action, Actor, AssignableRecord, MemberRecord, PermissionTable, ProjectRecord, Resource, Role,
    duplicate_project_id,
};
use proptest::prelude::*;

use super::AccessControl;

fn actor(value: &str, role: Role) -> Actor {
    match Actor::new(value, role, format!("{value}@example.com")) {
        Ok(actor) => actor,
        Err(error) => panic!("actor fixture should build: {error}"),
    }
}

fn member(value: &str, role: Role) -> MemberRecord {
    match MemberRecord::new(value, role) {
        Ok(member) => member,
        Err(error) => panic!("member fixture should build: {error}"),
    }
}

fn projects_from_owners(owners: &[Option<&str>]) -> Vec<ProjectRecord> {
    owners
        .iter()
        .enumerate()
        .map(|(index, owner)| {
            match ProjectRecord::new(format!("p{index}"), owner.map(str::to_owned)) {
                Ok(project) => project,
                Err(error) => panic!("project fixture should build: {error}"),
            }
        })
        .collect()
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::all().to_vec())
}

fn owner_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![Just(None), Just(Some("c1")), Just(Some("o1"))]
}

fn allowed(access: &AccessControl, role: Role, resource: Resource, action: Action) -> bool {
    access.evaluator().role_allows(role, resource, action)
}

#[test]
fn super_admin_holds_every_user_permission() {
    let access = AccessControl::canonical();

    for (resource, action) in PermissionTable::catalog() {
        if allowed(&access, Role::User, resource, action) {
            assert!(allowed(&access, Role::SuperAdmin, resource, action));
        }
    }
}

#[test]
fn admin_holds_every_user_permission_except_role_management() {
    let access = AccessControl::canonical();

    for (resource, action) in PermissionTable::catalog() {
        if (resource, action) == (Resource::Members, Action::ManageRoles) {
            assert!(!allowed(&access, Role::Admin, resource, action));
            continue;
        }
        if allowed(&access, Role::User, resource, action) {
            assert!(
                allowed(&access, Role::Admin, resource, action),
                "ADMIN lacks {resource}.{action} held by USER"
            );
        }
    }
}

#[test]
fn every_role_has_an_explicit_entry_for_every_pair() {
    let access = AccessControl::canonical();
    let table = access.evaluator().table();

    for role in Role::all() {
        for (resource, action) in PermissionTable::catalog() {
            assert!(table.lookup(*role, resource, action).is_some());
        }
    }
}

proptest! {
    #[test]
    fn unknown_pairs_fail_closed(role in role_strategy(), resource in ".*", action in ".*") {
        let access = AccessControl::canonical();
        let current = actor("c1", role);
        let known = PermissionTable::catalog()
            .any(|(known_resource, known_action)| {
                known_resource.as_str() == resource && known_action.as_str() == action
            });

        prop_assert!(!access.evaluator().has_permission_named(None, &resource, &action));
        if !known {
            prop_assert!(!access.evaluator().has_permission_named(Some(&current), &resource, &action));
        }
    }

    #[test]
    fn nobody_manages_themself(role in role_strategy(), id in "[a-z][a-z0-9]{0,8}") {
        let access = AccessControl::canonical();
        let current = actor(&id, role);

        prop_assert!(!access.scope().can_manage_user(Some(&current), &MemberRecord::from(&current)));
    }

    #[test]
    fn coarse_and_fine_assignment_checks_agree(
        actor_role in role_strategy(),
        target_role in role_strategy(),
        owners in prop::collection::vec(owner_strategy(), 0..6),
    ) {
        let access = AccessControl::canonical();
        let current = actor("c1", actor_role);
        let target = member("t1", target_role);
        let projects = projects_from_owners(&owners);

        let assignable = access
            .scope()
            .assignable_projects(Some(&current), &projects)
            .iter()
            .map(|project| project.id().to_string())
            .collect::<Vec<_>>();

        let mut some_subset_passes = false;
        for mask in 1_u32..(1_u32 << assignable.len()) {
            let subset = assignable
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, project_id)| project_id.clone())
                .collect::<Vec<_>>();
            if access
                .assignments()
                .validate_assignment(&current, &target, &subset, &projects)
                .is_ok()
            {
                some_subset_passes = true;
                break;
            }
        }

        prop_assert_eq!(
            access
                .assignments()
                .can_assign_projects_to_member(Some(&current), &target, &projects),
            some_subset_passes
        );
    }

    #[test]
    fn coarse_and_fine_checks_agree_on_repeated_ids(
        actor_role in role_strategy(),
        records in prop::collection::vec((0_u8..3, owner_strategy()), 1..6),
        requested in prop::collection::vec(0_u8..4, 1..4),
    ) {
        let access = AccessControl::canonical();
        let current = actor("c1", actor_role);
        let target = member("t1", Role::User);
        let projects = records
            .iter()
            .map(|(index, owner)| {
                match ProjectRecord::new(format!("p{index}"), owner.map(str::to_owned)) {
                    Ok(project) => project,
                    Err(error) => panic!("project fixture should build: {error}"),
                }
            })
            .collect::<Vec<_>>();
        let requested = requested
            .iter()
            .map(|index| format!("p{index}"))
            .collect::<Vec<_>>();

        let coarse = access
            .assignments()
            .can_assign_projects_to_member(Some(&current), &target, &projects);
        let fine = access
            .assignments()
            .validate_assignment(&current, &target, &requested, &projects);

        if coarse {
            prop_assert!(duplicate_project_id(&projects).is_none());
        }
        if fine.is_ok() {
            prop_assert!(coarse);
        }
    }

    #[test]
    fn one_foreign_project_denies_the_whole_request(
        owned in 1_usize..4,
        foreign_owner in prop_oneof![Just(None), Just(Some("o1"))],
    ) {
        let access = AccessControl::canonical();
        let owner = actor("c1", Role::User);
        let target = member("t1", Role::User);

        let mut owners = vec![Some("c1"); owned];
        owners.push(foreign_owner);
        let projects = projects_from_owners(&owners);
        let requested = projects
            .iter()
            .map(|project| project.id().to_string())
            .collect::<Vec<_>>();

        let result = access
            .assignments()
            .validate_assignment(&owner, &target, &requested, &projects);
        prop_assert_eq!(result.map_err(|error| error.reason()), Err("ownership"));
    }

    #[test]
    fn decisions_are_idempotent(
        actor_role in role_strategy(),
        target_role in role_strategy(),
        owners in prop::collection::vec(owner_strategy(), 0..5),
    ) {
        let access = AccessControl::canonical();
        let current = actor("c1", actor_role);
        let target = member("t1", target_role);
        let projects = projects_from_owners(&owners);
        let requested = projects
            .iter()
            .map(|project| project.id().to_string())
            .collect::<Vec<_>>();

        prop_assert_eq!(
            access.evaluator().permissions_for(Some(&current)),
            access.evaluator().permissions_for(Some(&current))
        );
        prop_assert_eq!(
            access.scope().assignable_projects(Some(&current), &projects),
            access.scope().assignable_projects(Some(&current), &projects)
        );
        prop_assert_eq!(
            access.scope().can_manage_user(Some(&current), &target),
            access.scope().can_manage_user(Some(&current), &target)
        );
        prop_assert_eq!(
            access.assignments().validate_assignment(&current, &target, &requested, &projects),
            access.assignments().validate_assignment(&current, &target, &requested, &projects)
        );
    }
}
