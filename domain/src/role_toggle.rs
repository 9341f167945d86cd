use crate::ports::discord::Role;
use domain_shared::discord::RoleId;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Grant,
    Revoke,
}

/// Strict XOR toggle: every activation flips the membership, there is no
/// idempotent re-grant.
#[instrument(level = "trace", skip(held_roles))]
pub fn toggle_role(held_roles: &[RoleId], role_id: RoleId) -> ToggleAction {
    if held_roles.contains(&role_id) {
        ToggleAction::Revoke
    } else {
        ToggleAction::Grant
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SelectionDiff {
    pub to_add: Vec<Role>,
    pub to_remove: Vec<Role>,
}

impl SelectionDiff {
    /// An empty diff is reported as "no changes", never as a bare success.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Syncs a member's roles to a submitted selection, scoped to the
/// selector's candidate set: a role is removed only if it belongs to
/// `candidates`, is currently held, and was deselected. Roles outside the
/// candidate set are never touched, so independent selectors coexist.
/// Candidate ids that no longer resolve must be dropped by the caller
/// before the call.
#[instrument(level = "trace", skip_all)]
pub fn sync_selection(
    candidates: &[Role],
    held_roles: &[RoleId],
    submitted: &[RoleId],
) -> SelectionDiff {
    let to_add = candidates
        .iter()
        .filter(|role| submitted.contains(&role.role_id) && !held_roles.contains(&role.role_id))
        .cloned()
        .collect();
    let to_remove = candidates
        .iter()
        .filter(|role| !submitted.contains(&role.role_id) && held_roles.contains(&role.role_id))
        .cloned()
        .collect();

    SelectionDiff { to_add, to_remove }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: u64, name: &str) -> Role {
        Role {
            role_id: RoleId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn two_toggles_return_to_the_original_membership() {
        let role_id = RoleId(10);
        let mut held = vec![RoleId(1), RoleId(2)];
        let before = held.clone();

        match toggle_role(&held, role_id) {
            ToggleAction::Grant => held.push(role_id),
            ToggleAction::Revoke => held.retain(|r| *r != role_id),
        }
        assert!(held.contains(&role_id));

        match toggle_role(&held, role_id) {
            ToggleAction::Grant => held.push(role_id),
            ToggleAction::Revoke => held.retain(|r| *r != role_id),
        }
        assert_eq!(held, before);
    }

    #[test]
    fn toggle_revokes_a_held_role() {
        let held = vec![RoleId(10)];
        assert_eq!(toggle_role(&held, RoleId(10)), ToggleAction::Revoke);
        assert_eq!(toggle_role(&held, RoleId(11)), ToggleAction::Grant);
    }

    #[test]
    fn selection_diff_matches_submitted_subset() {
        let candidates = vec![role(1, "a"), role(2, "b"), role(4, "d")];
        let held = vec![RoleId(1), RoleId(2)];
        let submitted = vec![RoleId(2), RoleId(4)];

        let diff = sync_selection(&candidates, &held, &submitted);

        assert_eq!(diff.to_add, vec![role(4, "d")]);
        assert_eq!(diff.to_remove, vec![role(1, "a")]);
    }

    #[test]
    fn roles_outside_the_candidate_set_are_never_touched() {
        let candidates = vec![role(1, "a"), role(2, "b")];
        // Member also holds 99, which no selector over {1, 2} manages.
        let held = vec![RoleId(1), RoleId(99)];
        let submitted = vec![RoleId(2)];

        let diff = sync_selection(&candidates, &held, &submitted);

        assert_eq!(diff.to_add, vec![role(2, "b")]);
        assert_eq!(diff.to_remove, vec![role(1, "a")]);
        assert!(!diff.to_remove.iter().any(|r| r.role_id == RoleId(99)));
    }

    #[test]
    fn unchanged_selection_yields_an_empty_diff() {
        let candidates = vec![role(1, "a"), role(2, "b")];
        let held = vec![RoleId(1)];
        let submitted = vec![RoleId(1)];

        let diff = sync_selection(&candidates, &held, &submitted);

        assert!(diff.is_empty());
    }
}
