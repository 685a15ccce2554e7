//! Field-level edit permissions for orders.
//!
//! The matrix is a pure function of the editor's roles. Manager outranks delivery crew,
//! so a user holding both edits like a Manager. Admin alone grants no edit rights.

use crate::model::{OrderField, Role, RoleSet};

const MANAGER_FIELDS: &[OrderField] = &[OrderField::DeliveryCrew];
const CREW_FIELDS: &[OrderField] = &[OrderField::Status];

/// The order fields an editor holding `roles` may change.
pub fn editable_fields(roles: RoleSet) -> &'static [OrderField] {
    if roles.contains(Role::Manager) {
        MANAGER_FIELDS
    } else if roles.contains(Role::DeliveryCrew) {
        CREW_FIELDS
    } else {
        &[]
    }
}

/// The first of `fields` the editor may not change, if any.
pub fn first_forbidden(roles: RoleSet, fields: &[OrderField]) -> Option<OrderField> {
    let allowed = editable_fields(roles);
    fields.iter().copied().find(|field| !allowed.contains(field))
}
