//! Household Role Permissions

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ViewInventory,
    AddItems,
    EditItems,
    DeleteItems,
    ManageCategories,
    ManageShoppingList,
    InviteMembers,
    RemoveMembers,
    HouseholdSettings,
}

impl Permission {
    pub const ALL: [Permission; 9] = [
        Permission::ViewInventory,
        Permission::AddItems,
        Permission::EditItems,
        Permission::DeleteItems,
        Permission::ManageCategories,
        Permission::ManageShoppingList,
        Permission::InviteMembers,
        Permission::RemoveMembers,
        Permission::HouseholdSettings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Permission::ViewInventory => "View Inventory",
            Permission::AddItems => "Add Items",
            Permission::EditItems => "Edit Items",
            Permission::DeleteItems => "Delete Items",
            Permission::ManageCategories => "Manage Categories",
            Permission::ManageShoppingList => "Manage Shopping List",
            Permission::InviteMembers => "Invite Members",
            Permission::RemoveMembers => "Remove Members",
            Permission::HouseholdSettings => "Household Settings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Permission::ViewInventory => "Can view all inventory items",
            Permission::AddItems => "Can add new items to inventory",
            Permission::EditItems => "Can edit existing inventory items",
            Permission::DeleteItems => "Can delete inventory items",
            Permission::ManageCategories => "Can create, edit and delete categories",
            Permission::ManageShoppingList => "Can add and check off shopping list items",
            Permission::InviteMembers => "Can invite new members to the household",
            Permission::RemoveMembers => "Can remove members from the household",
            Permission::HouseholdSettings => "Can modify household settings",
        }
    }
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Admin, Role::Member];

    /// Roles that can be handed out by invitation or role change
    pub const ASSIGNABLE: [Role; 2] = [Role::Admin, Role::Member];

    pub fn has_permission(&self, permission: Permission) -> bool {
        use Permission::*;
        match self {
            Role::Owner => true,
            Role::Admin => !matches!(permission, RemoveMembers | HouseholdSettings),
            Role::Member => matches!(permission, ViewInventory | AddItems | EditItems | ManageShoppingList),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }

    /// Help text under the invite dialog's role picker
    pub fn invite_description(&self) -> &'static str {
        match self {
            Role::Admin => "Admins can manage inventory, categories, and invite members",
            _ => "Members can view and add items to inventory and shopping list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(role: Role) -> usize {
        Permission::ALL.iter().filter(|p| role.has_permission(**p)).count()
    }

    #[test]
    fn owner_holds_every_permission() {
        assert_eq!(granted(Role::Owner), Permission::ALL.len());
    }

    #[test]
    fn admin_and_member_sets() {
        assert_eq!(granted(Role::Admin), 7);
        assert!(Role::Admin.has_permission(Permission::InviteMembers));
        assert!(!Role::Admin.has_permission(Permission::RemoveMembers));

        assert_eq!(granted(Role::Member), 4);
        assert!(Role::Member.has_permission(Permission::ManageShoppingList));
        assert!(!Role::Member.has_permission(Permission::DeleteItems));
    }

    #[test]
    fn roles_are_nested() {
        for p in Permission::ALL {
            if Role::Member.has_permission(p) {
                assert!(Role::Admin.has_permission(p));
            }
            if Role::Admin.has_permission(p) {
                assert!(Role::Owner.has_permission(p));
            }
        }
    }
}
