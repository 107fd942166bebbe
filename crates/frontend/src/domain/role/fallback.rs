use contracts::domain::role::Role;

/// Fixed sample roles for the picker when the role list cannot be fetched.
pub fn sample_roles() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            name: "ROLE_ADMIN".to_string(),
            active: true,
        },
        Role {
            id: 2,
            name: "ROLE_USER".to_string(),
            active: true,
        },
    ]
}
