use chrono::NaiveDate;
use contracts::domain::role::Role;
use contracts::domain::user::User;

/// Fixed sample set shown when the user list cannot be fetched.
pub fn sample_users() -> Vec<User> {
    let rows = [
        (1, "John", "Perez", "jperez", "john@email.com", 1, "ROLE_ADMIN"),
        (2, "Mary", "Garcia", "mgarcia", "mary@email.com", 2, "ROLE_USER"),
    ];
    rows.into_iter()
        .map(|(id, name, lastname, username, email, role_id, role_name)| User {
            id,
            name: name.to_string(),
            lastname: lastname.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1),
            active: true,
            roles: vec![Role {
                id: role_id,
                name: role_name.to_string(),
                active: true,
            }],
        })
        .collect()
}
