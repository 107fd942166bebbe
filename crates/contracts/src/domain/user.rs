use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::role::Role;
use crate::domain::EntityDraft;
use crate::shared::validation::{
    is_blank, is_valid_email, is_valid_password, FieldErrors, Validate,
};

/// Application user. `roles` is kept duplicate-free by role id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Create/edit form state for a user. The password pair is only validated
/// and sent when `set_password` is on (new user, or an explicit
/// password-change flow).
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub id: Option<i64>,
    pub name: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub birthday: String,
    pub active: bool,
    pub roles: Vec<Role>,
    pub set_password: bool,
    pub password: String,
    pub password_repeat: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            lastname: String::new(),
            username: String::new(),
            email: String::new(),
            birthday: String::new(),
            active: true,
            roles: Vec::new(),
            set_password: false,
            password: String::new(),
            password_repeat: String::new(),
        }
    }
}

impl UserDraft {
    pub fn from_entity(user: &User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name.clone(),
            lastname: user.lastname.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            birthday: user
                .birthday
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            active: user.active,
            roles: user.roles.clone(),
            set_password: false,
            password: String::new(),
            password_repeat: String::new(),
        }
    }

    /// Adds a role to the draft's set. Idempotent by id.
    pub fn add_role(&mut self, role: Role) {
        if !self.roles.iter().any(|r| r.id == role.id) {
            self.roles.push(role);
        }
    }

    /// Removes a role by id. No-op when the id is absent.
    pub fn remove_role(&mut self, id: i64) {
        self.roles.retain(|r| r.id != id);
    }
}

impl Validate for UserDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name".into(), "Name is required".into());
        }
        if is_blank(&self.username) {
            errors.insert("username".into(), "Username is required".into());
        }
        if is_blank(&self.email) {
            errors.insert("email".into(), "Email is required".into());
        } else if !is_valid_email(&self.email) {
            errors.insert("email".into(), "Invalid email format".into());
        }
        if is_blank(&self.birthday) {
            errors.insert("birthday".into(), "Birthday is required".into());
        } else if NaiveDate::parse_from_str(self.birthday.trim(), "%Y-%m-%d").is_err() {
            errors.insert("birthday".into(), "Invalid date".into());
        }
        if self.roles.is_empty() {
            errors.insert("roles".into(), "At least one role is required".into());
        }
        if self.set_password {
            if self.password != self.password_repeat {
                errors.insert("password".into(), "Passwords do not match".into());
            }
            if !is_valid_password(&self.password) {
                errors.insert(
                    "password".into(),
                    "Password must be 8-35 characters with uppercase, lowercase, \
                     a digit and a symbol"
                        .into(),
                );
            }
        }
        errors
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub name: String,
    pub lastname: String,
    pub birthday: Option<NaiveDate>,
    pub active: bool,
    pub roles: Vec<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_repeat: Option<String>,
}

impl EntityDraft for UserDraft {
    type Payload = UserPayload;

    fn to_payload(&self) -> UserPayload {
        UserPayload {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            lastname: self.lastname.clone(),
            birthday: NaiveDate::parse_from_str(self.birthday.trim(), "%Y-%m-%d").ok(),
            active: self.active,
            roles: self.roles.clone(),
            password: self.set_password.then(|| self.password.clone()),
            password_repeat: self.set_password.then(|| self.password_repeat.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: i64) -> Role {
        Role {
            id,
            name: format!("ROLE_{id}"),
            active: true,
        }
    }

    fn valid_draft() -> UserDraft {
        UserDraft {
            name: "Juan".into(),
            lastname: "Perez".into(),
            username: "jperez".into(),
            email: "juan@email.com".into(),
            birthday: "1990-04-02".into(),
            roles: vec![role(1)],
            ..Default::default()
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn each_missing_required_field_is_reported_alone() {
        for field in ["name", "username", "email", "birthday"] {
            let mut draft = valid_draft();
            match field {
                "name" => draft.name.clear(),
                "username" => draft.username.clear(),
                "email" => draft.email.clear(),
                "birthday" => draft.birthday.clear(),
                _ => unreachable!(),
            }
            let errors = draft.validate();
            assert_eq!(errors.keys().collect::<Vec<_>>(), vec![field]);
        }
    }

    #[test]
    fn empty_role_set_is_rejected() {
        let mut draft = valid_draft();
        draft.roles.clear();
        let errors = draft.validate();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["roles"]);
    }

    #[test]
    fn add_role_is_idempotent_and_remove_is_safe() {
        let mut draft = valid_draft();
        draft.add_role(role(2));
        draft.add_role(role(2));
        assert_eq!(draft.roles.iter().filter(|r| r.id == 2).count(), 1);
        draft.remove_role(2);
        assert!(!draft.roles.iter().any(|r| r.id == 2));

        let before = draft.clone();
        draft.remove_role(2);
        assert_eq!(draft, before);
    }

    #[test]
    fn password_pair_checked_only_when_enabled() {
        let mut draft = valid_draft();
        draft.password = "short".into();
        draft.password_repeat = "other".into();
        assert!(draft.validate().is_empty());

        draft.set_password = true;
        assert!(draft.validate().contains_key("password"));

        draft.password = "Abcdef1#".into();
        draft.password_repeat = "Abcdef1#".into();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn payload_includes_password_only_when_enabled() {
        let mut draft = valid_draft();
        draft.set_password = true;
        draft.password = "Abcdef1#".into();
        draft.password_repeat = "Abcdef1#".into();
        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(json["password"], "Abcdef1#");
        assert_eq!(json["passwordRepeat"], "Abcdef1#");

        draft.set_password = false;
        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn payload_parses_birthday() {
        let payload = valid_draft().to_payload();
        assert_eq!(payload.birthday, NaiveDate::from_ymd_opt(1990, 4, 2));
    }
}
