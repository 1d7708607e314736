//! User profile record and its key-value conversions
//!
//! The profile is a loose bag of optional fields. Nothing is required,
//! unique or validated; the only rule is that a mapping may not carry keys
//! the record does not know about.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Opaque reference to another record (a board or a user).
pub type Reference = String;

/// User profile as stored by the pinboard service.
///
/// `password` is held as given, in plain text. It is never hashed here and
/// is redacted from `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserProfile {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub boards: Option<Vec<Reference>>,
    pub followers: Option<Vec<Reference>>,
    pub following: Option<Vec<Reference>>,
    pub created_at: Option<String>,
    pub last_login: Option<String>,
}

impl UserProfile {
    /// Every key a profile mapping may carry, in declaration order.
    pub const FIELDS: [&'static str; 14] = [
        "id",
        "username",
        "email",
        "password",
        "full_name",
        "profile_image",
        "bio",
        "location",
        "website",
        "boards",
        "followers",
        "following",
        "created_at",
        "last_login",
    ];

    pub fn builder() -> UserProfileBuilder {
        UserProfileBuilder::default()
    }

    /// Build a profile from a generic key-value mapping.
    ///
    /// Missing keys and explicit `null`s leave the field unset. Unknown keys
    /// and values of the wrong JSON type are rejected.
    pub fn from_mapping(data: &Map<String, Value>) -> Result<Self> {
        if let Some(unknown) = data.keys().find(|k| !Self::FIELDS.contains(&k.as_str())) {
            return Err(Error::invalid_profile(format!("unknown field `{unknown}`")));
        }

        serde_json::from_value(Value::Object(data.clone()))
            .map_err(|e| Error::invalid_profile(e.to_string()))
    }

    /// Convert to a mapping holding all fourteen keys, `null` where unset.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::with_capacity(Self::FIELDS.len());
        map.insert("id".into(), text(&self.id));
        map.insert("username".into(), text(&self.username));
        map.insert("email".into(), text(&self.email));
        map.insert("password".into(), text(&self.password));
        map.insert("full_name".into(), text(&self.full_name));
        map.insert("profile_image".into(), text(&self.profile_image));
        map.insert("bio".into(), text(&self.bio));
        map.insert("location".into(), text(&self.location));
        map.insert("website".into(), text(&self.website));
        map.insert("boards".into(), references(&self.boards));
        map.insert("followers".into(), references(&self.followers));
        map.insert("following".into(), references(&self.following));
        map.insert("created_at".into(), text(&self.created_at));
        map.insert("last_login".into(), text(&self.last_login));
        map
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn text(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

fn references(value: &Option<Vec<Reference>>) -> Value {
    match value {
        Some(refs) => Value::Array(refs.iter().cloned().map(Value::String).collect()),
        None => Value::Null,
    }
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("full_name", &self.full_name)
            .field("profile_image", &self.profile_image)
            .field("bio", &self.bio)
            .field("location", &self.location)
            .field("website", &self.website)
            .field("boards", &self.boards)
            .field("followers", &self.followers)
            .field("following", &self.following)
            .field("created_at", &self.created_at)
            .field("last_login", &self.last_login)
            .finish()
    }
}

/// Field-by-field constructor for [`UserProfile`].
#[derive(Debug, Default)]
pub struct UserProfileBuilder {
    profile: UserProfile,
}

impl UserProfileBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.profile.id = Some(id.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.profile.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.profile.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.profile.password = Some(password.into());
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.profile.full_name = Some(full_name.into());
        self
    }

    pub fn profile_image(mut self, profile_image: impl Into<String>) -> Self {
        self.profile.profile_image = Some(profile_image.into());
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.profile.bio = Some(bio.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.profile.location = Some(location.into());
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.profile.website = Some(website.into());
        self
    }

    pub fn boards<I, S>(mut self, boards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Reference>,
    {
        self.profile.boards = Some(boards.into_iter().map(Into::into).collect());
        self
    }

    pub fn followers<I, S>(mut self, followers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Reference>,
    {
        self.profile.followers = Some(followers.into_iter().map(Into::into).collect());
        self
    }

    pub fn following<I, S>(mut self, following: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Reference>,
    {
        self.profile.following = Some(following.into_iter().map(Into::into).collect());
        self
    }

    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.profile.created_at = Some(created_at.into());
        self
    }

    pub fn last_login(mut self, last_login: impl Into<String>) -> Self {
        self.profile.last_login = Some(last_login.into());
        self
    }

    pub fn build(self) -> UserProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_empty_mapping_yields_all_nulls() {
        let profile = UserProfile::from_mapping(&Map::new()).unwrap();
        assert!(profile.is_empty());

        let mapping = profile.to_mapping();
        assert_eq!(mapping.len(), UserProfile::FIELDS.len());
        for field in UserProfile::FIELDS {
            assert_eq!(mapping.get(field), Some(&Value::Null), "field {field}");
        }
    }

    #[test]
    fn test_round_trip_extends_with_nulls() {
        let input = object(json!({
            "id": "u-1",
            "username": "pinner",
            "bio": "I collect boards",
            "boards": ["b-1", "b-2"],
            "following": [],
            "created_at": "2024-01-01T00:00:00Z"
        }));

        let profile = UserProfile::from_mapping(&input).unwrap();
        let output = profile.to_mapping();

        for field in UserProfile::FIELDS {
            let expected = input.get(field).cloned().unwrap_or(Value::Null);
            assert_eq!(output[field], expected, "field {field}");
        }
    }

    #[test]
    fn test_explicit_null_is_unset() {
        let input = object(json!({ "email": null, "followers": null }));
        let profile = UserProfile::from_mapping(&input).unwrap();
        assert!(profile.email.is_none());
        assert!(profile.followers.is_none());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let input = object(json!({ "username": "pinner", "pins": ["p-1"] }));
        let err = UserProfile::from_mapping(&input).unwrap_err();
        assert!(matches!(err, Error::InvalidProfile(ref msg) if msg.contains("pins")));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let input = object(json!({ "boards": "b-1" }));
        assert!(matches!(
            UserProfile::from_mapping(&input),
            Err(Error::InvalidProfile(_))
        ));

        let input = object(json!({ "username": 42 }));
        assert!(UserProfile::from_mapping(&input).is_err());
    }

    #[test]
    fn test_builder_matches_mapping() {
        let built = UserProfile::builder()
            .id("u-7")
            .username("ada")
            .email("ada@example.com")
            .followers(["u-1", "u-2"])
            .last_login("2024-06-01T12:00:00Z")
            .build();

        let parsed = UserProfile::from_mapping(&object(json!({
            "id": "u-7",
            "username": "ada",
            "email": "ada@example.com",
            "followers": ["u-1", "u-2"],
            "last_login": "2024-06-01T12:00:00Z"
        })))
        .unwrap();

        assert_eq!(built, parsed);
        assert!(!built.is_empty());
    }

    #[test]
    fn test_serde_shape_matches_to_mapping() {
        let profile = UserProfile::builder()
            .username("ada")
            .boards(["b-1"])
            .build();
        let serialized = serde_json::to_value(&profile).unwrap();
        assert_eq!(serialized, Value::Object(profile.to_mapping()));
    }

    #[test]
    fn test_debug_redacts_password() {
        let profile = UserProfile::builder().password("hunter2").build();
        let rendered = format!("{profile:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
