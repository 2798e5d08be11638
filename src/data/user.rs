use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a user record.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);
impl std::fmt::Debug for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "UserId({})", self.0)
	}
}
impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A user record as the remote collection returns it.
/// Any additional properties the server sends along are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub name: String,
	pub username: String,
	pub email: String,
}
impl User {
	pub fn fields(&self) -> UserFields {
		UserFields {
			name: self.name.clone(),
			username: self.username.clone(),
			email: self.email.clone(),
		}
	}
}

/// The editable portion of a user; what the form collects and what gets posted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, garde::Validate)]
pub struct UserFields {
	#[garde(length(chars, min = 5, max = 50))]
	pub name: String,
	#[garde(length(chars, min = 3, max = 20))]
	pub username: String,
	#[garde(email)]
	pub email: String,
}
impl UserFields {
	pub fn get(&self, field: Field) -> &str {
		match field {
			Field::Name => &self.name,
			Field::Username => &self.username,
			Field::Email => &self.email,
		}
	}

	pub fn set(&mut self, field: Field, value: String) {
		match field {
			Field::Name => self.name = value,
			Field::Username => self.username = value,
			Field::Email => self.email = value,
		}
	}

	pub fn with_id(self, id: UserId) -> User {
		User {
			id,
			name: self.name,
			username: self.username,
			email: self.email,
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Field {
	Name,
	Username,
	Email,
}
impl Field {
	pub fn all() -> &'static [Self] {
		&[Self::Name, Self::Username, Self::Email]
	}

	/// The property name used both in json bodies and in validation reports.
	pub fn key(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Username => "username",
			Self::Email => "email",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		match key {
			"name" => Some(Self::Name),
			"username" => Some(Self::Username),
			"email" => Some(Self::Email),
			_ => None,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Username => "Username",
			Self::Email => "Email",
		}
	}

	pub fn placeholder(self) -> &'static str {
		match self {
			Self::Name => "Enter the name",
			Self::Username => "Enter the username",
			Self::Email => "Enter the email",
		}
	}

	pub fn help(self) -> &'static str {
		match self {
			Self::Name => "This is the full name.",
			Self::Username => "This is the public display name.",
			Self::Email => "This is the email.",
		}
	}
}
