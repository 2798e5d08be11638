use super::{Field, UserFields};
use garde::{Unvalidated, Valid};
use std::collections::BTreeMap;

/// One message per field that failed its rule. Fields that passed have no entry.
#[derive(thiserror::Error, Clone, Debug, Default, PartialEq)]
#[error("invalid fields: {0:?}")]
pub struct FieldErrors(BTreeMap<Field, String>);
impl FieldErrors {
	pub fn get(&self, field: Field) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	fn from_report(report: garde::Report) -> Self {
		let mut errors = BTreeMap::new();
		for (path, error) in report.iter() {
			let path = path.to_string();
			let key = path.split(['.', '[']).next().unwrap_or_default();
			let Some(field) = Field::from_key(key) else {
				log::warn!(target: "validation", "report names unknown field {path:?}");
				continue;
			};
			errors.entry(field).or_insert_with(|| describe(field, error.message()));
		}
		Self(errors)
	}
}

#[cfg(test)]
impl FieldErrors {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.0.keys().copied()
	}
}

fn describe(field: Field, detail: &str) -> String {
	match field {
		Field::Name => format!("Name must be 5 to 50 characters ({detail})."),
		Field::Username => format!("Username must be 3 to 20 characters ({detail})."),
		Field::Email => format!("Email must be a valid address ({detail})."),
	}
}

/// Checks all three fields at once. Either every rule passes and the fields come back
/// wrapped as [`Valid`], or the failing fields are reported; never a partial result.
pub fn validate(fields: UserFields) -> Result<Valid<UserFields>, FieldErrors> {
	Unvalidated::new(fields).validate().map_err(FieldErrors::from_report)
}

/// Validation without consuming the input, used to refresh inline errors as the user types.
pub fn check(fields: &UserFields) -> FieldErrors {
	match validate(fields.clone()) {
		Ok(_) => FieldErrors::default(),
		Err(errors) => errors,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fields(name: &str, username: &str, email: &str) -> UserFields {
		UserFields {
			name: name.into(),
			username: username.into(),
			email: email.into(),
		}
	}

	#[test]
	fn accepts_well_formed_fields() {
		let valid = validate(fields("Alice Smith", "alicesmith", "alice@example.com")).unwrap();
		assert_eq!(valid.name, "Alice Smith");
	}

	#[test]
	fn reports_every_failing_field() {
		let errors = validate(fields("Al", "ab", "x")).unwrap_err();
		assert_eq!(errors.len(), 3);
		assert!(errors.get(Field::Name).is_some());
		assert!(errors.get(Field::Username).is_some());
		assert!(errors.get(Field::Email).is_some());
	}

	#[test]
	fn reports_only_failing_fields() {
		let errors = validate(fields("Alice Smith", "al", "alice@example.com")).unwrap_err();
		assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Username]);
	}

	#[test]
	fn name_bounds_are_inclusive() {
		assert!(check(&fields("abcd", "alice", "a@b.co")).get(Field::Name).is_some());
		assert!(check(&fields("abcde", "alice", "a@b.co")).is_empty());
		assert!(check(&fields(&"n".repeat(50), "alice", "a@b.co")).is_empty());
		assert!(check(&fields(&"n".repeat(51), "alice", "a@b.co")).get(Field::Name).is_some());
	}

	#[test]
	fn username_bounds_are_inclusive() {
		assert!(check(&fields("Alice", "ab", "a@b.co")).get(Field::Username).is_some());
		assert!(check(&fields("Alice", "abc", "a@b.co")).is_empty());
		assert!(check(&fields("Alice", &"u".repeat(20), "a@b.co")).is_empty());
		assert!(check(&fields("Alice", &"u".repeat(21), "a@b.co")).get(Field::Username).is_some());
	}

	#[test]
	fn lengths_count_characters_not_bytes() {
		// five characters, ten bytes
		assert!(check(&fields("ÅÄÖÜß", "ñño", "a@b.co")).is_empty());
	}

	#[test]
	fn rejects_malformed_emails() {
		for email in ["", "x", "alice@", "@example.com", "alice example.com"] {
			let errors = check(&fields("Alice Smith", "alice", email));
			assert!(errors.get(Field::Email).is_some(), "{email:?} should be rejected");
		}
	}

	#[test]
	fn empty_form_fails_everything() {
		assert_eq!(check(&UserFields::default()).len(), 3);
	}
}
