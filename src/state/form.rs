use super::Request;
use crate::data::{self, Field, FieldErrors, User, UserFields, UserId};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
	#[default]
	Create,
	Editing(UserId),
}

/// Why a submit did not turn into a request.
#[derive(Clone, Debug, PartialEq)]
pub enum Refusal {
	/// A create or update is already in flight.
	Busy,
	Invalid(FieldErrors),
}

/// The form's fields, its create/edit mode and whether a submission is outstanding.
///
/// Validation is re-run on every input so inline errors stay current; they are only
/// shown for fields the user has touched, or for all fields after a submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
	fields: UserFields,
	mode: Mode,
	submitting: bool,
	errors: FieldErrors,
	touched: BTreeSet<Field>,
	attempted: bool,
}

impl Default for FormState {
	fn default() -> Self {
		let fields = UserFields::default();
		Self {
			errors: data::check(&fields),
			fields,
			mode: Mode::default(),
			submitting: false,
			touched: BTreeSet::new(),
			attempted: false,
		}
	}
}

impl FormState {
	pub fn fields(&self) -> &UserFields {
		&self.fields
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	pub fn visible_error(&self, field: Field) -> Option<&str> {
		match self.attempted || self.touched.contains(&field) {
			true => self.errors.get(field),
			false => None,
		}
	}

	pub fn input(&mut self, field: Field, value: String) {
		self.fields.set(field, value);
		self.touched.insert(field);
		self.errors = data::check(&self.fields);
	}

	/// Validates the fields and, if they pass, enters the submitting state and hands
	/// back the request to send. The form keeps its fields until the outcome arrives.
	pub fn submit(&mut self) -> Result<Request, Refusal> {
		if self.submitting {
			return Err(Refusal::Busy);
		}
		self.attempted = true;
		let fields = match data::validate(self.fields.clone()) {
			Ok(valid) => valid.into_inner(),
			Err(errors) => {
				self.errors = errors.clone();
				return Err(Refusal::Invalid(errors));
			}
		};
		self.submitting = true;
		Ok(match self.mode {
			Mode::Create => Request::Create(fields),
			Mode::Editing(id) => Request::Update(id, fields),
		})
	}

	/// Loads `user` into the form for editing. Refused while submitting.
	pub fn edit(&mut self, user: &User) -> bool {
		if self.submitting {
			return false;
		}
		*self = Self {
			mode: Mode::Editing(user.id),
			..Self::with_fields(user.fields())
		};
		true
	}

	/// Drops whatever was entered and goes back to creating. Refused while submitting.
	pub fn cancel(&mut self) -> bool {
		if self.submitting {
			return false;
		}
		self.reset();
		true
	}

	/// The outstanding submission succeeded.
	pub fn submitted(&mut self) {
		self.reset();
	}

	/// The outstanding submission failed; fields and mode stay as they were.
	pub fn rejected(&mut self) {
		self.submitting = false;
	}

	fn reset(&mut self) {
		*self = Self::default();
	}

	fn with_fields(fields: UserFields) -> Self {
		Self {
			errors: data::check(&fields),
			fields,
			..Self::default()
		}
	}
}
