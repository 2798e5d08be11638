use super::{RemoteError, UsersApi};
use crate::data::{User, UserFields, UserId};
use futures_util::future::LocalBoxFuture;
use std::cell::{Cell, RefCell};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
	List,
	Create(UserFields),
	Update(UserId, UserFields),
	Delete(UserId),
}

/// In-memory stand-in for the remote collection.
/// Assigns ids like a typical REST backend and records every call it receives.
pub struct MockUsers {
	pub users: RefCell<Vec<User>>,
	pub calls: RefCell<Vec<Call>>,
	pub next_id: Cell<u64>,
	pub failing: Cell<bool>,
}

impl MockUsers {
	pub fn new(users: Vec<User>) -> Self {
		let next_id = users.iter().map(|user| user.id.0).max().unwrap_or(0) + 1;
		Self {
			users: RefCell::new(users),
			calls: RefCell::new(Vec::new()),
			next_id: Cell::new(next_id),
			failing: Cell::new(false),
		}
	}

	pub fn seeded() -> Self {
		Self::new(vec![
			user(1, "Leanne Graham", "Bret", "Sincere@april.biz"),
			user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
			user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
		])
	}

	pub fn fail(&self, failing: bool) {
		self.failing.set(failing);
	}

	pub fn calls(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}

	fn record(&self, call: Call) -> Result<(), RemoteError> {
		self.calls.borrow_mut().push(call);
		match self.failing.get() {
			true => Err(RemoteError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)),
			false => Ok(()),
		}
	}
}

pub fn user(id: u64, name: &str, username: &str, email: &str) -> User {
	User {
		id: UserId(id),
		name: name.into(),
		username: username.into(),
		email: email.into(),
	}
}

impl UsersApi for MockUsers {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<User>, RemoteError>> {
		Box::pin(async move {
			self.record(Call::List)?;
			Ok(self.users.borrow().clone())
		})
	}

	fn create(&self, fields: UserFields) -> LocalBoxFuture<'_, Result<User, RemoteError>> {
		Box::pin(async move {
			self.record(Call::Create(fields.clone()))?;
			let id = self.next_id.get();
			self.next_id.set(id + 1);
			let user = fields.with_id(UserId(id));
			self.users.borrow_mut().push(user.clone());
			Ok(user)
		})
	}

	fn update(&self, id: UserId, fields: UserFields) -> LocalBoxFuture<'_, Result<User, RemoteError>> {
		Box::pin(async move {
			self.record(Call::Update(id, fields.clone()))?;
			let user = fields.with_id(id);
			let mut users = self.users.borrow_mut();
			match users.iter_mut().find(|existing| existing.id == id) {
				Some(existing) => *existing = user.clone(),
				None => return Err(RemoteError::Status(reqwest::StatusCode::NOT_FOUND)),
			}
			Ok(user)
		})
	}

	fn delete(&self, id: UserId) -> LocalBoxFuture<'_, Result<(), RemoteError>> {
		Box::pin(async move {
			self.record(Call::Delete(id))?;
			self.users.borrow_mut().retain(|user| user.id != id);
			Ok(())
		})
	}
}
