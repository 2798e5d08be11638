use crate::data::{User, UserId};

/// Ordered local mirror of the remote collection.
/// Only ever changed after the server confirmed the matching operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserList(Vec<User>);

impl UserList {
	/// Replaces everything with a freshly fetched collection, keeping the server's order.
	pub fn reset(&mut self, users: Vec<User>) {
		self.0 = users;
	}

	pub fn append(&mut self, user: User) {
		self.0.push(user);
	}

	/// Swaps the first record with `id` for `user`, in place.
	/// Returns false (and changes nothing) if no such record is listed.
	pub fn replace(&mut self, id: UserId, user: User) -> bool {
		let Some(existing) = self.0.iter_mut().find(|existing| existing.id == id) else {
			return false;
		};
		*existing = user;
		true
	}

	pub fn remove(&mut self, id: UserId) -> Option<User> {
		let idx = self.0.iter().position(|user| user.id == id)?;
		Some(self.0.remove(idx))
	}

	pub fn get(&self, id: UserId) -> Option<&User> {
		self.0.iter().find(|user| user.id == id)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, User> {
		self.0.iter()
	}
}

impl std::ops::Deref for UserList {
	type Target = [User];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
