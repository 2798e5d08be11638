use crate::{
	api::RemoteError,
	data::{Field, User, UserId},
};
use std::collections::BTreeSet;

mod form;
pub use form::*;
mod list;
pub use list::*;
mod notice;
pub use notice::*;
mod request;
pub use request::*;

/// Everything that can happen to the app: user commands and remote completions.
#[derive(Debug)]
pub enum Msg {
	Load,
	Input(Field, String),
	Submit,
	Cancel,
	Edit(UserId),
	RequestDelete(UserId),
	DismissDelete,
	ConfirmDelete(UserId),
	Dismiss(NoticeId),
	Fetched(Result<Vec<User>, RemoteError>),
	Created(Result<User, RemoteError>),
	Updated(UserId, Result<User, RemoteError>),
	Deleted(UserId, Result<(), RemoteError>),
}

/// The whole client state. `update` is the only way it changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
	pub users: UserList,
	pub form: FormState,
	pub notices: Notices,
	loading: bool,
	deleting: BTreeSet<UserId>,
	confirming: Option<UserId>,
}

impl AppState {
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn is_deleting(&self, id: UserId) -> bool {
		self.deleting.contains(&id)
	}

	pub fn confirming_delete(&self) -> Option<UserId> {
		self.confirming
	}

	/// Applies `msg`, returning the remote call it calls for, if any.
	pub fn update(&mut self, msg: Msg) -> Option<Request> {
		match msg {
			Msg::Load => {
				if self.loading {
					return None;
				}
				self.loading = true;
				Some(Request::Fetch)
			}
			Msg::Input(field, value) => {
				self.form.input(field, value);
				None
			}
			Msg::Submit => {
				if let Mode::Editing(id) = self.form.mode() {
					if self.deleting.contains(&id) {
						log::debug!(target: "form", "{id:?} is being deleted, not updating it");
						return None;
					}
				}
				match self.form.submit() {
					Ok(request) => Some(request),
					Err(refusal) => {
						log::debug!(target: "form", "submit refused: {refusal:?}");
						None
					}
				}
			}
			Msg::Cancel => {
				self.form.cancel();
				None
			}
			Msg::Edit(id) => {
				if self.deleting.contains(&id) {
					log::debug!(target: "form", "{id:?} is being deleted, not editing it");
					return None;
				}
				if let Some(user) = self.users.get(id) {
					self.form.edit(user);
				}
				None
			}
			Msg::RequestDelete(id) => {
				self.confirming = Some(id);
				None
			}
			Msg::DismissDelete => {
				self.confirming = None;
				None
			}
			Msg::ConfirmDelete(id) => {
				if self.confirming != Some(id) {
					return None;
				}
				self.confirming = None;
				// A second delete of the same record would only race the first.
				if !self.deleting.insert(id) {
					return None;
				}
				Some(Request::Delete(id))
			}
			Msg::Dismiss(id) => {
				self.notices.dismiss(id);
				None
			}
			Msg::Fetched(result) => {
				self.loading = false;
				match result {
					Ok(users) => self.users.reset(users),
					Err(err) => self.failed("load", err),
				}
				None
			}
			Msg::Created(result) => {
				match result {
					Ok(user) => {
						self.notices.success("User Added", format!("{} is successfully added!", user.name));
						self.users.append(user);
						self.form.submitted();
					}
					Err(err) => {
						self.form.rejected();
						self.failed("create", err);
					}
				}
				None
			}
			Msg::Updated(id, result) => {
				match result {
					Ok(user) => {
						self.notices.success("User Updated", format!("{} is successfully updated!", user.name));
						if !self.users.replace(id, user) {
							log::warn!(target: "users", "{id:?} was updated but is no longer listed");
						}
						self.form.submitted();
					}
					Err(err) => {
						self.form.rejected();
						self.failed("update", err);
					}
				}
				// Nothing is left to edit once the record is gone.
				if self.users.get(id).is_none() {
					self.form.cancel();
				}
				None
			}
			Msg::Deleted(id, result) => {
				self.deleting.remove(&id);
				match result {
					Ok(()) => {
						self.users.remove(id);
						self.notices.success("User Deleted", "User is successfully deleted!");
						// The record behind an idle edit is gone, so there is nothing left to update.
						if self.form.mode() == Mode::Editing(id) {
							self.form.cancel();
						}
					}
					Err(err) => self.failed("delete", err),
				}
				None
			}
		}
	}

	fn failed(&mut self, operation: &str, err: RemoteError) {
		log::error!(target: "users", "failed to {operation} users: {err:?}");
		self.notices.failure();
	}
}
