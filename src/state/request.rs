use super::Msg;
use crate::{
	api::UsersApi,
	data::{UserFields, UserId},
};

/// A remote operation the state machine wants performed.
/// Running it always yields the completion message to feed back into [`super::AppState`].
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
	Fetch,
	Create(UserFields),
	Update(UserId, UserFields),
	Delete(UserId),
}

impl Request {
	pub async fn execute(self, api: &dyn UsersApi) -> Msg {
		match self {
			Self::Fetch => Msg::Fetched(api.list().await),
			Self::Create(fields) => Msg::Created(api.create(fields).await),
			Self::Update(id, fields) => Msg::Updated(id, api.update(id, fields).await),
			Self::Delete(id) => Msg::Deleted(id, api.delete(id).await),
		}
	}
}
