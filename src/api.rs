use crate::{
	config::{Endpoint, EndpointError},
	data::{User, UserFields, UserId},
	response::{InvalidJson, Response},
};
use futures_util::future::LocalBoxFuture;
use reqwest::Method;

#[cfg(test)]
pub mod mock;

/// Any failure talking to the remote collection. The ui treats all of them alike;
/// the variants exist for the logs.
#[derive(thiserror::Error, Debug)]
pub enum RemoteError {
	#[error(transparent)]
	Request(#[from] reqwest::Error),
	#[error("server responded with {0}")]
	Status(reqwest::StatusCode),
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
}

/// The remote user collection.
pub trait UsersApi {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<User>, RemoteError>>;
	fn create(&self, fields: UserFields) -> LocalBoxFuture<'_, Result<User, RemoteError>>;
	fn update(&self, id: UserId, fields: UserFields) -> LocalBoxFuture<'_, Result<User, RemoteError>>;
	fn delete(&self, id: UserId) -> LocalBoxFuture<'_, Result<(), RemoteError>>;
}

/// [`UsersApi`] over http, following plain REST semantics on `/users`.
#[derive(Clone, Debug)]
pub struct HttpUsers {
	client: reqwest::Client,
	endpoint: Endpoint,
}

impl HttpUsers {
	pub fn new(endpoint: Endpoint) -> Self {
		Self {
			client: reqwest::Client::new(),
			endpoint,
		}
	}

	pub fn from_config() -> Result<Self, EndpointError> {
		Ok(Self::new(Endpoint::from_config()?))
	}

	fn request<T>(&self, method: Method, url: url::Url) -> Response<T> {
		let builder = self.client.request(method, url);
		Response::from(builder.header(reqwest::header::ACCEPT, "application/json"))
	}
}

impl UsersApi for HttpUsers {
	fn list(&self) -> LocalBoxFuture<'_, Result<Vec<User>, RemoteError>> {
		Box::pin(async move {
			let users = self.request::<Vec<User>>(Method::GET, self.endpoint.collection()).send().await?;
			log::debug!(target: "api", "fetched {} users", users.len());
			Ok(users)
		})
	}

	fn create(&self, fields: UserFields) -> LocalBoxFuture<'_, Result<User, RemoteError>> {
		Box::pin(async move {
			let request = self.request::<User>(Method::POST, self.endpoint.collection());
			let user = request.with_json(&fields).send().await?;
			log::debug!(target: "api", "created {:?}", user.id);
			Ok(user)
		})
	}

	fn update(&self, id: UserId, fields: UserFields) -> LocalBoxFuture<'_, Result<User, RemoteError>> {
		Box::pin(async move {
			let request = self.request::<User>(Method::PUT, self.endpoint.item(id));
			let user = request.with_json(&fields.with_id(id)).send().await?;
			log::debug!(target: "api", "updated {id:?}");
			Ok(user)
		})
	}

	fn delete(&self, id: UserId) -> LocalBoxFuture<'_, Result<(), RemoteError>> {
		Box::pin(async move {
			self.request::<()>(Method::DELETE, self.endpoint.item(id)).send_empty().await?;
			log::debug!(target: "api", "deleted {id:?}");
			Ok(())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use wiremock::{
		matchers::{body_json, header, method, path},
		Mock, MockServer, ResponseTemplate,
	};

	async fn users_at(server: &MockServer) -> HttpUsers {
		HttpUsers::new(Endpoint::parse(&server.uri()).unwrap())
	}

	fn alice() -> UserFields {
		UserFields {
			name: "Alice Smith".into(),
			username: "alicesmith".into(),
			email: "alice@example.com".into(),
		}
	}

	#[tokio::test]
	async fn lists_the_collection() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/users"))
			.and(header("accept", "application/json"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!([
				{ "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz", "phone": "1-770" },
				{ "id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv" },
			])))
			.expect(1)
			.mount(&server)
			.await;
		let users = users_at(&server).await.list().await.unwrap();
		assert_eq!(users.iter().map(|user| user.id).collect::<Vec<_>>(), vec![UserId(1), UserId(2)]);
	}

	#[tokio::test]
	async fn server_errors_fail_with_their_status() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/users"))
			.respond_with(ResponseTemplate::new(500).set_body_json(json!([])))
			.mount(&server)
			.await;
		let err = users_at(&server).await.list().await.unwrap_err();
		assert!(matches!(err, RemoteError::Status(status) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR));
	}

	#[tokio::test]
	async fn records_missing_an_id_are_rejected() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/users"))
			.respond_with(ResponseTemplate::new(201).set_body_json(json!({
				"name": "Alice Smith", "username": "alicesmith", "email": "alice@example.com",
			})))
			.mount(&server)
			.await;
		let err = users_at(&server).await.create(alice()).await.unwrap_err();
		assert!(matches!(err, RemoteError::InvalidJson(_)));
	}

	#[tokio::test]
	async fn creates_with_a_utf8_json_body() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/users"))
			.and(header("content-type", "application/json; charset=UTF-8"))
			.and(body_json(json!({ "name": "Alice Smith", "username": "alicesmith", "email": "alice@example.com" })))
			.respond_with(ResponseTemplate::new(201).set_body_json(json!({
				"id": 11, "name": "Alice Smith", "username": "alicesmith", "email": "alice@example.com",
			})))
			.expect(1)
			.mount(&server)
			.await;
		let user = users_at(&server).await.create(alice()).await.unwrap();
		assert_eq!(user, alice().with_id(UserId(11)));
	}

	#[tokio::test]
	async fn updates_put_the_record_with_its_id() {
		let server = MockServer::start().await;
		Mock::given(method("PUT"))
			.and(path("/users/2"))
			.and(header("content-type", "application/json; charset=UTF-8"))
			.and(body_json(json!({
				"id": 2, "name": "Alice Smith", "username": "alicesmith", "email": "alice@example.com",
			})))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"id": 2, "name": "Alice Smith", "username": "alicesmith", "email": "alice@example.com",
			})))
			.expect(1)
			.mount(&server)
			.await;
		let user = users_at(&server).await.update(UserId(2), alice()).await.unwrap();
		assert_eq!(user.id, UserId(2));
	}

	#[tokio::test]
	async fn delete_accepts_an_empty_reply() {
		let server = MockServer::start().await;
		Mock::given(method("DELETE"))
			.and(path("/users/4"))
			.respond_with(ResponseTemplate::new(200))
			.expect(1)
			.mount(&server)
			.await;
		users_at(&server).await.delete(UserId(4)).await.unwrap();
	}

	#[tokio::test]
	async fn delete_of_a_missing_record_reports_the_status() {
		let server = MockServer::start().await;
		Mock::given(method("DELETE"))
			.and(path("/users/4"))
			.respond_with(ResponseTemplate::new(404))
			.mount(&server)
			.await;
		let err = users_at(&server).await.delete(UserId(4)).await.unwrap_err();
		assert!(matches!(err, RemoteError::Status(status) if status == reqwest::StatusCode::NOT_FOUND));
	}
}
