use crate::api::RemoteError;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};

/// A pending request whose json reply is decoded into `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T> {
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		// reqwest keeps an explicit content type, so the charset survives `json`.
		self.builder = self
			.builder
			.header(reqwest::header::CONTENT_TYPE, "application/json; charset=UTF-8")
			.json(json);
		self
	}

	async fn dispatch(self) -> Result<reqwest::Response, RemoteError> {
		let response = self.builder.send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(RemoteError::Status(status));
		}
		Ok(response)
	}

	/// Sends the request, only caring that the server accepted it.
	pub async fn send_empty(self) -> Result<(), RemoteError> {
		self.dispatch().await?;
		Ok(())
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub async fn send(self) -> Result<T, RemoteError> {
		let response = self.dispatch().await?;
		let text = response.text().await?;
		let output = match serde_json::from_str(&text) {
			Ok(data) => data,
			Err(err) => {
				return Err(InvalidJson(text, err).into());
			}
		};
		Ok(output)
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn invalid_json_names_the_payload() {
		let err = serde_json::from_str::<u32>("{}").unwrap_err();
		let message = InvalidJson("{}".into(), err).to_string();
		assert!(message.starts_with("Invalid json: \"{}\""));
	}

	#[test]
	fn write_requests_declare_utf8_json() {
		let builder = reqwest::Client::new().post("http://localhost/users");
		let request = Response::<()>::from(builder)
			.with_json(&serde_json::json!({ "name": "Alice Smith" }))
			.builder
			.build()
			.unwrap();
		let content_type = request.headers().get(reqwest::header::CONTENT_TYPE).unwrap();
		assert_eq!(content_type, "application/json; charset=UTF-8");
		let body = request.body().and_then(|body| body.as_bytes()).unwrap();
		assert_eq!(body, br#"{"name":"Alice Smith"}"#);
	}
}
