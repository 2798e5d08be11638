use url::Url;

pub static APP_TITLE: &str = "User Management App";

/// Root of the remote collection. Override at build time with `USERS_API_URL`.
pub static API_BASE_URL: &str = match option_env!("USERS_API_URL") {
	Some(url) => url,
	None => "https://jsonplaceholder.typicode.com",
};

pub static COLLECTION: &str = "users";

/// How long a notice stays on screen before it dismisses itself.
pub static NOTICE_LIFETIME_MS: u32 = 5000;

pub static LOG_LEVEL: log::Level = log::Level::Debug;

/// Builds the collection and item urls of the remote user collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
	base: Url,
}

#[derive(thiserror::Error, Debug)]
pub enum EndpointError {
	#[error(transparent)]
	Parse(#[from] url::ParseError),
	#[error("{0} cannot be used as a base url")]
	NotABase(Url),
}

impl Endpoint {
	pub fn parse(base: &str) -> Result<Self, EndpointError> {
		let base = Url::parse(base)?;
		if base.cannot_be_a_base() {
			return Err(EndpointError::NotABase(base));
		}
		Ok(Self { base })
	}

	pub fn from_config() -> Result<Self, EndpointError> {
		Self::parse(API_BASE_URL)
	}

	fn with_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
		let mut url = self.base.clone();
		// `parse` already rejected cannot-be-a-base urls, so segments are always available.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}
		url
	}

	pub fn collection(&self) -> Url {
		self.with_segments([COLLECTION])
	}

	pub fn item(&self, id: impl std::fmt::Display) -> Url {
		let id = id.to_string();
		self.with_segments([COLLECTION, id.as_str()])
	}
}
