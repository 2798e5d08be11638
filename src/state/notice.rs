#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
	Success,
	Failure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(u64);
impl std::fmt::Display for NoticeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "notice-{}", self.0)
	}
}

/// A transient, dismissible message about the outcome of a remote operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
	pub id: NoticeId,
	pub level: Level,
	pub title: String,
	pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
	next_id: u64,
	items: Vec<Notice>,
}

impl Notices {
	pub fn push(&mut self, level: Level, title: impl Into<String>, description: impl Into<String>) -> NoticeId {
		let id = NoticeId(self.next_id);
		self.next_id += 1;
		self.items.push(Notice {
			id,
			level,
			title: title.into(),
			description: description.into(),
		});
		id
	}

	pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) -> NoticeId {
		self.push(Level::Success, title, description)
	}

	pub fn failure(&mut self) -> NoticeId {
		self.push(
			Level::Failure,
			"Error!",
			"There was a problem with your request, please try again.",
		)
	}

	pub fn dismiss(&mut self, id: NoticeId) -> bool {
		let count = self.items.len();
		self.items.retain(|notice| notice.id != id);
		self.items.len() != count
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Notice> {
		self.items.iter()
	}
}

#[cfg(test)]
impl Notices {
	pub fn last(&self) -> Option<&Notice> {
		self.items.last()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_never_reused() {
		let mut notices = Notices::default();
		let first = notices.failure();
		assert!(notices.dismiss(first));
		let second = notices.success("User Deleted", "User is successfully deleted!");
		assert_ne!(first, second);
		assert_eq!(notices.len(), 1);
	}

	#[test]
	fn dismissing_twice_is_harmless() {
		let mut notices = Notices::default();
		let id = notices.failure();
		assert!(notices.dismiss(id));
		assert!(!notices.dismiss(id));
		assert!(notices.is_empty());
	}
}
