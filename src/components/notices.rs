use crate::{
	config::NOTICE_LIFETIME_MS,
	state::{Level, Msg, Notice, NoticeId, Notices},
};
use yew::prelude::*;
use yew_hooks::use_timeout;

#[derive(Clone, PartialEq, Properties)]
pub struct NoticeStackProps {
	pub notices: Notices,
	pub dispatch: Callback<Msg>,
}

#[function_component]
pub fn NoticeStack(NoticeStackProps { notices, dispatch }: &NoticeStackProps) -> Html {
	html! {
		<div class="notice-stack" style="position: fixed; right: 1em; bottom: 1em; z-index: 50; max-width: 24em;">
			{for notices.iter().map(|notice| html! {
				<NoticeItem key={notice.id.to_string()} notice={notice.clone()} dispatch={dispatch.clone()} />
			})}
		</div>
	}
}

/// What a notice does once its lifetime runs out.
fn expire(dispatch: Callback<Msg>, id: NoticeId) -> impl FnOnce() + 'static {
	move || dispatch.emit(Msg::Dismiss(id))
}

#[derive(Clone, PartialEq, Properties)]
struct NoticeItemProps {
	notice: Notice,
	dispatch: Callback<Msg>,
}

#[function_component]
fn NoticeItem(NoticeItemProps { notice, dispatch }: &NoticeItemProps) -> Html {
	let id = notice.id;
	use_timeout(expire(dispatch.clone(), id), NOTICE_LIFETIME_MS);
	let level = match notice.level {
		Level::Success => "is-success",
		Level::Failure => "is-danger",
	};
	html! {
		<div class={classes!("notification", level)}>
			<button class="delete" onclick={dispatch.reform(move |_| Msg::Dismiss(id))} />
			<p class="has-text-weight-bold">{&notice.title}</p>
			<p>{&notice.description}</p>
		</div>
	}
}
