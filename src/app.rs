use crate::{
	api::UsersApi,
	components::{ConfirmDelete, NoticeStack, UserForm, UserTable},
	config::APP_TITLE,
	state::{AppState, Msg, Request},
};
use derivative::Derivative;
use std::rc::Rc;
use yew::{html, Callback, Component, Context, Html, Properties};

#[derive(Clone, Properties, Derivative)]
#[derivative(PartialEq)]
pub struct AppProps {
	#[derivative(PartialEq(compare_with = "same_api"))]
	pub api: Rc<dyn UsersApi>,
}

fn same_api(a: &Rc<dyn UsersApi>, b: &Rc<dyn UsersApi>) -> bool {
	Rc::ptr_eq(a, b)
}

/// Owns the client state and the queue every remote call goes through.
///
/// Requests are executed one at a time, in the order they were issued, so completions
/// reach the state in the same order the server handled them.
pub struct App {
	state: Rc<AppState>,
	queue: async_channel::Sender<Request>,
}

impl Component for App {
	type Message = Msg;
	type Properties = AppProps;

	fn create(ctx: &Context<Self>) -> Self {
		let (queue, pending) = async_channel::unbounded::<Request>();
		let api = ctx.props().api.clone();
		let on_complete = ctx.link().callback(|msg: Msg| msg);
		crate::util::spawn_local("queue", async move {
			while let Ok(request) = pending.recv().await {
				log::debug!(target: "queue", "sending {request:?}");
				on_complete.emit(request.execute(&*api).await);
			}
			log::debug!(target: "queue", "closed");
			Ok(()) as anyhow::Result<()>
		});
		ctx.link().send_message(Msg::Load);
		Self {
			state: Rc::new(AppState::default()),
			queue,
		}
	}

	fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
		let before = self.state.clone();
		if let Some(request) = Rc::make_mut(&mut self.state).update(msg) {
			if let Err(err) = self.queue.try_send(request) {
				log::error!(target: "queue", "request dropped: {err:?}");
			}
		}
		before != self.state
	}

	fn view(&self, ctx: &Context<Self>) -> Html {
		let dispatch: Callback<Msg> = ctx.link().callback(|msg: Msg| msg);
		let state = &self.state;
		html! {
			<section class="section">
				<div class="container">
					<h1 class="title is-1">{APP_TITLE}</h1>
					<div class="block">
						<UserForm form={state.form.clone()} dispatch={dispatch.clone()} />
					</div>
					<div class="level">
						<div class="level-left" />
						<div class="level-right">
							<button
								class={yew::classes!("button", "is-small", state.is_loading().then_some("is-loading"))}
								disabled={state.is_loading()}
								onclick={dispatch.reform(|_| Msg::Load)}
							>
								{"Refresh"}
							</button>
						</div>
					</div>
					<UserTable state={state.clone()} dispatch={dispatch.clone()} />
					<ConfirmDelete target={state.confirming_delete()} dispatch={dispatch.clone()} />
					<NoticeStack notices={state.notices.clone()} {dispatch} />
				</div>
			</section>
		}
	}
}
