use crate::{data::UserId, state::Msg};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ConfirmDeleteProps {
	/// The record awaiting confirmation, if any.
	pub target: Option<UserId>,
	pub dispatch: Callback<Msg>,
}

#[function_component]
pub fn ConfirmDelete(ConfirmDeleteProps { target, dispatch }: &ConfirmDeleteProps) -> Html {
	let Some(id) = *target else {
		return html! {
			<div class={"modal"} id="users::ConfirmDelete" />
		};
	};
	let dismiss = dispatch.reform(|_| Msg::DismissDelete);
	html! {
		<div class={"modal is-active"} id="users::ConfirmDelete">
			<div class="modal-background" onclick={dismiss.clone()} />
			<div class="modal-card">
				<header class="modal-card-head">
					<p class="modal-card-title">{"Are you absolutely sure?"}</p>
				</header>
				<section class="modal-card-body">
					{"This action cannot be undone. This will permanently delete this data from our servers."}
				</section>
				<footer class="modal-card-foot">
					<div class="buttons">
						<button class="button" onclick={dismiss}>{"Cancel"}</button>
						<button class="button is-danger" onclick={dispatch.reform(move |_| Msg::ConfirmDelete(id))}>
							{"Continue"}
						</button>
					</div>
				</footer>
			</div>
		</div>
	}
}
