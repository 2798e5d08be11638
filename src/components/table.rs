use super::{SkeletonRow, TableSkeleton};
use crate::{
	data::User,
	state::{AppState, Mode, Msg},
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserTableProps {
	pub state: Rc<AppState>,
	pub dispatch: Callback<Msg>,
}

#[function_component]
pub fn UserTable(UserTableProps { state, dispatch }: &UserTableProps) -> Html {
	let body = match state.is_loading() {
		true => html!(<TableSkeleton />),
		false => html! {<>
			{for state.users.iter().map(|user| {
				if state.is_deleting(user.id) {
					return html!(<SkeletonRow key={user.id.to_string()} />);
				}
				html! {
					<UserRow
						key={user.id.to_string()}
						user={user.clone()}
						editing={state.form.mode() == Mode::Editing(user.id)}
						busy={state.form.is_submitting()}
						dispatch={dispatch.clone()}
					/>
				}
			})}
		</>},
	};
	html! {
		<table class="table is-fullwidth is-hoverable">
			<caption>{"A list of users."}</caption>
			<thead>
				<tr>
					<th>{"Name"}</th>
					<th>{"Username"}</th>
					<th>{"Email"}</th>
					<th>{"Actions"}</th>
				</tr>
			</thead>
			<tbody>{body}</tbody>
		</table>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct UserRowProps {
	user: User,
	editing: bool,
	busy: bool,
	dispatch: Callback<Msg>,
}

#[function_component]
fn UserRow(props: &UserRowProps) -> Html {
	let id = props.user.id;
	html! {
		<tr class={classes!(props.editing.then_some("is-selected"))}>
			<td class="has-text-weight-medium">{&props.user.name}</td>
			<td>{&props.user.username}</td>
			<td>{&props.user.email}</td>
			<td>
				<div class="buttons">
					<button
						class="button is-small is-link"
						disabled={props.busy}
						onclick={props.dispatch.reform(move |_| Msg::Edit(id))}
					>
						{"Update"}
					</button>
					<button
						class="button is-small is-danger"
						onclick={props.dispatch.reform(move |_| Msg::RequestDelete(id))}
					>
						{"Delete"}
					</button>
				</div>
			</td>
		</tr>
	}
}
