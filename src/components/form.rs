use crate::{
	data::Field,
	state::{FormState, Mode, Msg},
	util::web_ext::InputExt,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct UserFormProps {
	pub form: FormState,
	pub dispatch: Callback<Msg>,
}

#[function_component]
pub fn UserForm(UserFormProps { form, dispatch }: &UserFormProps) -> Html {
	let onsubmit = dispatch.reform(|ev: SubmitEvent| {
		ev.prevent_default();
		Msg::Submit
	});
	let inputs = Field::all().iter().map(|field| {
		let field = *field;
		html! {
			<FieldInput
				{field}
				value={AttrValue::from(form.fields().get(field).to_owned())}
				error={form.visible_error(field).map(|error| AttrValue::from(error.to_owned()))}
				disabled={form.is_submitting()}
				on_input={dispatch.reform(move |value: String| Msg::Input(field, value))}
			/>
		}
	});
	let submit = match (form.is_submitting(), form.mode()) {
		(true, _) => html! {
			<button class="button is-primary is-loading" type="button" disabled=true>{"Please wait"}</button>
		},
		(false, Mode::Create) => html! {
			<button class="button is-primary" type="submit">{"Submit"}</button>
		},
		(false, Mode::Editing(_)) => html! {
			<button class="button is-primary" type="submit">{"Update"}</button>
		},
	};
	let cancel = match form.mode() {
		Mode::Create => html! {},
		Mode::Editing(_) => html! {
			<div class="control">
				<button
					class="button is-light" type="button"
					disabled={form.is_submitting()}
					onclick={dispatch.reform(|_| Msg::Cancel)}
				>
					{"Cancel"}
				</button>
			</div>
		},
	};
	html! {
		<form {onsubmit} novalidate=true>
			{for inputs}
			<div class="field is-grouped">
				<div class="control">{submit}</div>
				{cancel}
			</div>
		</form>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct FieldInputProps {
	field: Field,
	value: AttrValue,
	error: Option<AttrValue>,
	disabled: bool,
	on_input: Callback<String>,
}

#[function_component]
fn FieldInput(props: &FieldInputProps) -> Html {
	let on_input = props.on_input.clone();
	let oninput = Callback::from(move |ev: InputEvent| {
		if let Some(value) = ev.input_value() {
			on_input.emit(value);
		}
	});
	html! {
		<div class="field">
			<label class="label">{props.field.label()}</label>
			<div class="control">
				<input
					class={classes!("input", props.error.is_some().then_some("is-danger"))}
					type="text"
					name={props.field.key()}
					placeholder={props.field.placeholder()}
					value={props.value.clone()}
					disabled={props.disabled}
					{oninput}
				/>
			</div>
			<p class="help">{props.field.help()}</p>
			{match &props.error {
				Some(error) => html!(<p class="help is-danger">{error.clone()}</p>),
				None => html!(),
			}}
		</div>
	}
}
