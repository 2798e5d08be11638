use web_sys::HtmlInputElement;
use yew::TargetCast;

pub trait InputExt {
	/// The current text of the `<input>` this event was fired on.
	fn input_value(&self) -> Option<String>;
}

impl<E> InputExt for E
where
	E: TargetCast,
{
	fn input_value(&self) -> Option<String> {
		self.target_dyn_into::<HtmlInputElement>().map(|input| input.value())
	}
}
