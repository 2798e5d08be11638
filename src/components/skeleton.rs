use yew::prelude::*;

/// Stand-in row while its data is on the way or being removed.
#[function_component]
pub fn SkeletonRow() -> Html {
	let cell = || html!(<td><div class="skeleton-lines"><div /></div></td>);
	html! {
		<tr class="is-skeleton-row">
			{cell()}{cell()}{cell()}{cell()}
		</tr>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct TableSkeletonProps {
	#[prop_or(5)]
	pub rows: usize,
}

#[function_component]
pub fn TableSkeleton(TableSkeletonProps { rows }: &TableSkeletonProps) -> Html {
	html! {<>
		{for (0..*rows).map(|_| html!(<SkeletonRow />))}
	</>}
}
