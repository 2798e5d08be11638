mod api;
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
mod app;
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
mod components;
mod config;
mod data;
mod logging;
mod response;
mod state;
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
mod util;

#[cfg(target_family = "wasm")]
fn main() {
	logging::init();
	if let Err(err) = start() {
		log::error!(target: env!("CARGO_PKG_NAME"), "{err:?}");
	}
}

#[cfg(target_family = "wasm")]
fn start() -> anyhow::Result<()> {
	use anyhow::Context;
	let api = api::HttpUsers::from_config().with_context(|| format!("bad api url {:?}", config::API_BASE_URL))?;
	log::info!(target: env!("CARGO_PKG_NAME"), "managing users at {}", config::API_BASE_URL);
	yew::Renderer::<app::App>::with_props(app::AppProps {
		api: std::rc::Rc::new(api),
	})
	.render();
	Ok(())
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	logging::init();
	if let Err(err) = api::HttpUsers::from_config() {
		log::error!(target: env!("CARGO_PKG_NAME"), "bad api url {:?}: {err}", config::API_BASE_URL);
	}
	log::error!(
		target: env!("CARGO_PKG_NAME"),
		"{} renders in the browser; build it for wasm32 with `trunk serve`",
		config::APP_TITLE
	);
}
