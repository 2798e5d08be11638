/// Installs the log backend for the current target: the browser console under wasm,
/// the terminal otherwise.
#[cfg(target_family = "wasm")]
pub fn init() {
	wasm_logger::init(wasm_logger::Config::new(crate::config::LOG_LEVEL));
}

#[cfg(not(target_family = "wasm"))]
pub fn init() {
	use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
	if let Err(err) = TermLogger::init(
		crate::config::LOG_LEVEL.to_level_filter(),
		Config::default(),
		TerminalMode::Mixed,
		ColorChoice::Auto,
	) {
		eprintln!("terminal logger not installed: {err}");
	}
}
