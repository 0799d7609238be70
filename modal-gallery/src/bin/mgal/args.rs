//! Command-line argument parsing.

use modal_gallery::StartupAction;

/// Parse command-line arguments and determine the startup action.
pub fn parse_args() -> StartupAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    startup_action_from(&args)
}

/// Map arguments to a startup action.
///
/// The first argument is a location to visit directly; extra arguments are ignored.
fn startup_action_from(args: &[String]) -> StartupAction {
    let Some((first, rest)) = args.split_first() else {
        return StartupAction::None;
    };

    if !rest.is_empty() {
        log::warn!("Ignoring {} extra argument(s)", rest.len());
    }

    let path = first.trim();
    if path.is_empty() {
        StartupAction::None
    } else {
        log::info!("Opening {path}");
        StartupAction::OpenPath(path.to_string())
    }
}
