//! User-facing diagnostics for fatal errors.

use crate::{INSTALL_COMMAND, TOOL_NAME};

pub const PREFIX: &str = "[social-duo]";

/// Print the diagnostic for `err` on stderr.
pub fn fatal(err: &anyhow::Error) {
    for line in lines(err) {
        eprintln!("{PREFIX} {line}");
    }
}

pub fn lines(err: &anyhow::Error) -> Vec<String> {
    if let Some(e) = err.downcast_ref::<duo_shim::Error>() {
        dispatch_lines(e)
    } else if let Some(e) = err.downcast_ref::<duo_install::Error>() {
        install_lines(e)
    } else {
        vec![format!("{err:#}")]
    }
}

fn install_lines(err: &duo_install::Error) -> Vec<String> {
    use duo_install::Error;

    match err {
        Error::InterpreterNotFound {
            candidates,
            minimum,
        } => vec![
            format!(
                "Python is required but was not found in PATH (tried {}).",
                candidates.join(", ")
            ),
            format!("Install Python {minimum}+ and rerun: {INSTALL_COMMAND}"),
        ],
        Error::InstallFailed { attempts } => {
            let mut lines = vec!["Python install failed.".to_string()];
            lines.extend(
                attempts
                    .iter()
                    .map(|a| format!("Attempted: {} ({})", a.command, a.reason)),
            );
            lines.push(format!(
                "Ensure python3, pip, and git are installed, then rerun: {INSTALL_COMMAND}"
            ));
            lines
        }
        other => vec![other.to_string()],
    }
}

fn dispatch_lines(err: &duo_shim::Error) -> Vec<String> {
    use duo_shim::Error;

    match err {
        Error::NotInstalled(_) => vec![format!(
            "{TOOL_NAME} is not installed. Run `{INSTALL_COMMAND}` to reinstall."
        )],
        Error::ProvisionFailed { source, .. } => {
            let mut lines = match source.downcast_ref::<duo_install::Error>() {
                Some(e) => install_lines(e),
                None => vec![source.to_string()],
            };
            lines.push(format!(
                "{TOOL_NAME} installation failed. Run `{INSTALL_COMMAND}` to reinstall."
            ));
            lines
        }
        Error::LaunchFailed { source, .. } => {
            vec![format!("Failed to launch {TOOL_NAME}: {source}")]
        }
    }
}
