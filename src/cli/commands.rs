//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Show the releases of the week ending on the window Monday (default)
    Albums,
    /// Show the date window and the month pages it spans
    Window,
}

/// Resolve the command to run; no subcommand means `albums`
pub(crate) fn parse_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or(Commands::Albums)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_albums() {
        assert_eq!(parse_command(None), Commands::Albums);
        assert_eq!(parse_command(Some(Commands::Window)), Commands::Window);
    }
}
