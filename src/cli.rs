//! CLI domain: parse, route, help, output, and presentation only.
//! No settings logic; the route table dispatches to the store and wrapper.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_get_output, format_list_output, format_meta_output, format_refresh_output,
    SettingRow,
};
pub use route::RunContext;
