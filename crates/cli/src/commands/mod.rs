//! CLI command handlers for the pathwise application.

mod context;
mod explore;
mod search;
mod skills;

pub(crate) use context::handle_context_command;
pub(crate) use explore::handle_explore_command;
pub(crate) use search::handle_search_command;
pub(crate) use skills::handle_skills_command;
