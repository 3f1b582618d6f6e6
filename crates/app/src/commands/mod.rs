//! CLI command handlers for the teamassess application.

mod assessments;
mod catalog;
mod draft;
mod export;
mod input;
mod recommend;

pub(crate) use assessments::{
    handle_delete_command, handle_list_command, handle_reset_command, handle_samples_command,
    handle_show_command, handle_submit_command,
};
pub(crate) use catalog::{handle_check_command, handle_questions_command};
pub(crate) use draft::{
    handle_draft_clear_command, handle_draft_save_command, handle_draft_show_command,
};
pub(crate) use export::{
    handle_export_csv_command, handle_export_html_command, handle_export_json_command,
    handle_import_command,
};
pub(crate) use recommend::handle_recommend_command;
