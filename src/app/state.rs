//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::messages::RenderState;
use crate::models::{DraftField, Post};

/// The view state of one client session - pure data, no I/O.
///
/// Owned by the app actor. At most one request is outstanding at a time:
/// `loading` is true exactly while `pending_request_id` is set.
pub struct ViewState {
    pub api_url: String,

    // Post list
    pub posts: Vec<Post>,
    pub selected_post: usize,
    pub loaded_at: Option<DateTime<Local>>,

    // Request lifecycle
    pub loading: bool,
    pub error_message: String,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Form
    pub show_form: bool,
    pub draft: Post,
    pub default_user_id: u64,
    pub active_field: DraftField,
    pub cursor_position: usize,

    // Popups
    pub show_help: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl ViewState {
    pub fn new(config: &Config) -> Self {
        ViewState {
            api_url: config.api_url.clone(),
            posts: Vec::new(),
            selected_post: 0,
            loaded_at: None,
            loading: false,
            error_message: String::new(),
            next_request_id: 1,
            pending_request_id: None,
            show_form: false,
            draft: Post::draft(config.default_user_id),
            default_user_id: config.default_user_id,
            active_field: DraftField::Title,
            cursor_position: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Text of the focused form field
    pub fn current_input(&self) -> &str {
        match self.active_field {
            DraftField::Title => &self.draft.title,
            DraftField::Body => &self.draft.body,
        }
    }

    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_field {
            DraftField::Title => &mut self.draft.title,
            DraftField::Body => &mut self.draft.body,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            api_url: self.api_url.clone(),
            posts: self.posts.clone(),
            selected_post: self.selected_post,
            loaded_at: self.loaded_at,
            loading: self.loading,
            error_message: self.error_message.clone(),
            show_form: self.show_form,
            draft: self.draft.clone(),
            active_field: self.active_field,
            cursor_position: self.cursor_position,
            show_help: self.show_help,
        }
    }
}
