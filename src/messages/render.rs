//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::constants::DEFAULT_API_URL;
use crate::models::{DraftField, Post};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub api_url: String,

    // Post list
    pub posts: Vec<Post>,
    pub selected_post: usize,
    pub loaded_at: Option<DateTime<Local>>,

    // Request lifecycle
    pub loading: bool,
    pub error_message: String,

    // Form
    pub show_form: bool,
    pub draft: Post,
    pub active_field: DraftField,
    pub cursor_position: usize,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            api_url: String::from(DEFAULT_API_URL),
            posts: Vec::new(),
            selected_post: 0,
            loaded_at: None,
            loading: false,
            error_message: String::new(),
            show_form: false,
            draft: Post::default(),
            active_field: DraftField::Title,
            cursor_position: 0,
            show_help: false,
        }
    }
}
