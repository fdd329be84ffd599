//! Command handlers - state transitions for UI triggers and network outcomes
//!
//! Triggers that need the network return the `NetworkCommand` to send; the
//! outcome comes back later through [`ViewState::handle_response`].

use chrono::Local;

use crate::app::ViewState;
use crate::constants::{CREATE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, VALIDATION_MESSAGE};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{DraftField, Post};

impl ViewState {
    // ========================
    // Request lifecycle
    // ========================

    /// Start loading the post list. Ignored while another request is pending.
    pub fn initialize(&mut self) -> Option<NetworkCommand> {
        if self.loading {
            tracing::debug!("Ignoring load while a request is pending");
            return None;
        }
        let id = self.begin_request();
        Some(NetworkCommand::FetchPosts { id })
    }

    /// Validate and send the draft. Ignored while loading or with the form closed.
    pub fn submit(&mut self) -> Option<NetworkCommand> {
        if self.loading {
            tracing::debug!("Ignoring submit while a request is pending");
            return None;
        }
        if !self.show_form {
            return None;
        }
        if !self.draft.is_complete() {
            self.error_message = String::from(VALIDATION_MESSAGE);
            return None;
        }

        let id = self.begin_request();
        Some(NetworkCommand::CreatePost {
            id,
            draft: self.draft.clone(),
        })
    }

    fn begin_request(&mut self) -> u64 {
        let id = self.next_id();
        self.loading = true;
        self.error_message.clear();
        self.pending_request_id = Some(id);
        id
    }

    /// Apply the outcome of the pending request; anything else is stale
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping stale response");
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::PostsLoaded { result, .. } => match result {
                Ok(posts) => {
                    tracing::info!(count = posts.len(), "Posts loaded");
                    self.posts = posts;
                    self.loaded_at = Some(Local::now());
                    self.clamp_selection();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Load failed");
                    self.error_message = String::from(LOAD_FAILED_MESSAGE);
                }
            },
            NetworkResponse::PostCreated { result, .. } => match result {
                Ok(post) => {
                    tracing::info!(id = ?post.id, "Post created");
                    self.posts.push(post);
                    self.selected_post = self.posts.len() - 1;
                    self.close_form();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Create failed");
                    self.error_message = String::from(CREATE_FAILED_MESSAGE);
                }
            },
        }

        self.loading = false;
    }

    // ========================
    // Form
    // ========================

    /// Open or close the form; closing discards the draft
    pub fn toggle_form(&mut self) {
        if self.loading {
            return;
        }
        if self.show_form {
            self.close_form();
        } else {
            self.show_form = true;
            self.cursor_position = self.current_input().len();
        }
    }

    fn close_form(&mut self) {
        self.show_form = false;
        self.reset_draft();
    }

    pub fn reset_draft(&mut self) {
        self.draft = Post::draft(self.default_user_id);
        self.active_field = DraftField::Title;
        self.cursor_position = 0;
    }

    fn can_edit(&self) -> bool {
        self.show_form && !self.loading
    }

    pub fn next_field(&mut self) {
        if self.can_edit() {
            self.active_field = self.active_field.next();
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if !self.can_edit() {
            return;
        }
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if !self.can_edit() {
            return;
        }
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if !self.can_edit() {
            return;
        }
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if !self.can_edit() || self.cursor_position == 0 {
            return;
        }
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        let prev_pos = input[..cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        input.remove(prev_pos);
        self.cursor_position = prev_pos;
    }

    // ========================
    // List navigation
    // ========================

    pub fn select_prev(&mut self) {
        self.selected_post = self.selected_post.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_post + 1 < self.posts.len() {
            self.selected_post += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_post = self.selected_post.min(self.posts.len().saturating_sub(1));
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::TransportError;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id: Some(id),
            title: title.into(),
            body: format!("{} body", title),
            user_id: 1,
        }
    }

    fn fetch_id(cmd: Option<NetworkCommand>) -> u64 {
        match cmd {
            Some(NetworkCommand::FetchPosts { id }) => id,
            other => panic!("expected FetchPosts, got {:?}", other),
        }
    }

    fn create_id(cmd: Option<NetworkCommand>) -> (u64, Post) {
        match cmd {
            Some(NetworkCommand::CreatePost { id, draft }) => (id, draft),
            other => panic!("expected CreatePost, got {:?}", other),
        }
    }

    fn type_str(state: &mut ViewState, text: &str) {
        for c in text.chars() {
            state.enter_char(c);
        }
    }

    fn open_form_with(state: &mut ViewState, title: &str, body: &str) {
        state.toggle_form();
        type_str(state, title);
        state.next_field();
        type_str(state, body);
    }

    #[test]
    fn test_load_success_replaces_posts() {
        let mut state = ViewState::default();
        let list = vec![post(1, "a"), post(2, "b")];

        for _ in 0..3 {
            let id = fetch_id(state.initialize());
            assert!(state.loading);
            assert_eq!(state.error_message, "");

            state.handle_response(NetworkResponse::PostsLoaded {
                id,
                result: Ok(list.clone()),
            });
            assert_eq!(state.posts, list);
            assert_eq!(state.error_message, "");
            assert!(!state.loading);
            assert!(state.loaded_at.is_some());
        }
    }

    #[test]
    fn test_load_failure_keeps_posts() {
        let mut state = ViewState::default();
        let id = fetch_id(state.initialize());
        state.handle_response(NetworkResponse::PostsLoaded {
            id,
            result: Err(TransportError::Status { status: 503 }),
        });

        assert!(state.posts.is_empty());
        assert_eq!(state.error_message, LOAD_FAILED_MESSAGE);
        assert!(!state.loading);
    }

    #[test]
    fn test_reload_clears_previous_error() {
        let mut state = ViewState::default();
        let id = fetch_id(state.initialize());
        state.handle_response(NetworkResponse::PostsLoaded {
            id,
            result: Err(TransportError::Network("reset".into())),
        });

        fetch_id(state.initialize());
        assert_eq!(state.error_message, "");
    }

    #[test]
    fn test_validation_gate_blocks_request() {
        let mut state = ViewState::default();
        open_form_with(&mut state, "   ", "some body");

        assert!(state.submit().is_none());
        assert_eq!(state.error_message, VALIDATION_MESSAGE);
        assert!(!state.loading);
        assert!(state.pending_request_id.is_none());

        state.reset_draft();
        type_str(&mut state, "title");
        assert!(state.submit().is_none());
        assert_eq!(state.error_message, VALIDATION_MESSAGE);
    }

    #[test]
    fn test_submit_requires_open_form() {
        let mut state = ViewState::default();
        state.draft.title = "T".into();
        state.draft.body = "B".into();
        assert!(state.submit().is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_create_success_appends_and_closes_form() {
        let mut state = ViewState::default();
        state.posts = vec![post(1, "a")];
        open_form_with(&mut state, "T", "B");

        let (id, draft) = create_id(state.submit());
        assert_eq!(draft, Post { id: None, title: "T".into(), body: "B".into(), user_id: 1 });
        assert!(state.loading);

        let created = Post { id: Some(101), ..draft };
        state.handle_response(NetworkResponse::PostCreated {
            id,
            result: Ok(created.clone()),
        });

        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.posts.last(), Some(&created));
        assert_eq!(state.selected_post, 1);
        assert!(!state.show_form);
        assert_eq!(state.draft, Post::draft(1));
        assert!(!state.loading);
    }

    #[test]
    fn test_create_failure_preserves_draft() {
        let mut state = ViewState::default();
        open_form_with(&mut state, "T", "B");
        let (id, draft) = create_id(state.submit());

        state.handle_response(NetworkResponse::PostCreated {
            id,
            result: Err(TransportError::Parse("eof".into())),
        });

        assert!(state.show_form);
        assert_eq!(state.draft, draft);
        assert_eq!(state.error_message, CREATE_FAILED_MESSAGE);
        assert!(!state.loading);
        assert!(state.posts.is_empty());
    }

    #[test]
    fn test_toggle_resets_only_on_close() {
        let mut state = ViewState::default();
        open_form_with(&mut state, "keep", "me");

        state.toggle_form();
        assert!(!state.show_form);
        assert_eq!(state.draft, Post::draft(1));

        state.draft.title = "prefilled".into();
        state.toggle_form();
        assert!(state.show_form);
        assert_eq!(state.draft.title, "prefilled");
    }

    #[test]
    fn test_triggers_ignored_while_loading() {
        let mut state = ViewState::default();
        open_form_with(&mut state, "T", "B");
        let (id, _) = create_id(state.submit());

        assert!(state.submit().is_none());
        assert!(state.initialize().is_none());
        state.toggle_form();
        state.enter_char('x');
        assert!(state.show_form);
        assert_eq!(state.draft.body, "B");
        assert_eq!(state.pending_request_id, Some(id));
    }

    #[test]
    fn test_cursor_frozen_while_loading() {
        let mut state = ViewState::default();
        open_form_with(&mut state, "T", "Body");
        let end = state.cursor_position;
        create_id(state.submit());

        state.move_cursor_left();
        assert_eq!(state.cursor_position, end);

        state.loading = false;
        state.move_cursor_left();
        assert_eq!(state.cursor_position, end - 1);

        state.loading = true;
        state.move_cursor_right();
        assert_eq!(state.cursor_position, end - 1);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = ViewState::default();
        let first = fetch_id(state.initialize());
        state.handle_response(NetworkResponse::PostsLoaded { id: first, result: Ok(vec![]) });

        let second = fetch_id(state.initialize());
        state.handle_response(NetworkResponse::PostsLoaded {
            id: first,
            result: Ok(vec![post(9, "old")]),
        });
        assert!(state.posts.is_empty());
        assert!(state.loading);

        state.handle_response(NetworkResponse::PostsLoaded {
            id: second,
            result: Ok(vec![post(1, "new")]),
        });
        assert_eq!(state.posts, vec![post(1, "new")]);
        assert!(!state.loading);
    }

    #[test]
    fn test_cursor_editing_is_utf8_aware() {
        let mut state = ViewState::default();
        state.toggle_form();
        type_str(&mut state, "héllo");
        state.move_cursor_left();
        state.move_cursor_left();
        state.move_cursor_left();
        state.delete_char();
        assert_eq!(state.draft.title, "hllo");
        state.enter_char('e');
        assert_eq!(state.draft.title, "hello");
        state.move_cursor_right();
        state.move_cursor_right();
        state.move_cursor_right();
        state.move_cursor_right();
        assert_eq!(state.cursor_position, "hello".len());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = ViewState::default();
        state.select_next();
        assert_eq!(state.selected_post, 0);

        let id = fetch_id(state.initialize());
        state.handle_response(NetworkResponse::PostsLoaded {
            id,
            result: Ok(vec![post(1, "a"), post(2, "b")]),
        });
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_post, 1);
        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected_post, 0);
    }
}
