//! Postboard TUI - Actor-based posts client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - view state controller processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use postboard_tui::constants::LOG_FILE_NAME;
use postboard_tui::messages::ui_events::key_to_ui_event;
use postboard_tui::models::DraftField;
use postboard_tui::ui::{centered_rect, input_cursor_x, post_detail, post_list_item, render_input};
use postboard_tui::{
    AppActor, Config, NetworkActor, NetworkCommand, NetworkResponse, PostsClient, RenderState,
    UiEvent, ViewState,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not read config, using defaults");
        Config::default()
    });
    tracing::info!(api_url = %config.api_url, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let client = PostsClient::new(config.api_url.clone(), config.timeout());
    let network_actor = NetworkActor::new(client, net_resp_tx).with_fetch_delay(config.fetch_delay());
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(ViewState::new(&config), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.show_form, current_state.show_help)
                {
                    let quit = event == UiEvent::Quit;
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title bar
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Error line
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_chunks[1]);

    draw_post_list(f, state, content[0]);
    draw_post_detail(f, state, content[1]);
    draw_error_line(f, state, main_chunks[2]);
    draw_status_bar(f, state, main_chunks[3]);

    if state.show_form {
        draw_form_popup(f, state, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let loaded = state
        .loaded_at
        .map(|t| format!("  loaded {}", t.format("%H:%M:%S")))
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(" Postboard ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" {}", state.api_url), Style::default().fg(Color::Gray)),
        Span::styled(loaded, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_post_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = if state.loading && state.posts.is_empty() {
        String::from(" Posts [...] ")
    } else {
        format!(" Posts ({}) ", state.posts.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    if state.posts.is_empty() {
        let text = if state.loading {
            "Loading posts..."
        } else {
            "No posts. Press 'r' to reload or 'n' to write one."
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // id, author and borders take about 14 columns
    let title_width = area.width.saturating_sub(14) as usize;
    let items: Vec<ListItem> = state
        .posts
        .iter()
        .map(|p| post_list_item(p, title_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_post));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_post_detail(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Post ");

    let lines = match state.posts.get(state.selected_post) {
        Some(post) => post_detail(post),
        None => Vec::new(),
    };

    let detail = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

fn draw_error_line(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.error_message.is_empty() {
        return;
    }
    let error = Paragraph::new(format!(" {}", state.error_message))
        .style(Style::default().fg(Color::Red).bold());
    f.render_widget(error, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.loading {
        " Loading... "
    } else if state.show_form {
        " Enter:submit | Tab:next field | Esc:cancel "
    } else {
        " n:new post | r:reload | ↑/↓:select | ?:help | q:quit "
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_form_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(70, 60, area);

    let title = if state.loading { " New Post [...] " } else { " New Post " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(3),     // Body
            Constraint::Length(1),  // Error
        ])
        .split(inner);

    let title_focused = state.active_field == DraftField::Title;
    f.render_widget(
        render_input(&state.draft.title, " Title ", title_focused),
        chunks[0],
    );
    f.render_widget(
        render_input(&state.draft.body, " Body ", !title_focused),
        chunks[1],
    );

    if !state.error_message.is_empty() {
        let error = Paragraph::new(state.error_message.as_str())
            .style(Style::default().fg(Color::Red));
        f.render_widget(error, chunks[2]);
    }

    // Cursor
    if !state.loading {
        let field_area = if title_focused { chunks[0] } else { chunks[1] };
        let input = match state.active_field {
            DraftField::Title => &state.draft.title,
            DraftField::Body => &state.draft.body,
        };
        let cursor_x = input_cursor_x(field_area, input, state.cursor_position);
        f.set_cursor_position(Position::new(cursor_x, field_area.y + 1));
    }
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 POSTBOARD - Keyboard Shortcuts

 LIST
   ↑ / ↓  (k / j)     Select post
   r                  Reload posts
   n                  New post

 FORM
   Tab                Switch Title/Body
   ← / →              Move cursor
   Enter              Submit
   Esc                Cancel (discards draft)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
