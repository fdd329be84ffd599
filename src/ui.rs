use ratatui::{prelude::*, widgets::*};

use crate::models::Post;

/// Renders a text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
}

/// One row of the post list: id, author and title
pub fn post_list_item(post: &Post, title_width: usize) -> ListItem<'static> {
    let id = match post.id {
        Some(id) => format!("#{:<4}", id),
        None => String::from("#new "),
    };

    ListItem::new(Line::from(vec![
        Span::styled(id, Style::default().fg(Color::Cyan)),
        Span::styled(format!(" u{:<3} ", post.user_id), Style::default().fg(Color::DarkGray)),
        Span::raw(first_line(&post.title, title_width)),
    ]))
}

/// Full view of a single post
pub fn post_detail(post: &Post) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(post.title.clone(), Style::default().fg(Color::Yellow).bold())),
        Line::from(Span::styled(
            format!(
                "id: {}  user: {}",
                post.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
                post.user_id
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    lines.extend(post.body.lines().map(|l| Line::from(l.to_string())));
    lines
}

/// First line of `text`, cut to `max` chars with an ellipsis
pub fn first_line(text: &str, max: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= max {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Screen column of a cursor at byte offset `cursor` inside a bordered field,
/// kept inside the right border
pub fn input_cursor_x(area: Rect, input: &str, cursor: usize) -> u16 {
    let chars = input[..cursor.min(input.len())].chars().count();
    let column = u16::try_from(chars).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    area.x.saturating_add(column).saturating_add(1).min(max_x)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
