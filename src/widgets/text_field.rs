use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

/// An editable text buffer with a character-indexed cursor.
///
/// Features:
/// - Basic text editing (insert, delete, backspace, newline)
/// - Cursor movement (left/right/home/end) on char boundaries
/// - Wrapped multi-line rendering with a block cursor that stays in view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// The text content
    content: String,
    /// Cursor position as a character index
    cursor: usize,
}

impl TextField {
    /// Create a new empty TextField
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `content`, cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set_content(content);
        field
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a string at the cursor (paste)
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.content.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character under the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the content is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Display rows hard-wrapped at `width` columns, and the row holding the
    /// cursor. A focused cursor is drawn as an inverted cell.
    fn wrapped_lines(&self, width: usize, focused: bool) -> (Vec<Line<'static>>, usize) {
        let width = width.max(1);
        let text_style = Style::default().fg(Color::White);
        let cursor_style = Style::default().fg(Color::Black).bg(Color::White);

        let mut rows = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut col = 0;
        let mut cursor_row = 0;

        let chars: Vec<char> = self.content.chars().collect();
        for i in 0..=chars.len() {
            let c = chars.get(i).copied();
            let draw_cursor = focused && i == self.cursor;
            let cell_width = match c {
                Some('\n') | None => usize::from(draw_cursor),
                Some(ch) => ch.width().unwrap_or(0),
            };
            if col > 0 && col + cell_width > width {
                flush_run(&mut run, &mut spans, text_style);
                rows.push(Line::from(std::mem::take(&mut spans)));
                col = 0;
            }
            if i == self.cursor {
                cursor_row = rows.len();
            }

            if draw_cursor {
                flush_run(&mut run, &mut spans, text_style);
                let cell = match c {
                    Some(ch) if ch != '\n' => ch.to_string(),
                    _ => " ".to_string(),
                };
                spans.push(Span::styled(cell, cursor_style));
            } else if let Some(ch) = c.filter(|ch| *ch != '\n') {
                run.push(ch);
            }
            col += cell_width;

            if c == Some('\n') {
                flush_run(&mut run, &mut spans, text_style);
                rows.push(Line::from(std::mem::take(&mut spans)));
                col = 0;
            }
        }
        flush_run(&mut run, &mut spans, text_style);
        rows.push(Line::from(spans));
        (rows, cursor_row)
    }
}

fn flush_run(run: &mut String, spans: &mut Vec<Span<'static>>, style: Style) {
    if !run.is_empty() {
        spans.push(Span::styled(std::mem::take(run), style));
    }
}

/// A renderable wrapper for TextField that implements the Widget trait
pub struct TextFieldWidget<'a> {
    field: &'a TextField,
    title: &'a str,
    focused: bool,
    required: bool,
    placeholder: Option<&'a str>,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(field: &'a TextField, title: &'a str, focused: bool) -> Self {
        Self {
            field,
            title,
            focused,
            required: false,
            placeholder: None,
        }
    }

    /// Mark the field as required (shown with an asterisk)
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { Color::White } else { Color::DarkGray };
        let title = if self.required {
            format!(" {} * ", self.title)
        } else {
            format!(" {} ", self.title)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(title);

        let placeholder = self
            .placeholder
            .filter(|_| self.field.is_empty() && !self.focused);
        if let Some(placeholder) = placeholder {
            Paragraph::new(Line::from(Span::styled(
                placeholder.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
            return;
        }

        let inner = block.inner(area);
        let (rows, cursor_row) = self
            .field
            .wrapped_lines(inner.width as usize, self.focused);
        // Keep the cursor row on the last visible line once the text overflows
        let offset = if self.focused {
            cursor_row.saturating_sub((inner.height as usize).saturating_sub(1))
        } else {
            0
        };

        Paragraph::new(rows)
            .block(block)
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
            .render(area, buf);
    }
}
