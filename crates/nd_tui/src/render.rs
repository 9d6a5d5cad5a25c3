use std::io::{self, Write};

use nd_core::{Article, Category, CategorySelection};

use crate::layout::{FrameLayout, SELECTOR_WIDTH};
use crate::state::{FetchState, ViewState};

const HEADER: &str = "newsdesk :: top headlines";
const LOADING_NEWS: &str = "Loading news...";
const EMPTY_STATE: &str = "No articles to show. Select another category to try again.";

/// Draws full frames to stdout, or to any writer in tests.
pub struct Renderer {
    writer: Box<dyn Write + Send>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Render into a custom writer instead of stdout.
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self { writer }
    }

    /// Draws one frame and returns the hit-test layout matching it. Row
    /// positions here and in `FrameLayout::compute` must agree.
    pub fn render(&mut self, state: &ViewState) -> io::Result<FrameLayout> {
        let layout = FrameLayout::compute(state.dropdown_open);
        let mut frame = String::new();

        frame.push_str(HEADER);
        frame.push_str("\r\n\r\n");

        // Selector slot: warmup placeholder wins, an outstanding fetch
        // suppresses the button, otherwise the button (plus the open
        // dropdown) renders.
        if state.categories_loading {
            frame.push_str(&placeholder_line());
            frame.push_str("\r\n");
        } else if state.fetch.is_loading() {
            frame.push_str("\r\n");
        } else {
            frame.push_str(&selector_line(state));
            frame.push_str("\r\n");
            if state.dropdown_open {
                for (index, category) in Category::ALL.iter().enumerate() {
                    frame.push_str(&dropdown_line(state, index, *category));
                    frame.push_str("\r\n");
                }
            }
        }
        frame.push_str("\r\n");

        match &state.fetch {
            FetchState::Idle => {}
            FetchState::Loading => {
                frame.push_str(LOADING_NEWS);
                frame.push_str("\r\n");
            }
            FetchState::Success(articles) if !articles.is_empty() => {
                for article in articles {
                    push_article(&mut frame, article);
                }
            }
            // Failure renders like an empty listing; the error itself was
            // already logged where the fetch completed.
            FetchState::Success(_) | FetchState::Failure => {
                frame.push_str(EMPTY_STATE);
                frame.push_str("\r\n");
            }
        }

        // Clear screen and move cursor to home position
        write!(self.writer, "\x1B[2J\x1B[1H{}", frame)?;
        self.writer.flush()?;
        Ok(layout)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn placeholder_line() -> String {
    format!("[{}]", "\u{2591}".repeat(SELECTOR_WIDTH as usize - 2))
}

fn selector_line(state: &ViewState) -> String {
    let arrow = if state.dropdown_open { '^' } else { 'v' };
    format!(
        "[ {:<width$} {} ]",
        state.selection.label(),
        arrow,
        width = SELECTOR_WIDTH as usize - 6
    )
}

fn dropdown_line(state: &ViewState, index: usize, category: Category) -> String {
    let cursor = if index == state.highlighted { '>' } else { ' ' };
    let active = if state.selection == CategorySelection::Chosen(category) {
        '*'
    } else {
        ' '
    };
    format!("{}{} {}", cursor, active, category.label())
}

fn push_article(frame: &mut String, article: &Article) {
    frame.push_str(&format!(
        "{:>3}. {} ({})\r\n",
        article.id, article.title, article.source.name
    ));
    if !article.description.is_empty() {
        frame.push_str(&format!("     {}\r\n", article.description));
    }
    frame.push_str(&format!(
        "     {}  {}\r\n\r\n",
        article.published_at, article.url
    ));
}
