//! Note pane: multi-line editor with highlighted spans

use std::ops::Range;

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::text::highlighter::{self, Highlighter};
use cosmic::iced_core::text::Wrapping;
use cosmic::iced_widget::{column, text_editor};
use cosmic::widget::text;

use crate::config::PenColor;
use crate::fl;
use crate::notes::NotesState;
use crate::notes::highlight::Highlights;
use crate::session::messages::{Msg, NotesMsg};

/// Highlight spans and tint handed to the editor
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightSettings {
    pub highlights: Highlights,
    pub color: PenColor,
}

/// Line highlighter replaying stored spans
///
/// The editor feeds lines in order starting from `current_line`, and rewinds
/// with `change_line` after an edit.
pub struct NotesHighlighter {
    settings: HighlightSettings,
    current_line: usize,
}

impl Highlighter for NotesHighlighter {
    type Settings = HighlightSettings;
    type Highlight = PenColor;
    type Iterator<'a> = std::vec::IntoIter<(Range<usize>, PenColor)>;

    fn new(settings: &Self::Settings) -> Self {
        Self {
            settings: settings.clone(),
            current_line: 0,
        }
    }

    fn update(&mut self, new_settings: &Self::Settings) {
        self.settings = new_settings.clone();
        // Spans may have moved anywhere, so re-highlight from the top
        self.current_line = 0;
    }

    fn change_line(&mut self, line: usize) {
        self.current_line = self.current_line.min(line);
    }

    fn highlight_line(&mut self, line: &str) -> Self::Iterator<'_> {
        let color = self.settings.color;
        let ranges: Vec<_> = self
            .settings
            .highlights
            .on_line(self.current_line)
            .filter(|r| r.end <= line.len())
            .map(|r| (r, color))
            .collect();
        self.current_line += 1;
        ranges.into_iter()
    }

    fn current_line(&self) -> usize {
        self.current_line
    }
}

/// Bold tinted text for highlighted spans
fn highlight_format(color: &PenColor, _theme: &cosmic::Theme) -> highlighter::Format<cosmic::iced::Font> {
    highlighter::Format {
        color: Some((*color).into()),
        font: Some(cosmic::iced::Font {
            weight: cosmic::iced_core::font::Weight::Bold,
            ..Default::default()
        }),
    }
}

/// Build the labelled note editor
pub fn build_notes_editor<'a>(
    notes: &'a NotesState,
    highlight_color: PenColor,
    space_xs: u16,
) -> Element<'a, Msg> {
    let settings = HighlightSettings {
        highlights: notes.highlights.clone(),
        color: highlight_color,
    };

    let editor = text_editor(&notes.content)
        .on_action(|action| Msg::Notes(NotesMsg::Edit(action)))
        .height(Length::Fill)
        .wrapping(Wrapping::Word)
        .highlight_with::<NotesHighlighter>(settings, highlight_format);

    column![text::heading(fl!("notes")), editor]
        .spacing(space_xs)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
