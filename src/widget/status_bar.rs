//! Status bar showing the latest action result

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::{Background, Border};
use cosmic::widget::{container, text};

use crate::session::status::Status;

/// Build the status bar for `status`. Failures use the destructive color.
pub fn build_status_bar<'a, Msg: 'a>(status: &Status, space_xxs: u16, space_s: u16) -> Element<'a, Msg> {
    let is_error = status.is_error();

    container(text::body(status.message()))
        .width(Length::Fill)
        .padding([space_xxs, space_s])
        .class(cosmic::theme::Container::Custom(Box::new(move |theme| {
            let cosmic_theme = theme.cosmic();
            let text_color = if is_error {
                cosmic_theme.destructive.base
            } else {
                cosmic_theme.background.component.on
            };
            cosmic::iced::widget::container::Style {
                background: Some(Background::Color(
                    cosmic_theme.background.component.base.into(),
                )),
                text_color: Some(text_color.into()),
                border: Border {
                    radius: 0.0.into(),
                    width: 1.0,
                    color: cosmic::iced::Color::from_rgba(0.5, 0.5, 0.5, 0.3),
                },
                ..Default::default()
            }
        })))
        .into()
}
