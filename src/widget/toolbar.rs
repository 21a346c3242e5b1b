//! Toolbar widget for board and note actions

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_widget::{container, row};
use cosmic::widget::{button, icon, text, tooltip};

use crate::fl;
use crate::session::messages::Msg;

/// Icon and label button in the toolbar style
fn action_button<'a>(
    icon_name: &'static str,
    label: String,
    class: cosmic::theme::Button,
    on_press: Msg,
    space_xs: u16,
    space_s: u16,
) -> Element<'a, Msg> {
    button::custom(
        container(
            row![
                icon::Icon::from(icon::from_name(icon_name).size(16))
                    .width(Length::Fixed(16.0))
                    .height(Length::Fixed(16.0)),
                text::body(label),
            ]
            .spacing(space_xs)
            .align_y(cosmic::iced_core::Alignment::Center),
        )
        .align_x(cosmic::iced_core::alignment::Horizontal::Center),
    )
    .class(class)
    .on_press(on_press)
    .padding([space_xs, space_s])
    .into()
}

/// Build the toolbar row: board and note actions, then the line size slider
pub fn build_toolbar<'a>(width_slider: f32, space_s: u16, space_xs: u16) -> Element<'a, Msg> {
    use cosmic::theme::Button;

    let action = |icon_name, label, class, msg| {
        action_button(icon_name, label, class, msg, space_xs, space_s)
    };

    let undo = tooltip(
        action(
            "edit-undo-symbolic",
            fl!("undo"),
            Button::Standard,
            Msg::undo(),
        ),
        text::body("Ctrl+Z"),
        tooltip::Position::Bottom,
    );

    // Updates during drag, saves on release
    let width_slider = cosmic::widget::slider(1.0..=10.0, width_slider, Msg::set_width)
        .on_release(Msg::save_width())
        .width(Length::Fixed(160.0));

    row![
        action(
            "color-select-symbolic",
            fl!("choose-color"),
            Button::Standard,
            Msg::toggle_pen_popup(),
        ),
        action(
            "edit-clear-all-symbolic",
            fl!("clear-board"),
            Button::Destructive,
            Msg::clear(),
        ),
        action(
            "document-save-symbolic",
            fl!("save-text"),
            Button::Standard,
            Msg::save_notes(),
        ),
        undo,
        action(
            "format-text-highlight-symbolic",
            fl!("highlight-text"),
            Button::Standard,
            Msg::highlight(),
        ),
        action(
            "edit-clear-symbolic",
            fl!("clear-highlights"),
            Button::Standard,
            Msg::clear_highlights(),
        ),
        action(
            "image-x-generic-symbolic",
            fl!("export-board"),
            Button::Standard,
            Msg::export_board(),
        ),
        cosmic::widget::horizontal_space().width(Length::Fixed(f32::from(space_s))),
        text::body(fl!("line-size")),
        width_slider,
    ]
    .spacing(space_xs)
    .padding(space_s)
    .align_y(cosmic::iced_core::Alignment::Center)
    .into()
}
