//! Pen color popup: preset swatches and a hex entry

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::{Background, Border};
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, container, text, text_input, tooltip};

use crate::config::PenColor;
use crate::fl;

/// Preset colors for the picker (color values only, names come from i18n)
pub const COLOR_PRESETS: &[PenColor] = &[
    PenColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    }, // Black
    PenColor {
        r: 0.9,
        g: 0.1,
        b: 0.1,
    }, // Red
    PenColor {
        r: 0.1,
        g: 0.7,
        b: 0.1,
    }, // Green
    PenColor {
        r: 0.1,
        g: 0.4,
        b: 0.9,
    }, // Blue
    PenColor {
        r: 0.9,
        g: 0.7,
        b: 0.1,
    }, // Yellow
    PenColor {
        r: 0.9,
        g: 0.5,
        b: 0.1,
    }, // Orange
    PenColor {
        r: 0.7,
        g: 0.1,
        b: 0.7,
    }, // Purple
    PenColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    }, // White
];

/// Get color name from i18n for a given preset index
pub fn color_name(index: usize) -> String {
    match index {
        0 => fl!("color-black"),
        1 => fl!("color-red"),
        2 => fl!("color-green"),
        3 => fl!("color-blue"),
        4 => fl!("color-yellow"),
        5 => fl!("color-orange"),
        6 => fl!("color-purple"),
        7 => fl!("color-white"),
        _ => String::new(),
    }
}

/// Build the pen color popup
pub fn build_pen_popup<'a, Msg: Clone + 'static>(
    current_color: PenColor,
    hex_input: &'a str,
    on_color_change: &(impl Fn(PenColor) -> Msg + 'a),
    on_hex_input: impl Fn(String) -> Msg + 'a,
    on_hex_apply: Msg,
    on_cancel: Msg,
    space_s: u16,
    space_xs: u16,
) -> Element<'a, Msg> {
    let make_color_swatch = |color: PenColor, name: String| {
        let is_selected = color.approx_eq(current_color);
        let iced_color: cosmic::iced::Color = color.into();

        tooltip(
            button::custom(
                container(cosmic::widget::horizontal_space().width(Length::Fixed(0.0)))
                    .width(Length::Fixed(24.0))
                    .height(Length::Fixed(24.0))
                    .class(cosmic::theme::Container::Custom(Box::new(move |theme| {
                        let accent = theme.cosmic().accent_color();
                        cosmic::iced::widget::container::Style {
                            background: Some(Background::Color(iced_color)),
                            border: Border {
                                radius: 4.0.into(),
                                width: if is_selected { 2.0 } else { 1.0 },
                                color: if is_selected {
                                    accent.into()
                                } else {
                                    cosmic::iced::Color::from_rgba(0.5, 0.5, 0.5, 0.5)
                                },
                            },
                            ..Default::default()
                        }
                    }))),
            )
            .class(cosmic::theme::Button::Text)
            .on_press(on_color_change(color))
            .padding(2),
            text::body(name),
            tooltip::Position::Bottom,
        )
    };

    let swatches: Vec<Element<'a, Msg>> = COLOR_PRESETS
        .iter()
        .enumerate()
        .map(|(i, color)| make_color_swatch(*color, color_name(i)).into())
        .collect();
    let mut swatches = swatches.into_iter();

    // Two rows of four swatches
    let color_row1 = row(swatches.by_ref().take(4).collect::<Vec<_>>())
        .spacing(space_xs)
        .align_y(cosmic::iced_core::Alignment::Center);
    let color_row2 = row(swatches.collect::<Vec<_>>())
        .spacing(space_xs)
        .align_y(cosmic::iced_core::Alignment::Center);

    let color_section = column![text::body(fl!("color")), color_row1, color_row2]
        .spacing(space_xs)
        .align_x(cosmic::iced_core::Alignment::Start);

    let hex_row = row![
        text_input(fl!("hex-color"), hex_input)
            .on_input(on_hex_input)
            .width(Length::Fixed(120.0)),
        button::custom(text::body(fl!("apply")))
            .class(cosmic::theme::Button::Suggested)
            .on_press(on_hex_apply)
            .padding([space_xs, space_s]),
        button::custom(text::body(fl!("cancel")))
            .class(cosmic::theme::Button::Text)
            .on_press(on_cancel)
            .padding([space_xs, space_s]),
    ]
    .spacing(space_xs)
    .align_y(cosmic::iced_core::Alignment::Center);

    let popup_content = column![
        color_section,
        cosmic::widget::divider::horizontal::light(),
        hex_row
    ]
    .spacing(space_s)
    .padding(space_s);

    container(popup_content)
        .class(cosmic::theme::Container::Custom(Box::new(|theme| {
            let cosmic_theme = theme.cosmic();
            cosmic::iced::widget::container::Style {
                background: Some(Background::Color(
                    cosmic_theme.background.component.base.into(),
                )),
                text_color: Some(cosmic_theme.background.component.on.into()),
                border: Border {
                    radius: cosmic_theme.corner_radii.radius_s.into(),
                    width: 1.0,
                    color: cosmic::iced::Color::from_rgba(0.5, 0.5, 0.5, 0.3),
                },
                ..Default::default()
            }
        })))
        .into()
}
