// SPDX-License-Identifier: MPL-2.0
//! Snackbar card rendering.
//!
//! The card is `[icon] [message]` on a rounded, shadowed background.
//! Clicking it requests dismissal.

use crate::domain::Frame;
use crate::snackbar::{Message, Presentation};
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::theming::SnackbarColors;
use iced::font::Weight;
use iced::widget::image::Image;
use iced::widget::{container, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Font, Length, Padding, Theme};

/// Renders the card itself, sized to `frame`.
pub fn card<'a>(
    presentation: &'a Presentation,
    frame: Frame,
    colors: SnackbarColors,
) -> Element<'a, Message> {
    let inset = presentation.content_inset;

    let icon = Image::new(presentation.icon.clone())
        .width(Length::Fixed(sizing::ICON))
        .height(Length::Fixed(sizing::ICON));

    let message = Text::new(presentation.message.as_str())
        .size(typography::MESSAGE)
        .font(Font {
            weight: Weight::Medium,
            ..Font::DEFAULT
        })
        .color(colors.text)
        .width(Length::Fill);

    let content = Row::new()
        .spacing(spacing::ICON_GAP)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(message);

    let card = Container::new(content)
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .padding(Padding {
            top: spacing::CONTENT_VERTICAL + inset.top,
            right: inset.right,
            bottom: spacing::CONTENT_VERTICAL + inset.bottom,
            left: inset.left,
        })
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| card_style(colors));

    mouse_area(card)
        .on_press(Message::Dismiss(presentation.id))
        .into()
}

/// Places the card at `frame` on a full-size, clipped layer.
///
/// Parts of the card below the host's bottom edge are cut off, which is
/// what makes it appear to slide in from outside the window.
pub fn layer<'a>(
    presentation: &'a Presentation,
    frame: Frame,
    colors: SnackbarColors,
) -> Element<'a, Message> {
    let positioned = Column::new()
        .push(Space::new().height(Length::Fixed(frame.y.max(0.0))))
        .push(
            Row::new()
                .push(Space::new().width(Length::Fixed(frame.x.max(0.0))))
                .push(card(presentation, frame, colors)),
        );

    Container::new(positioned)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}

/// Style function for the card container.
fn card_style(colors: SnackbarColors) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(colors.background)),
        border: iced::Border {
            radius: radius::CARD.into(),
            ..Default::default()
        },
        shadow: shadow::card(colors.shadow),
        text_color: Some(colors.text),
        ..Default::default()
    }
}
