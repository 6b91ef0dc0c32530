// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::theming::SnackbarColors;
use crate::ui::Stage;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub stage: &'a Stage,
    pub colors: SnackbarColors,
    pub shown: usize,
    pub dismissed: usize,
    pub now: Instant,
}

/// Renders the controls with every attached snackbar layered on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Snackbar demo").size(typography::TITLE))
        .push(
            button(Text::new("Show snackbar").size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::ShowPressed),
        )
        .push(
            button(Text::new("Dismiss all").size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::DismissAllPressed),
        )
        .push(
            Text::new(format!("Shown: {}  Dismissed: {}", ctx.shown, ctx.dismissed))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    let base = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    ctx.stage
        .layers(ctx.now, ctx.colors)
        .into_iter()
        .fold(Stack::new().push(base), |stack, layer| {
            stack.push(layer.map(Message::Snackbar))
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
