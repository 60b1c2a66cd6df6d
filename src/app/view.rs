// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The drop zone fills the window; the last accepted file is summarised
//! below it and toasts float over both.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::intake::SelectedFile;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::drop_zone;
use crate::ui::notifications::{self, format_size, toast};
use crate::ui::styles;
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub drop_zone: &'a drop_zone::State<Message>,
    pub last_selection: Option<&'a SelectedFile>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let drop_zone = ctx.drop_zone.view(ctx.i18n).map(Message::DropZone);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(drop_zone)
        .push(selection_details(ctx.last_selection, ctx.i18n))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = toast::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn selection_details<'a>(file: Option<&'a SelectedFile>, i18n: &'a I18n) -> Element<'a, Message> {
    let body = match file {
        Some(file) => {
            let size = format_size(file.len() as u64);
            Text::new(i18n.tr_with_args(
                "selection-details",
                &[
                    ("name", file.name()),
                    ("media_type", file.media_type()),
                    ("size", size.as_str()),
                ],
            ))
            .size(typography::BODY)
        }
        None => Text::new(i18n.tr("selection-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    };

    let column = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("selection-label"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(body);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}
