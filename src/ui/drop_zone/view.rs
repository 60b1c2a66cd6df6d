// SPDX-License-Identifier: MPL-2.0
//! Drop zone rendering.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::intake::WidgetState;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::drop_target;
use iced::widget::{image, Column, Container, Text};
use iced::{alignment, Color, ContentFit, Element, Length};

pub(super) struct ViewContext<'a> {
    pub state: WidgetState,
    pub preview: Option<&'a ImageData>,
}

/// What fills the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    /// Upload prompt, highlighted while a drag hovers.
    Prompt { highlighted: bool },
    Preview,
}

impl Body {
    /// The prompt covers any held file while a drag hovers.
    fn for_state(state: WidgetState) -> Self {
        if state.shows_preview() {
            Body::Preview
        } else {
            Body::Prompt {
                highlighted: state.is_drag_active(),
            }
        }
    }
}

/// Renders the placeholder or the preview, wrapped in the click and drop
/// target.
pub(super) fn view<'a>(ctx: ViewContext<'a>, i18n: &'a I18n) -> Element<'a, Message> {
    let drag_active = ctx.state.is_drag_active();

    let body: Element<'a, Message> = match Body::for_state(ctx.state) {
        Body::Preview => loaded(ctx.preview, i18n),
        Body::Prompt { highlighted } => placeholder(highlighted, i18n),
    };

    let zone = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(if drag_active {
            styles::container::drop_zone_active
        } else {
            styles::container::drop_zone_idle
        });

    Element::new(drop_target(zone, Message::Input))
}

fn placeholder<'a>(drag_active: bool, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = if drag_active {
        palette::PRIMARY_500
    } else {
        palette::GRAY_400
    };
    let icon = icons::tinted(icons::sized(icons::cloud_upload(), sizing::ICON_XXL), accent);

    let prompt_key = if drag_active {
        "drop-zone-active"
    } else {
        "drop-zone-prompt"
    };

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(Text::new(i18n.tr(prompt_key)).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("drop-zone-hint"))
                .size(typography::CAPTION)
                .color(muted()),
        )
        .into()
}

fn loaded<'a>(preview: Option<&'a ImageData>, i18n: &'a I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        Some(data) => Container::new(
            image(data.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .padding(spacing::XS)
        .style(styles::container::preview_frame)
        .into(),
        None => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(icons::tinted(
                icons::sized(icons::image_off(), sizing::ICON_XXL),
                palette::GRAY_400,
            ))
            .push(
                Text::new(i18n.tr("drop-zone-preview-unavailable"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .into(),
    };

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(
            Text::new(i18n.tr("drop-zone-replace-hint"))
                .size(typography::CAPTION)
                .color(muted()),
        )
        .into()
}

fn muted() -> Color {
    Color {
        a: 0.7,
        ..palette::GRAY_400
    }
}
