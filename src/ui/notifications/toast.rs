// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! A toast is a card with a severity-colored strip on its leading edge, the
//! severity icon, the translated message and a dismiss cross. Toasts stack
//! at the top of the window, above the drop zone, so they never hide the
//! drop hint at the bottom.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, Column, Container, Row, Svg, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Width of the severity strip.
const ACCENT_WIDTH: f32 = 4.0;

/// Translates the notification text, interpolating its arguments.
fn message_text(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    if args.is_empty() {
        i18n.tr(notification.message_key())
    } else {
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

/// Renders one toast.
pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let strip = Container::new(Column::new())
        .width(Length::Fixed(ACCENT_WIDTH))
        .height(Length::Fixed(sizing::ICON_MD + 2.0 * spacing::XS))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let icon = icons::tinted(
        icons::sized(severity_icon(notification.severity()), sizing::ICON_MD),
        accent,
    );

    let text = Text::new(message_text(notification, i18n))
        .size(typography::BODY)
        .width(Length::Fill);

    let cross = icons::sized(icons::cross(), sizing::ICON_SM).style(|theme: &Theme, _status| {
        iced::widget::svg::Style {
            color: Some(theme.palette().text),
        }
    });
    let dismiss = button(cross)
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(dismiss_style);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(strip)
        .push(icon)
        .push(text)
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding([spacing::XS, spacing::SM])
        .style(card_style)
        .into()
}

/// Renders every visible toast, newest first, centred at the top.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let toasts = Column::with_children(manager.visible().map(|n| view(n, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    Container::new(toasts)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

fn card_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}

fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
