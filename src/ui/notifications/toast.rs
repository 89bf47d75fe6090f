// SPDX-License-Identifier: MPL-2.0
//! Toast cards, the toast stack and the blocking message overlay.

use super::Event;
use crate::domain::notify::Severity;
use crate::notify::{NotificationManager, Phase, ToastView};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{container, mouse_area, opaque, text, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Accent color of a severity.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Notice => palette::INFO_500,
        Severity::Warn => palette::WARNING_500,
        Severity::Error => palette::ERROR_500,
    }
}

/// Renders the notification layers of a [`NotificationManager`].
pub struct ToastLayer;

impl ToastLayer {
    /// Renders one message card.
    pub fn card<'a>(toast: ToastView<'a>) -> Element<'a, Event> {
        let accent = severity_color(toast.severity());
        let alpha = match toast.phase() {
            Phase::Visible => opacity::OPAQUE,
            Phase::Exiting => opacity::EXITING,
        };

        let glyph = Text::new(toast.severity().glyph().to_string())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color { a: alpha, ..accent }),
            });

        let message = Text::new(toast.text())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.palette().text
                }),
            });

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(count) = toast.badge() {
            content = content.push(badge(count, accent, alpha));
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the stacked toasts at their slot offsets, centered horizontally.
    pub fn view_stack(manager: &NotificationManager) -> Element<'_, Event> {
        let layers: Vec<Element<'_, Event>> = manager
            .toasts()
            .filter_map(|toast| {
                let offset = toast.offset()?;
                Some(
                    Container::new(Self::card(toast))
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center)
                        .padding(Padding {
                            top: offset,
                            ..Padding::ZERO
                        })
                        .into(),
                )
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Renders the blocking message over a backdrop, if there is one.
    ///
    /// Clicking the backdrop emits [`Event::DismissBlocking`]; clicks on the
    /// card itself are swallowed.
    pub fn view_blocking(manager: &NotificationManager) -> Option<Element<'_, Event>> {
        let toast = manager.blocking()?;
        let backdrop_alpha = match toast.phase() {
            Phase::Visible => opacity::BACKDROP,
            Phase::Exiting => opacity::BACKDROP * opacity::EXITING,
        };

        let centered = Container::new(opaque(Self::card(toast)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| backdrop_style(backdrop_alpha));

        Some(opaque(mouse_area(centered).on_press(Event::DismissBlocking)))
    }
}

fn badge<'a>(count: u32, accent: Color, alpha: f32) -> Element<'a, Event> {
    container(
        text(count.to_string())
            .size(typography::CAPTION)
            .color(Color {
                a: alpha,
                ..palette::WHITE
            }),
    )
    .width(Length::Fixed(sizing::BADGE))
    .height(Length::Fixed(sizing::BADGE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..accent })),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

pub(super) fn backdrop_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
