// SPDX-License-Identifier: MPL-2.0
//! Dialog cards over a backdrop.
//!
//! Every open dialog is drawn, oldest first; only the top one gets handlers,
//! so the ones below render as inert cards.

use super::toast::backdrop_style;
use super::Event;
use crate::dialog::{Dialog, DialogAction, DialogHost, DialogKind};
use crate::i18n::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, container, mouse_area, opaque, text, text_input, Column, Container, Row, Stack,
};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders the dialogs of a [`DialogHost`].
pub struct DialogLayer;

impl DialogLayer {
    /// Returns `None` when no dialog is open.
    pub fn view<'a>(host: &'a DialogHost, i18n: &'a I18n) -> Option<Element<'a, Event>> {
        let top = host.top()?.id();
        let layers: Vec<Element<'a, Event>> = host
            .dialogs()
            .map(|dialog| Self::layer(dialog, dialog.id() == top, i18n))
            .collect();
        Some(
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        )
    }

    fn layer<'a>(dialog: &'a Dialog, interactive: bool, i18n: &'a I18n) -> Element<'a, Event> {
        let centered = Container::new(opaque(Self::card(dialog, interactive, i18n)))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(|_theme: &Theme| backdrop_style(opacity::BACKDROP));

        let mut area = mouse_area(centered);
        if interactive {
            area = area.on_press(Event::Dialog(DialogAction::Backdrop));
        }
        opaque(area)
    }

    fn card<'a>(dialog: &'a Dialog, interactive: bool, i18n: &'a I18n) -> Element<'a, Event> {
        let on = |action: DialogAction| interactive.then(|| Event::Dialog(action));
        let mut body = Column::new().spacing(spacing::MD);

        if let Some(message) = dialog.text() {
            body = body.push(text(message).size(typography::BODY_LG));
        }

        match dialog.kind() {
            DialogKind::Confirm => {}
            DialogKind::Prompt { value } => {
                let mut input = text_input(&i18n.tr("dialog-prompt-placeholder"), value)
                    .padding(spacing::XS)
                    .size(typography::BODY);
                if interactive {
                    input = input
                        .on_input(|value| Event::Dialog(DialogAction::Input(value)))
                        .on_submit(Event::Dialog(DialogAction::Confirm));
                }
                body = body.push(input);
            }
            DialogKind::Menu {
                items, selected, ..
            } => {
                let entries: Vec<Element<'a, Event>> = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let is_selected = *selected == Some(index);
                        button(text(item.as_str()).size(typography::BODY))
                            .width(Length::Fill)
                            .padding(spacing::XS)
                            .on_press_maybe(on(DialogAction::Select(index)))
                            .style(move |theme: &Theme, status| {
                                menu_item_style(theme, status, is_selected)
                            })
                            .into()
                    })
                    .collect();
                body = body.push(Column::with_children(entries).spacing(spacing::XXS));
            }
        }

        if dialog.has_buttons() {
            let buttons = Row::new()
                .spacing(spacing::SM)
                .push(
                    button(text(dialog.cancel_label()).size(typography::BODY))
                        .on_press_maybe(on(DialogAction::Cancel))
                        .style(button::secondary),
                )
                .push(
                    button(text(dialog.confirm_label()).size(typography::BODY))
                        .on_press_maybe(on(DialogAction::Confirm))
                        .style(button::primary),
                );
            body = body.push(
                Container::new(buttons)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );
        }

        container(body)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(dialog_card_style)
            .into()
    }
}

fn dialog_card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: theme.extended_palette().background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn menu_item_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match (selected, status) {
        (true, _) => Some(iced::Background::Color(palette::PRIMARY_500)),
        (false, button::Status::Hovered | button::Status::Pressed) => {
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }))
        }
        (false, _) => None,
    };

    button::Style {
        background,
        text_color: if selected { palette::WHITE } else { base.text },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_menu_item_is_highlighted() {
        let style = menu_item_style(&Theme::Dark, button::Status::Active, true);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, palette::WHITE);
    }

    #[test]
    fn idle_menu_item_is_flat() {
        let style = menu_item_style(&Theme::Light, button::Status::Active, false);
        assert!(style.background.is_none());
    }

    #[test]
    fn hovered_menu_item_is_tinted() {
        let style = menu_item_style(&Theme::Light, button::Status::Hovered, false);
        assert!(style.background.is_some());
    }

    #[test]
    fn dialog_card_has_border_and_shadow() {
        let style = dialog_card_style(&Theme::Dark);
        assert_eq!(style.border.width, border::WIDTH_SM);
        assert_eq!(style.shadow.blur_radius, shadow::LG.blur_radius);
    }
}
