// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The playground form is the base layer; toasts, the blocking message and
//! dialogs are stacked above it in that order.

use super::Message;
use crate::dialog::DialogHost;
use crate::domain::notify::Severity;
use crate::i18n::I18n;
use crate::notify::NotificationManager;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::notifications::{severity_color, DialogLayer, ToastLayer};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text_input, toggler, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a NotificationManager,
    pub dialogs: &'a DialogHost,
    pub text: &'a str,
    pub duration: &'a str,
    pub blocking: bool,
    pub theme_mode: ThemeMode,
    pub last_result: Option<&'a str>,
}

/// Renders the form with every live overlay layer on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_form(&ctx))
        .push(ToastLayer::view_stack(ctx.notifications).map(Message::Overlay));

    if let Some(blocking) = ToastLayer::view_blocking(ctx.notifications) {
        layers = layers.push(blocking.map(Message::Overlay));
    }
    if let Some(dialogs) = DialogLayer::view(ctx.dialogs, ctx.i18n) {
        layers = layers.push(dialogs.map(Message::Overlay));
    }

    layers.into()
}

fn view_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let heading = Text::new(i18n.tr("demo-heading")).size(typography::TITLE_MD);

    let text_field = text_input(&i18n.tr("demo-text-placeholder"), ctx.text)
        .on_input(Message::TextChanged)
        .on_submit(Message::Notify(Severity::Notice))
        .padding(spacing::XS);

    let duration_field = text_input(&i18n.tr("demo-duration-placeholder"), ctx.duration)
        .on_input(Message::DurationChanged)
        .padding(spacing::XS);

    let blocking_row = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(Text::new(i18n.tr("demo-blocking-label")).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(toggler(ctx.blocking).on_toggle(Message::BlockingToggled));

    let severity_buttons = Severity::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &severity| {
            let name = i18n.tr(&format!("severity-{severity}"));
            let label = format!("{} {}", severity.glyph(), name);
            let accent = severity_color(severity);
            row.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(Message::Notify(severity))
                    .style(move |theme: &Theme, status| {
                        let mut style = button::secondary(theme, status);
                        style.border.color = accent;
                        style.border.width = border::WIDTH_MD;
                        style
                    }),
            )
        });

    let dialog_buttons = Column::new()
        .spacing(spacing::XS)
        .push(dialog_button(i18n.tr("demo-open-confirm"), Message::OpenConfirm))
        .push(dialog_button(i18n.tr("demo-open-prompt"), Message::OpenPrompt))
        .push(dialog_button(
            i18n.tr("demo-open-menu"),
            Message::OpenMenu {
                needs_confirm: false,
            },
        ))
        .push(dialog_button(
            i18n.tr("demo-open-menu-confirm"),
            Message::OpenMenu {
                needs_confirm: true,
            },
        ));

    let visible = ctx.notifications.visible_count().to_string();
    let queued = ctx.notifications.queued_count().to_string();
    let status = Text::new(i18n.tr_with_args(
        "demo-status",
        &[("visible", visible.as_str()), ("queued", queued.as_str())],
    ))
    .size(typography::CAPTION);

    let theme_name = i18n.tr(match ctx.theme_mode {
        ThemeMode::Light => "theme-light",
        ThemeMode::Dark => "theme-dark",
        ThemeMode::System => "theme-system",
    });
    let locale = i18n.current_locale().to_string();
    let language_label = i18n.tr_with_args("demo-language-button", &[("locale", locale.as_str())]);
    let theme_label = i18n.tr_with_args("demo-theme-button", &[("mode", theme_name.as_str())]);
    let preferences = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(language_label).size(typography::CAPTION))
                .on_press(Message::CycleLanguage)
                .style(button::text),
        )
        .push(
            button(Text::new(theme_label).size(typography::CAPTION))
                .on_press(Message::CycleTheme)
                .style(button::text),
        );

    let mut form = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(heading)
        .push(text_field)
        .push(duration_field)
        .push(blocking_row)
        .push(severity_buttons)
        .push(Text::new(i18n.tr("demo-dialogs-heading")).size(typography::BODY_LG))
        .push(dialog_buttons);

    if let Some(result) = ctx.last_result {
        form = form.push(Text::new(result).size(typography::BODY));
    }

    form = form.push(status).push(preferences);

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

fn dialog_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .on_press(message)
        .into()
}
