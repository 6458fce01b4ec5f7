//! Notification banner.
//!
//! Renders the workspace [`Notification`] while it is open. The banner
//! auto-hides through the app subscription; the dismiss button closes it
//! early.

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::{Notification, Severity};
use crate::theme::{
    BORDER_RADIUS_LG, BORDER_WIDTH_THIN, SPACING_MD, SPACING_SM, SPACING_XS, WorkbenchColors,
    button_ghost,
};

fn severity_color(theme: &Theme, severity: Severity) -> iced::Color {
    let palette = theme.extended_palette();
    match severity {
        Severity::Success => palette.success.base.color,
        Severity::Error => palette.danger.base.color,
        Severity::Info => theme.workbench().info,
    }
}

/// Renders the banner, or `None` when the notification is closed.
pub fn view_notification(notification: &Notification) -> Option<Element<'_, Message>> {
    if !notification.open {
        return None;
    }
    let severity = notification.severity;

    let icon = match severity {
        Severity::Success => lucide::circle_check(),
        Severity::Error => lucide::circle_x(),
        Severity::Info => lucide::info(),
    }
    .size(18)
    .style(move |theme: &Theme| text::Style {
        color: Some(severity_color(theme, severity)),
    });

    let message_text = text(&notification.message)
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.workbench().text_secondary),
        });

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::DismissNotification)
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_MD),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    let banner = container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(move |theme: &Theme| {
            let colors = theme.workbench();
            container::Style {
                background: Some(colors.background_elevated.into()),
                border: Border {
                    color: severity_color(theme, severity),
                    width: BORDER_WIDTH_THIN,
                    radius: BORDER_RADIUS_LG.into(),
                },
                shadow: Shadow {
                    color: colors.shadow,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        });

    Some(banner.into())
}
