//! Modal dialog overlay component.
//!
//! Provides modal dialogs with backdrop, title, content, and action buttons.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM, WorkbenchColors, button_danger,
    button_ghost, button_secondary, container_modal,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of `base` with a semi-transparent
/// backdrop. Clicking the backdrop does NOT close the modal; the close
/// button sends `on_close`.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.workbench().backdrop.into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(18).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        }),
        space::horizontal(),
        button(
            container(lucide::x().size(20)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.workbench().text_muted),
                ..Default::default()
            })
        )
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = actions
        .into_iter()
        .fold(row![space::horizontal()].spacing(SPACING_SM), |r, action| {
            r.push(action)
        });

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(container_modal);

    // base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Confirmation modal for a destructive action.
///
/// Cancel and the close button both send `on_cancel`; the confirm button is
/// styled as dangerous.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: String,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
) -> Element<'a, M> {
    let content = text(message).size(14).into();

    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press(on_cancel.clone())
        .padding([8.0, 16.0])
        .style(button_secondary)
        .into();

    let confirm_btn: Element<'a, M> = button(text(confirm_label))
        .on_press(on_confirm)
        .padding([8.0, 16.0])
        .style(button_danger)
        .into();

    modal(base, title, content, on_cancel, vec![cancel_btn, confirm_btn])
}
