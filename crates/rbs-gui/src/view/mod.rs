//! View layer: pure functions from state to `Element`.
//!
//! - `workspace` - toolbar, selector and rule list
//! - `rule_editor` / `condition_editor` - per-record editors

mod condition_editor;
mod rule_editor;
mod workspace;

use iced::widget::{Space, column, container, pick_list, row, stack, text};
use iced::{Alignment, Element, Length, Theme};

use crate::component::{confirm_modal, view_notification};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, ThemeMode, WorkbenchColors, pick_list_default};

pub use workspace::{RulesetChoice, ruleset_choices, view_workspace};

pub const APP_TITLE: &str = "Validation Rule Builder";

fn view_header(state: &AppState) -> Element<'_, Message> {
    let theme_picker = pick_list(
        ThemeMode::ALL,
        Some(state.theme_mode()),
        Message::ThemeModeSelected,
    )
    .padding([4.0, 8.0])
    .text_size(13)
    .style(pick_list_default);

    let header = row![
        text(APP_TITLE).size(22),
        Space::new().width(Length::Fill),
        theme_picker,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_SM);

    container(header)
        .padding([SPACING_MD, SPACING_LG])
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let colors = theme.workbench();
            container::Style {
                background: Some(colors.background_secondary.into()),
                border: iced::Border {
                    color: colors.border_subtle,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

/// Render the main window.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let workspace = &state.workspace;

    let base: Element<'_, Message> = column![view_header(state), view_workspace(workspace)]
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    // Notification banner at the bottom-right
    let base: Element<'_, Message> = match view_notification(&workspace.notification) {
        Some(banner) => {
            let overlay = column![
                Space::new().height(Length::Fill),
                row![Space::new().width(Length::Fill), banner],
            ]
            .padding(SPACING_LG);
            stack![base, overlay].into()
        }
        None => base,
    };

    match workspace.confirmation.pending() {
        Some(action) => confirm_modal(
            base,
            action.title(),
            action.prompt(),
            "Delete",
            Message::ConfirmAccepted,
            Message::ConfirmCancelled,
        ),
        None => base,
    }
}
