//! Condition editor view.
//!
//! Renders one condition inside a rule card. Emits [`ConditionMessage`]s;
//! the owning rule applies them (see `handler::editor`).

use iced::widget::{button, column, container, pick_list, row};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use rbs_model::{ActionType, Condition, ErrorType};

use crate::component::{form_field, labeled};
use crate::message::ConditionMessage;
use crate::theme::{SPACING_SM, SPACING_XS, button_ghost, container_inset, pick_list_default};

/// Render the editor for one condition.
pub fn view_condition_editor(condition: &Condition) -> Element<'_, ConditionMessage> {
    let expression = form_field(
        "Condition",
        &condition.condition,
        "e.g. amount > 0",
        ConditionMessage::ExpressionChanged,
    );

    let delete_btn = button(lucide::trash().size(16))
        .on_press(ConditionMessage::DeleteClicked)
        .padding(SPACING_XS)
        .style(button_ghost);

    let header = row![expression, delete_btn]
        .spacing(SPACING_SM)
        .align_y(Alignment::End);

    let error_message = &condition.error_message;
    let error_row = row![
        container(form_field(
            "Error Code",
            &error_message.code,
            "E1",
            ConditionMessage::CodeChanged,
        ))
        .width(Length::FillPortion(1)),
        container(labeled(
            "Error Type",
            pick_list(
                ErrorType::ALL.to_vec(),
                Some(error_message.error_type.clone()),
                ConditionMessage::ErrorTypeSelected,
            )
            .width(Length::Fill)
            .padding(8.0)
            .text_size(14)
            .style(pick_list_default),
        ))
        .width(Length::FillPortion(1)),
        container(form_field(
            "Error Message",
            &error_message.message,
            "Shown when the condition fails",
            ConditionMessage::MessageChanged,
        ))
        .width(Length::FillPortion(2)),
    ]
    .spacing(SPACING_SM);

    let action = &condition.action;
    let action_row = row![
        container(labeled(
            "Action Type",
            pick_list(
                ActionType::ALL.to_vec(),
                Some(displayed_action_type(&action.action_type)),
                ConditionMessage::ActionTypeSelected,
            )
            .width(Length::Fill)
            .padding(8.0)
            .text_size(14)
            .style(pick_list_default),
        ))
        .width(Length::FillPortion(1)),
        container(form_field(
            "Action Value",
            &action.value,
            "",
            ConditionMessage::ActionValueChanged,
        ))
        .width(Length::FillPortion(3)),
    ]
    .spacing(SPACING_SM);

    container(column![header, error_row, action_row].spacing(SPACING_SM))
        .padding(SPACING_SM)
        .width(Length::Fill)
        .style(container_inset)
        .into()
}

/// Unknown action types show as "None" in the picker. The stored value is
/// kept until the user picks something else.
fn displayed_action_type(action_type: &ActionType) -> ActionType {
    match action_type {
        ActionType::Other(_) => ActionType::None,
        known => known.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_type_displays_as_none() {
        assert_eq!(
            displayed_action_type(&ActionType::Other("upper".to_string())),
            ActionType::None
        );
        assert_eq!(displayed_action_type(&ActionType::Set), ActionType::Set);
    }
}
