//! Rule editor view: one card per rule.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use rbs_model::Rule;

use super::condition_editor::view_condition_editor;
use crate::component::form_field;
use crate::message::RuleMessage;
use crate::theme::{
    SPACING_MD, SPACING_SM, SPACING_XS, WorkbenchColors, button_danger, button_secondary,
    container_card,
};

/// Render the card for one rule and its conditions.
pub fn view_rule_editor(rule: &Rule) -> Element<'_, RuleMessage> {
    let field = form_field(
        "Field Name",
        &rule.field,
        "e.g. amount",
        RuleMessage::FieldChanged,
    );

    let delete_btn = button(
        row![lucide::trash().size(14), text("Delete Rule").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(RuleMessage::DeleteClicked)
    .padding([6.0, 12.0])
    .style(button_danger);

    let header = row![field, delete_btn]
        .spacing(SPACING_MD)
        .align_y(Alignment::End);

    let conditions: Element<'_, RuleMessage> = if rule.conditions.is_empty() {
        text("No conditions yet")
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.workbench().text_muted),
            })
            .into()
    } else {
        column(rule.conditions.iter().enumerate().map(|(index, condition)| {
            view_condition_editor(condition)
                .map(move |msg| RuleMessage::Condition(index, msg))
        }))
        .spacing(SPACING_SM)
        .into()
    };

    let add_condition_btn = button(
        row![lucide::plus().size(14), text("Add Condition").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press(RuleMessage::AddConditionClicked)
    .padding([6.0, 12.0])
    .style(button_secondary);

    container(
        column![
            header,
            text("Conditions").size(14),
            conditions,
            add_condition_btn,
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(container_card)
    .into()
}
