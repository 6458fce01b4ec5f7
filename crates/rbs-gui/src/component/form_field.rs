//! Labeled form inputs for the rule and condition editors.

use iced::widget::{column, container, text, text_input};
use iced::{Element, Length, Theme};

use crate::theme::{SPACING_XS, WorkbenchColors, text_input_default};

/// Muted caption stacked above any control.
pub fn labeled<'a, M: 'a>(label: &'a str, control: impl Into<Element<'a, M>>) -> Element<'a, M> {
    let caption = text(label).size(12).style(|theme: &Theme| text::Style {
        color: Some(theme.workbench().text_muted),
    });

    container(column![caption, control.into()].spacing(SPACING_XS))
        .width(Length::Fill)
        .into()
}

/// Text input with a caption.
///
/// ```rust,ignore
/// form_field("Field Name", &rule.field, "e.g. amount", RuleMessage::FieldChanged)
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(8.0)
        .size(14)
        .width(Length::Fill)
        .style(text_input_default);

    labeled(label, input)
}
