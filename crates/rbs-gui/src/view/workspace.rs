//! Workspace view: toolbar, ruleset selector and the rule list.

use std::fmt;

use iced::widget::{button, column, container, pick_list, row, scrollable, space, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use super::rule_editor::view_rule_editor;
use crate::message::{Message, WorkspaceMessage};
use crate::state::WorkspaceState;
use crate::theme::{
    CONTENT_MAX_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, WorkbenchColors,
    button_danger, button_primary, button_secondary, button_success, pick_list_default,
    text_input_default,
};

/// Entry in the ruleset selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesetChoice {
    /// Clears the selection.
    None,
    Named(String),
}

impl RulesetChoice {
    fn into_selection(self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for RulesetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Selector options: "None" followed by every ruleset in collection order.
pub fn ruleset_choices(workspace: &WorkspaceState) -> Vec<RulesetChoice> {
    std::iter::once(RulesetChoice::None)
        .chain(
            workspace
                .ruleset_names()
                .into_iter()
                .map(RulesetChoice::Named),
        )
        .collect()
}

fn icon_button<'a>(
    icon: iced::widget::Text<'a>,
    label: &'a str,
    on_press: Option<WorkspaceMessage>,
    style: fn(&Theme, button::Status) -> button::Style,
) -> Element<'a, WorkspaceMessage> {
    button(
        row![icon.size(14), text(label).size(14)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(on_press)
    .padding([8.0, 14.0])
    .style(style)
    .into()
}

// =============================================================================
// TOOLBAR
// =============================================================================

fn view_selector(workspace: &WorkspaceState) -> Element<'_, WorkspaceMessage> {
    if workspace.rulesets().is_empty() {
        // No rulesets yet: show a disabled field in place of the dropdown.
        return text_input("Select RuleSet", "")
            .padding(8.0)
            .size(14)
            .width(Length::Fixed(240.0))
            .style(text_input_default)
            .into();
    }

    let selected = workspace
        .current_name()
        .map(|name| RulesetChoice::Named(name.to_string()));

    pick_list(ruleset_choices(workspace), selected, |choice| {
        WorkspaceMessage::RulesetSelected(choice.into_selection())
    })
    .placeholder("Select RuleSet")
    .padding(8.0)
    .text_size(14)
    .width(Length::Fixed(240.0))
    .style(pick_list_default)
    .into()
}

fn view_new_ruleset(workspace: &WorkspaceState) -> Element<'_, WorkspaceMessage> {
    let input = &workspace.new_ruleset;
    if !input.visible {
        return icon_button(
            lucide::plus(),
            "New RuleSet",
            Some(WorkspaceMessage::NewRulesetClicked),
            button_secondary,
        );
    }

    let create = input
        .can_submit()
        .then_some(WorkspaceMessage::CreateRulesetClicked);

    row![
        text_input("RuleSet name", &input.name)
            .on_input(WorkspaceMessage::NewRulesetNameChanged)
            .on_submit_maybe(create.clone())
            .padding(8.0)
            .size(14)
            .width(Length::Fixed(200.0))
            .style(text_input_default),
        button(text("Add").size(14))
            .on_press_maybe(create)
            .padding([8.0, 14.0])
            .style(button_primary),
        button(text("Cancel").size(14))
            .on_press(WorkspaceMessage::NewRulesetCancelled)
            .padding([8.0, 14.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn view_toolbar(workspace: &WorkspaceState) -> Element<'_, WorkspaceMessage> {
    let mut toolbar = row![view_selector(workspace), view_new_ruleset(workspace)]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center);

    if workspace.current_name().is_some() {
        toolbar = toolbar.push(icon_button(
            lucide::trash(),
            "Delete RuleSet",
            Some(WorkspaceMessage::DeleteRulesetClicked),
            button_danger,
        ));
    }

    let (load_label, load_press) = if workspace.is_loading() {
        ("Loading...", None)
    } else {
        ("Load Rules", Some(WorkspaceMessage::LoadClicked))
    };

    toolbar
        .push(space::horizontal())
        .push(icon_button(
            lucide::folder_open(),
            load_label,
            load_press,
            button_secondary,
        ))
        .into()
}

// =============================================================================
// RULE LIST
// =============================================================================

fn view_rules(workspace: &WorkspaceState) -> Element<'_, WorkspaceMessage> {
    let Some(name) = workspace.current_name() else {
        return container(
            text("Select a RuleSet or create a new one to start adding rules")
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.workbench().text_muted),
                }),
        )
        .padding(SPACING_LG)
        .center_x(Length::Fill)
        .into();
    };

    let heading = text(format!("Rules for {name}")).size(18);

    let cards = column(workspace.rules().iter().enumerate().map(|(index, rule)| {
        view_rule_editor(rule).map(move |msg| WorkspaceMessage::Rule(index, msg))
    }))
    .spacing(SPACING_MD);

    let save_press = workspace
        .can_export()
        .then_some(WorkspaceMessage::SaveClicked);

    let actions = row![
        icon_button(
            lucide::plus(),
            "Add Rule",
            Some(WorkspaceMessage::AddRuleClicked),
            button_primary,
        ),
        icon_button(lucide::download(), "Save Rules", save_press, button_success),
    ]
    .spacing(SPACING_SM);

    column![heading, cards, actions]
        .spacing(SPACING_MD)
        .into()
}

/// Render the whole workspace.
pub fn view_workspace(workspace: &WorkspaceState) -> Element<'_, Message> {
    let content = column![view_toolbar(workspace), view_rules(workspace)]
        .spacing(SPACING_LG)
        .padding(SPACING_LG)
        .max_width(CONTENT_MAX_WIDTH);

    let body: Element<'_, WorkspaceMessage> =
        scrollable(container(content).center_x(Length::Fill))
            .height(Length::Fill)
            .into();

    body.map(Message::Workspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_lists_none_then_collection_order() {
        let mut workspace = WorkspaceState::new();
        workspace.create_ruleset("orders").unwrap();
        workspace.create_ruleset("customers").unwrap();

        assert_eq!(
            ruleset_choices(&workspace),
            vec![
                RulesetChoice::None,
                RulesetChoice::Named("orders".to_string()),
                RulesetChoice::Named("customers".to_string()),
            ]
        );
    }

    #[test]
    fn none_choice_clears_selection() {
        assert_eq!(RulesetChoice::None.into_selection(), None);
        assert_eq!(RulesetChoice::None.to_string(), "None");
        assert_eq!(
            RulesetChoice::Named("orders".to_string()).into_selection(),
            Some("orders".to_string())
        );
    }
}
