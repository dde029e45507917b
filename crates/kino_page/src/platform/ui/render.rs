use kino_core::{LightboxView, PageViewModel};

use super::constants::*;
use super::dom::DomCommand;

/// Produces the commands that bring the page from `previous` to `view`.
///
/// Without a previous view every element is written.
pub fn render(previous: Option<&PageViewModel>, view: &PageViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    if previous.map(|p| p.settings_open) != Some(view.settings_open) {
        cmds.push(DomCommand::SetDisplay {
            control: SETTINGS_DIALOG,
            visible: view.settings_open,
        });
        cmds.push(DomCommand::SetDisplay {
            control: SETTINGS_OVERLAY,
            visible: view.settings_open,
        });
    }

    if previous.map(|p| p.custom_player_checked) != Some(view.custom_player_checked) {
        cmds.push(DomCommand::SetChecked {
            control: CHECKBOX_CUSTOM_PLAYER,
            checked: view.custom_player_checked,
        });
    }

    // Typed input already shows in the field; only programmatic changes need a write.
    if let Some(prev) = previous {
        if view.filter_input.is_empty() && !prev.filter_input.is_empty() {
            cmds.push(DomCommand::SetInputValue {
                control: INPUT_FILTER,
                value: String::new(),
            });
        }
    }

    render_rows(previous, view, &mut cmds);
    render_lightbox(previous.map(|p| p.lightbox.as_ref()), view.lightbox.as_ref(), &mut cmds);

    cmds
}

fn render_rows(previous: Option<&PageViewModel>, view: &PageViewModel, cmds: &mut Vec<DomCommand>) {
    let before = previous.map(|p| p.row_visibility.as_slice());
    for (index, &visible) in view.row_visibility.iter().enumerate() {
        let old = before.and_then(|rows| rows.get(index).copied());
        if old != Some(visible) {
            cmds.push(DomCommand::SetRowDisplay { index, visible });
        }
    }
}

fn render_lightbox(
    previous: Option<Option<&LightboxView>>,
    view: Option<&LightboxView>,
    cmds: &mut Vec<DomCommand>,
) {
    if previous == Some(view) {
        return;
    }
    match view {
        Some(lightbox) => {
            cmds.push(DomCommand::SetText {
                control: LABEL_COUNTER,
                text: lightbox.counter.clone(),
            });
            cmds.push(DomCommand::SetText {
                control: LABEL_NAME,
                text: lightbox.name.clone(),
            });
            cmds.push(DomCommand::SetDisplay {
                control: BUTTON_PREV,
                visible: lightbox.prev_visible,
            });
            cmds.push(DomCommand::SetDisplay {
                control: BUTTON_NEXT,
                visible: lightbox.next_visible,
            });
            cmds.push(DomCommand::SetDisplay {
                control: LIGHTBOX,
                visible: true,
            });
        }
        None => cmds.push(DomCommand::SetDisplay {
            control: LIGHTBOX,
            visible: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox(index: usize, count: usize) -> LightboxView {
        LightboxView {
            index,
            counter: format!("{}/{}", index + 1, count),
            name: format!("clip {index}"),
            prev_visible: index >= 1,
            next_visible: index + 1 < count,
        }
    }

    #[test]
    fn first_render_writes_everything() {
        let view = PageViewModel {
            row_visibility: vec![true, false],
            ..PageViewModel::default()
        };
        let cmds = render(None, &view);
        assert!(cmds.contains(&DomCommand::SetDisplay {
            control: SETTINGS_DIALOG,
            visible: false
        }));
        assert!(cmds.contains(&DomCommand::SetChecked {
            control: CHECKBOX_CUSTOM_PLAYER,
            checked: false
        }));
        assert!(cmds.contains(&DomCommand::SetRowDisplay {
            index: 1,
            visible: false
        }));
        assert!(cmds.contains(&DomCommand::SetDisplay {
            control: LIGHTBOX,
            visible: false
        }));
    }

    #[test]
    fn unchanged_view_renders_nothing() {
        let view = PageViewModel {
            row_visibility: vec![true],
            lightbox: Some(lightbox(0, 2)),
            ..PageViewModel::default()
        };
        assert!(render(Some(&view), &view).is_empty());
    }

    #[test]
    fn only_changed_rows_are_written() {
        let before = PageViewModel {
            row_visibility: vec![true, true, true],
            ..PageViewModel::default()
        };
        let after = PageViewModel {
            filter_input: "x".to_string(),
            row_visibility: vec![true, false, true],
            ..PageViewModel::default()
        };
        assert_eq!(
            render(Some(&before), &after),
            vec![DomCommand::SetRowDisplay {
                index: 1,
                visible: false
            }]
        );
    }

    #[test]
    fn clearing_the_filter_rewrites_the_input() {
        let before = PageViewModel {
            filter_input: "abc".to_string(),
            ..PageViewModel::default()
        };
        let cmds = render(Some(&before), &PageViewModel::default());
        assert_eq!(
            cmds,
            vec![DomCommand::SetInputValue {
                control: INPUT_FILTER,
                value: String::new()
            }]
        );
    }

    #[test]
    fn moving_in_lightbox_updates_labels_and_nav() {
        let before = PageViewModel {
            lightbox: Some(lightbox(0, 3)),
            ..PageViewModel::default()
        };
        let after = PageViewModel {
            lightbox: Some(lightbox(2, 3)),
            ..PageViewModel::default()
        };
        let cmds = render(Some(&before), &after);
        assert!(cmds.contains(&DomCommand::SetText {
            control: LABEL_COUNTER,
            text: "3/3".to_string()
        }));
        assert!(cmds.contains(&DomCommand::SetDisplay {
            control: BUTTON_PREV,
            visible: true
        }));
        assert!(cmds.contains(&DomCommand::SetDisplay {
            control: BUTTON_NEXT,
            visible: false
        }));
    }
}
