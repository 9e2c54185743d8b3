//! Board state and the pure reducer that moves it forward.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::model::Catalog;
use crate::view::{render, BoardView};

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loaded(BoardView),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    CatalogLoaded(Catalog),
    CatalogFailed,
    ShowStatus(StatusKind, String),
    /// Only hides the message shown as `generation`.
    HideStatus { generation: u64 },
    ResetForm,
    EmailChanged(String),
    ActivityChanged(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    /// `None` until the first refresh cycle finishes.
    pub list: Option<ListView>,
    /// Select options, rebuilt only by a successful load.
    pub options: Vec<String>,
    pub form: SignupForm,
    pub status: Option<StatusMessage>,
    status_generation: u64,
}

impl BoardState {
    /// Bumped every time a message is shown; 0 means nothing was ever shown.
    pub fn status_generation(&self) -> u64 {
        self.status_generation
    }

    pub fn apply(&self, action: BoardAction) -> Self {
        let mut next = self.clone();
        match action {
            BoardAction::CatalogLoaded(catalog) => {
                let view = render(&catalog);
                if !next.form.activity.is_empty() && !view.options.contains(&next.form.activity) {
                    next.form.activity.clear();
                }
                next.options = view.options.clone();
                next.list = Some(ListView::Loaded(view));
            }
            BoardAction::CatalogFailed => {
                next.list = Some(ListView::Failed);
            }
            BoardAction::ShowStatus(kind, text) => {
                next.status_generation += 1;
                next.status = Some(StatusMessage {
                    kind,
                    text,
                    visible: true,
                });
            }
            BoardAction::HideStatus { generation } => {
                if generation == next.status_generation {
                    if let Some(status) = next.status.as_mut() {
                        status.visible = false;
                    }
                }
            }
            BoardAction::ResetForm => next.form = SignupForm::default(),
            BoardAction::EmailChanged(email) => next.form.email = email,
            BoardAction::ActivityChanged(activity) => next.form.activity = activity,
        }
        next
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog(names: &[&str]) -> Catalog {
        let body = names
            .iter()
            .map(|n| format!(r#""{n}": {{"description": "d", "schedule": "s", "max_participants": 10, "participants": []}}"#))
            .collect::<Vec<_>>()
            .join(",");
        serde_json::from_str(&format!("{{{body}}}")).unwrap()
    }

    fn run(actions: impl IntoIterator<Item = BoardAction>) -> BoardState {
        actions
            .into_iter()
            .fold(BoardState::default(), |state, action| state.apply(action))
    }

    #[test]
    fn every_refresh_lands_in_loaded_or_failed() {
        let state = run([BoardAction::CatalogLoaded(catalog(&["Chess Club"]))]);
        assert!(matches!(state.list, Some(ListView::Loaded(_))));
        assert_eq!(state.options, ["Chess Club"]);

        let state = state.apply(BoardAction::CatalogFailed);
        assert_eq!(state.list, Some(ListView::Failed));
        // options survive a failed refresh
        assert_eq!(state.options, ["Chess Club"]);

        let state = state.apply(BoardAction::CatalogLoaded(catalog(&["Drama"])));
        assert_eq!(state.options, ["Drama"]);
    }

    #[test]
    fn selection_falls_back_when_activity_disappears() {
        let state = run([
            BoardAction::CatalogLoaded(catalog(&["Chess Club", "Drama"])),
            BoardAction::ActivityChanged("Drama".into()),
            BoardAction::CatalogLoaded(catalog(&["Chess Club", "Drama", "Art"])),
        ]);
        assert_eq!(state.form.activity, "Drama");

        let state = state.apply(BoardAction::CatalogLoaded(catalog(&["Chess Club"])));
        assert_eq!(state.form.activity, "");
    }

    #[test]
    fn show_status_bumps_generation() {
        let state = run([BoardAction::ShowStatus(StatusKind::Success, "Signed up!".into())]);
        assert_eq!(state.status_generation(), 1);
        assert_eq!(
            state.status,
            Some(StatusMessage {
                kind: StatusKind::Success,
                text: "Signed up!".into(),
                visible: true,
            })
        );

        let state = state.apply(BoardAction::HideStatus { generation: 1 });
        assert!(!state.status.unwrap().visible);
    }

    #[test]
    fn stale_hide_leaves_newer_message_visible() {
        let state = run([
            BoardAction::ShowStatus(StatusKind::Error, "Activity not found".into()),
            BoardAction::ShowStatus(StatusKind::Success, "Signed up!".into()),
            BoardAction::HideStatus { generation: 1 },
        ]);
        let status = state.status.unwrap();
        assert!(status.visible);
        assert_eq!(status.text, "Signed up!");
    }

    #[test]
    fn reset_clears_both_fields() {
        let state = run([
            BoardAction::EmailChanged("a@x.com".into()),
            BoardAction::ActivityChanged("Chess Club".into()),
            BoardAction::ResetForm,
        ]);
        assert_eq!(state.form, SignupForm::default());
    }

    #[test]
    fn css_classes() {
        assert_eq!(StatusKind::Success.css_class(), "success");
        assert_eq!(StatusKind::Error.css_class(), "error");
    }
}
