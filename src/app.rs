use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::GlooApi;
use crate::config::{
    BoardConfig, EMAIL_ID, FORM_ID, LIST_ID, LOADING_TEXT, LOAD_FAILED_TEXT, MESSAGE_ID,
    NO_PARTICIPANTS_TEXT, SELECT_ID, SELECT_PLACEHOLDER,
};
use crate::flows::Board;
use crate::state::{BoardAction, BoardState, ListView, SignupForm, StatusMessage};
use crate::view::{ActivityCard, ParticipantRow, UnregisterIntent};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: BoardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let board: Rc<Board<GlooApi>> =
        use_memo(config.api_base.clone(), |base| Board::new(GlooApi::new(base)));
    let state = use_reducer(BoardState::default);

    // First refresh cycle on mount
    {
        let board = board.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let dispatch = move |action: BoardAction| dispatcher.dispatch(action);
                board.load_and_render(&dispatch).await;
            });
            || ()
        });
    }

    // Auto-hide the status box. Dropping the handle cancels the pending hide,
    // so a new message always gets its full timeout.
    {
        let dispatcher = state.dispatcher();
        let timeout_ms = config.message_timeout_ms;
        use_effect_with(state.status_generation(), move |&generation| {
            let handle = (generation > 0).then(|| {
                Timeout::new(timeout_ms, move || {
                    dispatcher.dispatch(BoardAction::HideStatus { generation })
                })
            });
            move || drop(handle)
        });
    }

    let on_submit = {
        let board = board.clone();
        let dispatcher = state.dispatcher();
        let form = state.form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let board = board.clone();
            let dispatcher = dispatcher.clone();
            let SignupForm { email, activity } = form.clone();
            spawn_local(async move {
                let dispatch = move |action: BoardAction| dispatcher.dispatch(action);
                board.sign_up(&activity, &email, &dispatch).await;
            });
        })
    };

    let on_unregister = {
        let board = board.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |intent: UnregisterIntent| {
            let board = board.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let dispatch = move |action: BoardAction| dispatcher.dispatch(action);
                board.unregister(&intent, &dispatch).await;
            });
        })
    };

    let on_email = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(BoardAction::EmailChanged(input.value()));
        })
    };

    let on_activity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            dispatcher.dispatch(BoardAction::ActivityChanged(select.value()));
        })
    };

    let list = match &state.list {
        None => html! { <p>{ LOADING_TEXT }</p> },
        Some(ListView::Failed) => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        Some(ListView::Loaded(view)) => html! {
            { for view.cards.iter().map(|card| activity_card(card, &on_unregister)) }
        },
    };

    let form = &state.form;

    html! {
      <>
        <header>
          <h1>{ config.school_name.clone() }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id={LIST_ID}>{ list }</div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <form id={FORM_ID} onsubmit={on_submit}>
              <div class="form-group">
                <label for={EMAIL_ID}>{ "Student Email:" }</label>
                <input
                  type="email"
                  id={EMAIL_ID}
                  required=true
                  placeholder="your-email@mergington.edu"
                  value={form.email.clone()}
                  oninput={on_email}
                />
              </div>
              <div class="form-group">
                <label for={SELECT_ID}>{ "Select Activity:" }</label>
                <select id={SELECT_ID} required=true onchange={on_activity}>
                  <option value="" selected={form.activity.is_empty()}>{ SELECT_PLACEHOLDER }</option>
                  { for state.options.iter().map(|name| html! {
                      <option value={name.clone()} selected={*name == form.activity}>{ name.clone() }</option>
                  }) }
                </select>
              </div>
              <button type="submit">{ "Sign Up" }</button>
            </form>
            { status_box(state.status.as_ref()) }
          </section>
        </main>

        <footer>
          <p>{ format!("© {}", config.school_name) }</p>
        </footer>
      </>
    }
}

fn status_box(status: Option<&StatusMessage>) -> Html {
    match status {
        Some(msg) => html! {
            <div id={MESSAGE_ID} class={classes!(msg.kind.css_class(), (!msg.visible).then_some("hidden"))}>
                { msg.text.clone() }
            </div>
        },
        None => html! { <div id={MESSAGE_ID} class="hidden"></div> },
    }
}

fn activity_card(card: &ActivityCard, on_unregister: &Callback<UnregisterIntent>) -> Html {
    html! {
        <div key={card.name.clone()} class={classes!("activity-card", card.is_over_capacity().then_some("over-capacity"))}>
            <h4>{ card.name.clone() }</h4>
            <p>{ card.description.clone() }</p>
            <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
            <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability()) }</p>
            <div class="participants">
                <h5>
                    { "Participants " }
                    <span class="participants-count">{ card.participant_count().to_string() }</span>
                </h5>
                if card.participants.is_empty() {
                    <p class="empty">{ NO_PARTICIPANTS_TEXT }</p>
                } else {
                    <ul class="participants-list">
                        { for card.participants.iter().map(|row| participant_row(row, on_unregister)) }
                    </ul>
                }
            </div>
        </div>
    }
}

fn participant_row(row: &ParticipantRow, on_unregister: &Callback<UnregisterIntent>) -> Html {
    let onclick = {
        let intent = row.unregister.clone();
        on_unregister.reform(move |_: MouseEvent| intent.clone())
    };

    html! {
        <li>
            { row.email.clone() }
            <button
                type="button"
                class="delete-participant"
                title="Unregister"
                aria-label={format!("Unregister {}", row.email)}
                data-activity={row.unregister.activity.clone()}
                data-email={row.unregister.email.clone()}
                {onclick}
            >
                { "🗑️" }
            </button>
        </li>
    }
}
